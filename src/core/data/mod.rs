pub mod colour;
pub mod colour_grid;
pub mod gradient_stops;
pub mod grid_size;
pub mod layer_config;
pub mod noise_grid;
