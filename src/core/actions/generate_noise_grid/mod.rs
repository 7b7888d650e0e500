pub mod generate_noise_grid;
pub mod generate_noise_grid_parallel_rayon;
pub mod ports;
