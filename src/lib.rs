mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::interactive::{InteractiveController, RenderSettings};
pub use controllers::noise::noise_controller;
pub use controllers::ports::presenter::GridPresenterPort;

pub use crate::core::actions::generate_colour_grid::generate_colour_grid::generate_colour_grid;
pub use crate::core::actions::generate_colour_grid::ports::colour_map::ColourMap;
pub use crate::core::actions::generate_noise_grid::generate_noise_grid::generate_noise_grid;
pub use crate::core::actions::generate_noise_grid::generate_noise_grid_parallel_rayon::generate_noise_grid_parallel_rayon;
pub use crate::core::actions::generate_noise_grid::ports::noise_source::NoiseSource;
pub use crate::core::colour::gradient_map::GradientColourMap;
pub use crate::core::colour::presets::GradientPreset;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::colour_grid::ColourGrid;
pub use crate::core::data::gradient_stops::GradientStops;
pub use crate::core::data::grid_size::GridSize;
pub use crate::core::data::layer_config::LayerConfig;
pub use crate::core::data::noise_grid::NoiseGrid;
pub use crate::core::noise::open_simplex::OpenSimplexSource;

pub use presenters::terminal::ansi::AnsiTerminalPresenter;
