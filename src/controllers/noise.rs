use std::time::Instant;

use crate::core::actions::generate_colour_grid::generate_colour_grid::generate_colour_grid;
use crate::core::actions::generate_noise_grid::generate_noise_grid_parallel_rayon::generate_noise_grid_parallel_rayon;
use crate::core::colour::gradient_map::GradientColourMap;
use crate::core::colour::presets::GradientPreset;
use crate::core::data::grid_size::GridSize;
use crate::core::data::layer_config::LayerConfig;
use crate::core::noise::open_simplex::OpenSimplexSource;
use crate::controllers::ports::presenter::GridPresenterPort;
use crate::presenters::terminal::ansi::AnsiTerminalPresenter;

/// One-shot render with fixed settings, straight to stdout.
pub fn noise_controller() -> Result<(), Box<dyn std::error::Error>> {
    let seed: u32 = 42;
    let size = GridSize::new(50, 20)?;
    let scale = 0.1;
    let layers = LayerConfig::new(4, 0.5, 2.0)?;

    println!("Rendering OpenSimplex noise field...");
    println!("Grid size: {}x{}", size.width(), size.height());
    println!("Seed: {}", seed);
    println!("Octaves: {}", layers.octaves());

    let source = OpenSimplexSource::new(seed);
    let start = Instant::now();
    let noise = generate_noise_grid_parallel_rayon(&source, size, scale, layers)?;
    let duration = start.elapsed();

    println!("Duration:   {:?}", duration);

    let mapper = GradientColourMap::new(GradientPreset::RedHotFire.stops()?);
    let colours = generate_colour_grid(&noise, &mapper)?;

    let mut presenter = AnsiTerminalPresenter::new(std::io::stdout());
    presenter.present(&colours, &noise, false)?;

    Ok(())
}
