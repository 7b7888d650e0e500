use crate::core::data::gradient_stops::GradientStops;
use crate::core::data::grid_size::GridSize;
use crate::core::data::layer_config::LayerConfig;

/// Everything one render needs, gathered from the interactive session.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub seed: u32,
    pub size: GridSize,
    pub scale: f64,
    pub layers: LayerConfig,
    pub stops: GradientStops,
    pub show_values: bool,
}
