use rayon::prelude::*;

use crate::core::actions::generate_noise_grid::generate_noise_grid::{
    checked_total_amplitude, layered_sample, GenerateNoiseGridError,
};
use crate::core::actions::generate_noise_grid::ports::noise_source::NoiseSource;
use crate::core::data::grid_size::GridSize;
use crate::core::data::layer_config::LayerConfig;
use crate::core::data::noise_grid::NoiseGrid;

/// Generates the layered noise grid with rayon's work-stealing scheduler,
/// partitioned by row.
///
/// Cells are independent, so no coordination is needed beyond the partition;
/// each worker computes only its own rows. Rows are reassembled in row-major
/// order and the output is bit-identical to
/// [`generate_noise_grid`](super::generate_noise_grid::generate_noise_grid).
pub fn generate_noise_grid_parallel_rayon<Src>(
    source: &Src,
    size: GridSize,
    scale: f64,
    config: LayerConfig,
) -> Result<NoiseGrid, GenerateNoiseGridError>
where
    Src: NoiseSource + Sync,
{
    let total_amplitude = checked_total_amplitude(config)?;

    let rows: Result<Vec<Vec<f64>>, GenerateNoiseGridError> = (0..size.height())
        .into_par_iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(size.width());

            for col in 0..size.width() {
                cells.push(layered_sample(
                    source,
                    row,
                    col,
                    scale,
                    config,
                    total_amplitude,
                )?);
            }

            Ok(cells)
        })
        .collect();

    let values: Vec<f64> = rows?.into_iter().flatten().collect();

    NoiseGrid::from_values(size, values).map_err(GenerateNoiseGridError::Grid)
}
