use crate::core::actions::generate_noise_grid::ports::noise_source::NoiseSource;
use crate::core::data::grid_size::GridSize;
use crate::core::data::layer_config::LayerConfig;
use crate::core::data::noise_grid::{NoiseGrid, NoiseGridError};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateNoiseGridError {
    /// The octave amplitudes sum to something that cannot renormalize the
    /// layered sum. Octave 0 always contributes amplitude 1, so this only
    /// arises from pathological configurations such as non-finite persistence.
    ZeroTotalAmplitude { octaves: u32, persistence: f64 },
    /// The noise source broke its [-1, 1] contract.
    InvalidSample { x: f64, y: f64, value: f64 },
    Grid(NoiseGridError),
}

impl fmt::Display for GenerateNoiseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTotalAmplitude {
                octaves,
                persistence,
            } => {
                write!(
                    f,
                    "octave amplitudes sum to nothing renormalizable ({} octaves, persistence {})",
                    octaves, persistence
                )
            }
            Self::InvalidSample { x, y, value } => {
                write!(
                    f,
                    "noise source returned {} at ({}, {}), outside the [-1, 1] contract",
                    value, x, y
                )
            }
            Self::Grid(err) => write!(f, "grid error: {}", err),
        }
    }
}

impl Error for GenerateNoiseGridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

/// Computes one cell of the layered stack: octaves are summed in increasing
/// index order with amplitude `persistence^k` and frequency `lacunarity^k`,
/// then divided by the precomputed total amplitude.
pub(crate) fn layered_sample<Src: NoiseSource>(
    source: &Src,
    row: usize,
    col: usize,
    scale: f64,
    config: LayerConfig,
    total_amplitude: f64,
) -> Result<f64, GenerateNoiseGridError> {
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut sum = 0.0;

    for _ in 0..config.octaves() {
        let x = row as f64 * scale * frequency;
        let y = col as f64 * scale * frequency;
        let sample = source.sample(x, y);

        if !sample.is_finite() || !(-1.0..=1.0).contains(&sample) {
            return Err(GenerateNoiseGridError::InvalidSample {
                x,
                y,
                value: sample,
            });
        }

        sum += sample * amplitude;
        amplitude *= config.persistence();
        frequency *= config.lacunarity();
    }

    Ok(sum / total_amplitude)
}

pub(crate) fn checked_total_amplitude(
    config: LayerConfig,
) -> Result<f64, GenerateNoiseGridError> {
    let total = config.total_amplitude();

    if !total.is_finite() || total <= 0.0 {
        return Err(GenerateNoiseGridError::ZeroTotalAmplitude {
            octaves: config.octaves(),
            persistence: config.persistence(),
        });
    }

    Ok(total)
}

/// Generates the layered noise grid serially, cell by cell in row-major
/// order. For row-parallel generation with identical output, use
/// [`generate_noise_grid_parallel_rayon`].
///
/// [`generate_noise_grid_parallel_rayon`]:
/// crate::core::actions::generate_noise_grid::generate_noise_grid_parallel_rayon::generate_noise_grid_parallel_rayon
pub fn generate_noise_grid<Src: NoiseSource>(
    source: &Src,
    size: GridSize,
    scale: f64,
    config: LayerConfig,
) -> Result<NoiseGrid, GenerateNoiseGridError> {
    let total_amplitude = checked_total_amplitude(config)?;
    let mut values = Vec::with_capacity(size.cell_count());

    for row in 0..size.height() {
        for col in 0..size.width() {
            values.push(layered_sample(
                source,
                row,
                col,
                scale,
                config,
                total_amplitude,
            )?);
        }
    }

    NoiseGrid::from_values(size, values).map_err(GenerateNoiseGridError::Grid)
}
