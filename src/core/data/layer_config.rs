use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LayerConfigError {
    ZeroOctaves,
}

impl fmt::Display for LayerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroOctaves => {
                write!(f, "octave count must be greater than zero")
            }
        }
    }
}

impl Error for LayerConfigError {}

/// Octave stack configuration for fractal layering.
///
/// Persistence scales amplitude per octave (`persistence^k`), lacunarity
/// scales frequency per octave (`lacunarity^k`). Both are taken as supplied;
/// range policy is the caller's concern.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayerConfig {
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
}

impl LayerConfig {
    pub fn new(octaves: u32, persistence: f64, lacunarity: f64) -> Result<Self, LayerConfigError> {
        if octaves == 0 {
            return Err(LayerConfigError::ZeroOctaves);
        }

        Ok(Self {
            octaves,
            persistence,
            lacunarity,
        })
    }

    #[must_use]
    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    #[must_use]
    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    #[must_use]
    pub fn lacunarity(&self) -> f64 {
        self.lacunarity
    }

    /// Sum of the per-octave amplitudes, accumulated in octave order so it
    /// matches the weights applied during sampling exactly.
    #[must_use]
    pub fn total_amplitude(&self) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;

        for _ in 0..self.octaves {
            total += amplitude;
            amplitude *= self.persistence;
        }

        total
    }
}
