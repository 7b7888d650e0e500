use crate::core::actions::generate_noise_grid::ports::noise_source::NoiseSource;
use noise::{NoiseFn, OpenSimplex, Seedable};

/// OpenSimplex-backed noise source. Immutable after construction, so it is
/// safe to share across worker threads.
#[derive(Debug, Clone, Copy)]
pub struct OpenSimplexSource {
    inner: OpenSimplex,
}

impl OpenSimplexSource {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            inner: OpenSimplex::new(seed),
        }
    }

    #[must_use]
    pub fn seed(&self) -> u32 {
        self.inner.seed()
    }
}

impl NoiseSource for OpenSimplexSource {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.inner.get([x, y])
    }
}
