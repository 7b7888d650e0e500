/// Coherent noise capability consumed by the layering engine.
///
/// Implementations are seeded at construction and must be deterministic:
/// the same instance returns the same value for the same coordinates. The
/// contract requires every sample to lie in [-1, 1]; the layering engine
/// surfaces violations instead of clamping them.
pub trait NoiseSource {
    fn sample(&self, x: f64, y: f64) -> f64;
}
