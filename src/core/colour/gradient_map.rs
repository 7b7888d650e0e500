use crate::core::actions::generate_colour_grid::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::gradient_stops::GradientStops;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GradientMapError {
    /// NaN and infinities carry no position on the gradient and must never
    /// reach the stop-index computation.
    NonFiniteValue { value: f64 },
}

impl fmt::Display for GradientMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteValue { value } => {
                write!(f, "cannot map non-finite noise value {}", value)
            }
        }
    }
}

impl Error for GradientMapError {}

/// Piecewise-linear colour interpolation across evenly spaced gradient stops.
///
/// A value is clamped to [-1, 1] and rescaled to `N * (clamped + 1) / 2`,
/// which places -1 at position 0 and +1 at position N (not N-1). The
/// bracketing stops are `floor(position) - 1` and `ceil(position) - 1`,
/// clamped into `[0, N-1]`, and the fractional part of the position blends
/// between them with each channel truncated to an integer. The asymmetric
/// rescale leaves positions in (0, 1] saturated at stop 0.
#[derive(Debug, Clone)]
pub struct GradientColourMap {
    stops: GradientStops,
}

impl GradientColourMap {
    #[must_use]
    pub fn new(stops: GradientStops) -> Self {
        Self { stops }
    }

    #[must_use]
    pub fn stops(&self) -> &GradientStops {
        &self.stops
    }
}

fn lerp_channel(lower: u8, upper: u8, t: f64) -> u8 {
    (f64::from(lower) + (f64::from(upper) - f64::from(lower)) * t) as u8
}

impl ColourMap for GradientColourMap {
    type Failure = GradientMapError;

    fn map(&self, value: f64) -> Result<Colour, GradientMapError> {
        if !value.is_finite() {
            return Err(GradientMapError::NonFiniteValue { value });
        }

        let clamped = value.clamp(-1.0, 1.0);
        let stops = self.stops.stops();
        let last = stops.len() - 1;
        let position = stops.len() as f64 * (clamped + 1.0) / 2.0;

        // Position lands exactly on 0 or N at the saturated ends; clamping
        // keeps both derived indices inside the stop table.
        let lower_index = (position.floor() as isize - 1).clamp(0, last as isize) as usize;
        let upper_index = (position.ceil() as isize - 1).clamp(0, last as isize) as usize;
        let t = position.fract();

        let lower = stops[lower_index];
        let upper = stops[upper_index];

        Ok(Colour {
            r: lerp_channel(lower.r, upper.r, t),
            g: lerp_channel(lower.g, upper.g, t),
            b: lerp_channel(lower.b, upper.b, t),
        })
    }
}
