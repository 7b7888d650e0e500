use crate::core::data::colour::Colour;
use std::error::Error;

/// Maps one normalized noise value to a colour.
pub trait ColourMap {
    type Failure: Error;

    fn map(&self, value: f64) -> Result<Colour, Self::Failure>;
}
