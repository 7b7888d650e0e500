use crate::core::actions::generate_colour_grid::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::colour_grid::{ColourGrid, ColourGridData, ColourGridError};
use crate::core::data::noise_grid::NoiseGrid;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GenerateColourGridError<E> {
    ColourMap(E),
    Grid(ColourGridError),
}

impl<E: fmt::Display> fmt::Display for GenerateColourGridError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::Grid(err) => write!(f, "colour grid error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GenerateColourGridError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::Grid(err) => Some(err),
        }
    }
}

/// Maps every cell of a noise grid to a colour, producing a colour grid of
/// the same dimensions. Streams RGB bytes into a preallocated buffer; either
/// the whole grid maps cleanly or the first failure is returned and no grid
/// is produced.
pub fn generate_colour_grid<M: ColourMap>(
    grid: &NoiseGrid,
    mapper: &M,
) -> Result<ColourGrid, GenerateColourGridError<M::Failure>> {
    let mut data: ColourGridData = Vec::with_capacity(grid.size().cell_count() * 3);

    for &value in grid.values() {
        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GenerateColourGridError::ColourMap)?;

        data.push(r);
        data.push(g);
        data.push(b);
    }

    ColourGrid::from_data(grid.size(), data).map_err(GenerateColourGridError::Grid)
}
