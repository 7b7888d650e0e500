use crate::core::data::colour::Colour;
use crate::core::data::grid_size::GridSize;
use std::error::Error;
use std::fmt;

fn grid_size_to_byte_len(size: GridSize) -> usize {
    size.cell_count() * 3
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColourGridError {
    BoundsMismatch {
        grid_bytes: usize,
        buffer_bytes: usize,
    },
    CellOutsideBounds {
        row: usize,
        col: usize,
        size: GridSize,
    },
}

impl fmt::Display for ColourGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_bytes,
                buffer_bytes,
            } => {
                write!(
                    f,
                    "grid size {} bytes does not match buffer size {} bytes",
                    grid_bytes, buffer_bytes
                )
            }
            Self::CellOutsideBounds { row, col, size } => {
                write!(
                    f,
                    "cell at row:{}, col:{} outside of grid bounds {}x{}",
                    row,
                    col,
                    size.width(),
                    size.height()
                )
            }
        }
    }
}

impl Error for ColourGridError {}

pub type ColourGridData = Vec<u8>;

/// Flat row-major RGB byte buffer, one triple per grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourGrid {
    size: GridSize,
    data: ColourGridData,
}

impl ColourGrid {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            data: vec![0; grid_size_to_byte_len(size)],
        }
    }

    pub fn from_data(size: GridSize, data: ColourGridData) -> Result<Self, ColourGridError> {
        let grid_bytes = grid_size_to_byte_len(size);

        if grid_bytes != data.len() {
            return Err(ColourGridError::BoundsMismatch {
                grid_bytes,
                buffer_bytes: data.len(),
            });
        }

        Ok(Self { size, data })
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn data(&self) -> &ColourGridData {
        &self.data
    }

    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    pub fn set_cell(&mut self, row: usize, col: usize, colour: Colour) -> Result<(), ColourGridError> {
        if row >= self.size.height() || col >= self.size.width() {
            return Err(ColourGridError::CellOutsideBounds {
                row,
                col,
                size: self.size,
            });
        }

        let index = (row * self.size.width() + col) * 3;

        self.data[index] = colour.r;
        self.data[index + 1] = colour.g;
        self.data[index + 2] = colour.b;

        Ok(())
    }

    #[must_use]
    pub fn colour_at(&self, row: usize, col: usize) -> Option<Colour> {
        if row >= self.size.height() || col >= self.size.width() {
            return None;
        }

        let index = (row * self.size.width() + col) * 3;

        Some(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        })
    }
}
