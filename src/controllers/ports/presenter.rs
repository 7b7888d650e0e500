use std::io;

use crate::core::data::colour_grid::ColourGrid;
use crate::core::data::noise_grid::NoiseGrid;

/// Output boundary for rendered grids. The presenter owns the output device;
/// the numeric core only ever returns data.
pub trait GridPresenterPort {
    fn present(
        &mut self,
        colours: &ColourGrid,
        values: &NoiseGrid,
        show_values: bool,
    ) -> io::Result<()>;
}
