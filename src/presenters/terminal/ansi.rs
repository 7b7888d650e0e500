use crate::controllers::ports::presenter::GridPresenterPort;
use crate::core::data::colour_grid::ColourGrid;
use crate::core::data::noise_grid::NoiseGrid;
use std::io::{self, Write};

/// Renders a colour grid as truecolor cells, one terminal line per grid row.
///
/// Each cell is a `[]` pair coloured with an SGR 38;2 foreground escape and
/// closed with a reset, or `[{value:+.2}]` followed by a space when values
/// are shown.
pub struct AnsiTerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> AnsiTerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GridPresenterPort for AnsiTerminalPresenter<W> {
    fn present(
        &mut self,
        colours: &ColourGrid,
        values: &NoiseGrid,
        show_values: bool,
    ) -> io::Result<()> {
        if colours.size() != values.size() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "colour and value grids differ in size",
            ));
        }

        let width = colours.size().width();
        let rows = colours
            .data()
            .chunks(width * 3)
            .zip(values.values().chunks(width));

        for (colour_row, value_row) in rows {
            for (cell, value) in colour_row.chunks_exact(3).zip(value_row) {
                write!(self.out, "\x1b[38;2;{};{};{}m", cell[0], cell[1], cell[2])?;

                if show_values {
                    write!(self.out, "[{:+.2}]\x1b[0m ", value)?;
                } else {
                    write!(self.out, "[]\x1b[0m")?;
                }
            }

            writeln!(self.out)?;
        }

        self.out.flush()
    }
}
