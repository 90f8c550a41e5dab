//! The capability interface rendering back-ends build on.
//!
//! The core never depends on an encoder. A back-end supplies a [`Palette`]
//! mapping cells to colors and consumes either the colored grid through
//! [`Grid::for_each_cell`] or the packed buffer from [`to_rgba_bytes`].
use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// An 8-bit RGBA color.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Maps a cell value to the color it is drawn with.
pub trait Palette<T> {
    fn color(&self, cell: &T) -> Color;
}

impl<T, F> Palette<T> for F
where
    F: Fn(&T) -> Color,
{
    fn color(&self, cell: &T) -> Color {
        self(cell)
    }
}

impl<T> Grid<T> {
    /// The grid with every cell replaced by its palette color.
    pub fn colorize<P>(&self, palette: &P) -> Grid<Color>
    where
        P: Palette<T> + ?Sized,
    {
        self.map(|cell| palette.color(cell))
    }
}

/// Pack a colored grid into a row-major RGBA8 buffer of `4 * rows * columns`
/// bytes.
pub fn to_rgba_bytes(grid: &Grid<Color>) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(grid.len() * 4);
    for color in grid.iter() {
        buffer.extend_from_slice(&color.to_bytes());
    }
    buffer
}
