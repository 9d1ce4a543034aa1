mod draw_area;
mod font;
mod output;
mod primitives;
mod recording;

pub use draw_area::DrawArea;
pub use font::{Font, FontBook, FontExtents, FontFace, GlyphWidths, TextStyle};
pub use output::OutputFormat;
pub use primitives::{Color, LineStyle, Path, PathComponent};
pub use recording::{CanvasCommand, RecordingCanvas};

pub(crate) use font::text_lines;

use crate::core::Length;

/// Contract implemented by any drawing surface.
///
/// Coordinates are device lengths in points with a Y-up origin at the
/// bottom-left corner. Surfaces keep a graphics state (color, line width,
/// dashes, transform) that `push`/`pop` save and restore. Backend failures are
/// sticky and reported when the surface is finished, so drawing calls do not
/// return errors.
pub trait Canvas {
    fn set_line_width(&mut self, width: Length);
    fn set_line_dash(&mut self, pattern: &[Length], offset: Length);
    fn set_color(&mut self, color: Color);
    /// Rotates the coordinate system counter-clockwise by `radians`.
    fn rotate(&mut self, radians: f64);
    fn translate(&mut self, x: Length, y: Length);
    fn push(&mut self);
    fn pop(&mut self);
    fn stroke(&mut self, path: &Path);
    fn fill(&mut self, path: &Path);
    /// Draws a single line of text with its baseline origin at `(x, y)`.
    fn fill_string(&mut self, font: &Font, x: Length, y: Length, text: &str);
    fn dpi(&self) -> f64;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoCanvas, CairoTarget};
