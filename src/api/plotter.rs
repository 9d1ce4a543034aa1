use serde::{Deserialize, Serialize};

use crate::core::GlyphBox;
use crate::render::DrawArea;

use super::Plot;

/// Draws data into the data area of a plot.
///
/// A plotter can also report its data range and its glyph boxes. Each
/// capability is detected through the `as_*` accessors, which default to
/// `None`; implementors opt in by returning `Some(self)`.
pub trait Plotter {
    /// Draws into the final data area, after layout is settled.
    fn plot(&self, area: &mut DrawArea<'_>, plot: &Plot);

    fn as_data_ranger(&self) -> Option<&dyn DataRanger> {
        None
    }

    fn as_glyph_boxer(&self) -> Option<&dyn GlyphBoxer> {
        None
    }
}

/// Extent of a plotter's data in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataRange {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

/// Reports the range of data a plotter draws, so axes can cover it.
pub trait DataRanger {
    fn data_range(&self) -> DataRange;
}

/// Reports glyphs drawn near the data area edges, so they are not clipped.
pub trait GlyphBoxer {
    fn glyph_boxes(&self, plot: &Plot) -> Vec<GlyphBox>;
}
