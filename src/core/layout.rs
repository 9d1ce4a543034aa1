//! Anti-clip padding for the data area.
//!
//! Glyphs such as tick labels are anchored at normalized positions of the
//! data area and hang past its edges by a fixed device offset. The padding
//! passes shrink the data area so every glyph, placed relative to the shrunk
//! area, still ends inside the original one.
//!
//! Each pass solves two linear equations in closed form. With the inner
//! transform `X(f) = min + f * size`, the left-most glyph must satisfy
//! `X(lx) = minx` and the right-most `X(rx) = maxx`, where `minx`/`maxx` are
//! the device positions that put the glyph edges on the outer bounds.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::geometry::{Length, Point, Rect};

/// Offset rect of the fallback boxes returned when nothing overflows an edge.
const NO_OVERFLOW: Rect = Rect::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0));

/// Location of a glyph in normalized data-area coordinates plus the offset
/// and size of its bounding box relative to that location.
///
/// Anchors may lie outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlyphBox {
    pub x: f64,
    pub y: f64,
    pub rect: Rect,
}

impl GlyphBox {
    #[must_use]
    pub const fn new(x: f64, y: f64, rect: Rect) -> Self {
        Self { x, y, rect }
    }

    /// Absolute device rectangle covered by the glyph inside `area`.
    #[must_use]
    pub fn device_rect(self, area: Rect) -> Rect {
        Rect::new(
            Point::new(area.x(self.x) + self.rect.min.x, area.y(self.y) + self.rect.min.y),
            self.rect.size,
        )
    }

    fn left(self, area: Rect) -> Length {
        area.x(self.x) + self.rect.min.x
    }

    fn right(self, area: Rect) -> Length {
        area.x(self.x) + self.rect.min.x + self.rect.size.x
    }

    fn bottom(self, area: Rect) -> Length {
        area.y(self.y) + self.rect.min.y
    }

    fn top(self, area: Rect) -> Length {
        area.y(self.y) + self.rect.min.y + self.rect.size.y
    }
}

/// Pads `area` horizontally so no glyph crosses its left or right edge.
///
/// The left-edge search looks at `plot_boxes` only; `axis_boxes` (the
/// horizontal axis tick labels) widen the right-edge search, since the space
/// left of the data area already belongs to the vertical axis.
#[must_use]
pub fn pad_x(area: Rect, plot_boxes: &[GlyphBox], axis_boxes: &[GlyphBox]) -> Rect {
    let left = left_most(area, plot_boxes);
    let right = right_most(area, plot_boxes.iter().chain(axis_boxes));
    if left.rect == NO_OVERFLOW && right.rect == NO_OVERFLOW {
        return area;
    }

    let minx = area.min.x - left.rect.min.x;
    let maxx = area.max().x - (right.rect.min.x + right.rect.size.x);
    match solve_span(left.x, right.x, minx, maxx) {
        Some((min, size)) => {
            trace!(lx = left.x, rx = right.x, min, size, "horizontal padding solved");
            area.with_x_extent(min, size)
        }
        None => {
            warn!(
                anchor = left.x,
                "skipping horizontal padding: left-most and right-most glyphs share an anchor"
            );
            area
        }
    }
}

/// Pads `area` vertically so no glyph crosses its bottom or top edge.
///
/// Mirror of [`pad_x`]: `axis_boxes` (the vertical axis tick labels) only
/// widen the top-edge search.
#[must_use]
pub fn pad_y(area: Rect, plot_boxes: &[GlyphBox], axis_boxes: &[GlyphBox]) -> Rect {
    let bottom = bottom_most(area, plot_boxes);
    let top = top_most(area, plot_boxes.iter().chain(axis_boxes));
    if bottom.rect == NO_OVERFLOW && top.rect == NO_OVERFLOW {
        return area;
    }

    let miny = area.min.y - bottom.rect.min.y;
    let maxy = area.max().y - (top.rect.min.y + top.rect.size.y);
    match solve_span(bottom.y, top.y, miny, maxy) {
        Some((min, size)) => {
            trace!(by = bottom.y, ty = top.y, min, size, "vertical padding solved");
            area.with_y_extent(min, size)
        }
        None => {
            warn!(
                anchor = bottom.y,
                "skipping vertical padding: bottom-most and top-most glyphs share an anchor"
            );
            area
        }
    }
}

/// Solves `min + lo * size = lo_pos` and `min + hi * size = hi_pos`.
///
/// Returns `None` when the anchors coincide or the solution is not finite.
#[must_use]
pub fn solve_span(lo: f64, hi: f64, lo_pos: Length, hi_pos: Length) -> Option<(Length, Length)> {
    let det = hi - lo;
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let size = (hi_pos - lo_pos) / det;
    let min = lo_pos - lo * size;
    (min.is_finite() && size.is_finite()).then_some((min, size))
}

/// Left-most box that crosses the left edge of `area`, considering only
/// anchors at or right of the origin.
///
/// Falls back to an empty box anchored at `x = 0`.
#[must_use]
pub fn left_most<'a>(area: Rect, boxes: impl IntoIterator<Item = &'a GlyphBox>) -> GlyphBox {
    let mut edge = area.min.x;
    let mut found = GlyphBox::default();
    for glyph in boxes {
        let x = glyph.left(area);
        if x < edge && glyph.x >= 0.0 {
            edge = x;
            found = *glyph;
        }
    }
    found
}

/// Right-most box that crosses the right edge of `area`, considering only
/// anchors at or left of `x = 1`.
///
/// Falls back to an empty box anchored at `x = 1`.
#[must_use]
pub fn right_most<'a>(area: Rect, boxes: impl IntoIterator<Item = &'a GlyphBox>) -> GlyphBox {
    let mut edge = area.max().x;
    let mut found = GlyphBox {
        x: 1.0,
        ..GlyphBox::default()
    };
    for glyph in boxes {
        let x = glyph.right(area);
        if x > edge && glyph.x <= 1.0 {
            edge = x;
            found = *glyph;
        }
    }
    found
}

/// Bottom-most box that crosses the bottom edge of `area`.
///
/// Falls back to an empty box anchored at `y = 0`.
#[must_use]
pub fn bottom_most<'a>(area: Rect, boxes: impl IntoIterator<Item = &'a GlyphBox>) -> GlyphBox {
    let mut edge = area.min.y;
    let mut found = GlyphBox::default();
    for glyph in boxes {
        let y = glyph.bottom(area);
        if y < edge && glyph.y >= 0.0 {
            edge = y;
            found = *glyph;
        }
    }
    found
}

/// Top-most box that crosses the top edge of `area`.
///
/// Falls back to an empty box anchored at `y = 1`.
#[must_use]
pub fn top_most<'a>(area: Rect, boxes: impl IntoIterator<Item = &'a GlyphBox>) -> GlyphBox {
    let mut edge = area.max().y;
    let mut found = GlyphBox {
        y: 1.0,
        ..GlyphBox::default()
    };
    for glyph in boxes {
        let y = glyph.top(area);
        if y > edge && glyph.y <= 1.0 {
            edge = y;
            found = *glyph;
        }
    }
    found
}
