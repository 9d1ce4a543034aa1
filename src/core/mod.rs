pub mod geometry;
pub mod layout;
pub mod ticks;

pub use geometry::{
    Length, POINTS_PER_INCH, Point, Rect, centimeters, inches, millimeters, points,
};
pub use layout::{
    GlyphBox, bottom_most, left_most, pad_x, pad_y, right_most, solve_span, top_most,
};
pub use ticks::{ConstantTicks, DefaultTicks, Tick, TickMarker};
