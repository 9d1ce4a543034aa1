use serde::{Deserialize, Serialize};

/// Device length in points (1/72 inch).
///
/// Device coordinates are Y-up: the origin is the bottom-left corner of the
/// surface. Backends with a Y-down raster flip at the canvas boundary.
pub type Length = f64;

pub const POINTS_PER_INCH: f64 = 72.0;

#[must_use]
pub const fn points(value: f64) -> Length {
    value
}

#[must_use]
pub const fn inches(value: f64) -> Length {
    value * POINTS_PER_INCH
}

#[must_use]
pub const fn centimeters(value: f64) -> Length {
    inches(value / 2.54)
}

#[must_use]
pub const fn millimeters(value: f64) -> Length {
    centimeters(value / 10.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: Length,
    pub y: Length,
}

impl Point {
    #[must_use]
    pub const fn new(x: Length, y: Length) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// Axis-aligned rectangle stored as origin plus size.
///
/// `size` is expected to be non-negative once layout is final; intermediate
/// padding results may carry a negative extent on very small surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub size: Point,
}

impl Rect {
    #[must_use]
    pub const fn new(min: Point, size: Point) -> Self {
        Self { min, size }
    }

    #[must_use]
    pub const fn from_xywh(x: Length, y: Length, width: Length, height: Length) -> Self {
        Self::new(Point::new(x, y), Point::new(width, height))
    }

    #[must_use]
    pub fn max(self) -> Point {
        self.min.add(self.size)
    }

    #[must_use]
    pub fn center(self) -> Point {
        self.min.add(self.size.scale(0.5))
    }

    /// Maps a fraction of the width to an absolute X coordinate.
    ///
    /// Fractions outside `[0, 1]` land outside the rectangle.
    #[must_use]
    pub fn x(self, fraction: f64) -> Length {
        self.min.x + self.size.x * fraction
    }

    /// Maps a fraction of the height to an absolute Y coordinate.
    #[must_use]
    pub fn y(self, fraction: f64) -> Length {
        self.min.y + self.size.y * fraction
    }

    #[must_use]
    pub fn contains_x(self, x: Length) -> bool {
        let tolerance = self.size.x.abs() * 1e-9;
        x >= self.min.x - tolerance && x <= self.max().x + tolerance
    }

    #[must_use]
    pub fn contains_y(self, y: Length) -> bool {
        let tolerance = self.size.y.abs() * 1e-9;
        y >= self.min.y - tolerance && y <= self.max().y + tolerance
    }

    /// Returns the rectangle inset by the given margins.
    ///
    /// The caller keeps the margins smaller than the extent; a negative
    /// resulting size is not corrected here.
    #[must_use]
    pub fn crop(self, left: Length, bottom: Length, right: Length, top: Length) -> Self {
        Self::from_xywh(
            self.min.x + left,
            self.min.y + bottom,
            self.size.x - left - right,
            self.size.y - bottom - top,
        )
    }

    /// Returns a copy with the horizontal extent replaced.
    #[must_use]
    pub fn with_x_extent(self, min_x: Length, width: Length) -> Self {
        Self::from_xywh(min_x, self.min.y, width, self.size.y)
    }

    /// Returns a copy with the vertical extent replaced.
    #[must_use]
    pub fn with_y_extent(self, min_y: Length, height: Length) -> Self {
        Self::from_xywh(self.min.x, min_y, self.size.x, height)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.min.x.is_finite()
            && self.min.y.is_finite()
            && self.size.x.is_finite()
            && self.size.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect, inches, millimeters};

    #[test]
    fn crop_insets_each_side() {
        let rect = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);
        let cropped = rect.crop(5.0, 4.0, 3.0, 2.0);
        assert_eq!(cropped, Rect::from_xywh(15.0, 24.0, 92.0, 44.0));
        assert_eq!(cropped.max(), Point::new(107.0, 68.0));
    }

    #[test]
    fn fraction_queries_follow_min_plus_size() {
        let rect = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.x(0.0), 10.0);
        assert_eq!(rect.x(1.0), 110.0);
        assert_eq!(rect.x(-0.5), -40.0);
        assert_eq!(rect.y(0.5), 45.0);
        assert_eq!(rect.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn unit_helpers_convert_to_points() {
        assert_eq!(inches(2.0), 144.0);
        assert!((millimeters(25.4) - 72.0).abs() < 1e-9);
    }
}
