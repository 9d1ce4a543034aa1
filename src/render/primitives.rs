use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Length, Point};
use crate::error::{PlotError, PlotResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke style for lines and outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: Length,
    /// Alternating on/off dash lengths; empty means solid.
    #[serde(default)]
    pub dashes: Vec<Length>,
    #[serde(default)]
    pub dash_offset: Length,
}

impl LineStyle {
    #[must_use]
    pub fn solid(color: Color, width: Length) -> Self {
        Self {
            color,
            width,
            dashes: Vec::new(),
            dash_offset: 0.0,
        }
    }

    /// A style with no width draws nothing.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathComponent {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc around `center`, from `start` sweeping `angle` radians
    /// counter-clockwise.
    Arc {
        center: Point,
        radius: Length,
        start: f64,
        angle: f64,
    },
    Close,
}

/// Sequence of path components handed to a canvas for stroking or filling.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    components: SmallVec<[PathComponent; 8]>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed outline of `rect`.
    #[must_use]
    pub fn rect(rect: crate::core::Rect) -> Self {
        let max = rect.max();
        let mut path = Self::new();
        path.move_to(rect.min)
            .line_to(Point::new(max.x, rect.min.y))
            .line_to(max)
            .line_to(Point::new(rect.min.x, max.y))
            .close();
        path
    }

    /// Open polyline through `points`.
    #[must_use]
    pub fn polyline(points: &[Point]) -> Self {
        let mut path = Self::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for point in rest {
                path.line_to(*point);
            }
        }
        path
    }

    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.components.push(PathComponent::MoveTo(point));
        self
    }

    pub fn line_to(&mut self, point: Point) -> &mut Self {
        self.components.push(PathComponent::LineTo(point));
        self
    }

    pub fn arc(&mut self, center: Point, radius: Length, start: f64, angle: f64) -> &mut Self {
        self.components.push(PathComponent::Arc {
            center,
            radius,
            start,
            angle,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.components.push(PathComponent::Close);
        self
    }

    #[must_use]
    pub fn components(&self) -> &[PathComponent] {
        &self.components
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
