use crate::core::{Length, Point, Rect};
use crate::render::{Canvas, Color, LineStyle, Path, TextStyle, text_lines};

/// A rectangular region of a canvas.
///
/// Normalized coordinates in `[0, 1]` map linearly onto the region through
/// [`DrawArea::x`] and [`DrawArea::y`]. Sub-regions reborrow the same canvas,
/// so a region never outlives the draw call that created it.
pub struct DrawArea<'c> {
    canvas: &'c mut dyn Canvas,
    rect: Rect,
}

impl std::fmt::Debug for DrawArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawArea").field("rect", &self.rect).finish()
    }
}

impl<'c> DrawArea<'c> {
    /// Region covering a whole `width` x `height` canvas.
    pub fn new(canvas: &'c mut dyn Canvas, width: Length, height: Length) -> Self {
        Self::with_rect(canvas, Rect::from_xywh(0.0, 0.0, width, height))
    }

    pub fn with_rect(canvas: &'c mut dyn Canvas, rect: Rect) -> Self {
        Self { canvas, rect }
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Sub-region over the same canvas.
    pub fn sub_area(&mut self, rect: Rect) -> DrawArea<'_> {
        DrawArea {
            canvas: &mut *self.canvas,
            rect,
        }
    }

    /// Sub-region inset by the given margins.
    pub fn crop(&mut self, left: Length, bottom: Length, right: Length, top: Length) -> DrawArea<'_> {
        let rect = self.rect.crop(left, bottom, right, top);
        self.sub_area(rect)
    }

    #[must_use]
    pub fn x(&self, fraction: f64) -> Length {
        self.rect.x(fraction)
    }

    #[must_use]
    pub fn y(&self, fraction: f64) -> Length {
        self.rect.y(fraction)
    }

    #[must_use]
    pub fn min(&self) -> Point {
        self.rect.min
    }

    #[must_use]
    pub fn size(&self) -> Point {
        self.rect.size
    }

    #[must_use]
    pub fn max(&self) -> Point {
        self.rect.max()
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    #[must_use]
    pub fn contains_x(&self, x: Length) -> bool {
        self.rect.contains_x(x)
    }

    #[must_use]
    pub fn contains_y(&self, y: Length) -> bool {
        self.rect.contains_y(y)
    }

    pub fn set_color(&mut self, color: Color) {
        self.canvas.set_color(color);
    }

    pub fn push(&mut self) {
        self.canvas.push();
    }

    pub fn pop(&mut self) {
        self.canvas.pop();
    }

    pub fn rotate(&mut self, radians: f64) {
        self.canvas.rotate(radians);
    }

    pub fn stroke(&mut self, path: &Path) {
        self.canvas.stroke(path);
    }

    pub fn fill(&mut self, path: &Path) {
        self.canvas.fill(path);
    }

    /// Applies a line style to the canvas state.
    pub fn set_line_style(&mut self, style: &LineStyle) {
        self.canvas.set_color(style.color);
        self.canvas.set_line_width(style.width);
        self.canvas.set_line_dash(&style.dashes, style.dash_offset);
    }

    /// Strokes a polyline; invisible styles and fewer than two points draw
    /// nothing.
    pub fn stroke_line(&mut self, style: &LineStyle, points: &[Point]) {
        if points.len() < 2 || !style.is_visible() {
            return;
        }
        self.set_line_style(style);
        self.canvas.stroke(&Path::polyline(points));
    }

    pub fn stroke_line2(&mut self, style: &LineStyle, x1: Length, y1: Length, x2: Length, y2: Length) {
        self.stroke_line(style, &[Point::new(x1, y1), Point::new(x2, y2)]);
    }

    /// Fills text positioned relative to `(x, y)`.
    ///
    /// `xalign` and `yalign` are fractions of the text width and height added
    /// to the position: `(0, 0)` puts the left end of the last baseline at the
    /// point, `(-0.5, -1)` hangs the text centered below it.
    pub fn fill_text(
        &mut self,
        style: &TextStyle,
        x: Length,
        y: Length,
        xalign: f64,
        yalign: f64,
        text: &str,
    ) {
        let text = text.trim_end_matches('\n');
        if text.is_empty() {
            return;
        }
        self.canvas.set_color(style.color);

        let line_height = style.font.extents().height;
        let top_baseline = y + style.height(text) * yalign;
        let lines: Vec<&str> = text_lines(text).collect();
        let last = lines.len() - 1;
        for (i, line) in lines.iter().enumerate() {
            let dx = style.font.width(line) * xalign;
            let baseline = top_baseline + line_height * (last - i) as f64;
            self.canvas.fill_string(&style.font, x + dx, baseline, line);
        }
    }
}
