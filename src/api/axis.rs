use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

use crate::core::{DefaultTicks, GlyphBox, Length, Point, Rect, Tick, TickMarker};
use crate::error::PlotResult;
use crate::render::{Color, DrawArea, FontBook, LineStyle, TextStyle};

use super::PlotConfig;

/// Axis title text and style. Empty text draws no title.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub style: TextStyle,
}

/// Tick mark and tick label configuration.
#[derive(Debug, Clone)]
pub struct TickConfig {
    pub label: TextStyle,
    pub line_style: LineStyle,
    pub length: Length,
    pub marker: Arc<dyn TickMarker + Send + Sync>,
}

/// One data axis: range, styles and tick configuration.
///
/// The range starts empty (`min = +inf`, `max = -inf`) so the first data
/// range registered with the plot sets it.
#[derive(Debug, Clone)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub label: AxisLabel,
    pub line_style: LineStyle,
    /// Gap between the axis line and the data area.
    pub padding: Length,
    pub tick: TickConfig,
}

impl Axis {
    pub fn new(config: &PlotConfig, fonts: &FontBook) -> PlotResult<Self> {
        let label_font = fonts.font(&config.font, config.axis_label_font_size)?;
        let tick_font = fonts.font(&config.font, config.tick_label_font_size)?;
        Ok(Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            label: AxisLabel {
                text: String::new(),
                style: TextStyle::new(Color::BLACK, label_font),
            },
            line_style: LineStyle::solid(Color::BLACK, config.line_width),
            padding: config.axis_padding,
            tick: TickConfig {
                label: TextStyle::new(Color::BLACK, tick_font),
                line_style: LineStyle::solid(Color::BLACK, config.line_width),
                length: config.tick_length,
                marker: Arc::new(DefaultTicks),
            },
        })
    }

    /// Normalized position of `value`: `0` at `min`, `1` at `max`.
    ///
    /// Only meaningful once the range is sanitized.
    #[must_use]
    pub fn norm(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Forces the range into a finite, non-empty interval.
    ///
    /// Non-finite bounds become `0`, inverted bounds are swapped and an empty
    /// range grows by one unit on each side.
    pub fn sanitize_range(&mut self) {
        if !self.min.is_finite() {
            self.min = 0.0;
        }
        if !self.max.is_finite() {
            self.max = 0.0;
        }
        if self.min > self.max {
            std::mem::swap(&mut self.min, &mut self.max);
        }
        if self.min == self.max {
            self.min -= 1.0;
            self.max += 1.0;
        }
    }

    /// Widens the range to cover `[min, max]`; never narrows it.
    pub fn include(&mut self, min: f64, max: f64) {
        self.min = self.min.min(min);
        self.max = self.max.max(max);
    }

    /// Replaces the tick marker.
    pub fn set_marker(&mut self, marker: impl TickMarker + Send + Sync + 'static) {
        self.tick.marker = Arc::new(marker);
    }

    #[must_use]
    pub fn ticks(&self) -> Vec<Tick> {
        self.tick.marker.ticks(self.min, self.max)
    }

    #[must_use]
    pub fn draws_ticks(&self) -> bool {
        self.tick.line_style.is_visible() && self.tick.length > 0.0
    }

    /// Space taken by tick marks across the axis.
    #[must_use]
    pub fn tick_mark_thickness(&self) -> Length {
        if self.draws_ticks() { self.tick.length } else { 0.0 }
    }

    /// Height needed below the data area when drawn horizontally.
    #[must_use]
    pub fn horizontal_thickness(&self) -> Length {
        HorizontalAxis(self).size()
    }

    /// Width needed left of the data area when drawn vertically.
    #[must_use]
    pub fn vertical_thickness(&self) -> Length {
        VerticalAxis(self).size()
    }

    fn label_thickness(&self) -> Length {
        if self.label.text.is_empty() {
            return 0.0;
        }
        self.label.style.height(&self.label.text) - self.label.style.font.extents().descent
    }
}

fn major_labels(ticks: &[Tick]) -> impl Iterator<Item = &Tick> {
    ticks.iter().filter(|tick| !tick.is_minor())
}

fn tick_label_height(style: &TextStyle, ticks: &[Tick]) -> Length {
    major_labels(ticks)
        .map(|tick| style.height(&tick.label))
        .fold(0.0, f64::max)
}

fn tick_label_width(style: &TextStyle, ticks: &[Tick]) -> Length {
    major_labels(ticks)
        .map(|tick| style.width(&tick.label))
        .fold(0.0, f64::max)
}

/// An axis drawn along the bottom of the data area.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HorizontalAxis<'a>(pub(crate) &'a Axis);

impl HorizontalAxis<'_> {
    pub(crate) fn size(&self) -> Length {
        let axis = self.0;
        let mut height = axis.label_thickness();
        let ticks = axis.ticks();
        if !ticks.is_empty() {
            height += axis.tick_mark_thickness();
            height += tick_label_height(&axis.tick.label, &ticks);
        }
        height + axis.line_style.width / 2.0 + axis.padding
    }

    /// Tick label boxes, anchored on the bottom edge of the data area.
    pub(crate) fn glyph_boxes(&self) -> Vec<GlyphBox> {
        let axis = self.0;
        major_labels(&axis.ticks())
            .map(|tick| {
                let width = axis.tick.label.width(&tick.label);
                GlyphBox::new(
                    axis.norm(tick.value),
                    0.0,
                    Rect::new(Point::new(-width / 2.0, 0.0), Point::new(width, 0.0)),
                )
            })
            .collect()
    }

    /// Draws bottom-up: title, tick labels, tick marks, axis line.
    pub(crate) fn draw(&self, area: &mut DrawArea<'_>) {
        let axis = self.0;
        let mut y = area.min().y;
        if !axis.label.text.is_empty() {
            y -= axis.label.style.font.extents().descent;
            let center = area.center().x;
            area.fill_text(&axis.label.style, center, y, -0.5, 0.0, &axis.label.text);
            y += axis.label.style.height(&axis.label.text);
        }

        let ticks = axis.ticks();
        for tick in major_labels(&ticks) {
            let x = area.x(axis.norm(tick.value));
            if area.contains_x(x) {
                area.fill_text(&axis.tick.label, x, y, -0.5, 0.0, &tick.label);
            }
        }
        if ticks.is_empty() {
            y += axis.line_style.width / 2.0;
        } else {
            y += tick_label_height(&axis.tick.label, &ticks);
        }

        if !ticks.is_empty() && axis.draws_ticks() {
            let length = axis.tick.length;
            for tick in &ticks {
                let x = area.x(axis.norm(tick.value));
                if area.contains_x(x) {
                    let start = tick.length_offset(length);
                    area.stroke_line2(&axis.tick.line_style, x, y + start, x, y + length);
                }
            }
            y += length;
        }

        let (left, right) = (area.min().x, area.max().x);
        area.stroke_line2(&axis.line_style, left, y, right, y);
    }
}

/// An axis drawn along the left of the data area.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VerticalAxis<'a>(pub(crate) &'a Axis);

impl VerticalAxis<'_> {
    pub(crate) fn size(&self) -> Length {
        let axis = self.0;
        let mut width = axis.label_thickness();
        let ticks = axis.ticks();
        if !ticks.is_empty() {
            let label_width = tick_label_width(&axis.tick.label, &ticks);
            if label_width > 0.0 {
                width += label_width + axis.tick.label.width(" ");
            }
            width += axis.tick_mark_thickness();
        }
        width + axis.line_style.width / 2.0 + axis.padding
    }

    /// Tick label boxes, anchored on the left edge of the data area.
    pub(crate) fn glyph_boxes(&self) -> Vec<GlyphBox> {
        let axis = self.0;
        major_labels(&axis.ticks())
            .map(|tick| {
                let height = axis.tick.label.height(&tick.label);
                GlyphBox::new(
                    0.0,
                    axis.norm(tick.value),
                    Rect::new(Point::new(0.0, -height / 2.0), Point::new(0.0, height)),
                )
            })
            .collect()
    }

    /// Draws left-to-right: rotated title, tick labels, tick marks, axis line.
    pub(crate) fn draw(&self, area: &mut DrawArea<'_>) {
        let axis = self.0;
        let mut x = area.min().x;
        if !axis.label.text.is_empty() {
            x += axis.label.style.height(&axis.label.text);
            let center = area.center().y;
            area.push();
            area.rotate(FRAC_PI_2);
            area.fill_text(&axis.label.style, center, -x, -0.5, 0.0, &axis.label.text);
            area.pop();
            x -= axis.label.style.font.extents().descent;
        }

        let ticks = axis.ticks();
        let label_width = tick_label_width(&axis.tick.label, &ticks);
        if !ticks.is_empty() && label_width > 0.0 {
            x += label_width;
        }
        let mut labeled = false;
        for tick in major_labels(&ticks) {
            let y = area.y(axis.norm(tick.value));
            if area.contains_y(y) {
                area.fill_text(&axis.tick.label, x, y, -1.0, -0.5, &tick.label);
                labeled = true;
            }
        }
        if labeled {
            x += axis.tick.label.width(" ");
        }

        if !ticks.is_empty() && axis.draws_ticks() {
            let length = axis.tick.length;
            for tick in &ticks {
                let y = area.y(axis.norm(tick.value));
                if area.contains_y(y) {
                    let start = tick.length_offset(length);
                    area.stroke_line2(&axis.tick.line_style, x + start, y, x + length, y);
                }
            }
            x += length;
        }

        let (bottom, top) = (area.min().y, area.max().y);
        area.stroke_line2(&axis.line_style, x, bottom, x, top);
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::{Axis, HorizontalAxis, VerticalAxis};
    use crate::api::PlotConfig;
    use crate::core::{ConstantTicks, Point, Rect, Tick};
    use crate::render::{CanvasCommand, Color, DrawArea, FontBook, Path, RecordingCanvas};

    fn axis() -> Axis {
        let mut axis = Axis::new(&PlotConfig::default(), &FontBook::standard()).expect("axis");
        axis.min = 0.0;
        axis.max = 10.0;
        axis
    }

    #[test]
    fn horizontal_boxes_center_labels_on_ticks() {
        let mut axis = axis();
        axis.set_marker(ConstantTicks(vec![Tick::major(5.0, "five"), Tick::minor(6.0)]));
        let boxes = HorizontalAxis(&axis).glyph_boxes();
        assert_eq!(boxes.len(), 1);
        let width = axis.tick.label.width("five");
        assert_eq!(boxes[0].x, 0.5);
        assert_eq!(boxes[0].rect.min.x, -width / 2.0);
        assert_eq!(boxes[0].rect.size.x, width);
    }

    #[test]
    fn vertical_boxes_center_labels_on_ticks() {
        let mut axis = axis();
        axis.set_marker(ConstantTicks(vec![Tick::major(10.0, "10")]));
        let boxes = VerticalAxis(&axis).glyph_boxes();
        let height = axis.tick.label.height("10");
        assert_eq!(boxes[0].y, 1.0);
        assert_eq!(boxes[0].rect.min.y, -height / 2.0);
    }

    fn mixed_ticks() -> ConstantTicks {
        ConstantTicks(vec![
            Tick::major(5.0, "5"),
            Tick::minor(2.5),
            Tick::major(20.0, "20"),
        ])
    }

    fn strokes(canvas: &RecordingCanvas) -> Vec<Path> {
        canvas
            .commands()
            .iter()
            .filter_map(|command| match command {
                CanvasCommand::Stroke(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Path {
        Path::polyline(&[Point::new(x1, y1), Point::new(x2, y2)])
    }

    #[test]
    fn horizontal_draw_places_labels_ticks_and_line() {
        let mut axis = axis();
        axis.set_marker(mixed_ticks());
        let mut canvas = RecordingCanvas::new();
        {
            let mut area = DrawArea::with_rect(&mut canvas, Rect::from_xywh(10.0, 0.0, 100.0, 40.0));
            HorizontalAxis(&axis).draw(&mut area);
        }

        let texts: Vec<_> = canvas.texts().collect();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].2, "5");
        assert_eq!(texts[0].0, 60.0 + axis.tick.label.width("5") * -0.5);
        assert_eq!(texts[0].1, 0.0);

        let label_height = axis.tick.label.height("5").max(axis.tick.label.height("20"));
        let length = axis.tick.length;
        assert_eq!(
            strokes(&canvas),
            vec![
                segment(60.0, label_height, 60.0, label_height + length),
                segment(35.0, label_height + length / 2.0, 35.0, label_height + length),
                segment(10.0, label_height + length, 110.0, label_height + length),
            ]
        );
    }

    #[test]
    fn vertical_draw_rotates_title_and_offsets_line() {
        let mut axis = axis();
        axis.set_marker(mixed_ticks());
        axis.label.text = "Y".to_owned();
        let mut canvas = RecordingCanvas::new();
        {
            let mut area = DrawArea::with_rect(&mut canvas, Rect::from_xywh(0.0, 10.0, 40.0, 100.0));
            VerticalAxis(&axis).draw(&mut area);
        }

        let title_height = axis.label.style.height("Y");
        let commands = canvas.commands();
        assert_eq!(commands[0], CanvasCommand::Push);
        assert_eq!(commands[1], CanvasCommand::Rotate(FRAC_PI_2));
        assert_eq!(commands[2], CanvasCommand::SetColor(Color::BLACK));
        match &commands[3] {
            CanvasCommand::FillString { x, y, text, .. } => {
                assert_eq!(text, "Y");
                assert_eq!(*x, 60.0 + axis.label.style.width("Y") * -0.5);
                assert_eq!(*y, -title_height);
            }
            other => panic!("expected the axis title, got {other:?}"),
        }
        assert_eq!(commands[4], CanvasCommand::Pop);
        assert_eq!(canvas.depth(), 0);

        let mut x = 0.0 + title_height;
        x -= axis.label.style.font.extents().descent;
        x += axis.tick.label.width("20");
        let labels: Vec<_> = canvas.texts().skip(1).collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].2, "5");
        assert_eq!(labels[0].0, x - axis.tick.label.width("5"));
        assert_eq!(labels[0].1, 60.0 + axis.tick.label.height("5") * -0.5);

        x += axis.tick.label.width(" ");
        let length = axis.tick.length;
        assert_eq!(
            strokes(&canvas),
            vec![
                segment(x, 60.0, x + length, 60.0),
                segment(x + length / 2.0, 35.0, x + length, 35.0),
                segment(x + length, 10.0, x + length, 110.0),
            ]
        );
    }

    #[test]
    fn thickness_without_ticks_is_line_and_padding() {
        let mut axis = axis();
        axis.set_marker(ConstantTicks(Vec::new()));
        let expected = axis.line_style.width / 2.0 + axis.padding;
        assert_eq!(HorizontalAxis(&axis).size(), expected);
        assert_eq!(VerticalAxis(&axis).size(), expected);
    }
}
