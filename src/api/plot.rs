use tracing::debug;

use crate::core::{ConstantTicks, GlyphBox, Length, Rect, Tick, pad_x, pad_y};
use crate::error::PlotResult;
use crate::render::{Color, DrawArea, FontBook, Path, RecordingCanvas, TextStyle};

use super::axis::{HorizontalAxis, VerticalAxis};
use super::{Axis, Legend, PlotConfig, Plotter};

/// Plot title. Empty text draws no title.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub text: String,
    pub style: TextStyle,
}

/// Regions computed for one draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    /// Strip the horizontal axis draws into.
    pub x_axis: Rect,
    /// Strip the vertical axis draws into.
    pub y_axis: Rect,
    /// Final data area handed to every plotter and the legend.
    pub data: Rect,
}

/// A two-axis plot: title, background, axes, legend and the plotters
/// drawing its data.
pub struct Plot {
    pub title: Title,
    /// Fill drawn under everything else; `None` draws no background.
    pub background_color: Option<Color>,
    pub x: Axis,
    pub y: Axis,
    pub legend: Legend,
    plotters: Vec<Box<dyn Plotter>>,
}

impl std::fmt::Debug for Plot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plot")
            .field("title", &self.title)
            .field("background_color", &self.background_color)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("legend", &self.legend)
            .field("plotter_count", &self.plotters.len())
            .finish()
    }
}

impl Plot {
    /// Plot with default styling and the standard font book.
    pub fn new() -> PlotResult<Self> {
        Self::with_config(&PlotConfig::default(), &FontBook::standard())
    }

    /// Plot styled from `config`, resolving fonts through `fonts`.
    ///
    /// Fails with `FontUnavailable` when the configured font is missing.
    pub fn with_config(config: &PlotConfig, fonts: &FontBook) -> PlotResult<Self> {
        config.validate()?;
        let title_font = fonts.font(&config.font, config.title_font_size)?;
        Ok(Self {
            title: Title {
                text: String::new(),
                style: TextStyle::new(Color::BLACK, title_font),
            },
            background_color: config.background_color,
            x: Axis::new(config, fonts)?,
            y: Axis::new(config, fonts)?,
            legend: Legend::new(config, fonts)?,
            plotters: Vec::new(),
        })
    }

    /// Registers a plotter, widening the axes to its data range if it
    /// reports one.
    pub fn add(&mut self, plotter: impl Plotter + 'static) {
        self.register(Box::new(plotter));
    }

    /// Registers every plotter in order.
    pub fn add_all(&mut self, plotters: impl IntoIterator<Item = Box<dyn Plotter>>) {
        for plotter in plotters {
            self.register(plotter);
        }
    }

    fn register(&mut self, plotter: Box<dyn Plotter>) {
        if let Some(ranger) = plotter.as_data_ranger() {
            let range = ranger.data_range();
            self.x.include(range.x_min, range.x_max);
            self.y.include(range.y_min, range.y_max);
            debug!(
                x_min = self.x.min,
                x_max = self.x.max,
                y_min = self.y.min,
                y_max = self.y.max,
                "widened axes to plotter data range"
            );
        }
        self.plotters.push(plotter);
        debug!(plotter_count = self.plotters.len(), "registered plotter");
    }

    pub fn plotters(&self) -> &[Box<dyn Plotter>] {
        &self.plotters
    }

    /// Glyph boxes of every plotter that reports them, in registration
    /// order. Axis tick labels are not included.
    #[must_use]
    pub fn glyph_boxes(&self) -> Vec<GlyphBox> {
        self.plotters
            .iter()
            .filter_map(|plotter| plotter.as_glyph_boxer())
            .flat_map(|boxer| boxer.glyph_boxes(self))
            .collect()
    }

    /// Sanitizes both axis ranges and splits `rect` into the axis strips and
    /// the padded data area.
    pub fn layout(&mut self, rect: Rect) -> PlotLayout {
        self.x.sanitize_range();
        self.y.sanitize_range();

        let plot_boxes = self.glyph_boxes();
        let x_boxes = HorizontalAxis(&self.x).glyph_boxes();
        let y_boxes = VerticalAxis(&self.y).glyph_boxes();
        let y_width = self.y.vertical_thickness();
        let x_height = self.x.horizontal_thickness();

        let x_axis = pad_x(rect.crop(y_width, 0.0, 0.0, 0.0), &plot_boxes, &x_boxes);
        let y_axis = pad_y(rect.crop(0.0, x_height, 0.0, 0.0), &plot_boxes, &y_boxes);
        let data = pad_y(
            pad_x(rect.crop(y_width, x_height, 0.0, 0.0), &plot_boxes, &x_boxes),
            &plot_boxes,
            &y_boxes,
        );
        debug!(
            y_width,
            x_height,
            data_x = data.min.x,
            data_y = data.min.y,
            data_width = data.size.x,
            data_height = data.size.y,
            "plot layout resolved"
        );
        PlotLayout {
            x_axis,
            y_axis,
            data,
        }
    }

    /// Draws the whole plot into `area`.
    ///
    /// Order: background, title, axes, plotters in registration order, then
    /// the legend on top.
    pub fn draw(&mut self, area: &mut DrawArea<'_>) {
        if let Some(color) = self.background_color {
            let rect = area.rect();
            area.set_color(color);
            area.fill(&Path::rect(rect));
        }

        let mut rect = area.rect();
        if !self.title.text.is_empty() {
            let style = &self.title.style;
            area.fill_text(
                style,
                rect.center().x,
                rect.max().y,
                -0.5,
                -1.0,
                &self.title.text,
            );
            rect.size.y -= style.height(&self.title.text) - style.font.extents().descent;
        }

        let layout = self.layout(rect);
        HorizontalAxis(&self.x).draw(&mut area.sub_area(layout.x_axis));
        VerticalAxis(&self.y).draw(&mut area.sub_area(layout.y_axis));

        let mut data = area.sub_area(layout.data);
        for plotter in &self.plotters {
            plotter.plot(&mut data, self);
        }
        self.legend.draw(&mut data);
    }

    /// Outlines every plotter glyph box in red. Debugging aid only.
    pub fn draw_glyph_boxes(&self, area: &mut DrawArea<'_>) {
        let rect = area.rect();
        area.set_color(Color::RED);
        for glyph in self.glyph_boxes() {
            area.stroke(&Path::rect(glyph.device_rect(rect)));
        }
    }

    /// Draws into a fresh recording canvas of `width` x `height` points.
    pub fn draw_to_new_recording(&mut self, width: Length, height: Length) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        {
            let mut area = DrawArea::new(&mut canvas, width, height);
            self.draw(&mut area);
        }
        canvas
    }

    /// Data-to-device transforms for `area`, composing axis normalization
    /// with the area's coordinate mapping.
    pub fn transforms<'p>(
        &'p self,
        area: &DrawArea<'_>,
    ) -> (
        impl Fn(f64) -> Length + use<'p>,
        impl Fn(f64) -> Length + use<'p>,
    ) {
        let rect = area.rect();
        let (x, y) = (&self.x, &self.y);
        (
            move |value| rect.x(x.norm(value)),
            move |value| rect.y(y.norm(value)),
        )
    }

    /// Turns the horizontal axis into a category axis with `names` at
    /// `0, 1, .., n - 1`.
    ///
    /// Tick marks and the axis line are hidden, and the vertical axis is
    /// padded by half the first name's width so it does not clip that name.
    ///
    /// # Panics
    ///
    /// Panics if `names` is empty.
    pub fn nominal_x(&mut self, names: &[impl AsRef<str>]) {
        assert!(!names.is_empty(), "a nominal axis needs at least one name");
        hide_ticks(&mut self.x);
        self.y.padding = self.x.tick.label.width(names[0].as_ref()) / 2.0;
        self.x.set_marker(nominal_ticks(names));
    }

    /// Vertical counterpart of [`Plot::nominal_x`]; the horizontal axis is
    /// padded by half the first name's height.
    ///
    /// # Panics
    ///
    /// Panics if `names` is empty.
    pub fn nominal_y(&mut self, names: &[impl AsRef<str>]) {
        assert!(!names.is_empty(), "a nominal axis needs at least one name");
        hide_ticks(&mut self.y);
        self.x.padding = self.y.tick.label.height(names[0].as_ref()) / 2.0;
        self.y.set_marker(nominal_ticks(names));
    }
}

fn hide_ticks(axis: &mut Axis) {
    axis.tick.line_style.width = 0.0;
    axis.tick.length = 0.0;
    axis.line_style.width = 0.0;
}

fn nominal_ticks(names: &[impl AsRef<str>]) -> ConstantTicks {
    ConstantTicks(
        names
            .iter()
            .enumerate()
            .map(|(index, name)| Tick::major(index as f64, name.as_ref()))
            .collect(),
    )
}
