use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use plot_rs::api::{
    BoxThumbnail, DataRange, DataRanger, GlyphBoxer, Plot, PlotConfig, Plotter,
};
use plot_rs::core::{GlyphBox, Point, Rect};
use plot_rs::render::{CanvasCommand, Color, DrawArea, FontBook, Path, RecordingCanvas};

/// Test plotter that fills its data area with one color and logs the area
/// it was handed.
struct Swatch {
    color: Color,
    range: Option<DataRange>,
    boxes: Vec<GlyphBox>,
    areas: Rc<RefCell<Vec<Rect>>>,
}

impl Swatch {
    fn new(color: Color) -> Self {
        Self {
            color,
            range: None,
            boxes: Vec::new(),
            areas: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn with_range(mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        self.range = Some(DataRange::new(x_min, x_max, y_min, y_max));
        self
    }

    fn with_boxes(mut self, boxes: Vec<GlyphBox>) -> Self {
        self.boxes = boxes;
        self
    }
}

impl Plotter for Swatch {
    fn plot(&self, area: &mut DrawArea<'_>, _plot: &Plot) {
        self.areas.borrow_mut().push(area.rect());
        let rect = area.rect();
        area.set_color(self.color);
        area.fill(&Path::rect(rect));
    }

    fn as_data_ranger(&self) -> Option<&dyn DataRanger> {
        self.range.map(|_| self as &dyn DataRanger)
    }

    fn as_glyph_boxer(&self) -> Option<&dyn GlyphBoxer> {
        (!self.boxes.is_empty()).then_some(self as &dyn GlyphBoxer)
    }
}

impl DataRanger for Swatch {
    fn data_range(&self) -> DataRange {
        self.range.unwrap_or(DataRange::new(0.0, 0.0, 0.0, 0.0))
    }
}

impl GlyphBoxer for Swatch {
    fn glyph_boxes(&self, _plot: &Plot) -> Vec<GlyphBox> {
        self.boxes.clone()
    }
}

fn glyph(x: f64) -> GlyphBox {
    GlyphBox::new(x, 0.5, Rect::from_xywh(-1.0, -1.0, 2.0, 2.0))
}

fn color_index(commands: &[CanvasCommand], color: Color) -> Option<usize> {
    commands
        .iter()
        .position(|command| *command == CanvasCommand::SetColor(color))
}

#[test]
fn add_widens_axes_monotonically() {
    let mut plot = Plot::new().expect("plot");
    plot.add(Swatch::new(Color::BLACK).with_range(0.0, 10.0, -1.0, 1.0));
    assert_eq!((plot.x.min, plot.x.max), (0.0, 10.0));
    assert_eq!((plot.y.min, plot.y.max), (-1.0, 1.0));

    plot.add(Swatch::new(Color::BLACK).with_range(2.0, 5.0, -3.0, 0.5));
    assert_eq!((plot.x.min, plot.x.max), (0.0, 10.0));
    assert_eq!((plot.y.min, plot.y.max), (-3.0, 1.0));

    plot.add(Swatch::new(Color::BLACK));
    assert_eq!((plot.x.min, plot.x.max), (0.0, 10.0));
    assert_eq!(plot.plotters().len(), 3);
}

#[test]
fn add_all_registers_in_order() {
    let mut plot = Plot::new().expect("plot");
    plot.add_all(vec![
        Box::new(Swatch::new(Color::BLACK).with_boxes(vec![glyph(0.1), glyph(0.2)]))
            as Box<dyn Plotter>,
        Box::new(Swatch::new(Color::BLACK)),
        Box::new(Swatch::new(Color::BLACK).with_boxes(vec![glyph(0.3)])),
    ]);

    let xs: Vec<f64> = plot.glyph_boxes().iter().map(|glyph| glyph.x).collect();
    assert_eq!(xs, vec![0.1, 0.2, 0.3]);
}

#[test]
fn draw_order_is_background_plotters_then_legend() {
    let first = Color::rgb(0.1, 0.2, 0.3);
    let second = Color::rgb(0.4, 0.5, 0.6);
    let mut plot = Plot::new().expect("plot");
    plot.add(Swatch::new(first).with_range(0.0, 1.0, 0.0, 1.0));
    plot.add(Swatch::new(second));
    plot.legend.add("series", vec![Box::new(BoxThumbnail(Color::RED))]);

    let canvas = plot.draw_to_new_recording(400.0, 300.0);
    let commands = canvas.commands();

    assert_eq!(commands[0], CanvasCommand::SetColor(Color::WHITE));
    assert_eq!(
        commands[1],
        CanvasCommand::Fill(Path::rect(Rect::from_xywh(0.0, 0.0, 400.0, 300.0)))
    );
    let first_at = color_index(commands, first).expect("first plotter drawn");
    let second_at = color_index(commands, second).expect("second plotter drawn");
    let legend_at = color_index(commands, Color::RED).expect("legend drawn");
    assert!(first_at < second_at);
    assert!(second_at < legend_at);
    assert_eq!(canvas.texts().last().map(|(_, _, text)| text), Some("series"));
    assert_eq!(canvas.depth(), 0);
    assert_eq!(canvas.unbalanced_pops(), 0);
}

#[test]
fn plotters_receive_the_padded_data_area() {
    let swatch = Swatch::new(Color::BLACK).with_range(0.0, 100.0, 0.0, 50.0);
    let areas = Rc::clone(&swatch.areas);
    let mut plot = Plot::new().expect("plot");
    plot.add(swatch);

    let _ = plot.draw_to_new_recording(300.0, 200.0);
    let layout = plot.layout(Rect::from_xywh(0.0, 0.0, 300.0, 200.0));

    assert_eq!(areas.borrow().as_slice(), &[layout.data]);
    assert!(layout.data.min.x >= plot.y.vertical_thickness());
    assert!(layout.data.min.y >= plot.x.horizontal_thickness());
    assert!(layout.data.max().x <= 300.0);
    assert!(layout.data.max().y <= 200.0);
}

#[test]
fn title_shrinks_the_drawable_height() {
    let mut untitled = Plot::new().expect("plot");
    let _ = untitled.draw_to_new_recording(300.0, 200.0);
    let plain = untitled.layout(Rect::from_xywh(0.0, 0.0, 300.0, 200.0));

    let swatch = Swatch::new(Color::BLACK);
    let areas = Rc::clone(&swatch.areas);
    let mut titled = Plot::new().expect("plot");
    titled.title.text = "Results".to_owned();
    titled.add(swatch);
    let canvas = titled.draw_to_new_recording(300.0, 200.0);

    let style = &titled.title.style;
    let shrink = style.height("Results") - style.font.extents().descent;
    let data = areas.borrow()[0];
    assert_relative_eq!(data.max().y, plain.data.max().y - shrink, epsilon = 1e-9);

    let (x, y, text) = canvas.texts().next().expect("title drawn first");
    assert_eq!(text, "Results");
    assert_relative_eq!(x, 150.0 - style.width("Results") / 2.0);
    assert_relative_eq!(y, 200.0 - style.height("Results"));
}

#[test]
fn no_background_when_color_is_none() {
    let config = PlotConfig::default().with_background_color(None);
    let mut plot = Plot::with_config(&config, &FontBook::standard()).expect("plot");
    let canvas = plot.draw_to_new_recording(200.0, 200.0);
    assert_ne!(canvas.commands()[0], CanvasCommand::SetColor(Color::WHITE));
}

#[test]
fn transforms_compose_norm_and_area() {
    let mut plot = Plot::new().expect("plot");
    plot.add(Swatch::new(Color::BLACK).with_range(0.0, 10.0, -5.0, 5.0));
    let mut canvas = RecordingCanvas::new();
    let area = DrawArea::with_rect(&mut canvas, Rect::from_xywh(10.0, 20.0, 100.0, 40.0));

    let (x, y) = plot.transforms(&area);
    assert_relative_eq!(x(5.0), 60.0);
    assert_relative_eq!(y(-5.0), 20.0);
    assert_relative_eq!(y(5.0), 60.0);
}

#[test]
fn glyph_box_overlay_outlines_each_box() {
    let mut plot = Plot::new().expect("plot");
    plot.add(Swatch::new(Color::BLACK).with_boxes(vec![glyph(0.0), glyph(1.0)]));
    let mut canvas = RecordingCanvas::new();
    {
        let mut area = DrawArea::new(&mut canvas, 100.0, 100.0);
        plot.draw_glyph_boxes(&mut area);
    }
    assert_eq!(canvas.commands()[0], CanvasCommand::SetColor(Color::RED));
    assert_eq!(canvas.stroke_count(), 2);
    assert_eq!(
        canvas.commands()[1],
        CanvasCommand::Stroke(Path::rect(Rect::new(
            Point::new(-1.0, 49.0),
            Point::new(2.0, 2.0)
        )))
    );
}

#[test]
fn edge_glyphs_pull_the_data_area_inward() {
    let wide = GlyphBox::new(1.0, 0.5, Rect::from_xywh(0.0, -2.0, 40.0, 4.0));
    let mut plain = Plot::new().expect("plot");
    plain.add(Swatch::new(Color::BLACK).with_range(0.0, 1.0, 0.0, 1.0));
    let mut padded = Plot::new().expect("plot");
    padded.add(
        Swatch::new(Color::BLACK)
            .with_range(0.0, 1.0, 0.0, 1.0)
            .with_boxes(vec![wide]),
    );

    let rect = Rect::from_xywh(0.0, 0.0, 300.0, 200.0);
    let plain = plain.layout(rect);
    let padded = padded.layout(rect);

    assert_relative_eq!(padded.data.max().x, 260.0, epsilon = 1e-9);
    assert!(padded.data.max().x < plain.data.max().x);
}
