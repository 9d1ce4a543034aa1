use plot_rs::api::{DataRange, DataRanger, Plot, Plotter};
use plot_rs::core::{GlyphBox, Point, Rect, pad_x, pad_y};
use plot_rs::render::DrawArea;
use proptest::prelude::*;

struct Ranged(DataRange);

impl Plotter for Ranged {
    fn plot(&self, _area: &mut DrawArea<'_>, _plot: &Plot) {}

    fn as_data_ranger(&self) -> Option<&dyn DataRanger> {
        Some(self)
    }
}

impl DataRanger for Ranged {
    fn data_range(&self) -> DataRange {
        self.0
    }
}

fn data_range() -> impl Strategy<Value = DataRange> {
    (
        -1_000.0f64..1_000.0,
        0.0f64..500.0,
        -1_000.0f64..1_000.0,
        0.0f64..500.0,
    )
        .prop_map(|(x, w, y, h)| DataRange::new(x, x + w, y, y + h))
}

proptest! {
    #[test]
    fn add_never_narrows_axes(ranges in prop::collection::vec(data_range(), 1..16)) {
        let mut plot = Plot::new().expect("plot");
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for range in &ranges {
            let before = (plot.x.min, plot.x.max, plot.y.min, plot.y.max);
            plot.add(Ranged(*range));
            prop_assert!(plot.x.min <= before.0);
            prop_assert!(plot.x.max >= before.1);
            prop_assert!(plot.y.min <= before.2);
            prop_assert!(plot.y.max >= before.3);
            x_min = x_min.min(range.x_min);
            x_max = x_max.max(range.x_max);
        }
        prop_assert_eq!(plot.x.min, x_min);
        prop_assert_eq!(plot.x.max, x_max);
    }

    #[test]
    fn norm_is_monotonic_between_bounds(
        min in -1_000.0f64..1_000.0,
        span in 0.0f64..1_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let mut plot = Plot::new().expect("plot");
        plot.x.min = min;
        plot.x.max = min + span;
        plot.x.sanitize_range();
        let (lo, hi) = (plot.x.min, plot.x.max);

        prop_assert_eq!(plot.x.norm(lo), 0.0);
        prop_assert!((plot.x.norm(hi) - 1.0).abs() <= 1e-12);
        let (a, b) = (a.min(b), a.max(b));
        let va = lo + a * (hi - lo);
        let vb = lo + b * (hi - lo);
        prop_assert!(plot.x.norm(va) <= plot.x.norm(vb));
    }

    #[test]
    fn padding_lands_edge_glyphs_on_outer_bounds(
        origin in -100.0f64..100.0,
        width in 60.0f64..600.0,
        left in 0.5f64..20.0,
        right in 0.5f64..20.0,
    ) {
        let outer = Rect::from_xywh(origin, origin, width, width);
        let low = GlyphBox::new(0.0, 0.0, Rect::new(Point::new(-left, -left), Point::new(left, left)));
        let high = GlyphBox::new(1.0, 1.0, Rect::new(Point::new(0.0, 0.0), Point::new(right, right)));
        let boxes = [low, high];

        let inner = pad_y(pad_x(outer, &boxes, &[]), &boxes, &[]);

        prop_assert!((inner.x(0.0) - left - outer.min.x).abs() <= 1e-9);
        prop_assert!((inner.x(1.0) + right - outer.max().x).abs() <= 1e-9);
        prop_assert!((inner.y(0.0) - left - outer.min.y).abs() <= 1e-9);
        prop_assert!((inner.y(1.0) + right - outer.max().y).abs() <= 1e-9);
        prop_assert!(inner.size.x > 0.0 && inner.size.y > 0.0);
    }

    #[test]
    fn padding_never_produces_non_finite_geometry(
        anchor in 0.0f64..1.0,
        spill in 1.0f64..50.0,
    ) {
        let outer = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let x = outer.x(anchor);
        let boxes = [
            GlyphBox::new(anchor, anchor, Rect::new(Point::new(-x - spill, -x - spill), Point::new(1.0, 1.0))),
            GlyphBox::new(anchor, anchor, Rect::new(Point::new(0.0, 0.0), Point::new(100.0 - x + spill, 100.0 - x + spill))),
        ];
        let inner = pad_y(pad_x(outer, &boxes, &[]), &boxes, &[]);
        prop_assert!(inner.is_finite());
        prop_assert_eq!(inner, outer);
    }
}
