use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use super::geometry::Length;

/// Number of major ticks the default marker aims for.
const SUGGESTED_TICKS: f64 = 3.0;
/// Upper bound on generated ticks per pass, guarding against huge offsets.
const MAX_TICKS_PER_PASS: f64 = 1_000.0;

/// A tick mark on an axis.
///
/// A tick with an empty label is a minor tick: it is drawn at half length and
/// never labeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    #[must_use]
    pub fn major(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn minor(value: f64) -> Self {
        Self {
            value,
            label: String::new(),
        }
    }

    #[must_use]
    pub fn is_minor(&self) -> bool {
        self.label.is_empty()
    }

    /// Offset from the axis-side start of the tick mark.
    #[must_use]
    pub fn length_offset(&self, length: Length) -> Length {
        if self.is_minor() { length / 2.0 } else { 0.0 }
    }
}

/// Produces the ticks for a data range.
///
/// Tick selection is pluggable: axes hold a shared marker and call it each
/// time they are measured or drawn.
pub trait TickMarker: Debug {
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick>;
}

/// Nice-number tick marker.
///
/// Picks a major step of `1..=8 x 10^k` (steps of 7 and 9 are rounded down)
/// so roughly three majors fit the range, then fills in minor ticks at a
/// half, third or fifth of the major step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultTicks;

impl TickMarker for DefaultTicks {
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Vec::new();
        }

        let span = max - min;
        if !span.is_finite() {
            return Vec::new();
        }
        let mut tens = 10f64.powf(span.log10().floor());
        let mut n = span / tens;
        while n < SUGGESTED_TICKS - 1.0 {
            tens /= 10.0;
            n = span / tens;
        }

        let major_mult = match (n / (SUGGESTED_TICKS - 1.0)) as u32 {
            7 => 6,
            9 => 8,
            mult => mult.max(1),
        };
        let major_delta = f64::from(major_mult) * tens;
        let precision = (-tens.log10().round()).max(0.0) as usize;

        let mut ticks: Vec<Tick> = multiples_within(min, max, major_delta)
            .map(|value| Tick::major(value, format_tick_label(value, precision)))
            .collect();

        let minor_delta = match major_mult {
            3 | 6 => major_delta / 3.0,
            5 => major_delta / 5.0,
            _ => major_delta / 2.0,
        };
        let tolerance = minor_delta * 1e-6;
        let minors: Vec<Tick> = multiples_within(min, max, minor_delta)
            .filter(|value| {
                !ticks
                    .iter()
                    .any(|major| (major.value - value).abs() <= tolerance)
            })
            .map(Tick::minor)
            .collect();
        ticks.extend(minors);
        ticks
    }
}

/// Fixed list of ticks, independent of the data range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstantTicks(pub Vec<Tick>);

impl TickMarker for ConstantTicks {
    fn ticks(&self, _min: f64, _max: f64) -> Vec<Tick> {
        self.0.clone()
    }
}

/// Integer multiples of `step` inside `[min, max]`, computed by index so long
/// runs do not accumulate rounding error.
fn multiples_within(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (min / step).ceil();
    let last = (max / step).floor();
    let count = if first.is_finite() && last.is_finite() && last >= first {
        (last - first).min(MAX_TICKS_PER_PASS) as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| {
        let value = (first + i as f64) * step;
        // Avoid "-0" labels.
        if value == 0.0 { 0.0 } else { value }
    })
}

fn format_tick_label(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

#[cfg(test)]
mod tests {
    use super::{ConstantTicks, DefaultTicks, Tick, TickMarker};

    fn majors(ticks: &[Tick]) -> Vec<(f64, &str)> {
        ticks
            .iter()
            .filter(|tick| !tick.is_minor())
            .map(|tick| (tick.value, tick.label.as_str()))
            .collect()
    }

    #[test]
    fn default_ticks_pick_nice_majors() {
        let ticks = DefaultTicks.ticks(0.0, 10.0);
        assert_eq!(majors(&ticks), vec![(0.0, "0"), (5.0, "5"), (10.0, "10")]);
        let minor_count = ticks.iter().filter(|tick| tick.is_minor()).count();
        assert_eq!(minor_count, 8);
    }

    #[test]
    fn default_ticks_format_fractional_steps() {
        let ticks = DefaultTicks.ticks(0.0, 1.0);
        assert_eq!(
            majors(&ticks),
            vec![(0.0, "0.0"), (0.5, "0.5"), (1.0, "1.0")]
        );
    }

    #[test]
    fn default_ticks_reject_empty_range() {
        assert!(DefaultTicks.ticks(1.0, 1.0).is_empty());
        assert!(DefaultTicks.ticks(f64::NAN, 1.0).is_empty());
    }

    #[test]
    fn default_ticks_skip_ranges_whose_span_overflows() {
        assert!(DefaultTicks.ticks(-1e308, 1e308).is_empty());
        assert!(DefaultTicks.ticks(f64::MIN, f64::MAX).is_empty());
    }

    #[test]
    fn constant_ticks_ignore_range() {
        let marker = ConstantTicks(vec![Tick::major(0.0, "a"), Tick::minor(0.5)]);
        assert_eq!(marker.ticks(-100.0, 100.0).len(), 2);
    }

    #[test]
    fn minor_ticks_start_at_half_length() {
        assert_eq!(Tick::minor(1.0).length_offset(8.0), 4.0);
        assert_eq!(Tick::major(1.0, "1").length_offset(8.0), 0.0);
    }
}
