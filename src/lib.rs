//! plot-rs: two-axis plot layout and drawing.
//!
//! A [`Plot`] owns a title, two axes, a legend and an ordered list of
//! plotters. Drawing reserves room for axis labels and tick marks and pads
//! the data area so glyphs near its edges are never clipped. Output goes to
//! any [`render::Canvas`]; file output (`Plot::save`) needs the
//! `cairo-backend` feature.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Plot, PlotConfig};
pub use error::{PlotError, PlotResult};
