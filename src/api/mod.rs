mod axis;
mod config;
mod legend;
mod plot;
mod plotter;
mod save;

pub use axis::{Axis, AxisLabel, TickConfig};
pub use config::{DEFAULT_FONT, PlotConfig};
pub use legend::{BoxThumbnail, Legend, LineThumbnail, Thumbnailer};
pub use plot::{Plot, PlotLayout, Title};
pub use plotter::{DataRange, DataRanger, GlyphBoxer, Plotter};
