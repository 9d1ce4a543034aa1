use std::path::Path;

use tracing::debug;

use crate::core::{Length, inches};
use crate::error::PlotResult;
use crate::render::OutputFormat;

use super::Plot;

impl Plot {
    /// Saves the plot to `path`, sized `width` x `height` inches.
    ///
    /// The format follows the extension, case-insensitively: `.eps`, `.png`,
    /// `.jpg`/`.jpeg`, `.svg` or `.pdf`. Unknown extensions fail before any
    /// file is touched. The surface is persisted after drawing even if
    /// drawing reported an error; the first error is returned.
    pub fn save(&mut self, width: f64, height: f64, path: impl AsRef<Path>) -> PlotResult<()> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        let (width, height) = (inches(width), inches(height));
        debug!(format = %format, path = %path.display(), width, height, "saving plot");
        self.save_as(format, width, height, path)
    }

    #[cfg(feature = "cairo-backend")]
    fn save_as(
        &mut self,
        format: OutputFormat,
        width: Length,
        height: Length,
        path: &Path,
    ) -> PlotResult<()> {
        let result = self.render_to_target(format, width, height, path);
        if let Err(err) = &result {
            tracing::warn!(error = %err, format = %format, path = %path.display(), "failed to save plot");
        }
        result
    }

    #[cfg(feature = "cairo-backend")]
    fn render_to_target(
        &mut self,
        format: OutputFormat,
        width: Length,
        height: Length,
        path: &Path,
    ) -> PlotResult<()> {
        use crate::render::{CairoTarget, DrawArea};

        let target = CairoTarget::create(format, width, height, path)?;
        let mut canvas = target.canvas()?;
        {
            let mut area = DrawArea::new(&mut canvas, width, height);
            self.draw(&mut area);
        }
        target.finish(canvas)
    }

    #[cfg(not(feature = "cairo-backend"))]
    fn save_as(
        &mut self,
        format: OutputFormat,
        _width: Length,
        _height: Length,
        _path: &Path,
    ) -> PlotResult<()> {
        Err(crate::error::PlotError::BackendUnavailable {
            format: format.name(),
        })
    }
}
