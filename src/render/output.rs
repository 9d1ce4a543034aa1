use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// File formats `Plot::save` can write, selected by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    Eps,
    Png,
    Jpeg,
    Svg,
    Pdf,
}

impl OutputFormat {
    /// Selects the format from the file extension, ignoring case.
    ///
    /// Accepted extensions: `.eps`, `.png`, `.jpg`, `.jpeg`, `.svg`, `.pdf`.
    pub fn from_path(path: impl AsRef<Path>) -> PlotResult<Self> {
        let extension = path
            .as_ref()
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default();
        match extension.as_str() {
            ".eps" => Ok(Self::Eps),
            ".png" => Ok(Self::Png),
            ".jpg" | ".jpeg" => Ok(Self::Jpeg),
            ".svg" => Ok(Self::Svg),
            ".pdf" => Ok(Self::Pdf),
            _ => Err(PlotError::UnsupportedFormat { extension }),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Eps => "eps",
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }

    /// Raster formats go through an image surface; the rest are vector.
    #[must_use]
    pub fn is_raster(self) -> bool {
        matches!(self, Self::Png | Self::Jpeg)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
