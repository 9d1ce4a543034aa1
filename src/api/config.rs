use serde::{Deserialize, Serialize};

use crate::core::{Length, points};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Default font face for every text element of a plot.
pub const DEFAULT_FONT: &str = "Times-Roman";

/// Styling defaults applied when a plot is constructed.
///
/// Serializable so hosts can keep plot styling next to their own settings;
/// missing fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_title_font_size")]
    pub title_font_size: Length,
    #[serde(default = "default_axis_label_font_size")]
    pub axis_label_font_size: Length,
    #[serde(default = "default_tick_label_font_size")]
    pub tick_label_font_size: Length,
    #[serde(default = "default_legend_font_size")]
    pub legend_font_size: Length,
    #[serde(default = "default_background_color")]
    pub background_color: Option<Color>,
    #[serde(default = "default_axis_padding")]
    pub axis_padding: Length,
    #[serde(default = "default_tick_length")]
    pub tick_length: Length,
    #[serde(default = "default_line_width")]
    pub line_width: Length,
    #[serde(default = "default_legend_thumbnail_width")]
    pub legend_thumbnail_width: Length,
    #[serde(default = "default_legend_padding")]
    pub legend_padding: Length,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            font: default_font(),
            title_font_size: default_title_font_size(),
            axis_label_font_size: default_axis_label_font_size(),
            tick_label_font_size: default_tick_label_font_size(),
            legend_font_size: default_legend_font_size(),
            background_color: default_background_color(),
            axis_padding: default_axis_padding(),
            tick_length: default_tick_length(),
            line_width: default_line_width(),
            legend_thumbnail_width: default_legend_thumbnail_width(),
            legend_padding: default_legend_padding(),
        }
    }
}

impl PlotConfig {
    /// Sets the font face used for all text.
    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Sets title, axis label, tick label and legend font sizes.
    #[must_use]
    pub fn with_font_sizes(
        mut self,
        title: Length,
        axis_label: Length,
        tick_label: Length,
        legend: Length,
    ) -> Self {
        self.title_font_size = title;
        self.axis_label_font_size = axis_label;
        self.tick_label_font_size = tick_label;
        self.legend_font_size = legend;
        self
    }

    /// Sets the background fill; `None` leaves the surface untouched.
    #[must_use]
    pub fn with_background_color(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_axis_padding(mut self, padding: Length) -> Self {
        self.axis_padding = padding;
        self
    }

    #[must_use]
    pub fn with_tick_length(mut self, length: Length) -> Self {
        self.tick_length = length;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, width: Length) -> Self {
        self.line_width = width;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        for (name, value) in [
            ("title_font_size", self.title_font_size),
            ("axis_label_font_size", self.axis_label_font_size),
            ("tick_label_font_size", self.tick_label_font_size),
            ("legend_font_size", self.legend_font_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("axis_padding", self.axis_padding),
            ("tick_length", self.tick_length),
            ("line_width", self.line_width),
            ("legend_thumbnail_width", self.legend_thumbnail_width),
            ("legend_padding", self.legend_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if let Some(color) = self.background_color {
            color.validate()?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize plot config: {e}")))
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse plot config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_font() -> String {
    DEFAULT_FONT.to_owned()
}

fn default_title_font_size() -> Length {
    points(12.0)
}

fn default_axis_label_font_size() -> Length {
    points(12.0)
}

fn default_tick_label_font_size() -> Length {
    points(10.0)
}

fn default_legend_font_size() -> Length {
    points(12.0)
}

fn default_background_color() -> Option<Color> {
    Some(Color::WHITE)
}

fn default_axis_padding() -> Length {
    points(5.0)
}

fn default_tick_length() -> Length {
    points(8.0)
}

fn default_line_width() -> Length {
    points(0.5)
}

fn default_legend_thumbnail_width() -> Length {
    points(20.0)
}

fn default_legend_padding() -> Length {
    points(2.0)
}
