use crate::core::{Length, Point, Rect};
use crate::error::PlotResult;
use crate::render::{Color, DrawArea, FontBook, LineStyle, Path, TextStyle};

use super::PlotConfig;

/// Draws the small sample shown next to a legend entry.
pub trait Thumbnailer {
    /// Draws into `area`, the icon cell of one legend row.
    fn thumbnail(&self, area: &mut DrawArea<'_>);
}

/// Thumbnail showing a horizontal line through the middle of the cell.
#[derive(Debug, Clone, PartialEq)]
pub struct LineThumbnail(pub LineStyle);

impl Thumbnailer for LineThumbnail {
    fn thumbnail(&self, area: &mut DrawArea<'_>) {
        let y = area.center().y;
        let (left, right) = (area.min().x, area.max().x);
        area.stroke_line2(&self.0, left, y, right, y);
    }
}

/// Thumbnail filling the whole cell with one color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxThumbnail(pub Color);

impl Thumbnailer for BoxThumbnail {
    fn thumbnail(&self, area: &mut DrawArea<'_>) {
        let rect = area.rect();
        area.set_color(self.0);
        area.fill(&Path::rect(rect));
    }
}

struct LegendEntry {
    text: String,
    thumbnails: Vec<Box<dyn Thumbnailer>>,
}

/// Legend drawn over a corner of the data area.
///
/// Rows stack in insertion order, one per entry; each row is a thumbnail
/// cell plus the entry text, separated by the width of a space.
pub struct Legend {
    pub text_style: TextStyle,
    /// Vertical gap between rows.
    pub padding: Length,
    /// Anchor at the top (`true`) or bottom of the data area.
    pub top: bool,
    /// Anchor at the left (`true`) or right of the data area.
    pub left: bool,
    pub x_offs: Length,
    pub y_offs: Length,
    pub thumbnail_width: Length,
    entries: Vec<LegendEntry>,
}

impl std::fmt::Debug for Legend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Legend")
            .field("text_style", &self.text_style)
            .field("top", &self.top)
            .field("left", &self.left)
            .field(
                "entries",
                &self
                    .entries
                    .iter()
                    .map(|entry| entry.text.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl Legend {
    pub fn new(config: &PlotConfig, fonts: &FontBook) -> PlotResult<Self> {
        let font = fonts.font(&config.font, config.legend_font_size)?;
        Ok(Self {
            text_style: TextStyle::new(Color::BLACK, font),
            padding: config.legend_padding,
            top: true,
            left: false,
            x_offs: 0.0,
            y_offs: 0.0,
            thumbnail_width: config.legend_thumbnail_width,
            entries: Vec::new(),
        })
    }

    /// Appends an entry; its thumbnails are drawn in order into one cell.
    pub fn add(&mut self, text: impl Into<String>, thumbnails: Vec<Box<dyn Thumbnailer>>) {
        self.entries.push(LegendEntry {
            text: text.into(),
            thumbnails,
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.text.as_str())
    }

    /// Height of one row: the tallest entry text.
    #[must_use]
    pub fn entry_height(&self) -> Length {
        self.entries
            .iter()
            .map(|entry| self.text_style.height(&entry.text))
            .fold(0.0, f64::max)
    }

    pub(crate) fn draw(&self, area: &mut DrawArea<'_>) {
        if self.entries.is_empty() {
            return;
        }
        let space = self.text_style.width(" ");
        let (mut icon_x, mut text_x, xalign) = if self.left {
            let icon_x = area.min().x;
            (icon_x, icon_x + self.thumbnail_width + space, 0.0)
        } else {
            let icon_x = area.max().x - self.thumbnail_width;
            (icon_x, icon_x - space, -1.0)
        };
        icon_x += self.x_offs;
        text_x += self.x_offs;

        let row_height = self.entry_height();
        let mut y = if self.top {
            area.max().y - row_height
        } else {
            area.min().y + (row_height + self.padding) * (self.entries.len() - 1) as f64
        };
        y += self.y_offs;

        for entry in &self.entries {
            let cell = Rect::new(
                Point::new(icon_x, y),
                Point::new(self.thumbnail_width, row_height),
            );
            {
                let mut icon = area.sub_area(cell);
                for thumbnail in &entry.thumbnails {
                    thumbnail.thumbnail(&mut icon);
                }
            }
            let y_offs = (row_height - self.text_style.height(&entry.text)) / 2.0;
            area.fill_text(&self.text_style, text_x, y + y_offs, xalign, 0.0, &entry.text);
            y -= row_height + self.padding;
        }
    }
}
