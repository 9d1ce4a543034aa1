//! Font metrics used for layout.
//!
//! Layout needs only advance widths and vertical extents, never glyph
//! outlines. Faces carry deterministic, backend-independent metrics so a plot
//! measures the same on every host; backends resolve the face name to a real
//! font when they rasterize.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Length;
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Advance widths in em units, grouped by glyph class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyphWidths {
    pub digit: f64,
    pub space: f64,
    /// `i l j . , : ; ' | !`
    pub narrow: f64,
    /// `- + % ( ) [ ] / *` and similar.
    pub punctuation: f64,
    pub lower: f64,
    pub upper: f64,
    /// `m w M W @`
    pub wide: f64,
}

impl GlyphWidths {
    #[must_use]
    pub const fn monospace(advance: f64) -> Self {
        Self {
            digit: advance,
            space: advance,
            narrow: advance,
            punctuation: advance,
            lower: advance,
            upper: advance,
            wide: advance,
        }
    }

    #[must_use]
    const fn scaled(self, factor: f64) -> Self {
        Self {
            digit: self.digit * factor,
            space: self.space * factor,
            narrow: self.narrow * factor,
            punctuation: self.punctuation * factor,
            lower: self.lower * factor,
            upper: self.upper * factor,
            wide: self.wide * factor,
        }
    }

    #[must_use]
    pub fn advance(&self, ch: char) -> f64 {
        match ch {
            '0'..='9' => self.digit,
            ' ' => self.space,
            'i' | 'l' | 'j' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => self.narrow,
            'm' | 'w' | 'M' | 'W' | '@' => self.wide,
            'a'..='z' => self.lower,
            'A'..='Z' => self.upper,
            '-' | '+' | '%' | '(' | ')' | '[' | ']' | '/' | '*' | '=' | '<' | '>' => {
                self.punctuation
            }
            _ => self.upper,
        }
    }
}

/// Metrics of one font face in em units.
///
/// `descent` follows the Y-up convention: it is the (negative) offset of the
/// lowest glyph point below the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFace {
    pub name: String,
    pub ascent: f64,
    pub descent: f64,
    pub line_height: f64,
    pub widths: GlyphWidths,
}

const TIMES_WIDTHS: GlyphWidths = GlyphWidths {
    digit: 0.5,
    space: 0.25,
    narrow: 0.278,
    punctuation: 0.333,
    lower: 0.46,
    upper: 0.667,
    wide: 0.86,
};

const HELVETICA_WIDTHS: GlyphWidths = GlyphWidths {
    digit: 0.556,
    space: 0.278,
    narrow: 0.25,
    punctuation: 0.4,
    lower: 0.52,
    upper: 0.667,
    wide: 0.87,
};

const BOLD_FACTOR: f64 = 1.06;

impl FontFace {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ascent: f64,
        descent: f64,
        line_height: f64,
        widths: GlyphWidths,
    ) -> Self {
        Self {
            name: name.into(),
            ascent,
            descent,
            line_height,
            widths,
        }
    }

    /// The twelve standard PostScript text faces.
    #[must_use]
    pub fn standard_faces() -> Vec<Self> {
        let mut faces = Vec::with_capacity(12);
        for (suffix, bold) in [
            ("Roman", false),
            ("Bold", true),
            ("Italic", false),
            ("BoldItalic", true),
        ] {
            let widths = if bold {
                TIMES_WIDTHS.scaled(BOLD_FACTOR)
            } else {
                TIMES_WIDTHS
            };
            faces.push(Self::new(
                format!("Times-{suffix}"),
                0.683,
                -0.217,
                1.15,
                widths,
            ));
        }
        for (suffix, bold) in [
            ("", false),
            ("-Bold", true),
            ("-Oblique", false),
            ("-BoldOblique", true),
        ] {
            let widths = if bold {
                HELVETICA_WIDTHS.scaled(BOLD_FACTOR)
            } else {
                HELVETICA_WIDTHS
            };
            faces.push(Self::new(
                format!("Helvetica{suffix}"),
                0.718,
                -0.207,
                1.15,
                widths,
            ));
        }
        for suffix in ["", "-Bold", "-Oblique", "-BoldOblique"] {
            faces.push(Self::new(
                format!("Courier{suffix}"),
                0.629,
                -0.157,
                1.13,
                GlyphWidths::monospace(0.6),
            ));
        }
        faces
    }
}

/// Vertical font extents in device units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontExtents {
    pub ascent: Length,
    /// Negative: distance below the baseline.
    pub descent: Length,
    /// Baseline-to-baseline distance.
    pub height: Length,
}

/// A font face at a given size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    face: Arc<FontFace>,
    size: Length,
}

impl Font {
    #[must_use]
    pub fn new(face: Arc<FontFace>, size: Length) -> Self {
        Self { face, size }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.face.name
    }

    #[must_use]
    pub fn size(&self) -> Length {
        self.size
    }

    #[must_use]
    pub fn face(&self) -> &FontFace {
        &self.face
    }

    #[must_use]
    pub fn extents(&self) -> FontExtents {
        FontExtents {
            ascent: self.face.ascent * self.size,
            descent: self.face.descent * self.size,
            height: self.face.line_height * self.size,
        }
    }

    /// Advance width of a single line of text.
    #[must_use]
    pub fn width(&self, text: &str) -> Length {
        let units: f64 = text.chars().map(|ch| self.face.widths.advance(ch)).sum();
        units * self.size
    }
}

/// Registry resolving font names to faces.
///
/// Keeps registration order, so `names()` lists the standard faces first.
#[derive(Debug, Clone)]
pub struct FontBook {
    faces: IndexMap<String, Arc<FontFace>>,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::standard()
    }
}

impl FontBook {
    /// A book with no faces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            faces: IndexMap::new(),
        }
    }

    /// A book holding the standard PostScript faces.
    #[must_use]
    pub fn standard() -> Self {
        let mut book = Self::empty();
        for face in FontFace::standard_faces() {
            book.register(face);
        }
        book
    }

    /// Adds or replaces a face under its own name.
    pub fn register(&mut self, face: FontFace) {
        self.faces.insert(face.name.clone(), Arc::new(face));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.faces.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.faces.keys().map(String::as_str)
    }

    pub fn font(&self, name: &str, size: Length) -> PlotResult<Font> {
        let face = self
            .faces
            .get(name)
            .ok_or_else(|| PlotError::FontUnavailable {
                name: name.to_owned(),
            })?;
        Ok(Font::new(Arc::clone(face), size))
    }
}

/// Color and font used to draw text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font: Font,
}

impl TextStyle {
    #[must_use]
    pub fn new(color: Color, font: Font) -> Self {
        Self { color, font }
    }

    /// Width of the widest line.
    #[must_use]
    pub fn width(&self, text: &str) -> Length {
        text_lines(text)
            .map(|line| self.font.width(line))
            .fold(0.0, f64::max)
    }

    /// Height from the last baseline to the top of the first line.
    ///
    /// Descenders of the last line are not included.
    #[must_use]
    pub fn height(&self, text: &str) -> Length {
        let extents = self.font.extents();
        let lines = text_lines(text).count().max(1);
        extents.height * (lines - 1) as f64 + extents.ascent
    }
}

/// Lines of `text`, ignoring trailing newlines.
pub(crate) fn text_lines(text: &str) -> std::str::Split<'_, char> {
    text.trim_end_matches('\n').split('\n')
}
