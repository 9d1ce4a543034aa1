use std::fs::File;
use std::path::{Path as FsPath, PathBuf};

use cairo::{Context, Format, ImageSurface, PdfSurface, PsSurface, SvgSurface};
use pango::FontDescription;
use tracing::debug;

use crate::core::{Length, POINTS_PER_INCH};
use crate::error::{PlotError, PlotResult};
use crate::render::{Canvas, Color, Font, OutputFormat, Path, PathComponent};

/// Resolution used for raster output.
pub const DEFAULT_RASTER_DPI: f64 = 96.0;

/// A Cairo surface bound to the file it will be written to.
#[derive(Debug)]
pub struct CairoTarget {
    surface: TargetSurface,
    path: PathBuf,
    width: Length,
    height: Length,
}

#[derive(Debug)]
enum TargetSurface {
    Png(ImageSurface),
    Jpeg(ImageSurface),
    Svg(SvgSurface),
    Pdf(PdfSurface),
    Eps(PsSurface),
}

impl CairoTarget {
    /// Allocates the surface for `format`.
    ///
    /// Vector surfaces open `path` immediately; raster surfaces only touch
    /// the file system in [`CairoTarget::finish`].
    pub fn create(
        format: OutputFormat,
        width: Length,
        height: Length,
        path: impl AsRef<FsPath>,
    ) -> PlotResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(PlotError::InvalidData(
                "output size must be finite and > 0".to_owned(),
            ));
        }
        let path = path.as_ref().to_path_buf();
        let surface = match format {
            OutputFormat::Png | OutputFormat::Jpeg => {
                let (pixel_width, pixel_height) = raster_size(width, height);
                let pixel_format = if format == OutputFormat::Png {
                    Format::ARgb32
                } else {
                    Format::Rgb24
                };
                let raster = ImageSurface::create(pixel_format, pixel_width, pixel_height)
                    .map_err(|err| map_backend_error("failed to create image surface", err))?;
                if format == OutputFormat::Png {
                    TargetSurface::Png(raster)
                } else {
                    TargetSurface::Jpeg(raster)
                }
            }
            OutputFormat::Svg => TargetSurface::Svg(
                SvgSurface::new(width, height, Some(&path))
                    .map_err(|err| map_backend_error("failed to create svg surface", err))?,
            ),
            OutputFormat::Pdf => TargetSurface::Pdf(
                PdfSurface::new(width, height, &path)
                    .map_err(|err| map_backend_error("failed to create pdf surface", err))?,
            ),
            OutputFormat::Eps => {
                let surface = PsSurface::new(width, height, &path)
                    .map_err(|err| map_backend_error("failed to create eps surface", err))?;
                surface.set_eps(true);
                TargetSurface::Eps(surface)
            }
        };
        debug!(format = %format, path = %path.display(), width, height, "created cairo target");
        Ok(Self {
            surface,
            path,
            width,
            height,
        })
    }

    /// Canvas drawing into this target, in points with a Y-up origin.
    pub fn canvas(&self) -> PlotResult<CairoCanvas> {
        let (context, scale) = match &self.surface {
            TargetSurface::Png(raster) | TargetSurface::Jpeg(raster) => (
                Context::new(raster),
                DEFAULT_RASTER_DPI / POINTS_PER_INCH,
            ),
            TargetSurface::Svg(surface) => (Context::new(surface), 1.0),
            TargetSurface::Pdf(surface) => (Context::new(surface), 1.0),
            TargetSurface::Eps(surface) => (Context::new(surface), 1.0),
        };
        let context =
            context.map_err(|err| map_backend_error("failed to create cairo context", err))?;
        CairoCanvas::new(context, self.height, scale)
    }

    #[must_use]
    pub fn size(&self) -> (Length, Length) {
        (self.width, self.height)
    }

    /// Reports the first drawing error and persists the surface.
    ///
    /// Persisting is attempted even when drawing failed; the drawing error
    /// wins when both fail.
    pub fn finish(self, canvas: CairoCanvas) -> PlotResult<()> {
        let drawn = canvas.into_result();
        let persisted = self.persist();
        drawn.and(persisted)
    }

    fn persist(self) -> PlotResult<()> {
        match self.surface {
            TargetSurface::Png(raster) => {
                let mut file = File::create(&self.path)?;
                raster
                    .write_to_png(&mut file)
                    .map_err(|err| PlotError::Backend(format!("failed to write png: {err}")))
            }
            TargetSurface::Jpeg(raster) => write_jpeg(raster, &self.path),
            TargetSurface::Svg(surface) => finish_surface(&surface),
            TargetSurface::Pdf(surface) => finish_surface(&surface),
            TargetSurface::Eps(surface) => finish_surface(&surface),
        }
    }
}

fn raster_size(width: Length, height: Length) -> (i32, i32) {
    let scale = DEFAULT_RASTER_DPI / POINTS_PER_INCH;
    (
        (width * scale).ceil().max(1.0) as i32,
        (height * scale).ceil().max(1.0) as i32,
    )
}

fn finish_surface(surface: &cairo::Surface) -> PlotResult<()> {
    surface.finish();
    surface
        .status()
        .map_err(|err| map_backend_error("failed to finish surface", err))
}

fn write_jpeg(mut raster: ImageSurface, path: &FsPath) -> PlotResult<()> {
    raster.flush();
    let width = raster.width() as u32;
    let height = raster.height() as u32;
    let stride = raster.stride() as usize;
    let data = raster
        .data()
        .map_err(|err| PlotError::Backend(format!("failed to read image surface: {err}")))?;

    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for row in data.chunks(stride).take(height as usize) {
        for pixel in row.chunks_exact(4).take(width as usize) {
            let value = u32::from_ne_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]);
            rgb.extend_from_slice(&[(value >> 16) as u8, (value >> 8) as u8, value as u8]);
        }
    }
    let buffer = image::RgbImage::from_raw(width, height, rgb)
        .ok_or_else(|| PlotError::Backend("jpeg buffer size mismatch".to_owned()))?;
    buffer
        .save_with_format(path, image::ImageFormat::Jpeg)
        .map_err(|err| PlotError::Backend(format!("failed to write jpeg: {err}")))
}

/// [`Canvas`] over a Cairo context.
///
/// The context is set up so canvas coordinates are points with a Y-up
/// origin; text is flipped back so it reads upright.
#[derive(Debug)]
pub struct CairoCanvas {
    context: Context,
    scale: f64,
    error: Option<PlotError>,
}

impl CairoCanvas {
    /// Wraps `context` for a surface `height` points tall, with `scale`
    /// device units per point.
    pub fn new(context: Context, height: Length, scale: f64) -> PlotResult<Self> {
        context.scale(scale, -scale);
        context.translate(0.0, -height);
        context.set_line_join(cairo::LineJoin::Round);
        context
            .status()
            .map_err(|err| map_backend_error("cairo context is not usable", err))?;
        Ok(Self {
            context,
            scale,
            error: None,
        })
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// First drawing error, if any.
    pub fn into_result(self) -> PlotResult<()> {
        match self.error {
            Some(err) => Err(err),
            None => self
                .context
                .status()
                .map_err(|err| map_backend_error("cairo context failed", err)),
        }
    }

    fn record(&mut self, what: &str, result: Result<(), cairo::Error>) {
        if let Err(err) = result {
            if self.error.is_none() {
                self.error = Some(map_backend_error(what, err));
            }
        }
    }

    fn append_path(&self, path: &Path) {
        self.context.new_path();
        for component in path.components() {
            match *component {
                PathComponent::MoveTo(point) => self.context.move_to(point.x, point.y),
                PathComponent::LineTo(point) => self.context.line_to(point.x, point.y),
                PathComponent::Arc {
                    center,
                    radius,
                    start,
                    angle,
                } => {
                    if angle >= 0.0 {
                        self.context
                            .arc(center.x, center.y, radius, start, start + angle);
                    } else {
                        self.context
                            .arc_negative(center.x, center.y, radius, start, start + angle);
                    }
                }
                PathComponent::Close => self.context.close_path(),
            }
        }
    }
}

impl Canvas for CairoCanvas {
    fn set_line_width(&mut self, width: Length) {
        self.context.set_line_width(width);
    }

    fn set_line_dash(&mut self, pattern: &[Length], offset: Length) {
        self.context.set_dash(pattern, offset);
    }

    fn set_color(&mut self, color: Color) {
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
    }

    fn rotate(&mut self, radians: f64) {
        self.context.rotate(radians);
    }

    fn translate(&mut self, x: Length, y: Length) {
        self.context.translate(x, y);
    }

    fn push(&mut self) {
        let result = self.context.save();
        self.record("failed to save cairo state", result);
    }

    fn pop(&mut self) {
        let result = self.context.restore();
        self.record("failed to restore cairo state", result);
    }

    fn stroke(&mut self, path: &Path) {
        self.append_path(path);
        let result = self.context.stroke();
        self.record("failed to stroke path", result);
    }

    fn fill(&mut self, path: &Path) {
        self.append_path(path);
        let result = self.context.fill();
        self.record("failed to fill path", result);
    }

    fn fill_string(&mut self, font: &Font, x: Length, y: Length, text: &str) {
        let saved = self.context.save();
        self.record("failed to save cairo state", saved);

        self.context.translate(x, y);
        self.context.scale(1.0, -1.0);
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&font_description(font)));
        layout.set_text(text);
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        self.context.move_to(0.0, -baseline);
        pangocairo::functions::show_layout(&self.context, &layout);

        let restored = self.context.restore();
        self.record("failed to restore cairo state", restored);
    }

    fn dpi(&self) -> f64 {
        self.scale * POINTS_PER_INCH
    }
}

/// Maps a PostScript face name such as `Helvetica-BoldOblique` onto a Pango
/// description.
fn font_description(font: &Font) -> FontDescription {
    let (family, style) = font
        .name()
        .split_once('-')
        .unwrap_or((font.name(), "Roman"));
    let mut description = FontDescription::new();
    description.set_family(family);
    if style.contains("Bold") {
        description.set_weight(pango::Weight::Bold);
    }
    if style.contains("Italic") {
        description.set_style(pango::Style::Italic);
    } else if style.contains("Oblique") {
        description.set_style(pango::Style::Oblique);
    }
    description.set_absolute_size(font.size() * f64::from(pango::SCALE));
    description
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::Backend(format!("{prefix}: {err}"))
}
