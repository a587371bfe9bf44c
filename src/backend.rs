//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for document access, isolating the
//! concrete PDF library (PDFium via `pdfium-render`) from the statistics
//! and sampling logic.

use std::path::Path;

use pdfium_render::prelude::*;

use crate::error::{Error, Result};
use crate::model::{Drawing, PageSize, Rgb, TextSpan};

/// PDF points per inch; page sizes are expressed in points.
const POINTS_PER_INCH: f32 = 72.0;

/// Abstract interface for read-only access to a slide document.
///
/// Implementations expose page geometry, vector drawings, text spans, and
/// rasterization — without leaking any concrete PDF library types. The
/// statistics and sampling passes consume only this trait.
pub trait SlideSource {
    /// Total number of pages in the document.
    fn page_count(&self) -> u32;

    /// Size of the page at `index` (0-based).
    fn page_size(&self, index: u32) -> Result<PageSize>;

    /// Vector drawing primitives on the page at `index`.
    fn drawings(&self, index: u32) -> Result<Vec<Drawing>>;

    /// Text spans on the page at `index`.
    fn spans(&self, index: u32) -> Result<Vec<TextSpan>>;

    /// Rasterize the page at `index` at `dpi` and write it to `path`.
    ///
    /// The image format follows the file extension of `path`.
    fn render_to_file(&self, index: u32, dpi: f32, path: &Path) -> Result<()>;
}

// ---------------------------------------------------------------------------
// PdfiumBackend — concrete implementation backed by pdfium-render
// ---------------------------------------------------------------------------

/// Binds the PDFium library and opens documents.
///
/// The backend must outlive every document it opens; one backend per run is
/// enough.
pub struct PdfiumBackend {
    pdfium: Pdfium,
}

impl PdfiumBackend {
    /// Bind PDFium, preferring a library alongside the executable and
    /// falling back to the system library.
    pub fn new() -> Result<Self> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| Error::Backend(e.to_string()))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Open the document at `path`, decrypting with `password` if given.
    pub fn open<'a>(
        &'a self,
        path: &Path,
        password: Option<&'a str>,
    ) -> Result<PdfiumDocument<'a>> {
        let doc = self
            .pdfium
            .load_pdf_from_file(path, password)
            .map_err(|e| Error::DocumentOpen {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        log::debug!(
            "opened {} ({} pages)",
            path.display(),
            doc.pages().len()
        );

        Ok(PdfiumDocument { doc })
    }
}

/// An open document; released when dropped.
pub struct PdfiumDocument<'a> {
    doc: PdfDocument<'a>,
}

impl PdfiumDocument<'_> {
    fn page(&self, index: u32) -> Result<PdfPage<'_>> {
        self.doc
            .pages()
            .get(index as u16)
            .map_err(|_| Error::PageOutOfRange(index, self.page_count()))
    }
}

impl SlideSource for PdfiumDocument<'_> {
    fn page_count(&self) -> u32 {
        self.doc.pages().len() as u32
    }

    fn page_size(&self, index: u32) -> Result<PageSize> {
        let page = self.page(index)?;
        Ok(PageSize {
            width: page.width().value,
            height: page.height().value,
        })
    }

    fn drawings(&self, index: u32) -> Result<Vec<Drawing>> {
        let page = self.page(index)?;
        let mut drawings = Vec::new();

        for object in page.objects().iter() {
            if let Some(path_object) = object.as_path_object() {
                drawings.push(Drawing {
                    fill: visible_rgb(path_object.fill_color()),
                    stroke: visible_rgb(path_object.stroke_color()),
                });
            }
        }

        Ok(drawings)
    }

    fn spans(&self, index: u32) -> Result<Vec<TextSpan>> {
        let page = self.page(index)?;
        let mut spans = Vec::new();

        for object in page.objects().iter() {
            if let Some(text_object) = object.as_text_object() {
                let color = text_object
                    .fill_color()
                    .map(pack_rgb)
                    .unwrap_or_default();

                spans.push(TextSpan {
                    font: text_object.font().family(),
                    color,
                    text: text_object.text(),
                });
            }
        }

        Ok(spans)
    }

    fn render_to_file(&self, index: u32, dpi: f32, path: &Path) -> Result<()> {
        let page = self.page(index)?;

        let config = PdfRenderConfig::new().scale_page_by_factor(dpi / POINTS_PER_INCH);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| Error::Render(e.to_string()))?;

        bitmap
            .as_image()
            .save(path)
            .map_err(|e| Error::Render(e.to_string()))?;

        Ok(())
    }
}

/// Map a backend color to a normalized triple, treating fully transparent
/// colors as absent.
fn visible_rgb(color: std::result::Result<PdfColor, PdfiumError>) -> Option<Rgb> {
    let color = color.ok()?;
    if color.alpha() == 0 {
        return None;
    }
    Some(Rgb::from_u8(color.red(), color.green(), color.blue()))
}

/// Pack 8-bit channels into a 24-bit `0xRRGGBB` integer.
fn pack_rgb(color: PdfColor) -> u32 {
    ((color.red() as u32) << 16) | ((color.green() as u32) << 8) | color.blue() as u32
}
