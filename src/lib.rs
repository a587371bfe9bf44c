//! # deckscan
//!
//! Design statistics and page sampling for PDF slide decks.
//!
//! The library walks a document through a PDFium-backed boundary and offers
//! two passes over it:
//!
//! - **Statistics**: frequency tallies of the colors and fonts used by
//!   visible text, plus the colors used by vector drawings.
//! - **Sampling**: a deterministic spread of pages (start, mid-deck cadence,
//!   end) rasterized to PNG files for quick visual review.
//!
//! ## Quick Start
//!
//! ```no_run
//! use deckscan::{analyze_file, stats::TOP_FONT_COUNT};
//!
//! fn main() -> deckscan::Result<()> {
//!     let stats = analyze_file("deck.pdf")?;
//!
//!     println!("{} pages, {}", stats.page_count, stats.page_size);
//!     for (font, count) in stats.top_fonts(TOP_FONT_COUNT) {
//!         println!("{font}: {count} occurrences");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod error;
pub mod model;
pub mod sample;
pub mod stats;

// Re-export commonly used types
pub use backend::{PdfiumBackend, PdfiumDocument, SlideSource};
pub use error::{Error, Result};
pub use model::{Drawing, PageSize, Rgb, TextSpan};
pub use sample::{page_filename, render_sample, sample_indices, RENDER_DPI};
pub use stats::{collect_stats, DesignStats, Tally, TOP_COLOR_COUNT, TOP_FONT_COUNT};

use std::path::{Path, PathBuf};

/// Collect design statistics for the document at `path`.
///
/// Binds the PDF backend, opens the document, and walks every page. The
/// document handle is released before this function returns, on both
/// success and failure paths.
///
/// # Example
///
/// ```no_run
/// let stats = deckscan::analyze_file("deck.pdf").unwrap();
/// println!("Total pages: {}", stats.page_count);
/// ```
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<DesignStats> {
    let backend = PdfiumBackend::new()?;
    let doc = backend.open(path.as_ref(), None)?;
    stats::collect_stats(&doc)
}

/// Render the sampled pages of the document at `path` into `out_dir`.
///
/// Returns the `(page index, file path)` pair for every PNG written. The
/// document handle is released before this function returns.
///
/// # Example
///
/// ```no_run
/// use deckscan::RENDER_DPI;
///
/// let saved = deckscan::sample_file("deck.pdf", "preview", RENDER_DPI).unwrap();
/// for (index, path) in saved {
///     println!("page {} -> {}", index + 1, path.display());
/// }
/// ```
pub fn sample_file<P, Q>(path: P, out_dir: Q, dpi: f32) -> Result<Vec<(u32, PathBuf)>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let backend = PdfiumBackend::new()?;
    let doc = backend.open(path.as_ref(), None)?;
    sample::render_sample(&doc, out_dir.as_ref(), dpi)
}
