//! Error types for the deckscan library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deckscan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while analyzing or sampling a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when creating directories or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source document could not be located or decoded.
    #[error("cannot open document {}: {reason}", path.display())]
    DocumentOpen {
        /// Path that was passed to the backend.
        path: PathBuf,
        /// Reason reported by the PDF backend.
        reason: String,
    },

    /// The document contains no pages.
    #[error("document has no pages")]
    EmptyDocument,

    /// Page index is out of range.
    #[error("page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// The PDF backend library could not be loaded.
    #[error("PDF backend unavailable: {0}")]
    Backend(String),

    /// A page could not be rasterized or encoded to an image.
    #[error("render error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyDocument;
        assert_eq!(err.to_string(), "document has no pages");

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "page 10 is out of range (document has 5 pages)"
        );

        let err = Error::DocumentOpen {
            path: PathBuf::from("missing.pdf"),
            reason: "file not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "cannot open document missing.pdf: file not found"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
