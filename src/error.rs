//! Error types for the pdf2ocr library.
//!
//! Every fault is fatal to the single invocation: there is no retry logic and
//! no partial output. [`Pdf2OcrError`] is returned as `Err` from [`crate::scan`]
//! and its `Display` string becomes the `{"error": "..."}` document the binary
//! writes to stdout. Keeping the enum at the library boundary (instead of
//! catching at the process level) leaves the core pure and testable.
//!
//! The `File not found:` wording is part of the stdout contract consumed by
//! orchestrating pipelines; do not reword it.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2ocr library.
#[derive(Debug, Error)]
pub enum Pdf2OcrError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The path does not refer to an existing regular file.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// pdfium rejected the document (corrupt header/xref, encrypted, etc.).
    #[error("Failed to open PDF '{}': {detail}", path.display())]
    OpenFailed { path: PathBuf, detail: String },

    /// pdfium could not produce a text page for a specific page.
    #[error("Text extraction failed for page {page}: {detail}")]
    TextExtractionFailed { page: usize, detail: String },

    /// pdfium returned an error while rasterising a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RasterisationFailed { page: usize, detail: String },

    /// The rendered bitmap could not be encoded as JPEG.
    #[error("Image encoding failed for page {page}: {detail}")]
    EncodingFailed { page: usize, detail: String },

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
Set PDFIUM_LIB_PATH=/path/to/libpdfium or install pdfium as a system library."
    )]
    PdfiumBindingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display_matches_contract() {
        let e = Pdf2OcrError::FileNotFound {
            path: PathBuf::from("/tmp/does-not-exist.pdf"),
        };
        assert_eq!(e.to_string(), "File not found: /tmp/does-not-exist.pdf");
    }

    #[test]
    fn rasterisation_display() {
        let e = Pdf2OcrError::RasterisationFailed {
            page: 3,
            detail: "PdfiumLibraryInternalError".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("page 3"), "got: {msg}");
        assert!(msg.contains("PdfiumLibraryInternalError"));
    }

    #[test]
    fn open_failed_display_includes_path_and_detail() {
        let e = Pdf2OcrError::OpenFailed {
            path: PathBuf::from("/tmp/broken.pdf"),
            detail: "UnknownFormat".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("/tmp/broken.pdf"));
        assert!(msg.contains("UnknownFormat"));
    }
}
