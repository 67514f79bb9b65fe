//! # pdf2ocr
//!
//! Convert a PDF document into a structure usable by downstream OCR/text
//! pipelines: per-page embedded text, plus a low-resolution JPEG snapshot for
//! every page that lacks sufficient text of its own.
//!
//! ## Why this crate?
//!
//! Running OCR on every page of every document is wasteful — most pages in
//! typical PDFs already carry a machine-readable text layer. This crate
//! applies a cheap two-pass policy: extract text from all pages first, then
//! rasterise only the pages whose trimmed text falls below a fixed 100-
//! character threshold. The caller feeds the rendered pages to whatever OCR
//! engine it likes; this crate never performs OCR itself.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    validate the local file path
//!  ├─ 2. Pass 1   extract the embedded text layer of every page (pdfium)
//!  ├─ 3. Classify trimmed text < 100 chars ⇒ render-required
//!  ├─ 4. Pass 2   rasterise only the sparse pages at 0.75× scale
//!  ├─ 5. Encode   JPEG (quality 60) → base64 data URI
//!  └─ 6. Output   one JSON document: pageTexts, ocrPages, pageCount
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! fn main() -> Result<(), pdf2ocr::Pdf2OcrError> {
//!     let output = pdf2ocr::scan("document.pdf")?;
//!     println!("{} pages, {} need OCR", output.page_count, output.ocr_pages.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2ocr` binary (clap + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2ocr = { version = "0.1", default-features = false }
//! ```
//!
//! A pdfium shared library must be loadable at runtime; see
//! [`pipeline::engine`] for the resolution order.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod error;
pub mod output;
pub mod pipeline;
pub mod policy;
pub mod scan;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use error::Pdf2OcrError;
pub use output::{OcrPage, ScanOutput};
pub use scan::{scan, scan_bytes};
