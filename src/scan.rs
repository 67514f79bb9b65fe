//! The top-level scan operation: classify every page and render the sparse ones.
//!
//! ## Why two passes?
//!
//! The render decision for a page depends on that page's complete embedded
//! text, so pass 1 (text extraction, cheap) runs to completion over the whole
//! document before pass 2 (rasterisation, expensive) starts. Most pages in
//! typical documents carry enough text to skip rendering entirely.
//!
//! Everything is synchronous and strictly sequential. The `PdfDocument` is
//! exclusively owned by the single call to [`scan`]; page views borrow from it
//! and are released page by page, and the document itself is released at scope
//! exit on success and failure paths alike.

use crate::error::Pdf2OcrError;
use crate::output::{OcrPage, ScanOutput};
use crate::pipeline::{encode, engine, extract, input, render};
use crate::policy;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Scan a PDF file: extract per-page text and render OCR candidates.
///
/// # Arguments
/// * `input` — filesystem path to a PDF document
///
/// # Errors
/// Returns `Err(Pdf2OcrError)` on the first fault: bad path, pdfium binding
/// failure, unopenable document, or any per-page extraction/render/encode
/// failure. No partial output is ever produced.
pub fn scan(input: impl AsRef<Path>) -> Result<ScanOutput, Pdf2OcrError> {
    let path = input::resolve_input(input.as_ref())?;

    // Input validation precedes the pdfium binding so a missing file reports
    // `File not found` even on hosts with no pdfium library installed.
    let pdfium = engine::bind_pdfium()?;

    let document = pdfium
        .load_pdf_from_file(&path, None)
        .map_err(|e| Pdf2OcrError::OpenFailed {
            path: path.clone(),
            detail: format!("{e:?}"),
        })?;

    let page_texts = extract::extract_page_texts(&document)?;
    info!("PDF loaded: {} pages, text extracted", page_texts.len());

    let candidates = policy::ocr_candidates(&page_texts);
    debug!("{} of {} pages below text threshold", candidates.len(), page_texts.len());

    let pages = document.pages();
    let mut ocr_pages = Vec::with_capacity(candidates.len());

    for index in candidates {
        let page = pages
            .get(index as u16)
            .map_err(|e| Pdf2OcrError::RasterisationFailed {
                page: index + 1,
                detail: format!("{e:?}"),
            })?;

        let bitmap = render::render_page(&page, index)?;
        let image = encode::jpeg_data_uri(&bitmap).map_err(|e| Pdf2OcrError::EncodingFailed {
            page: index + 1,
            detail: e.to_string(),
        })?;

        ocr_pages.push(OcrPage { index, image });
    }

    info!(
        "Scan complete: {} pages, {} rendered for OCR",
        page_texts.len(),
        ocr_pages.len()
    );

    Ok(ScanOutput {
        page_count: page_texts.len(),
        page_texts,
        ocr_pages,
    })
}

/// Scan PDF bytes held in memory.
///
/// pdfium needs a filesystem path, so the bytes are spooled to a managed
/// [`tempfile`] that is removed automatically when this function returns.
/// Recommended when PDF data arrives from a database or an upload buffer
/// rather than a file on disk.
pub fn scan_bytes(bytes: &[u8]) -> Result<ScanOutput, Pdf2OcrError> {
    let mut tmp = tempfile::NamedTempFile::new()
        .map_err(|e| Pdf2OcrError::Internal(format!("tempfile: {e}")))?;
    tmp.write_all(bytes)
        .map_err(|e| Pdf2OcrError::Internal(format!("tempfile write: {e}")))?;

    // `tmp` is dropped (and the file deleted) when `scan` returns.
    scan(tmp.path())
}
