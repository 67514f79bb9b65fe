//! Pass 1: extract the embedded text layer from every page.
//!
//! This pass must stay cheap — most pages in typical documents carry
//! extractable text, so they never reach the expensive rendering pass. No
//! rasterisation happens here.

use crate::error::Pdf2OcrError;
use pdfium_render::prelude::*;
use tracing::debug;

/// Extract the trimmed text layer of every page, in page order.
///
/// Trimming is leading/trailing Unicode whitespace only; internal whitespace
/// is preserved and counts toward the classification threshold.
pub fn extract_page_texts(document: &PdfDocument<'_>) -> Result<Vec<String>, Pdf2OcrError> {
    let pages = document.pages();
    let mut texts = Vec::with_capacity(pages.len() as usize);

    for (index, page) in pages.iter().enumerate() {
        let text_page = page
            .text()
            .map_err(|e| Pdf2OcrError::TextExtractionFailed {
                page: index + 1,
                detail: format!("{e:?}"),
            })?;

        let text = text_page.all().trim().to_string();
        debug!("Page {}: {} chars of embedded text", index + 1, text.chars().count());
        texts.push(text);
    }

    Ok(texts)
}
