//! Pass 2: rasterise a page to a `DynamicImage` via pdfium.
//!
//! Rendering happens at a fixed 0.75× of the page's native point dimensions
//! ([`crate::policy::RENDER_SCALE`]). A fixed scale — rather than a pixel cap
//! or DPI — reproduces the output dimensions downstream OCR pipelines were
//! tuned against: a 612×792 pt US Letter page always becomes 459×594 px.

use crate::error::Pdf2OcrError;
use crate::policy;
use image::DynamicImage;
use pdfium_render::prelude::*;
use tracing::debug;

/// Rasterise one page at the fixed policy scale.
///
/// `index` is the zero-based page index, used only for error context.
pub fn render_page(page: &PdfPage<'_>, index: usize) -> Result<DynamicImage, Pdf2OcrError> {
    // Target width drives the render; pdfium scales height to match the
    // page's aspect ratio.
    let target_width = (page.width().value * policy::RENDER_SCALE).round() as i32;
    let render_config = PdfRenderConfig::new().set_target_width(target_width);

    let bitmap = page
        .render_with_config(&render_config)
        .map_err(|e| Pdf2OcrError::RasterisationFailed {
            page: index + 1,
            detail: format!("{e:?}"),
        })?;

    let image = bitmap.as_image();
    debug!(
        "Rendered page {} → {}x{} px",
        index + 1,
        image.width(),
        image.height()
    );

    Ok(image)
}
