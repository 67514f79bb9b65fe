//! Pdfium binding: locate and load the pdfium shared library.
//!
//! pdfium is a C++ library loaded at runtime; the binding can fail on a
//! machine with no pdfium installed, so it returns `Result` rather than
//! panicking. Resolution order:
//!
//! 1. `PDFIUM_LIB_PATH` — explicit path to the library file or its directory.
//! 2. The current working directory (development convenience: drop
//!    `libpdfium.so` next to the binary).
//! 3. The system library search path.

use crate::error::Pdf2OcrError;
use pdfium_render::prelude::*;
use tracing::debug;

/// Bind to a pdfium library and return the engine handle.
///
/// The returned [`Pdfium`] must outlive every document opened through it.
pub fn bind_pdfium() -> Result<Pdfium, Pdf2OcrError> {
    if let Ok(lib_path) = std::env::var("PDFIUM_LIB_PATH") {
        debug!("Binding pdfium from PDFIUM_LIB_PATH={lib_path}");
        return Pdfium::bind_to_library(&lib_path)
            .or_else(|_| {
                // Allow the env var to name the containing directory too.
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&lib_path))
            })
            .map(Pdfium::new)
            .map_err(|e| Pdf2OcrError::PdfiumBindingFailed(format!("{e:?}")));
    }

    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|e| Pdf2OcrError::PdfiumBindingFailed(format!("{e:?}")))
}
