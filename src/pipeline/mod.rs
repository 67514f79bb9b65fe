//! Pipeline stages for the page classifier & renderer.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us swap an
//! implementation (e.g. a different rendering backend) without touching the
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ engine ──▶ extract ──▶ render ──▶ encode
//! (path)    (pdfium)   (pass 1)    (pass 2)   (JPEG/base64)
//! ```
//!
//! 1. [`input`]   — validate the user-supplied path refers to a readable file
//! 2. [`engine`]  — bind to the pdfium shared library
//! 3. [`extract`] — pass 1: pull the embedded text layer from every page
//! 4. [`render`]  — pass 2: rasterise the sparse pages at a fixed scale
//! 5. [`encode`]  — JPEG-encode and base64-wrap each bitmap as a data URI
//!
//! Pass 1 completes fully before pass 2 begins: the render decision for a page
//! needs that page's complete text, and pass 1 stays cheap precisely because
//! it never rasterises.

pub mod encode;
pub mod engine;
pub mod extract;
pub mod input;
pub mod render;
