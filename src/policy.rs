//! The fixed page-classification and rendering policy.
//!
//! These values are deliberately not user-configurable: downstream pipelines
//! depend on byte-for-byte output parity between deployments, so the threshold
//! and render constants must be identical everywhere. Changing any of them is
//! a breaking change to the output contract.

/// Minimum number of characters of trimmed embedded text for a page to be
/// considered text-sufficient. Below this, the page is rendered for OCR.
///
/// Characters are Unicode scalar values, not bytes: a page of 99 accented
/// characters is render-required even though it spans more than 99 bytes.
pub const MIN_TEXT_CHARS: usize = 100;

/// Scale factor applied to a page's native point dimensions when rasterising.
///
/// 0.75 keeps images small enough to embed dozens per JSON document while
/// remaining legible to OCR engines.
pub const RENDER_SCALE: f32 = 0.75;

/// JPEG quality for rendered pages (1–100).
pub const JPEG_QUALITY: u8 = 60;

/// Classify one page: does its trimmed text layer fall below the threshold?
///
/// Expects text that is already whitespace-trimmed (pass 1 stores trimmed
/// text). A page with exactly [`MIN_TEXT_CHARS`] characters is
/// text-sufficient.
pub fn needs_ocr(trimmed_text: &str) -> bool {
    trimmed_text.chars().count() < MIN_TEXT_CHARS
}

/// Indices of all pages requiring OCR, ascending.
pub fn ocr_candidates(page_texts: &[String]) -> Vec<usize> {
    page_texts
        .iter()
        .enumerate()
        .filter(|(_, text)| needs_ocr(text))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary() {
        assert!(needs_ocr(&"a".repeat(99)));
        assert!(!needs_ocr(&"a".repeat(100)));
        assert!(!needs_ocr(&"a".repeat(101)));
    }

    #[test]
    fn empty_page_needs_ocr() {
        assert!(needs_ocr(""));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 99 two-byte characters: 198 bytes but only 99 chars.
        assert!(needs_ocr(&"é".repeat(99)));
        assert!(!needs_ocr(&"é".repeat(100)));
    }

    #[test]
    fn internal_whitespace_counts_toward_threshold() {
        // Trimming is leading/trailing only; embedded runs of spaces from a
        // poorly-tagged PDF still count.
        let text = format!("a{}b", " ".repeat(98));
        assert_eq!(text.chars().count(), 100);
        assert!(!needs_ocr(&text));
    }

    #[test]
    fn candidates_are_ascending_indices() {
        let texts = vec![
            "a".repeat(500),
            "tiny".to_string(),
            String::new(),
            "b".repeat(100),
        ];
        assert_eq!(ocr_candidates(&texts), vec![1, 2]);
    }

    #[test]
    fn no_pages_no_candidates() {
        assert!(ocr_candidates(&[]).is_empty());
    }
}
