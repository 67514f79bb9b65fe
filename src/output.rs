//! Output types: the JSON document emitted on stdout.
//!
//! Field names follow the wire schema consumed by downstream OCR pipelines
//! (`pageTexts` / `ocrPages` / `pageCount`), hence the camelCase renames.
//! Struct field order is serialisation order, so keep `page_texts` first.

use serde::{Deserialize, Serialize};

/// The result document for one scanned PDF.
///
/// Invariants:
/// * `page_texts.len() == page_count`, in page order, each entry trimmed.
/// * `ocr_pages` is ascending by `index`; every index is a valid page index
///   whose trimmed text is below the [`crate::policy::MIN_TEXT_CHARS`]
///   threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutput {
    /// Trimmed embedded text of every page, in page order.
    pub page_texts: Vec<String>,
    /// Pages that need external OCR, with their rendered images.
    pub ocr_pages: Vec<OcrPage>,
    /// Total number of pages in the document.
    pub page_count: usize,
}

/// One page judged to lack sufficient embedded text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrPage {
    /// Zero-based page index into `pageTexts`.
    pub index: usize,
    /// `data:image/jpeg;base64,<b64>` URI of the rendered page.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn serialises_with_wire_field_names() {
        let output = ScanOutput {
            page_texts: vec!["hello".into(), String::new()],
            ocr_pages: vec![OcrPage {
                index: 1,
                image: "data:image/jpeg;base64,AAAA".into(),
            }],
            page_count: 2,
        };

        let value: Value = serde_json::to_value(&output).unwrap();
        assert_eq!(
            value,
            json!({
                "pageTexts": ["hello", ""],
                "ocrPages": [{"index": 1, "image": "data:image/jpeg;base64,AAAA"}],
                "pageCount": 2
            })
        );
    }

    #[test]
    fn field_order_is_page_texts_ocr_pages_page_count() {
        let output = ScanOutput {
            page_texts: vec![],
            ocr_pages: vec![],
            page_count: 0,
        };
        let json = serde_json::to_string(&output).unwrap();
        assert_eq!(json, r#"{"pageTexts":[],"ocrPages":[],"pageCount":0}"#);
    }

    #[test]
    fn round_trips_through_json() {
        let output = ScanOutput {
            page_texts: vec!["a".repeat(200)],
            ocr_pages: vec![],
            page_count: 1,
        };
        let json = serde_json::to_string(&output).unwrap();
        let back: ScanOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, output);
    }
}
