//! Image encoding: `DynamicImage` → JPEG → base64 data URI.
//!
//! JPEG at quality 60 keeps each rendered page to a few tens of kilobytes, so
//! a whole scanned document fits comfortably in one JSON document. The data
//! URI form lets downstream OCR consumers pass the image straight into
//! multimodal APIs without touching the filesystem.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use tracing::debug;

use crate::policy;

/// Prefix of every encoded page image.
pub const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Encode a rasterised page as a `data:image/jpeg;base64,` URI.
pub fn jpeg_data_uri(img: &DynamicImage) -> Result<String, image::ImageError> {
    // pdfium bitmaps carry an alpha channel; JPEG has none.
    let rgb = img.to_rgb8();

    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, policy::JPEG_QUALITY);
    encoder.encode_image(&rgb)?;

    let b64 = STANDARD.encode(&buf);
    debug!("Encoded {}x{} page → {} bytes base64", rgb.width(), rgb.height(), b64.len());

    Ok(format!("{DATA_URI_PREFIX}{b64}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn sample_image() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255])))
    }

    #[test]
    fn encodes_as_jpeg_data_uri() {
        let uri = jpeg_data_uri(&sample_image()).expect("encode should succeed");
        assert!(uri.starts_with(DATA_URI_PREFIX), "got: {uri:.50}");

        let b64 = &uri[DATA_URI_PREFIX.len()..];
        assert!(b64
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));

        let bytes = STANDARD.decode(b64).expect("valid base64");
        // JPEG start-of-image marker.
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn encoded_image_decodes_with_original_dimensions() {
        let uri = jpeg_data_uri(&sample_image()).unwrap();
        let bytes = STANDARD.decode(&uri[DATA_URI_PREFIX.len()..]).unwrap();
        let decoded = image::load_from_memory(&bytes).expect("decodable JPEG");
        assert_eq!((decoded.width(), decoded.height()), (10, 10));
    }

    #[test]
    fn encoding_is_deterministic() {
        let a = jpeg_data_uri(&sample_image()).unwrap();
        let b = jpeg_data_uri(&sample_image()).unwrap();
        assert_eq!(a, b);
    }
}
