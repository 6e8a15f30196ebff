//! JPEG encoding of the rendered canvas.
//!
//! Sits outside the render pipeline proper: the renderer produces an RGBA
//! buffer, and this module is the opaque encode step between that buffer and
//! the bytes on disk. JPEG has no alpha channel, so the canvas is flattened
//! to RGB first (the background fill guarantees full coverage, so dropping
//! alpha loses nothing).

use anyhow::{Context, Result};
use image::RgbaImage;
use image::codecs::jpeg::JpegEncoder;

/// Encode the canvas as JPEG at the given quality (1-100).
pub fn encode_jpeg(img: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
    let mut rgb = Vec::with_capacity((img.width() * img.height() * 3) as usize);
    for px in img.pixels() {
        rgb.extend_from_slice(&px.0[..3]);
    }

    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality)
        .encode(&rgb, img.width(), img.height(), image::ColorType::Rgb8)
        .context("JPEG encoding failed")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn encodes_a_valid_jpeg_stream() {
        let img = RgbaImage::from_pixel(64, 48, Rgba([18, 22, 28, 255]));
        let bytes = encode_jpeg(&img, 90).unwrap();
        // JPEG SOI marker, and a payload behind it.
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        assert!(bytes.len() > 100);
    }

    #[test]
    fn decodes_back_to_the_same_dimensions() {
        let img = RgbaImage::from_pixel(32, 32, Rgba([200, 100, 50, 255]));
        let bytes = encode_jpeg(&img, 95).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 32);
        assert_eq!(decoded.height(), 32);
    }
}
