//! Text drawing on the raster canvas.
//!
//! The face is embedded at compile time so rendering never depends on a
//! runtime asset path. Centered placement is a plain free function over the
//! canvas; nothing extends the drawing surface itself.

use std::sync::OnceLock;

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use rusttype::{Font, Scale, point};

/// Embedded font data - DejaVu Sans (a clean, readable face).
const FONT_DATA: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();

/// The embedded font, parsed once. `None` only if the embedded bytes are
/// corrupt, in which case text drawing degrades to a no-op with a warning.
fn font() -> Option<&'static Font<'static>> {
    FONT.get_or_init(|| Font::try_from_bytes(FONT_DATA)).as_ref()
}

/// Advance width of `text` at `size`, in pixels.
pub fn text_width(text: &str, size: f32) -> f32 {
    let Some(font) = font() else { return 0.0 };
    let scale = Scale::uniform(size);
    font.layout(text, scale, point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

/// Draw `text` with its top-left corner at `(x, y)`.
pub fn draw_text(img: &mut RgbaImage, text: &str, x: i32, y: i32, size: f32, color: Rgba<u8>) {
    let Some(font) = font() else {
        log_warning!("Embedded font failed to load; skipping text {text:?}");
        return;
    };
    draw_text_mut(img, color, x, y, Scale::uniform(size), font, text);
}

/// Draw `text` horizontally centered on `cx`, top edge at `y`.
pub fn center_text(img: &mut RgbaImage, text: &str, cx: f32, y: i32, size: f32, color: Rgba<u8>) {
    let w = text_width(text, size);
    draw_text(img, text, (cx - w / 2.0).round() as i32, y, size, color);
}
