//! Raster canvas primitives.
//!
//! Drawing state is explicit: instead of a stateful translate/rotate/save/
//! restore stack, a [`Transform`] value is built where it is needed and passed
//! to the draw call, so there is no hidden context to mismatch.
//!
//! The arc primitive uses HTML-canvas angle semantics: it sweeps clockwise
//! from `start` by `(end - start) mod 2π`. Callers pass render angles through
//! unchanged, including pairs where `start > end` after normalization.

use std::f32::consts::TAU;

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// A 2D affine transform, canvas-convention column order:
/// `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Transform {
    /// Pure translation to `(tx, ty)`.
    pub fn translation(tx: f32, ty: f32) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: tx,
            f: ty,
        }
    }

    /// Compose a clockwise rotation (y-down canvas) after this transform.
    pub fn rotate(self, theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: -self.a * sin + self.c * cos,
            d: -self.b * sin + self.d * cos,
            e: self.e,
            f: self.f,
        }
    }

    /// Map a local point into canvas space.
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }
}

/// Allocate the fixed-size canvas. Pixels start zeroed; the render sequence
/// always begins with [`fill_background`].
pub fn new_canvas() -> RgbaImage {
    RgbaImage::new(CANVAS_WIDTH, CANVAS_HEIGHT)
}

/// Flood the whole canvas with one color via direct buffer writes.
///
/// At 1920×1080 a per-pixel generic fill dominates the render cost; writing
/// the raw RGBA buffer in 4-byte strides is the fast path with the same
/// visual result.
pub fn fill_background(img: &mut RgbaImage, color: Rgba<u8>) {
    for px in img.chunks_exact_mut(4) {
        px.copy_from_slice(&color.0);
    }
}

/// Stroke a circular arc of the given stroke `width` centered on `radius`.
///
/// Sweeps clockwise from `start` to `end` (radians, +x axis zero). When the
/// normalized sweep is zero nothing is drawn; a full circle is
/// [`stroke_circle`]'s job.
pub fn stroke_arc(
    img: &mut RgbaImage,
    center: (f32, f32),
    radius: f32,
    width: f32,
    start: f32,
    end: f32,
    color: Rgba<u8>,
) {
    let sweep = (end - start).rem_euclid(TAU);
    if sweep <= 0.0 {
        return;
    }
    annulus_scan(img, center, radius, width, color, |theta| {
        (theta - start).rem_euclid(TAU) <= sweep
    });
}

/// Stroke a full circle of the given stroke `width` centered on `radius`.
pub fn stroke_circle(
    img: &mut RgbaImage,
    center: (f32, f32),
    radius: f32,
    width: f32,
    color: Rgba<u8>,
) {
    annulus_scan(img, center, radius, width, color, |_| true);
}

/// Scan the bounding box of the annulus `radius ± width/2` and color every
/// pixel whose center falls inside it and whose polar angle passes `keep`.
fn annulus_scan<F>(
    img: &mut RgbaImage,
    center: (f32, f32),
    radius: f32,
    width: f32,
    color: Rgba<u8>,
    keep: F,
) where
    F: Fn(f32) -> bool,
{
    let half = width / 2.0;
    let r_out = radius + half;
    let r_in = (radius - half).max(0.0);

    let x0 = (center.0 - r_out).floor().max(0.0) as u32;
    let y0 = (center.1 - r_out).floor().max(0.0) as u32;
    let x1 = ((center.0 + r_out).ceil() as u32).min(img.width().saturating_sub(1));
    let y1 = ((center.1 + r_out).ceil() as u32).min(img.height().saturating_sub(1));

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - center.0;
            let dy = y as f32 + 0.5 - center.1;
            let r = (dx * dx + dy * dy).sqrt();
            if r < r_in || r > r_out {
                continue;
            }
            let theta = dy.atan2(dx).rem_euclid(TAU);
            if keep(theta) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill a disc. Thin wrapper so render code works in f32 canvas coordinates.
pub fn fill_disc(img: &mut RgbaImage, center: (f32, f32), radius: i32, color: Rgba<u8>) {
    draw_filled_circle_mut(
        img,
        (center.0.round() as i32, center.1.round() as i32),
        radius,
        color,
    );
}

/// Stroke a line segment with the given width.
///
/// Hairlines go straight to the segment primitive; wider strokes stamp discs
/// along the segment, which rounds the caps; fine for tick marks.
pub fn stroke_line(
    img: &mut RgbaImage,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Rgba<u8>,
) {
    if width <= 1.5 {
        draw_line_segment_mut(img, from, to, color);
        return;
    }
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let len = (dx * dx + dy * dy).sqrt();
    let steps = len.ceil().max(1.0) as u32;
    let r = (width / 2.0).round().max(1.0) as i32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        fill_disc(img, (from.0 + dx * t, from.1 + dy * t), r, color);
    }
}
