//! Shared constants for dial geometry, palette, and defaults.
//!
//! Every tunable the renderer and layout logic share lives here. The label
//! slot coordinates and angle thresholds were tuned against the drawn dial
//! geometry; treat them as a set.

use image::Rgba;

// # Canvas geometry

/// Output canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 1920;

/// Output canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 1080;

/// Vertical offset of the dial center below true canvas center, leaving room
/// for the title line at the top.
pub const CENTER_Y_OFFSET: f32 = 40.0;

/// Dial center point in canvas space.
pub const DIAL_CENTER: (f32, f32) = (
    CANVAS_WIDTH as f32 / 2.0,
    CANVAS_HEIGHT as f32 / 2.0 + CENTER_Y_OFFSET,
);

/// Radius of the dial circle; the day/twilight arcs are centered on it.
pub const DIAL_RADIUS: f32 = 380.0;

/// Stroke width of the day and twilight arcs.
pub const ARC_WIDTH: f32 = 70.0;

/// Stroke width of the base dial circle.
pub const DIAL_STROKE_WIDTH: f32 = 3.0;

/// Minor tick marks: radial extent and line width. Ticks sit outside the arc
/// annulus so the day arc never covers them.
pub const TICK_MINOR_INNER: f32 = 424.0;
pub const TICK_MINOR_OUTER: f32 = 444.0;
pub const TICK_MINOR_WIDTH: f32 = 3.0;

/// Major tick marks at the four cardinal hours.
pub const TICK_MAJOR_INNER: f32 = 420.0;
pub const TICK_MAJOR_OUTER: f32 = 452.0;
pub const TICK_MAJOR_WIDTH: f32 = 6.0;

/// Radial extent of the sunrise/sunset/twilight event markers, spanning the
/// arc annulus.
pub const EVENT_MARK_INNER: f32 = 339.0;
pub const EVENT_MARK_OUTER: f32 = 421.0;
pub const EVENT_MARK_WIDTH: f32 = 4.0;

/// Sun marker disc radii: background clearing disc, marker disc, inner
/// time-of-day disc. The clearing disc erases the arc underneath so the
/// marker never shows an anti-aliasing seam at the arc boundary.
pub const SUN_CLEAR_RADIUS: i32 = 44;
pub const SUN_MARKER_RADIUS: i32 = 38;
pub const SUN_INNER_RADIUS: i32 = 31;

// # Twilight

/// Angular width of the twilight band before sunrise / after sunset.
/// 24 dial degrees is exactly 96 minutes at 15°/hour; `twilight` derives the
/// clock times with the same margin expressed in minutes.
pub const TWILIGHT_MARGIN_DEG: f64 = 24.0;

// # Text layout

/// Title baseline: top edge of the title text.
pub const TITLE_Y: i32 = 22;
pub const TITLE_SCALE: f32 = 46.0;

/// Cardinal hour label anchors (text center for the horizontal axis, top edge
/// for the vertical), at fixed offsets from the dial edge.
pub const CARDINAL_NOON: (f32, i32) = (DIAL_CENTER.0, 88);
pub const CARDINAL_MIDNIGHT: (f32, i32) = (DIAL_CENTER.0, 1040);
pub const CARDINAL_6AM: (f32, i32) = (DIAL_CENTER.0 - DIAL_RADIUS - 118.0, 566);
pub const CARDINAL_6PM: (f32, i32) = (DIAL_CENTER.0 + DIAL_RADIUS + 118.0, 566);
pub const CARDINAL_SCALE: f32 = 30.0;

/// The nine label slots: anchor points (text-center x, first-line top y).
/// Slots 0-3 form the left column (AM side, top to bottom), slots 4-8 the
/// right column (PM side, with slot 8 reserved for very late sunsets).
pub const LABEL_SLOTS: [(f32, i32); 9] = [
    (250.0, 270),
    (250.0, 430),
    (250.0, 590),
    (250.0, 750),
    (1670.0, 240),
    (1670.0, 390),
    (1670.0, 540),
    (1670.0, 690),
    (1670.0, 840),
];

/// Category line and time line of a placed label share one slot, stacked.
pub const LABEL_SCALE: f32 = 32.0;
pub const LABEL_LINE_SPACING: i32 = 40;

pub const TIMESTAMP_SCALE: f32 = 22.0;
pub const TIMESTAMP_MARGIN: i32 = 24;

// # Palette

pub const BACKGROUND: Rgba<u8> = Rgba([18, 22, 28, 255]);
pub const DIAL_STROKE: Rgba<u8> = Rgba([80, 90, 110, 255]);
pub const TICK_MINOR_COLOR: Rgba<u8> = Rgba([80, 90, 110, 255]);
pub const TICK_MAJOR_COLOR: Rgba<u8> = Rgba([160, 165, 175, 255]);
pub const DAY_ARC_COLOR: Rgba<u8> = Rgba([255, 179, 71, 255]);
pub const TWILIGHT_ARC_COLOR: Rgba<u8> = Rgba([90, 110, 170, 255]);
pub const EVENT_MARK_COLOR: Rgba<u8> = Rgba([245, 240, 235, 255]);
pub const SUN_RING_COLOR: Rgba<u8> = Rgba([245, 240, 235, 255]);
pub const SUN_DAY_COLOR: Rgba<u8> = Rgba([255, 199, 44, 255]);
pub const SUN_NIGHT_COLOR: Rgba<u8> = Rgba([108, 112, 134, 255]);
pub const TEXT_PRIMARY: Rgba<u8> = Rgba([245, 240, 235, 255]);
pub const TEXT_SECONDARY: Rgba<u8> = Rgba([160, 165, 175, 255]);

// # Defaults

/// Default JPEG encode quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Default output path for the rendered image.
pub const DEFAULT_OUTPUT_PATH: &str = "sundial.jpg";

/// Display name used when the configuration does not provide one.
pub const DEFAULT_LOCATION: &str = "Unknown location";
