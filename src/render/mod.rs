//! Dial rendering.
//!
//! Draws the sun-clock infographic in one fixed sequence: background, title,
//! tick marks, dial circle, cardinal labels, day arc, twilight arcs, event
//! markers, sun marker, placed labels, generation stamp. Every angle that
//! reaches a draw call has passed through [`crate::angles::render_angle`];
//! the renderer itself performs no input validation: an upstream parse
//! failure arrives here as angle 0 and draws like any other angle.

pub mod canvas;
pub mod text;

use anyhow::{Result, bail};
use chrono::Local;
use image::RgbaImage;

use crate::angles::{dial_angle, render_angle};
use crate::constants::*;
use crate::format;
use crate::layout::{self, LabelPlacement};
use crate::times::{SunTimes, TimeOfDay};
use crate::twilight;
use canvas::Transform;

/// Render the dial for one times record.
///
/// Fills `times.first_light` / `times.last_light` in as a side effect so the
/// caller can display the derived values. The only failure is a record with
/// no sunrise/sunset at all ("no image available"); malformed individual
/// fields degrade to angle 0 with logged warnings and the render proceeds.
pub fn render(times: &mut SunTimes, location: &str, date_label: &str) -> Result<RgbaImage> {
    if times.is_empty() {
        bail!("no image available: times record has no sunrise/sunset");
    }

    // Twilight derivation first; written back for the caller's own display.
    let sunrise = parse_or_midnight(&times.sunrise, "sunrise");
    let sunset = parse_or_midnight(&times.sunset, "sunset");
    let first_light = twilight::first_light(sunrise);
    let last_light = twilight::last_light(sunset);
    times.first_light = Some(first_light.to_clock_string());
    times.last_light = Some(last_light.to_clock_string());

    // All dial angles up front; label placement depends on nothing else.
    let sunrise_angle = dial_angle(&times.sunrise);
    let sunset_angle = dial_angle(&times.sunset);
    let current_angle = dial_angle(&times.current_time);
    let placement = layout::place_labels(sunrise_angle, sunset_angle);

    let mut img = canvas::new_canvas();
    canvas::fill_background(&mut img, BACKGROUND);
    draw_title(&mut img, location, date_label);
    draw_ticks(&mut img);
    canvas::stroke_circle(&mut img, DIAL_CENTER, DIAL_RADIUS, DIAL_STROKE_WIDTH, DIAL_STROKE);
    draw_cardinal_labels(&mut img);
    draw_day_and_twilight(&mut img, sunrise_angle, sunset_angle);
    draw_event_marks(&mut img, sunrise_angle, sunset_angle);
    draw_sun_marker(&mut img, current_angle, sunrise_angle, sunset_angle);
    draw_labels(&mut img, times, first_light, last_light, placement);
    draw_timestamp(&mut img);

    Ok(img)
}

fn parse_or_midnight(time: &str, what: &str) -> TimeOfDay {
    match TimeOfDay::parse(time) {
        Ok(t) => t,
        Err(err) => {
            log_warning!("Unparseable {what} {time:?}: {err:#}. Using midnight");
            TimeOfDay { hour: 0, minute: 0 }
        }
    }
}

fn draw_title(img: &mut RgbaImage, location: &str, date_label: &str) {
    let title = format!("Sun times for {location} on {date_label}");
    text::center_text(img, &title, DIAL_CENTER.0, TITLE_Y, TITLE_SCALE, TEXT_PRIMARY);
}

/// Minor ticks every 15° (one per hour, 24 of them), then major ticks over
/// the four cardinal hours, each a radial segment rotated around the dial
/// center.
fn draw_ticks(img: &mut RgbaImage) {
    for hour in 0..24 {
        let theta = render_angle(hour as f64 * 15.0) as f32;
        let t = Transform::translation(DIAL_CENTER.0, DIAL_CENTER.1).rotate(theta);
        canvas::stroke_line(
            img,
            t.apply(TICK_MINOR_INNER, 0.0),
            t.apply(TICK_MINOR_OUTER, 0.0),
            TICK_MINOR_WIDTH,
            TICK_MINOR_COLOR,
        );
    }
    for quarter in 0..4 {
        let theta = render_angle(quarter as f64 * 90.0) as f32;
        let t = Transform::translation(DIAL_CENTER.0, DIAL_CENTER.1).rotate(theta);
        canvas::stroke_line(
            img,
            t.apply(TICK_MAJOR_INNER, 0.0),
            t.apply(TICK_MAJOR_OUTER, 0.0),
            TICK_MAJOR_WIDTH,
            TICK_MAJOR_COLOR,
        );
    }
}

fn draw_cardinal_labels(img: &mut RgbaImage) {
    text::center_text(img, "12 PM", CARDINAL_NOON.0, CARDINAL_NOON.1, CARDINAL_SCALE, TEXT_SECONDARY);
    text::center_text(
        img,
        "12 AM",
        CARDINAL_MIDNIGHT.0,
        CARDINAL_MIDNIGHT.1,
        CARDINAL_SCALE,
        TEXT_SECONDARY,
    );
    text::center_text(img, "6 AM", CARDINAL_6AM.0, CARDINAL_6AM.1, CARDINAL_SCALE, TEXT_SECONDARY);
    text::center_text(img, "6 PM", CARDINAL_6PM.0, CARDINAL_6PM.1, CARDINAL_SCALE, TEXT_SECONDARY);
}

/// Daytime arc from sunrise to sunset, flanked by the two twilight arcs.
fn draw_day_and_twilight(img: &mut RgbaImage, sunrise_angle: f64, sunset_angle: f64) {
    canvas::stroke_arc(
        img,
        DIAL_CENTER,
        DIAL_RADIUS,
        ARC_WIDTH,
        render_angle(sunrise_angle) as f32,
        render_angle(sunset_angle) as f32,
        DAY_ARC_COLOR,
    );
    canvas::stroke_arc(
        img,
        DIAL_CENTER,
        DIAL_RADIUS,
        ARC_WIDTH,
        render_angle(sunrise_angle - TWILIGHT_MARGIN_DEG) as f32,
        render_angle(sunrise_angle) as f32,
        TWILIGHT_ARC_COLOR,
    );
    canvas::stroke_arc(
        img,
        DIAL_CENTER,
        DIAL_RADIUS,
        ARC_WIDTH,
        render_angle(sunset_angle) as f32,
        render_angle(sunset_angle + TWILIGHT_MARGIN_DEG) as f32,
        TWILIGHT_ARC_COLOR,
    );
}

/// Radial markers at the four event boundaries, spanning the arc annulus.
fn draw_event_marks(img: &mut RgbaImage, sunrise_angle: f64, sunset_angle: f64) {
    for dial in [
        sunrise_angle,
        sunrise_angle - TWILIGHT_MARGIN_DEG,
        sunset_angle,
        sunset_angle + TWILIGHT_MARGIN_DEG,
    ] {
        let t = Transform::translation(DIAL_CENTER.0, DIAL_CENTER.1)
            .rotate(render_angle(dial) as f32);
        canvas::stroke_line(
            img,
            t.apply(EVENT_MARK_INNER, 0.0),
            t.apply(EVENT_MARK_OUTER, 0.0),
            EVENT_MARK_WIDTH,
            EVENT_MARK_COLOR,
        );
    }
}

/// Canvas position of the sun marker for a current-time dial angle.
fn sun_marker_position(current_angle: f64) -> (f32, f32) {
    Transform::translation(DIAL_CENTER.0, DIAL_CENTER.1)
        .rotate(render_angle(current_angle) as f32)
        .apply(DIAL_RADIUS, 0.0)
}

/// Current-time marker on the dial radius.
///
/// Three layers: a background-colored disc erases the arc underneath (no
/// anti-aliasing seam at the arc boundary), then the marker disc, then the
/// smaller time-of-day disc, brighter between sunrise and sunset, dimmer
/// otherwise.
fn draw_sun_marker(img: &mut RgbaImage, current_angle: f64, sunrise_angle: f64, sunset_angle: f64) {
    let pos = sun_marker_position(current_angle);
    let daytime = current_angle >= sunrise_angle && current_angle <= sunset_angle;

    canvas::fill_disc(img, pos, SUN_CLEAR_RADIUS, BACKGROUND);
    canvas::fill_disc(img, pos, SUN_MARKER_RADIUS, SUN_RING_COLOR);
    canvas::fill_disc(
        img,
        pos,
        SUN_INNER_RADIUS,
        if daytime { SUN_DAY_COLOR } else { SUN_NIGHT_COLOR },
    );
}

/// Category name plus formatted time, two lines per label, at the slots the
/// placement chose.
fn draw_labels(
    img: &mut RgbaImage,
    times: &SunTimes,
    first_light: TimeOfDay,
    last_light: TimeOfDay,
    placement: LabelPlacement,
) {
    let entries = [
        ("Sunrise", format::format_12h(&times.sunrise), placement.sunrise),
        ("First Light", format::format_time(first_light), placement.first_light),
        ("Sunset", format::format_12h(&times.sunset), placement.sunset),
        ("Last Light", format::format_time(last_light), placement.last_light),
    ];
    for (category, time, slot) in entries {
        let (x, y) = LABEL_SLOTS[slot];
        text::center_text(img, category, x, y, LABEL_SCALE, TEXT_PRIMARY);
        text::center_text(img, &time, x, y + LABEL_LINE_SPACING, LABEL_SCALE, TEXT_SECONDARY);
    }
}

fn draw_timestamp(img: &mut RgbaImage) {
    let stamp = Local::now().format("Generated %Y-%m-%d %H:%M").to_string();
    let w = text::text_width(&stamp, TIMESTAMP_SCALE);
    text::draw_text(
        img,
        &stamp,
        CANVAS_WIDTH as i32 - TIMESTAMP_MARGIN - w.ceil() as i32,
        CANVAS_HEIGHT as i32 - TIMESTAMP_MARGIN - TIMESTAMP_SCALE as i32,
        TIMESTAMP_SCALE,
        TEXT_SECONDARY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sunrise: &str, sunset: &str, current: &str) -> SunTimes {
        SunTimes {
            sunrise: sunrise.into(),
            sunset: sunset.into(),
            moonrise: "-:-".into(),
            moonset: "-:-".into(),
            current_time: current.into(),
            first_light: None,
            last_light: None,
        }
    }

    /// June at high latitude: early sunrise, late sunset, midday sun.
    #[test]
    fn june_scenario_renders_full_canvas() {
        let mut times = record("05:10", "20:25", "13:00:00.000");
        times.normalize();
        let img = render(&mut times, "Tromsø", "June 21, 2026").unwrap();

        assert_eq!(img.width(), CANVAS_WIDTH);
        assert_eq!(img.height(), CANVAS_HEIGHT);
        assert_eq!(
            img.as_raw().len(),
            (CANVAS_WIDTH * CANVAS_HEIGHT * 4) as usize
        );

        // The noon major tick runs straight up from the dial center between
        // radii 420 and 452; its midpoint must not be background.
        let x = DIAL_CENTER.0 as u32;
        let y = (DIAL_CENTER.1 - (TICK_MAJOR_INNER + TICK_MAJOR_OUTER) / 2.0) as u32;
        assert_eq!(*img.get_pixel(x, y), TICK_MAJOR_COLOR);

        // Derived twilight fields are written back onto the record.
        assert_eq!(times.first_light.as_deref(), Some("3:34"));
        assert_eq!(times.last_light.as_deref(), Some("21:61"));
    }

    #[test]
    fn june_sunrise_takes_the_pre_six_label_branch() {
        // 05:10 -> 77.5°, below 90: slots 2/3.
        let placement = layout::place_labels(dial_angle("05:10"), dial_angle("20:25"));
        assert_eq!(placement.sunrise, 2);
        assert_eq!(placement.first_light, 3);
        // 20:25 -> 306.25°, past 290: slots 7/8.
        assert_eq!(placement.sunset, 7);
        assert_eq!(placement.last_light, 8);
    }

    #[test]
    fn december_scenario_places_winter_slots() {
        // 07:05 -> 106.25°, inside (90, 114): slots 1/2. 16:20 -> 245°,
        // at most 246: slots 4/5.
        let placement = layout::place_labels(dial_angle("07:05"), dial_angle("16:20"));
        assert_eq!(placement.sunrise, 1);
        assert_eq!(placement.first_light, 2);
        assert_eq!(placement.sunset, 4);
        assert_eq!(placement.last_light, 5);

        let mut times = record("07:05", "16:20", "09:30:00.000");
        let img = render(&mut times, "Oslo", "December 21, 2026").unwrap();
        assert_eq!(img.width(), CANVAS_WIDTH);
        assert_eq!(img.height(), CANVAS_HEIGHT);
    }

    #[test]
    fn daytime_sun_marker_is_bright() {
        let mut times = record("05:10", "20:25", "13:00:00.000");
        let img = render(&mut times, "Test", "Today").unwrap();
        let (x, y) = sun_marker_position(dial_angle("13:00"));
        assert_eq!(*img.get_pixel(x.round() as u32, y.round() as u32), SUN_DAY_COLOR);
    }

    #[test]
    fn nighttime_sun_marker_is_dim() {
        let mut times = record("05:10", "20:25", "23:30:00.000");
        let img = render(&mut times, "Test", "Today").unwrap();
        let (x, y) = sun_marker_position(dial_angle("23:30"));
        assert_eq!(*img.get_pixel(x.round() as u32, y.round() as u32), SUN_NIGHT_COLOR);
    }

    #[test]
    fn empty_record_aborts_with_no_image() {
        let mut times = record("", "", "12:00:00.000");
        let err = render(&mut times, "Nowhere", "Today").unwrap_err();
        assert!(err.to_string().contains("no image available"));
    }

    #[test]
    fn malformed_sunrise_still_renders() {
        crate::logger::Log::set_enabled(false);
        let mut times = record("garbage", "20:25", "13:00:00.000");
        let img = render(&mut times, "Test", "Today").unwrap();
        crate::logger::Log::set_enabled(true);

        assert_eq!(img.width(), CANVAS_WIDTH);
        // Sunrise fell back to midnight; first light runs from there.
        assert_eq!(times.first_light.as_deref(), Some("-2:24"));
    }
}
