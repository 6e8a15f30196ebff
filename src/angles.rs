//! Time-to-angle conversions for the 24-hour dial.
//!
//! Two coordinate systems meet here. A **dial angle** is a position on the
//! clock face in degrees: 0 at midnight, 180 at noon, increasing clockwise at
//! 15° per hour. A **render angle** is what the drawing primitives consume:
//! radians measured from the +x axis, increasing clockwise on the y-down
//! canvas. Every dial angle handed to the renderer goes through
//! [`render_angle`]; there is no second transform anywhere else.

use crate::times::TimeOfDay;

/// Convert a clock-time string to its dial angle.
///
/// Malformed input (wrong field count, non-numeric, out-of-range fields) logs
/// a warning and falls back to angle 0 so the render continues with degraded
/// accuracy instead of aborting.
pub fn dial_angle(time: &str) -> f64 {
    match TimeOfDay::parse(time) {
        Ok(t) => t.dial_angle(),
        Err(err) => {
            log_warning!("Unparseable time {time:?}: {err:#}. Falling back to angle 0");
            0.0
        }
    }
}

/// Convert a dial angle to the rotation the drawing primitives use.
///
/// Dial zero (midnight) sits at the bottom of the face, 180 dial degrees from
/// the top; the primitives measure from the +x axis, 90 degrees clockwise of
/// "up". Callers routinely pass offset angles outside [0, 360), since the
/// twilight band around an early sunrise goes negative, so normalization must be a
/// true mathematical modulo, not a truncating remainder.
pub fn render_angle(dial_deg: f64) -> f64 {
    (dial_deg + 180.0 - 90.0).rem_euclid(360.0).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Log;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn cardinal_hours_map_to_quarter_angles() {
        assert!((dial_angle("00:00") - 0.0).abs() < EPS);
        assert!((dial_angle("06:00") - 90.0).abs() < EPS);
        assert!((dial_angle("12:00") - 180.0).abs() < EPS);
        assert!((dial_angle("18:00") - 270.0).abs() < EPS);
        assert!((dial_angle("23:59") - 359.75).abs() < EPS);
    }

    #[test]
    fn minutes_advance_a_quarter_degree() {
        assert!((dial_angle("00:01") - 0.25).abs() < EPS);
        assert!((dial_angle("05:10") - 77.5).abs() < EPS);
    }

    #[test]
    fn malformed_input_falls_back_to_zero() {
        Log::set_enabled(false);
        assert_eq!(dial_angle("25:00"), 0.0);
        assert_eq!(dial_angle("12:60"), 0.0);
        assert_eq!(dial_angle("abc"), 0.0);
        assert_eq!(dial_angle("12"), 0.0);
        Log::set_enabled(true);
    }

    #[test]
    fn render_angle_rotates_midnight_to_the_bottom() {
        // Midnight: straight down on the y-down canvas is +90° from the
        // +x axis.
        assert!((render_angle(0.0) - PI / 2.0).abs() < EPS);
        // Noon: straight up.
        assert!((render_angle(180.0) - 3.0 * PI / 2.0).abs() < EPS);
        // 6 AM: left.
        assert!((render_angle(90.0) - PI).abs() < EPS);
        // 6 PM: right.
        assert!((render_angle(270.0) - 0.0).abs() < EPS);
    }

    #[test]
    fn render_angle_normalizes_negative_offsets() {
        // A twilight offset below an early sunrise dips under zero; the
        // result must land in [0, 2π), never negative.
        let a = render_angle(-24.0);
        assert!((0.0..2.0 * PI).contains(&a));
        assert!((a - render_angle(336.0)).abs() < EPS);
    }

    #[test]
    fn render_angle_is_periodic_in_full_turns() {
        for deg in [-720.0, -359.9, 0.0, 77.5, 306.25, 359.75, 1000.0] {
            assert!((render_angle(deg) - render_angle(deg + 360.0)).abs() < 1e-6);
        }
    }
}
