use proptest::prelude::*;
use sundialr::angles::{dial_angle, render_angle};
use sundialr::format::format_12h;
use sundialr::layout::place_labels;
use sundialr::times::TimeOfDay;
use sundialr::twilight::{TWILIGHT_MARGIN_MINUTES, first_light, last_light};

proptest! {
    /// The render transform is periodic in full turns of the dial.
    #[test]
    fn render_angle_is_periodic(a in -10_000.0..10_000.0f64) {
        prop_assert!((render_angle(a) - render_angle(a + 360.0)).abs() < 1e-8);
    }

    /// Whatever the caller offsets, the renderer always receives an angle in
    /// [0, 2π) - never negative, never a full turn or more.
    #[test]
    fn render_angle_lands_in_the_unit_circle(a in -10_000.0..10_000.0f64) {
        let r = render_angle(a);
        prop_assert!((0.0..std::f64::consts::TAU).contains(&r));
    }

    /// Every valid clock time maps onto the dial at 15° per hour plus a
    /// quarter degree per minute, exactly.
    #[test]
    fn dial_angle_matches_the_quarter_degree_rule(h in 0..24i32, m in 0..60i32) {
        let s = format!("{h:02}:{m:02}");
        prop_assert_eq!(dial_angle(&s), h as f64 * 15.0 + m as f64 / 4.0);
    }

    /// Re-adding the twilight margin (mod 24h) returns exactly to sunrise.
    #[test]
    fn first_light_round_trips(h in 0..24i32, m in 0..60i32) {
        let fl = first_light(TimeOfDay { hour: h, minute: m });
        let back = (fl.hour * 60 + fl.minute + TWILIGHT_MARGIN_MINUTES).rem_euclid(24 * 60);
        prop_assert_eq!(back, h * 60 + m);
    }

    /// Last light always lands the full margin after sunset, in minutes.
    #[test]
    fn last_light_adds_the_full_margin(h in 0..24i32, m in 0..60i32) {
        let ll = last_light(TimeOfDay { hour: h, minute: m });
        prop_assert_eq!(ll.hour * 60 + ll.minute - (h * 60 + m), TWILIGHT_MARGIN_MINUTES);
    }

    /// Slot assignment is total over the whole dial and pairs always come
    /// from the branch table, independent of the other event's angle.
    #[test]
    fn label_placement_is_total_and_paired(
        sunrise in 0.0..360.0f64,
        sunset in 0.0..360.0f64,
    ) {
        let p = place_labels(sunrise, sunset);
        prop_assert!(matches!((p.sunrise, p.first_light), (2, 3) | (1, 2) | (0, 1)));
        prop_assert!(matches!((p.sunset, p.last_light), (4, 5) | (5, 6) | (6, 7) | (7, 8)));
    }

    /// The 12-hour formatter keeps the minute field and picks the meridiem
    /// from the 24-hour value.
    #[test]
    fn formatter_keeps_minutes_and_meridiem(h in 0..24i32, m in 0..60i32) {
        let out = format_12h(&format!("{h:02}:{m:02}"));
        prop_assert!(out.ends_with(if h >= 12 { "PM" } else { "AM" }), "meridiem mismatch");
        prop_assert!(out.contains(&format!(":{m:02} ")), "minute field missing");
    }
}
