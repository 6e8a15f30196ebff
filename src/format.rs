//! 12-hour display formatting.
//!
//! Converts 24-hour clock values to the `"h:mm AM/PM"` strings drawn on the
//! dial. Consistent with the angle functions' fallback philosophy, an
//! unparseable input string produces an empty string and a logged warning
//! rather than aborting the render.

use crate::times::TimeOfDay;

/// Format an already-parsed time for display.
///
/// Hour 0 displays as 12; AM/PM follows whether the 24-hour value is >= 12.
/// Out-of-range fields from the twilight boundary cases print as-is.
pub fn format_time(time: TimeOfDay) -> String {
    let meridiem = if time.hour >= 12 { "PM" } else { "AM" };
    let hour = match time.hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}:{:02} {}", hour, time.minute, meridiem)
}

/// Parse and format a clock-time string for display.
///
/// Returns an empty string (and logs a warning) when the input cannot be
/// parsed; the dial then shows a category label with no time under it.
pub fn format_12h(time: &str) -> String {
    match TimeOfDay::parse(time) {
        Ok(t) => format_time(t),
        Err(err) => {
            log_warning!("Unparseable time {time:?}: {err:#}. Leaving label blank");
            String::new()
        }
    }
}
