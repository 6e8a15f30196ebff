//! Twilight window derivation.
//!
//! First light and last light sit a fixed 96 minutes (24 dial degrees) before
//! sunrise and after sunset. The arithmetic runs in hour/minute space rather
//! than angle space so the derived values feed the display formatter exactly
//! as computed.
//!
//! Neither function renormalizes its result: hours are not wrapped past 23 or
//! below 0, and the last-light minute field can exceed 59 for sunset minutes
//! in 24..36. The supported latitude band keeps sunrise and sunset far enough
//! from midnight that real inputs never reach those edges; pathological
//! inputs format as-is (e.g. an hour of "-1") rather than being silently
//! corrected.

use crate::times::TimeOfDay;

/// The twilight margin in minutes. Must stay in lockstep with
/// [`crate::constants::TWILIGHT_MARGIN_DEG`] (96 minutes = 24° at 15°/hour).
pub const TWILIGHT_MARGIN_MINUTES: i32 = 96;

/// First light: sunrise minus 96 minutes.
///
/// Two branches avoid a negative-minute intermediate: either borrow one hour
/// and take 36 minutes, or borrow two hours and give 24 back.
pub fn first_light(sunrise: TimeOfDay) -> TimeOfDay {
    if sunrise.minute >= 36 {
        TimeOfDay {
            hour: sunrise.hour - 1,
            minute: sunrise.minute - 36,
        }
    } else {
        TimeOfDay {
            hour: sunrise.hour - 2,
            minute: sunrise.minute + 24,
        }
    }
}

/// Last light: sunset plus 96 minutes, the mirrored two-branch rule.
///
/// Both branches add exactly 96 minutes; the minute field is left
/// unnormalized, matching the unwrapped hours.
pub fn last_light(sunset: TimeOfDay) -> TimeOfDay {
    if sunset.minute < 36 {
        TimeOfDay {
            hour: sunset.hour + 1,
            minute: sunset.minute + 36,
        }
    } else {
        TimeOfDay {
            hour: sunset.hour + 2,
            minute: sunset.minute - 24,
        }
    }
}
