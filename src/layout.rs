//! Label placement around the dial.
//!
//! Four labels (sunrise, first light, sunset, last light) compete for space
//! on an unbounded astronomical range: at high latitudes sunrise can land
//! anywhere from the bottom-left of the face to well past "6 AM". Rather than
//! solving collision avoidance generally, placement maps each pair onto the
//! nine fixed slots of [`crate::constants::LABEL_SLOTS`] by branching on the
//! event's dial angle.
//!
//! The thresholds (90, 90+24, 270−24, 270, 270+20) were tuned against the
//! drawn dial geometry. They are not derivable from it (the late-sunset
//! limit of 20° is narrower than the 24° twilight margin), so they are
//! preserved literally.

use crate::constants::TWILIGHT_MARGIN_DEG;

/// Chosen slot index (into `LABEL_SLOTS`) for each of the four labels.
///
/// Placement is a pure function of the sunrise and sunset dial angles; draw
/// order never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPlacement {
    pub sunrise: usize,
    pub first_light: usize,
    pub sunset: usize,
    pub last_light: usize,
}

/// Assign the four labels to slots.
///
/// `sunrise_angle` and `sunset_angle` are normalized dial angles. The sunrise
/// pair walks up the left column as sunrise gets later; the sunset pair walks
/// down the right column as sunset gets later, with slot 8 reserved for
/// midsummer sunsets past `270 + 20`.
pub fn place_labels(sunrise_angle: f64, sunset_angle: f64) -> LabelPlacement {
    let (sunrise, first_light) = if sunrise_angle <= 90.0 {
        // Sunrise before 6 AM: both labels in the pre-6AM region.
        (2, 3)
    } else if sunrise_angle < 90.0 + TWILIGHT_MARGIN_DEG {
        // Sunrise after 6 AM but first light before it.
        (1, 2)
    } else {
        // Late winter sunrise: whole pair above the 6 AM mark.
        (0, 1)
    };

    // Tuned narrower than the twilight margin on this side.
    const LATE_SUNSET_LIMIT_DEG: f64 = 20.0;

    let (sunset, last_light) = if sunset_angle <= 270.0 - TWILIGHT_MARGIN_DEG {
        (4, 5)
    } else if sunset_angle < 270.0 {
        (5, 6)
    } else if sunset_angle <= 270.0 + LATE_SUNSET_LIMIT_DEG {
        (6, 7)
    } else {
        (7, 8)
    };

    LabelPlacement {
        sunrise,
        first_light,
        sunset,
        last_light,
    }
}
