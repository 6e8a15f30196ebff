//! Sun/moon times record and wall-clock time parsing.
//!
//! The upstream data-acquisition collaborator hands us a JSON record of
//! clock-time strings for one location and date. This module owns that record
//! (`SunTimes`), the parsed wall-clock value (`TimeOfDay`), and the one-shot
//! normalization of the provider's "no event" moon sentinels.
//!
//! Parsing is strict: wrong field count, non-numeric components, or
//! out-of-range hour/minute are errors. The recovery policy (warn and fall
//! back to a safe default) lives with the callers in `angles` and `format`,
//! not here.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// The provider's "no event" marker for moonrise/moonset on days where the
/// moon never crosses the horizon.
pub const NO_EVENT_SENTINEL: &str = "-:-";

/// A wall-clock time of day.
///
/// Parsed values always satisfy `hour` in 0..=23 and `minute` in 0..=59.
/// Derived values (twilight offsets) are carried in the same type but are not
/// renormalized, so either field may leave its range near midnight; see
/// `twilight` for the boundary behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: i32,
    pub minute: i32,
}

impl TimeOfDay {
    /// Parse a colon-delimited clock string: `"HH:MM"` or `"HH:MM:SS[.mmm]"`.
    /// The seconds field, when present, is ignored.
    pub fn parse(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(':').collect();
        if fields.len() < 2 || fields.len() > 3 {
            bail!("expected HH:MM or HH:MM:SS, got {s:?}");
        }

        let hour: i32 = fields[0]
            .trim()
            .parse()
            .with_context(|| format!("non-numeric hour in {s:?}"))?;
        let minute: i32 = fields[1]
            .trim()
            .parse()
            .with_context(|| format!("non-numeric minute in {s:?}"))?;

        if !(0..24).contains(&hour) {
            bail!("hour {hour} out of range in {s:?}");
        }
        if !(0..60).contains(&minute) {
            bail!("minute {minute} out of range in {s:?}");
        }

        Ok(Self { hour, minute })
    }

    /// Position on the 24-hour dial in degrees: 0 = midnight, 180 = noon,
    /// 15° per hour.
    pub fn dial_angle(&self) -> f64 {
        self.hour as f64 * 15.0 + self.minute as f64 / 4.0
    }

    /// 24-hour clock string, minutes zero-padded. Out-of-range fields print
    /// as-is rather than wrapping.
    pub fn to_clock_string(&self) -> String {
        format!("{}:{:02}", self.hour, self.minute)
    }
}

/// The set of times relevant to one day at one location, as delivered by the
/// data-acquisition collaborator plus the two derived twilight fields this
/// crate writes back for the caller's own display.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SunTimes {
    /// Sunrise, `"HH:MM"`.
    pub sunrise: String,
    /// Sunset, `"HH:MM"`.
    pub sunset: String,
    /// Moonrise, `"HH:MM"` or the `"-:-"` no-event sentinel.
    #[serde(default)]
    pub moonrise: String,
    /// Moonset, `"HH:MM"` or the `"-:-"` no-event sentinel.
    #[serde(default)]
    pub moonset: String,
    /// Current time at the location, `"HH:MM:SS.mmm"`; only HH:MM is used.
    pub current_time: String,
    /// First light, derived by `twilight` and written back here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_light: Option<String>,
    /// Last light, derived by `twilight` and written back here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_light: Option<String>,
}

impl SunTimes {
    /// Replace the moon no-event sentinels with midnight bounds.
    ///
    /// Applied once, before any angle or label logic touches the record: a
    /// missing moonrise becomes the start of the day (`0:0`), a missing
    /// moonset the end (`23:59`). Moon times are not rendered today, but the
    /// record must be safe for every downstream consumer.
    pub fn normalize(&mut self) {
        if self.moonrise == NO_EVENT_SENTINEL {
            self.moonrise = "0:0".to_string();
        }
        if self.moonset == NO_EVENT_SENTINEL {
            self.moonset = "23:59".to_string();
        }
    }

    /// True when the record cannot produce an image at all: the fatal
    /// "no image available" path. Everything short of this renders with
    /// degraded accuracy instead.
    pub fn is_empty(&self) -> bool {
        self.sunrise.trim().is_empty() || self.sunset.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_hour_minute() {
        assert_eq!(
            TimeOfDay::parse("06:30").unwrap(),
            TimeOfDay { hour: 6, minute: 30 }
        );
        assert_eq!(
            TimeOfDay::parse("0:0").unwrap(),
            TimeOfDay { hour: 0, minute: 0 }
        );
        assert_eq!(
            TimeOfDay::parse("23:59").unwrap(),
            TimeOfDay { hour: 23, minute: 59 }
        );
    }

    #[test]
    fn ignores_trailing_seconds() {
        let t = TimeOfDay::parse("05:44:18.123").unwrap();
        assert_eq!(t, TimeOfDay { hour: 5, minute: 44 });
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(TimeOfDay::parse("25:00").is_err());
        assert!(TimeOfDay::parse("12:60").is_err());
        assert!(TimeOfDay::parse("abc").is_err());
        assert!(TimeOfDay::parse("12").is_err());
        assert!(TimeOfDay::parse("1:2:3:4").is_err());
        assert!(TimeOfDay::parse("-1:30").is_err());
    }

    #[test]
    fn moon_sentinels_normalize_to_midnight_bounds() {
        let mut times = SunTimes {
            sunrise: "06:10".into(),
            sunset: "20:02".into(),
            moonrise: "-:-".into(),
            moonset: "-:-".into(),
            current_time: "12:00:00.000".into(),
            first_light: None,
            last_light: None,
        };
        times.normalize();
        assert_eq!(times.moonrise, "0:0");
        assert_eq!(times.moonset, "23:59");

        // Normalized values must be parseable so every downstream angle
        // computation can touch them.
        assert!(TimeOfDay::parse(&times.moonrise).is_ok());
        assert!(TimeOfDay::parse(&times.moonset).is_ok());
    }

    #[test]
    fn normalize_leaves_real_moon_times_alone() {
        let mut times = SunTimes {
            sunrise: "06:10".into(),
            sunset: "20:02".into(),
            moonrise: "14:21".into(),
            moonset: "03:47".into(),
            current_time: "12:00:00.000".into(),
            first_light: None,
            last_light: None,
        };
        times.normalize();
        assert_eq!(times.moonrise, "14:21");
        assert_eq!(times.moonset, "03:47");
    }

    #[test]
    fn record_round_trips_through_json() {
        let json = r#"{
            "sunrise": "05:10",
            "sunset": "20:25",
            "moonrise": "-:-",
            "moonset": "22:14",
            "current_time": "13:52:09.418"
        }"#;
        let times: SunTimes = serde_json::from_str(json).unwrap();
        assert_eq!(times.sunrise, "05:10");
        assert_eq!(times.moonrise, "-:-");
        assert!(times.first_light.is_none());

        let back = serde_json::to_string(&times).unwrap();
        // Unset derived fields stay off the wire.
        assert!(!back.contains("first_light"));
    }

    #[test]
    fn empty_record_is_fatal() {
        let times = SunTimes {
            sunrise: "".into(),
            sunset: "20:02".into(),
            moonrise: String::new(),
            moonset: String::new(),
            current_time: "12:00:00.000".into(),
            first_light: None,
            last_light: None,
        };
        assert!(times.is_empty());
    }
}
