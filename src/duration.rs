//! Minutes/seconds input handling and `m:ss` formatting.

/// Largest value accepted for either the minutes or the seconds field.
pub const MAX_FIELD: i64 = 59;

/// Largest combined duration a request may ask for (59:59).
pub const MAX_TOTAL_SECONDS: u32 = 59 * 60 + 59;

/// A minutes/seconds pair as entered by the user, before clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinSec {
    pub minutes: i64,
    pub seconds: i64,
}

impl MinSec {
    pub fn new(minutes: i64, seconds: i64) -> Self {
        Self { minutes, seconds }
    }

    /// Build from raw text fields. Each field reads its leading integer, so
    /// `"4.5"` is 4 and `"12abc"` is 12; text without leading digits is 0.
    pub fn from_fields(minutes: &str, seconds: &str) -> Self {
        Self {
            minutes: parse_field(minutes),
            seconds: parse_field(seconds),
        }
    }

    /// Parse `"m:ss"`, `"m"` or an empty string.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((m, s)) => Self::from_fields(m, s),
            None => Self::from_fields(raw, ""),
        }
    }

    /// Seconds after clamping each field to `[0, 59]` independently.
    pub fn clamped_seconds(&self) -> u32 {
        let m = self.minutes.clamp(0, MAX_FIELD) as u32;
        let s = self.seconds.clamp(0, MAX_FIELD) as u32;
        m * 60 + s
    }
}

fn parse_field(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let value = rest[..digits_len]
        .bytes()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));

    if negative { -value } else { value }
}

/// Render seconds as `m:ss`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Split a total into whole minutes and the remaining seconds.
pub fn split_min_sec(seconds: u32) -> (u32, u32) {
    (seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_each_field_independently() {
        assert_eq!(MinSec::new(75, 10).clamped_seconds(), 59 * 60 + 10);
        assert_eq!(MinSec::new(3, 99).clamped_seconds(), 3 * 60 + 59);
        assert_eq!(MinSec::new(-4, -1).clamped_seconds(), 0);
    }

    #[test]
    fn test_non_numeric_fields_count_as_zero() {
        assert_eq!(MinSec::from_fields("ten", "30"), MinSec::new(0, 30));
        assert_eq!(MinSec::from_fields("", ""), MinSec::default());
        assert_eq!(MinSec::from_fields(" 4 ", "x"), MinSec::new(4, 0));
    }

    #[test]
    fn test_fields_read_leading_integer() {
        assert_eq!(MinSec::from_fields("4.5", "30"), MinSec::new(4, 30));
        assert_eq!(MinSec::from_fields("12abc", "7s"), MinSec::new(12, 7));
        assert_eq!(MinSec::from_fields(" 7 ", "+3"), MinSec::new(7, 3));
        assert_eq!(MinSec::from_fields("-2x", "--1"), MinSec::new(-2, 0));
        assert_eq!(MinSec::parse("4.5:30"), MinSec::new(4, 30));
        assert_eq!(MinSec::parse("4.5:30").clamped_seconds(), 270);
    }

    #[test]
    fn test_parse_colon_form() {
        assert_eq!(MinSec::parse("12:05"), MinSec::new(12, 5));
        assert_eq!(MinSec::parse("7"), MinSec::new(7, 0));
        assert_eq!(MinSec::parse(":45"), MinSec::new(0, 45));
        assert_eq!(MinSec::parse("abc"), MinSec::default());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(MAX_TOTAL_SECONDS), "59:59");
    }

    #[test]
    fn test_every_valid_pair_stays_in_range() {
        for m in -2..=62 {
            for s in -2..=62 {
                let secs = MinSec::new(m, s).clamped_seconds();
                assert!(secs <= MAX_TOTAL_SECONDS);
            }
        }
    }
}
