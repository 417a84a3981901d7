use crate::config::{MAX_TIMER_SECS, MIN_TIMER_SECS};
use chrono::{DateTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::num::IntErrorKind;

static NON_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Timer duration validation errors.
///
/// Both variants are the same user-facing failure (an invalid duration); the
/// distinction only changes the wording of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// Parsed fine but lies outside `[MIN_TIMER_SECS, MAX_TIMER_SECS]`,
    /// or has too many digits to parse at all.
    OutOfRange,
    /// Contains something other than decimal digits.
    NotANumber,
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationError::OutOfRange => write!(
                f,
                "Enter a value between {} and {} seconds",
                MIN_TIMER_SECS, MAX_TIMER_SECS
            ),
            DurationError::NotANumber => write!(
                f,
                "Enter a whole number of seconds between {} and {}",
                MIN_TIMER_SECS, MAX_TIMER_SECS
            ),
        }
    }
}

impl std::error::Error for DurationError {}

/// Drop every character that is not an ASCII decimal digit.
pub fn filter_digits(raw: &str) -> String {
    NON_DIGIT_REGEX.replace_all(raw, "").into_owned()
}

/// Parse timer input text into a number of seconds.
///
/// Empty text is not an error: it yields `Ok(None)` so the field can be
/// cleared while typing.
///
/// # Examples
/// ```
/// use digital_clock::utils::{parse_duration, DurationError};
/// assert_eq!(parse_duration("120"), Ok(Some(120)));
/// assert_eq!(parse_duration(""), Ok(None));
/// assert_eq!(parse_duration("0"), Err(DurationError::OutOfRange));
/// ```
pub fn parse_duration(text: &str) -> Result<Option<u32>, DurationError> {
    if text.is_empty() {
        return Ok(None);
    }

    let value = text.parse::<u64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => DurationError::OutOfRange,
        _ => DurationError::NotANumber,
    })?;

    if (MIN_TIMER_SECS as u64..=MAX_TIMER_SECS as u64).contains(&value) {
        Ok(Some(value as u32))
    } else {
        Err(DurationError::OutOfRange)
    }
}

/// 24-hour wall clock, `HH:MM:SS`.
pub fn format_clock<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    time.format("%H:%M:%S").to_string()
}

/// Long-form date, e.g. `Friday, October 16, 2026`.
pub fn format_long_date<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    time.format("%A, %B %-d, %Y").to_string()
}

/// Stopwatch reading as `MM:SS.CC`. Minutes widen past 99 instead of wrapping.
pub fn format_stopwatch(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let centis = (ms % 1_000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centis)
}

/// Countdown reading as `MM:SS`. There is no hours field.
pub fn format_timer(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_filter_digits() {
        assert_eq!(filter_digits("1a2b3"), "123");
        assert_eq!(filter_digits("-5"), "5");
        assert_eq!(filter_digits("abc"), "");
        assert_eq!(filter_digits("٣4"), "4");
    }

    #[test]
    fn test_parse_duration_bounds() {
        assert_eq!(parse_duration("1"), Ok(Some(1)));
        assert_eq!(parse_duration("86400"), Ok(Some(86_400)));
        assert_eq!(parse_duration("0"), Err(DurationError::OutOfRange));
        assert_eq!(parse_duration("86401"), Err(DurationError::OutOfRange));
        assert_eq!(parse_duration("007"), Ok(Some(7)));
    }

    #[test]
    fn test_parse_duration_overflow_is_out_of_range() {
        assert_eq!(
            parse_duration("99999999999999999999999"),
            Err(DurationError::OutOfRange)
        );
    }

    #[test]
    fn test_parse_duration_rejects_non_digits() {
        assert_eq!(parse_duration("12s"), Err(DurationError::NotANumber));
        assert_eq!(parse_duration("-3"), Err(DurationError::NotANumber));
    }

    #[test]
    fn test_error_messages_mention_bounds() {
        assert!(DurationError::OutOfRange
            .to_string()
            .contains("between 1 and 86400"));
        assert!(DurationError::NotANumber
            .to_string()
            .contains("between 1 and 86400"));
    }

    #[test]
    fn test_format_stopwatch() {
        assert_eq!(format_stopwatch(0), "00:00.00");
        assert_eq!(format_stopwatch(1_239), "00:01.23");
        assert_eq!(format_stopwatch(61_010), "01:01.01");
        assert_eq!(format_stopwatch(100 * 60_000 + 5_000), "100:05.00");
    }

    #[test]
    fn test_format_timer() {
        assert_eq!(format_timer(60), "01:00");
        assert_eq!(format_timer(0), "00:00");
        assert_eq!(format_timer(125), "02:05");
        assert_eq!(format_timer(86_400), "1440:00");
    }

    #[test]
    fn test_format_clock_and_date() {
        let t = Utc.with_ymd_and_hms(2026, 10, 16, 7, 5, 9).unwrap();
        assert_eq!(format_clock(&t), "07:05:09");
        assert_eq!(format_long_date(&t), "Friday, October 16, 2026");

        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let t = offset.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).unwrap();
        assert_eq!(format_clock(&t), "23:59:59");
        assert_eq!(format_long_date(&t), "Friday, March 1, 2024");
    }
}
