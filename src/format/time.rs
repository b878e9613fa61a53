//! Temporal formatting: absolute dates, relative "time ago" phrases and
//! expiry predicates.

use chrono::format::{self as chrono_format, ParseResult, Parsed, StrftimeItems};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::clock::{Clock, SystemClock};
use crate::error::{FormatError, SENTINEL};
use crate::format::pattern::{self, DATE_TIME_PATTERN, DEFAULT_DATE_PATTERN, TIME_PATTERN};

pub const DEFAULT_EXPIRY_THRESHOLD_DAYS: i64 = 30;

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

// `%#z` takes `+HH:MM`, `+HHMM` and `+HH`.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%#z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A point in time as handed over by the backend: an ISO-8601 string, a
/// chrono value, or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateInput<'a> {
    Missing,
    Iso(&'a str),
    Instant(DateTime<Utc>),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(raw: &'a str) -> Self {
        DateInput::Iso(raw)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(raw: &'a String) -> Self {
        DateInput::Iso(raw.as_str())
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Instant(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Instant(value.and_utc())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<'_> {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::Instant(value.with_timezone(&Utc))
    }
}

impl<'a, T: Into<DateInput<'a>>> From<Option<T>> for DateInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateInput::Missing, Into::into)
    }
}

impl DateInput<'_> {
    /// Resolves the input to a UTC instant. `Ok(None)` means the value is
    /// absent (including an empty string).
    pub fn to_utc(&self) -> Result<Option<DateTime<Utc>>, FormatError> {
        match self {
            DateInput::Missing => Ok(None),
            DateInput::Iso(raw) if raw.trim().is_empty() => Ok(None),
            DateInput::Iso(raw) => parse_iso(raw).map(Some),
            DateInput::Instant(instant) => Ok(Some(*instant)),
        }
    }
}

/// Parses an ISO-8601 timestamp. Offsets are honoured; naive values are
/// taken as UTC wall time and a bare date is midnight.
pub fn parse_iso(raw: &str) -> Result<DateTime<Utc>, FormatError> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(raw, format) {
            return Ok(parsed.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed.and_utc());
        }
    }

    for format in ["%Y-%m-%d", "%Y%m%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
        }
    }

    parse_reduced(raw)
        .map(|parsed| parsed.and_utc())
        .ok_or_else(|| FormatError::InvalidTimestamp(raw.to_string()))
}

/// Reduced-precision forms chrono will not complete on its own: an hour
/// without minutes starts on the hour, a year-month starts on the first.
fn parse_reduced(raw: &str) -> Option<NaiveDateTime> {
    let forms: [(&str, fn(&mut Parsed) -> ParseResult<()>); 2] = [
        ("%Y-%m-%dT%H", |parsed| parsed.set_minute(0)),
        ("%Y-%m", |parsed| {
            parsed.set_day(1)?;
            parsed.set_hour(0)?;
            parsed.set_minute(0)
        }),
    ];

    forms.into_iter().find_map(|(format, complete)| {
        let mut parsed = Parsed::default();
        chrono_format::parse(&mut parsed, raw, StrftimeItems::new(format)).ok()?;
        complete(&mut parsed).ok()?;
        parsed.to_naive_datetime_with_offset(0).ok()
    })
}

fn resolve(value: DateInput<'_>) -> Option<DateTime<Utc>> {
    match value.to_utc() {
        Ok(instant) => instant,
        Err(err) => {
            tracing::debug!(error = %err, "falling back for unparseable timestamp");
            None
        }
    }
}

fn render(value: DateInput<'_>, pattern: &str) -> String {
    let Some(instant) = resolve(value) else {
        return SENTINEL.to_string();
    };

    match pattern::to_strftime(pattern) {
        Ok(format) => instant.format(&format).to_string(),
        Err(err) => {
            tracing::debug!(error = %err, "falling back for unsupported date pattern");
            SENTINEL.to_string()
        }
    }
}

/// Renders a date with a date-fns style pattern, `MMM dd, yyyy` by default.
pub fn format_date<'a>(value: impl Into<DateInput<'a>>, pattern: Option<&str>) -> String {
    render(value.into(), pattern.unwrap_or(DEFAULT_DATE_PATTERN))
}

pub fn format_date_time<'a>(value: impl Into<DateInput<'a>>) -> String {
    render(value.into(), DATE_TIME_PATTERN)
}

pub fn format_time<'a>(value: impl Into<DateInput<'a>>) -> String {
    render(value.into(), TIME_PATTERN)
}

/// Human-relative distance to the current instant, e.g. `3 days ago` or
/// `in about 2 hours`.
pub fn format_time_ago<'a>(value: impl Into<DateInput<'a>>) -> String {
    format_time_ago_with(value, &SystemClock)
}

pub fn format_time_ago_with<'a>(value: impl Into<DateInput<'a>>, clock: &dyn Clock) -> String {
    let Some(instant) = resolve(value.into()) else {
        return SENTINEL.to_string();
    };

    let now = clock.now();
    let phrase = distance_phrase(instant, now);

    if instant > now {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn distance_phrase(a: DateTime<Utc>, b: DateTime<Utc>) -> String {
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
    let seconds = (later - earlier).num_seconds();
    let minutes = rounded_div(seconds, 60);

    match minutes {
        0 => "less than a minute".to_string(),
        1 => "1 minute".to_string(),
        m if m < 45 => format!("{m} minutes"),
        m if m < 90 => "about 1 hour".to_string(),
        m if m < MINUTES_IN_DAY => format!("about {} hours", rounded_div(m, 60)),
        m if m < MINUTES_IN_ALMOST_TWO_DAYS => "1 day".to_string(),
        m if m < MINUTES_IN_MONTH => format!("{} days", rounded_div(m, MINUTES_IN_DAY)),
        m if m < MINUTES_IN_TWO_MONTHS => {
            plural("about ", rounded_div(m, MINUTES_IN_MONTH), "month")
        }
        m => {
            let months = whole_months_between(earlier, later);
            if months < 12 {
                return plural("", rounded_div(m, MINUTES_IN_MONTH), "month");
            }

            let years = months / 12;
            match months % 12 {
                0..=2 => plural("about ", years, "year"),
                3..=8 => plural("over ", years, "year"),
                _ => plural("almost ", years + 1, "year"),
            }
        }
    }
}

fn plural(prefix: &str, count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{prefix}1 {unit}")
    } else {
        format!("{prefix}{count} {unit}s")
    }
}

fn rounded_div(value: i64, divisor: i64) -> i64 {
    (value as f64 / divisor as f64).round() as i64
}

/// Full calendar months from `earlier` to `later`.
fn whole_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month()) - i64::from(earlier.month());

    let later_offset = (later.day(), later.num_seconds_from_midnight());
    let earlier_offset = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && later_offset < earlier_offset {
        months -= 1;
    }

    months
}

/// True when the date lies between now and `threshold_days` whole days ahead,
/// inclusive at both ends. Past dates are expired, not expiring.
pub fn is_date_expiring<'a>(value: impl Into<DateInput<'a>>, threshold_days: i64) -> bool {
    is_date_expiring_with(value, threshold_days, &SystemClock)
}

pub fn is_date_expiring_with<'a>(
    value: impl Into<DateInput<'a>>,
    threshold_days: i64,
    clock: &dyn Clock,
) -> bool {
    let Some(instant) = resolve(value.into()) else {
        return false;
    };

    let days_remaining = (instant - clock.now()).num_days();
    (0..=threshold_days).contains(&days_remaining)
}

pub fn is_date_expired<'a>(value: impl Into<DateInput<'a>>) -> bool {
    is_date_expired_with(value, &SystemClock)
}

pub fn is_date_expired_with<'a>(value: impl Into<DateInput<'a>>, clock: &dyn Clock) -> bool {
    resolve(value.into()).is_some_and(|instant| instant < clock.now())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset};

    use super::*;
    use crate::clock::FixedClock;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock(now())
    }

    fn ago(delta: Duration) -> String {
        format_time_ago_with(now() - delta, &clock())
    }

    #[test]
    fn missing_values_render_sentinel() {
        assert_eq!(format_date(DateInput::Missing, None), "N/A");
        assert_eq!(format_date(None::<&str>, None), "N/A");
        assert_eq!(format_date("", None), "N/A");
        assert_eq!(format_date_time(None::<&str>), "N/A");
        assert_eq!(format_time(DateInput::Missing), "N/A");
        assert_eq!(format_time_ago(DateInput::Missing), "N/A");
    }

    #[test]
    fn unparseable_values_render_sentinel() {
        assert_eq!(format_date("next tuesday", None), "N/A");
        assert_eq!(format_date("2025-13-45", None), "N/A");
    }

    #[test]
    fn formats_iso_strings_with_default_pattern() {
        assert_eq!(format_date("2025-06-10", None), "Jun 10, 2025");
        assert_eq!(format_date("2025-06-02T14:30:00", None), "Jun 02, 2025");
    }

    #[test]
    fn accepts_basic_offsets() {
        assert_eq!(format_date_time("2025-06-02T14:30:00+0200"), "Jun 02, 2025 12:30 PM");
        assert_eq!(format_date_time("2025-06-02T14:30:00+02"), "Jun 02, 2025 12:30 PM");
        assert_eq!(format_date_time("2025-06-02T14:30:00-05:00"), "Jun 02, 2025 7:30 PM");
    }

    #[test]
    fn accepts_basic_and_reduced_dates() {
        assert_eq!(format_date("20250602", None), "Jun 02, 2025");
        assert_eq!(format_date_time("2025-06-02T14"), "Jun 02, 2025 2:00 PM");
        assert_eq!(format_date("2025-06", None), "Jun 01, 2025");
        assert_eq!(format_date("2025-13", None), "N/A");
    }

    #[test]
    fn formats_with_custom_pattern() {
        assert_eq!(
            format_date("2025-06-02T14:30:00", Some("yyyy-MM-dd HH:mm")),
            "2025-06-02 14:30"
        );
        assert_eq!(format_date("2025-01-05", Some("EEEE, MMMM d")), "Sunday, January 5");
    }

    #[test]
    fn unsupported_pattern_renders_sentinel() {
        assert_eq!(format_date("2025-06-10", Some("yyyy QQQ")), "N/A");
    }

    #[test]
    fn formats_date_time_and_time() {
        assert_eq!(format_date_time("2025-06-02T14:30:00"), "Jun 02, 2025 2:30 PM");
        assert_eq!(format_time("2025-06-03T09:05:00"), "9:05 AM");
        assert_eq!(format_time("2025-06-03T00:15:00"), "12:15 AM");
    }

    #[test]
    fn offsets_are_normalised_to_utc() {
        assert_eq!(format_time("2025-06-02T14:30:00+02:00"), "12:30 PM");
        assert_eq!(format_time("2025-06-02T14:30:00Z"), "2:30 PM");
    }

    #[test]
    fn accepts_chrono_values() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(format_date(date, None), "Feb 29, 2024");

        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2024, 2, 29, 22, 0, 0).unwrap();
        assert_eq!(format_date_time(local), "Mar 01, 2024 3:00 AM");
        assert_eq!(format_date(Some(now()), None), "Jun 01, 2025");
    }

    #[test]
    fn time_ago_buckets() {
        assert_eq!(ago(Duration::seconds(0)), "less than a minute ago");
        assert_eq!(ago(Duration::seconds(20)), "less than a minute ago");
        assert_eq!(ago(Duration::seconds(50)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::minutes(50)), "about 1 hour ago");
        assert_eq!(ago(Duration::hours(5)), "about 5 hours ago");
        assert_eq!(ago(Duration::hours(30)), "1 day ago");
        assert_eq!(ago(Duration::days(3)), "3 days ago");
        assert_eq!(ago(Duration::days(35)), "about 1 month ago");
        assert_eq!(ago(Duration::days(50)), "about 2 months ago");
        assert_eq!(ago(Duration::days(100)), "3 months ago");
        assert_eq!(ago(Duration::days(370)), "about 1 year ago");
        assert_eq!(ago(Duration::days(365 + 180)), "over 1 year ago");
        assert_eq!(ago(Duration::days(365 + 320)), "almost 2 years ago");
    }

    #[test]
    fn future_dates_read_as_in() {
        let later = now() + Duration::days(3);
        assert_eq!(format_time_ago_with(later, &clock()), "in 3 days");
    }

    #[test]
    fn expiring_window_is_inclusive() {
        let clock = clock();
        assert!(is_date_expiring_with(now() + Duration::days(30), 30, &clock));
        assert!(!is_date_expiring_with(now() + Duration::days(31), 30, &clock));
        assert!(!is_date_expiring_with(now() - Duration::days(1), 30, &clock));
        assert!(is_date_expiring_with(now(), 30, &clock));
        assert!(is_date_expiring_with(now() + Duration::days(7), 7, &clock));
    }

    #[test]
    fn expiring_accepts_iso_strings() {
        let clock = clock();
        assert!(is_date_expiring_with("2025-06-20", DEFAULT_EXPIRY_THRESHOLD_DAYS, &clock));
        assert!(!is_date_expiring_with("2025-09-01", DEFAULT_EXPIRY_THRESHOLD_DAYS, &clock));
        assert!(!is_date_expiring_with("garbage", DEFAULT_EXPIRY_THRESHOLD_DAYS, &clock));
        assert!(!is_date_expiring_with(None::<&str>, DEFAULT_EXPIRY_THRESHOLD_DAYS, &clock));
    }

    #[test]
    fn expired_is_strictly_before_now() {
        let clock = clock();
        assert!(is_date_expired_with(now() - Duration::seconds(1), &clock));
        assert!(!is_date_expired_with(now(), &clock));
        assert!(!is_date_expired_with(now() + Duration::days(1), &clock));
        assert!(is_date_expired_with("2025-05-31", &clock));
        assert!(!is_date_expired_with(DateInput::Missing, &clock));
    }

    #[test]
    fn months_between_respects_day_of_month() {
        let start = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 30, 0, 0, 0).unwrap();
        assert_eq!(whole_months_between(start, end), 1);

        let end = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
        assert_eq!(whole_months_between(start, end), 2);
    }
}
