//! Timezone-safe calendar date value type.
//!
//! `CalendarDate` is an immutable (year, month, day) value with integer-based
//! comparison and arithmetic. Instants never enter the picture after
//! construction, so daylight-saving transitions cannot shift a date or
//! produce off-by-one day counts. The only timezone-aware operations are the
//! constructors that project "now" (or an arbitrary instant) into a named
//! IANA zone's civil date.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DateRuleError, Result};

/// An immutable calendar date, ordered by (year, month, day).
///
/// Construction normalizes out-of-range components with rollover semantics:
/// month 13 carries into January of the next year, day 32 rolls into the
/// next month. This mirrors the behavior of the platform date primitive the
/// configuration originates from and is deliberately not validated away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

/// Normalize possibly out-of-range (year, month, day) components into a
/// concrete calendar day. Months carry into years first, then the day offset
/// is applied from the first of the resolved month, so day 0 and day 32 both
/// roll over the month boundary. Saturates at chrono's representable range.
fn normalize(year: i32, month: i32, day: i32) -> NaiveDate {
    let month0 = i64::from(month) - 1;
    let year = i64::from(year) + month0.div_euclid(12);
    let month = (month0.rem_euclid(12) + 1) as u32;

    let anchor = NaiveDate::from_ymd_opt(year as i32, month, 1)
        .unwrap_or(if year > 0 { NaiveDate::MAX } else { NaiveDate::MIN });
    anchor
        .checked_add_signed(Duration::days(i64::from(day) - 1))
        .unwrap_or(if day > 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Number of days in the given month, accounting for leap years.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(28, |last| last.day())
}

impl CalendarDate {
    /// Build a date from (year, month, day) components.
    ///
    /// Month is 1-based (1 = January). Out-of-range components roll over
    /// rather than erroring: `new(2025, 13, 1)` is January 2026 and
    /// `new(2025, 4, 31)` is May 1, 2025.
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self(normalize(year, month, day))
    }

    /// The current date in the system's local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// The current date in a named IANA timezone.
    ///
    /// Resolves "today" by projecting the current instant into the zone's
    /// civil date, which is DST-correct by construction (no offset
    /// arithmetic).
    ///
    /// # Errors
    /// Returns `DateRuleError::InvalidTimezone` if `timezone` is not a valid
    /// IANA identifier.
    pub fn today_in(timezone: &str) -> Result<Self> {
        Self::from_instant_in(Utc::now(), timezone)
    }

    /// Project an arbitrary instant into the system's local civil date.
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        Self(instant.with_timezone(&Local).date_naive())
    }

    /// Project an arbitrary instant into a named IANA timezone's civil date.
    ///
    /// # Errors
    /// Returns `DateRuleError::InvalidTimezone` if `timezone` is not a valid
    /// IANA identifier.
    pub fn from_instant_in(instant: DateTime<Utc>, timezone: &str) -> Result<Self> {
        let tz: chrono_tz::Tz = timezone
            .parse()
            .map_err(|_| DateRuleError::InvalidTimezone(timezone.to_string()))?;
        Ok(Self(instant.with_timezone(&tz).date_naive()))
    }

    /// Parse a strict `YYYY-MM-DD` string (4-2-2 zero-padded digit groups,
    /// hyphen-separated). Any other shape yields `None` — no partial
    /// parsing, no other separators.
    ///
    /// A shape-valid string with an out-of-range day ("2025-02-30") goes
    /// through the same rollover normalization as [`CalendarDate::new`].
    pub fn from_iso(input: &str) -> Option<Self> {
        let bytes = input.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let digits_at = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
        if !digits_at(0..4) || !digits_at(5..7) || !digits_at(8..10) {
            return None;
        }
        let year: i32 = input[0..4].parse().ok()?;
        let month: i32 = input[5..7].parse().ok()?;
        let day: i32 = input[8..10].parse().ok()?;
        Some(Self::new(year, month, day))
    }

    /// Canonical zero-padded `YYYY-MM-DD` form.
    pub fn to_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }

    /// The canonical key used for set and map membership. Identical to
    /// [`CalendarDate::to_iso`].
    pub fn to_key(self) -> String {
        self.to_iso()
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// 1 = January .. 12 = December.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Weekday as 0 = Sunday .. 6 = Saturday.
    pub fn weekday(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn is_same(self, other: CalendarDate) -> bool {
        self == other
    }

    /// Strictly earlier than `other`.
    pub fn is_before(self, other: CalendarDate) -> bool {
        self.0 < other.0
    }

    /// Strictly later than `other`.
    pub fn is_after(self, other: CalendarDate) -> bool {
        self.0 > other.0
    }

    /// Inclusive on both ends. Callers must pass `start <= end`; the
    /// reversed case is not swapped internally.
    pub fn is_between(self, start: CalendarDate, end: CalendarDate) -> bool {
        self.0 >= start.0 && self.0 <= end.0
    }

    /// Signed day count from `self` to `other`, positive when `other` is
    /// later. Computed by day-index subtraction, so DST transitions cannot
    /// introduce off-by-one errors.
    pub fn diff_days(self, other: CalendarDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Calendar-correct day arithmetic; wraps months and years.
    pub fn add_days(self, days: i64) -> Self {
        let shifted = self
            .0
            .checked_add_signed(Duration::days(days))
            .unwrap_or(if days > 0 { NaiveDate::MAX } else { NaiveDate::MIN });
        Self(shifted)
    }

    /// Add `months`, clamping to the last day of the target month when the
    /// current day-of-month does not exist there (Jan 31 + 1 month is
    /// Feb 28 or 29). Months outside [0, 11] carry into the year.
    pub fn add_months(self, months: i32) -> Self {
        let month0 = i64::from(self.month()) - 1 + i64::from(months);
        let year = (i64::from(self.year()) + month0.div_euclid(12)) as i32;
        let month = (month0.rem_euclid(12) + 1) as u32;
        let day = self.day().min(days_in_month(year, month));
        Self(normalize(year, month as i32, day as i32))
    }

    /// Add `years`, clamping Feb 29 to Feb 28 when the target year is not a
    /// leap year.
    pub fn add_years(self, years: i32) -> Self {
        let year = self.year() + years;
        let day = self.day().min(days_in_month(year, self.month()));
        Self(normalize(year, self.month() as i32, day as i32))
    }

    /// Day 1 of the same month.
    pub fn start_of_month(self) -> Self {
        Self(normalize(self.year(), self.month() as i32, 1))
    }

    /// Last valid day of the same month.
    pub fn end_of_month(self) -> Self {
        let last = days_in_month(self.year(), self.month());
        Self(normalize(self.year(), self.month() as i32, last as i32))
    }

    /// Render with a chrono strftime pattern, for display only. Comparison
    /// and storage always go through the canonical `YYYY-MM-DD` form.
    pub fn format(self, pattern: &str) -> String {
        self.0.format(pattern).to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso())
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        CalendarDate::from_iso(&raw).ok_or_else(|| {
            de::Error::custom(format!("invalid calendar date '{raw}', expected YYYY-MM-DD"))
        })
    }
}
