//! Calendar value types.
//!
//! Dates and timestamps are plain value types (`Copy`, a few bytes) so
//! that entity records stay fixed-size and pool-friendly. Textual forms
//! follow the dataset: `YYYY/MM/DD` and `YYYY/MM/DD HH:MM:SS`, with
//! strict field widths.

use std::fmt;
use std::str::FromStr;

/// Errors from constructing or parsing calendar types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateError {
    /// A field is outside its valid range.
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The textual form does not match the expected layout.
    Malformed,
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { field } => write!(f, "date field out of range: {field}"),
            Self::Malformed => write!(f, "malformed date"),
        }
    }
}

impl std::error::Error for DateError {}

/// Parse a fixed-width decimal field, rejecting signs and blanks.
fn parse_fixed(s: &str, width: usize) -> Result<u32, DateError> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::Malformed);
    }
    s.parse().map_err(|_| DateError::Malformed)
}

/// A calendar date.
///
/// Years are restricted to 1..=9999 so the textual form always fits
/// four digits. Day-of-month validation is by range only (1..=31), as
/// in the source dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    /// Create a date from its fields, validating ranges.
    pub const fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if year < 1 || year > 9999 {
            return Err(DateError::OutOfRange { field: "year" });
        }
        if month < 1 || month > 12 {
            return Err(DateError::OutOfRange { field: "month" });
        }
        if day < 1 || day > 31 {
            return Err(DateError::OutOfRange { field: "day" });
        }
        Ok(Self { year, month, day })
    }

    /// The year (1..=9999).
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The month (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The day of the month (1..=31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Days since the civil epoch 1970-01-01 (negative before it).
    ///
    /// Uses the standard civil-calendar conversion, so differences are
    /// exact across month and year boundaries.
    pub fn day_number(&self) -> i64 {
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let mp = (i64::from(self.month) + 9) % 12;
        let doy = (153 * mp + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Signed number of days from `self` to `later`.
    pub fn days_until(&self, later: Date) -> i64 {
        later.day_number() - self.day_number()
    }

    /// Whole years from `self` to `reference` (an age computation).
    ///
    /// Zero or negative when `reference` precedes `self` by less than a
    /// year or more, respectively.
    pub fn years_until(&self, reference: Date) -> i32 {
        let mut years = i32::from(reference.year) - i32::from(self.year);
        if (reference.month, reference.day) < (self.month, self.day) {
            years -= 1;
        }
        years
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'/' || bytes[7] != b'/' {
            return Err(DateError::Malformed);
        }
        let year = parse_fixed(&s[0..4], 4)? as u16;
        let month = parse_fixed(&s[5..7], 2)? as u8;
        let day = parse_fixed(&s[8..10], 2)? as u8;
        Self::new(year, month, day)
    }
}

/// A time of day with second precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
}

impl Time {
    /// Create a time from its fields, validating ranges.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, DateError> {
        if hour > 23 {
            return Err(DateError::OutOfRange { field: "hour" });
        }
        if minute > 59 {
            return Err(DateError::OutOfRange { field: "minute" });
        }
        if second > 59 {
            return Err(DateError::OutOfRange { field: "second" });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// The hour (0..=23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// The minute (0..=59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The second (0..=59).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Seconds since midnight.
    pub fn seconds_of_day(&self) -> i64 {
        i64::from(self.hour) * 3600 + i64::from(self.minute) * 60 + i64::from(self.second)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for Time {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
            return Err(DateError::Malformed);
        }
        let hour = parse_fixed(&s[0..2], 2)? as u8;
        let minute = parse_fixed(&s[3..5], 2)? as u8;
        let second = parse_fixed(&s[6..8], 2)? as u8;
        Self::new(hour, minute, second)
    }
}

/// A calendar date with a time of day (`YYYY/MM/DD HH:MM:SS`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    /// The date component.
    pub date: Date,
    /// The time-of-day component.
    pub time: Time,
}

impl DateTime {
    /// Create a timestamp from its two components.
    pub fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Seconds since the civil epoch 1970-01-01 00:00:00.
    pub fn second_number(&self) -> i64 {
        self.date.day_number() * 86_400 + self.time.seconds_of_day()
    }

    /// Signed number of seconds from `self` to `later`.
    pub fn seconds_until(&self, later: DateTime) -> i64 {
        later.second_number() - self.second_number()
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

impl FromStr for DateTime {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 19 || bytes[10] != b' ' {
            return Err(DateError::Malformed);
        }
        Ok(Self {
            date: s[0..10].parse()?,
            time: s[11..19].parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn date_round_trip() {
        let d = date("2023/10/01");
        assert_eq!((d.year(), d.month(), d.day()), (2023, 10, 1));
        assert_eq!(d.to_string(), "2023/10/01");
    }

    #[test]
    fn date_rejects_loose_formats() {
        assert!("2023-10-01".parse::<Date>().is_err());
        assert!("2023/1/01".parse::<Date>().is_err());
        assert!("2023/13/01".parse::<Date>().is_err());
        assert!("23/10/01".parse::<Date>().is_err());
    }

    #[test]
    fn day_number_epoch() {
        assert_eq!(date("1970/01/01").day_number(), 0);
        assert_eq!(date("1970/01/02").day_number(), 1);
    }

    #[test]
    fn days_until_crosses_months_and_leap_years() {
        assert_eq!(date("2023/01/31").days_until(date("2023/02/01")), 1);
        assert_eq!(date("2020/02/28").days_until(date("2020/03/01")), 2);
        assert_eq!(date("2021/02/28").days_until(date("2021/03/01")), 1);
    }

    #[test]
    fn age_respects_month_and_day() {
        let birth = date("2000/06/15");
        assert_eq!(birth.years_until(date("2023/06/14")), 22);
        assert_eq!(birth.years_until(date("2023/06/15")), 23);
        assert_eq!(birth.years_until(date("2023/10/01")), 23);
    }

    #[test]
    fn datetime_round_trip_and_diff() {
        let a: DateTime = "2023/10/01 08:00:00".parse().unwrap();
        let b: DateTime = "2023/10/01 08:30:15".parse().unwrap();
        assert_eq!(a.seconds_until(b), 30 * 60 + 15);
        assert_eq!(b.to_string(), "2023/10/01 08:30:15");
    }

    #[test]
    fn datetime_rejects_missing_separator() {
        assert!("2023/10/0108:00:00".parse::<DateTime>().is_err());
        assert!("2023/10/01 8:00:00".parse::<DateTime>().is_err());
    }

    #[test]
    fn time_bounds() {
        assert!("24:00:00".parse::<Time>().is_err());
        assert!("23:60:00".parse::<Time>().is_err());
        assert!("23:59:59".parse::<Time>().is_ok());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_date() -> impl Strategy<Value = Date> {
            (1u16..=9999, 1u8..=12, 1u8..=28)
                .prop_map(|(y, m, d)| Date::new(y, m, d).unwrap())
        }

        proptest! {
            #[test]
            fn day_number_agrees_with_ordering(a in arb_date(), b in arb_date()) {
                prop_assert_eq!(a.cmp(&b), a.day_number().cmp(&b.day_number()));
            }

            #[test]
            fn display_parse_round_trip(d in arb_date()) {
                prop_assert_eq!(d.to_string().parse::<Date>().unwrap(), d);
            }
        }
    }
}
