mod consts;
mod ordinal;
mod prelude;
mod range;
mod types;
mod weekday;

pub use consts::*;
pub use ordinal::{Ordinal, days_from_months, days_from_years, from_ordinal, to_ordinal};
pub use range::{DateRange, weekdays_between};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use weekday::{Weekday, weekday_of};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single day of the proleptic Gregorian calendar, `0001-01-01..=9999-12-31`.
///
/// Every value denotes a real day: the components are validated once at
/// construction and the type is immutable afterwards. The derived ordering is
/// chronological because the fields are compared year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{}-{}", year, month, day)]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Which side of the input boundary rejected a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text does not have the `YYYY-MM-DD` shape.
    Malformed,
    /// The shape is right but no such calendar day exists.
    InvalidDate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    Malformed(String),
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(u16),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    /// A day number outside every month, checked without a year or month.
    #[error("Invalid day: {0} (must be {min}-{max})", min = MIN_DAY, max = MAX_DAY)]
    DayOutOfRange(u8),
    #[error("Empty date string")]
    EmptyInput,
}

impl DateError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Malformed(_) | Self::EmptyInput => ErrorKind::Malformed,
            Self::InvalidYear(_)
            | Self::InvalidMonth(_)
            | Self::InvalidDay { .. }
            | Self::DayOutOfRange(_) => ErrorKind::InvalidDate,
        }
    }
}

impl CalendarDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay` when the
    /// triple does not name a real day (month 13, Feb 30, day 0, ...).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from components that are already validated against each other.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` was validated against a different month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Days since the epoch, with 0001-01-01 as ordinal 1.
    pub fn ordinal(&self) -> Ordinal {
        to_ordinal(*self)
    }

    pub fn weekday(&self) -> Weekday {
        weekday_of(self.ordinal())
    }

    /// Inverse of [`CalendarDate::ordinal`].
    pub fn from_ordinal(ordinal: Ordinal) -> Option<Self> {
        from_ordinal(ordinal)
    }

    /// The following calendar day, or `None` after 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        let (year, month, day) = next_day(self.year, self.month, self.day())?;
        Self::new(year, month, day).ok()
    }

    /// The preceding calendar day, or `None` before 0001-01-01.
    pub fn pred(&self) -> Option<Self> {
        let (year, month, day) = prev_day(self.year(), self.month(), self.day())?;
        Self::new(year, month, day).ok()
    }
}

// --- calendar stepping helpers ---
const fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == DECEMBER {
        if year >= MAX_YEAR {
            None
        } else {
            Some((year + 1, JANUARY))
        }
    } else {
        Some((year, month + 1))
    }
}

const fn prev_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == JANUARY {
        if year <= MIN_YEAR {
            None
        } else {
            Some((year - 1, DECEMBER))
        }
    } else {
        Some((year, month - 1))
    }
}

fn next_day(year: Year, month: Month, day: u8) -> Option<(u16, u8, u8)> {
    if day < days_in_month(year, month) {
        Some((year.get(), month.get(), day + 1))
    } else {
        next_month(year.get(), month.get()).map(|(ny, nm)| (ny, nm, MIN_DAY))
    }
}

fn prev_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    if day > MIN_DAY {
        Some((year, month, day - 1))
    } else {
        let (py, pm) = prev_month(year, month)?;
        let length = days_in_month(Year::new(py).ok()?, Month::new(pm).ok()?);
        Some((py, pm, length))
    }
}

/// Parses exactly `YYYY-MM-DD`: zero-padded, ASCII digits, nothing else.
impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }
        let malformed = || DateError::Malformed(trimmed.to_owned());

        let mut parts = trimmed.split(DATE_SEPARATOR);
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let year = parse_field::<u16>(year, YEAR_DIGITS).ok_or_else(malformed)?;
        let month = parse_field::<u8>(month, MONTH_DAY_DIGITS).ok_or_else(malformed)?;
        let day = parse_field::<u8>(day, MONTH_DAY_DIGITS).ok_or_else(malformed)?;

        Self::new(year, month, day)
    }
}

fn parse_field<T: FromStr>(field: &str, width: usize) -> Option<T> {
    if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
