//! Conversion between calendar dates and ordinals.
//!
//! The ordinal of a date is its position in the day sequence that starts
//! with 0001-01-01 = 1. Whole years are counted by block decomposition
//! (400, 100 and 4 year blocks) so no conversion iterates over years.

use crate::consts::{
    DAYS_PER_4_YEARS, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, DAYS_PER_YEAR, DECEMBER, JANUARY,
    MAX_ORDINAL, MIN_ORDINAL,
};
use crate::types::{Month, Year, days_in_month, is_leap_year};
use crate::CalendarDate;
use std::fmt;

/// A day count since the epoch, `MIN_ORDINAL..=MAX_ORDINAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ordinal(u32);

impl Ordinal {
    /// Returns `None` outside the ordinals of `0001-01-01..=9999-12-31`.
    pub fn new(value: u32) -> Option<Self> {
        (MIN_ORDINAL..=MAX_ORDINAL).contains(&value).then_some(Self(value))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<Ordinal> for u32 {
    fn from(ordinal: Ordinal) -> Self {
        ordinal.get()
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Days in all full years strictly before `year`.
pub fn days_from_years(year: Year) -> u32 {
    let mut remaining = u32::from(year.get()) - 1;

    let mut days = (remaining / 400) * DAYS_PER_400_YEARS;
    remaining %= 400;
    days += (remaining / 100) * DAYS_PER_100_YEARS;
    remaining %= 100;
    days += (remaining / 4) * DAYS_PER_4_YEARS;

    // 0..=3 leftover years, directly preceding `year`
    let leftover = (year.get() - 1) % 4;
    for y in (year.get() - leftover)..year.get() {
        days += DAYS_PER_YEAR + u32::from(is_leap_year(y));
    }
    days
}

/// Days in the months of `year` strictly before `month`.
pub fn days_from_months(year: Year, month: Month) -> u32 {
    (JANUARY..month.get())
        .filter_map(|m| Month::new(m).ok())
        .map(|m| u32::from(days_in_month(year, m)))
        .sum()
}

pub fn to_ordinal(date: CalendarDate) -> Ordinal {
    let year = date.year_typed();
    let days = days_from_years(year)
        + days_from_months(year, date.month_typed())
        + u32::from(date.day());
    Ordinal(days)
}

/// Inverse of [`to_ordinal`], peeling off the same 400/100/4/1 year blocks.
pub fn from_ordinal(ordinal: Ordinal) -> Option<CalendarDate> {
    let mut n = ordinal.get() - 1;

    let n400 = n / DAYS_PER_400_YEARS;
    n %= DAYS_PER_400_YEARS;
    let n100 = n / DAYS_PER_100_YEARS;
    n %= DAYS_PER_100_YEARS;
    let n4 = n / DAYS_PER_4_YEARS;
    n %= DAYS_PER_4_YEARS;
    let n1 = n / DAYS_PER_YEAR;
    n %= DAYS_PER_YEAR;

    let year = n400 * 400 + n100 * 100 + n4 * 4 + n1 + 1;
    // Last day of a leap-ending block overflows into a fifth "year".
    if n100 == 4 || n1 == 4 {
        let year = u16::try_from(year - 1).ok()?;
        return CalendarDate::new(year, DECEMBER, 31).ok();
    }

    let year = Year::new(u16::try_from(year).ok()?).ok()?;
    let mut day_of_year = n;
    let mut month = JANUARY;
    loop {
        let length = u32::from(days_in_month(year, Month::new(month).ok()?));
        if day_of_year < length || month == DECEMBER {
            break;
        }
        day_of_year -= length;
        month += 1;
    }
    let day = u8::try_from(day_of_year + 1).ok()?;
    CalendarDate::new(year.get(), month, day).ok()
}
