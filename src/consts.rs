/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Largest day number any month can hold
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in a common year
pub const DAYS_PER_YEAR: u32 = 365;
/// Days in a 4-year block: one leap day
pub const DAYS_PER_4_YEARS: u32 = 4 * DAYS_PER_YEAR + 1;
/// Days in a 100-year block: 24 leap days, the century year itself is common
pub const DAYS_PER_100_YEARS: u32 = 100 * DAYS_PER_YEAR + 24;
/// Days in a full 400-year Gregorian cycle: 97 leap days
pub const DAYS_PER_400_YEARS: u32 = 400 * DAYS_PER_YEAR + 97;

/// Ordinal of 0001-01-01
pub const MIN_ORDINAL: u32 = 1;
/// Ordinal of 9999-12-31
pub const MAX_ORDINAL: u32 = 3_652_059;

/// Length of a week in days
pub const DAYS_PER_WEEK: u32 = 7;
/// Monday through Friday
pub const WEEKDAYS_PER_WEEK: u32 = 5;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Digits in the year field of `YYYY-MM-DD`
pub(crate) const YEAR_DIGITS: usize = 4;
/// Digits in the month and day fields of `YYYY-MM-DD`
pub(crate) const MONTH_DAY_DIGITS: usize = 2;
