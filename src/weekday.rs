use crate::consts::{DAYS_PER_WEEK, WEEKDAYS_PER_WEEK};
use crate::ordinal::Ordinal;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Day of the week, indexed from Monday = 0 to Sunday = 6.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < Self::ALL.len() {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Monday through Friday.
    #[inline]
    pub const fn is_weekday(self) -> bool {
        (self.index() as u32) < WEEKDAYS_PER_WEEK
    }

    #[inline]
    pub const fn is_weekend(self) -> bool {
        !self.is_weekday()
    }

    /// The day `days` after this one.
    pub const fn add_days(self, days: u32) -> Self {
        Self::ALL[((self.index() as u32 + days % DAYS_PER_WEEK) % DAYS_PER_WEEK) as usize]
    }
}

/// Day of week for `ordinal`; ordinal 1 (0001-01-01) is a Monday.
pub const fn weekday_of(ordinal: Ordinal) -> Weekday {
    Weekday::ALL[((ordinal.get() - 1) % DAYS_PER_WEEK) as usize]
}
