use crate::{CalendarDate, DAYS_PER_WEEK, WEEKDAYS_PER_WEEK, prelude::*, weekday_of};

/// Counts Monday–Friday days in the inclusive range between `a` and `b`.
///
/// The arguments may come in either order. Full weeks contribute five
/// weekdays each; only the at most six leftover days are inspected, so the
/// cost does not depend on the length of the range.
pub fn weekdays_between(a: CalendarDate, b: CalendarDate) -> u32 {
    if a == b {
        return u32::from(a.weekday().is_weekday());
    }

    let (start, end) = if a.ordinal() <= b.ordinal() { (a, b) } else { (b, a) };
    let start_ordinal = start.ordinal();
    let span = end.ordinal().get() - start_ordinal.get() + 1;

    let full_weeks = span / DAYS_PER_WEEK;
    let remainder = span % DAYS_PER_WEEK;

    let mut count = full_weeks * WEEKDAYS_PER_WEEK;
    let start_index = u32::from(weekday_of(start_ordinal).index());
    for i in 0..remainder {
        if (start_index + i) % DAYS_PER_WEEK < WEEKDAYS_PER_WEEK {
            count += 1;
        }
    }
    count
}

/// An inclusive range of calendar days.
/// Construction orders the endpoints, so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

impl DateRange {
    /// Creates the range covering both dates, whichever comes first.
    pub fn new(a: CalendarDate, b: CalendarDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Number of days in the range, counting both endpoints.
    pub fn span_days(&self) -> u32 {
        self.end.ordinal().get() - self.start.ordinal().get() + 1
    }

    pub fn weekdays(&self) -> u32 {
        weekdays_between(self.start, self.end)
    }

    pub fn weekend_days(&self) -> u32 {
        self.span_days() - self.weekdays()
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    /// Day-by-day reference count.
    fn brute_force(a: CalendarDate, b: CalendarDate) -> u32 {
        let range = DateRange::new(a, b);
        let mut count = 0;
        let mut current = Some(range.start());
        while let Some(d) = current {
            if d > range.end() {
                break;
            }
            count += u32::from(d.weekday().is_weekday());
            current = d.succ();
        }
        count
    }

    #[test]
    fn test_weekdays_between_cases() {
        struct TestCase {
            start:       (u16, u8, u8),
            end:         (u16, u8, u8),
            expected:    u32,
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       (2023, 1, 1),
                end:         (2023, 1, 1),
                expected:    0,
                description: "single Sunday",
            },
            TestCase {
                start:       (2023, 1, 2),
                end:         (2023, 1, 2),
                expected:    1,
                description: "single Monday",
            },
            TestCase {
                start:       (2023, 1, 7),
                end:         (2023, 1, 7),
                expected:    0,
                description: "single Saturday",
            },
            TestCase {
                start:       (2023, 1, 1),
                end:         (2023, 1, 2),
                expected:    1,
                description: "Sunday to Monday",
            },
            TestCase {
                start:       (2023, 1, 7),
                end:         (2023, 1, 8),
                expected:    0,
                description: "weekend only",
            },
            TestCase {
                start:       (2023, 1, 6),
                end:         (2023, 1, 9),
                expected:    2,
                description: "Friday across weekend to Monday",
            },
            TestCase {
                start:       (2023, 1, 1),
                end:         (2023, 1, 31),
                expected:    22,
                description: "January 2023",
            },
            TestCase {
                start:       (2020, 1, 1),
                end:         (2020, 12, 31),
                expected:    262,
                description: "leap year 2020",
            },
            TestCase {
                start:       (2020, 1, 1),
                end:         (2021, 1, 1),
                expected:    263,
                description: "leap year 2020 plus Friday 2021-01-01",
            },
            TestCase {
                start:       (2024, 1, 1),
                end:         (2024, 12, 31),
                expected:    262,
                description: "leap year 2024",
            },
            TestCase {
                start:       (1999, 12, 25),
                end:         (2000, 3, 5),
                expected:    50,
                description: "across century leap day",
            },
            TestCase {
                start:       (1, 1, 1),
                end:         (9999, 12, 31),
                expected:    2_608_615,
                description: "entire supported calendar",
            },
        ];

        for case in &cases {
            let (sy, sm, sd) = case.start;
            let (ey, em, ed) = case.end;
            let start = date(sy, sm, sd);
            let end = date(ey, em, ed);
            assert_eq!(weekdays_between(start, end), case.expected, "{}", case.description);
            assert_eq!(weekdays_between(end, start), case.expected, "{} (reversed)", case.description);
        }
    }

    #[test]
    fn test_full_week_always_has_five() {
        let mut start = date(2023, 12, 20);
        for _ in 0..14 {
            let mut end = start;
            for _ in 0..6 {
                end = end.succ().expect("end within calendar");
            }
            assert_eq!(weekdays_between(start, end), 5, "week starting {start}");
            start = start.succ().expect("start within calendar");
        }
    }

    #[test]
    fn test_matches_brute_force_for_short_ranges() {
        let anchor = date(2024, 2, 20);
        let mut end = anchor;
        for _ in 0..60 {
            assert_eq!(weekdays_between(anchor, end), brute_force(anchor, end), "{anchor}..{end}");
            end = end.succ().expect("end within calendar");
        }
    }

    #[test]
    fn test_range_normalizes_order() {
        let early = date(2023, 1, 1);
        let late = date(2023, 1, 31);
        let range = DateRange::new(late, early);

        assert_eq!(range.start(), early);
        assert_eq!(range.end(), late);
        assert_eq!(range, DateRange::new(early, late));
    }

    #[test]
    fn test_range_counts() {
        let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 31));
        assert_eq!(range.span_days(), 31);
        assert_eq!(range.weekdays(), 22);
        assert_eq!(range.weekend_days(), 9);

        let single = DateRange::new(date(2023, 1, 7), date(2023, 1, 7));
        assert_eq!(single.span_days(), 1);
        assert_eq!(single.weekdays(), 0);
        assert_eq!(single.weekend_days(), 1);
    }

    #[test]
    fn test_contains() {
        let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 31));
        assert!(range.contains(&date(2023, 1, 1)));
        assert!(range.contains(&date(2023, 1, 15)));
        assert!(range.contains(&date(2023, 1, 31)));
        assert!(!range.contains(&date(2022, 12, 31)));
        assert!(!range.contains(&date(2023, 2, 1)));
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(2023, 1, 31), date(2023, 1, 1));
        assert_eq!(range.to_string(), "2023-01-01/2023-01-31");
    }
}
