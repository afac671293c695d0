use crate::calendar::{
    days_in_month, days_in_year, is_leap_year, is_quarter_end, is_weekend, jan1_weekday,
    quarter_of_month,
};
use crate::consts::{DAYS_IN_WEEK, DECEMBER, FIRST_DAY, FIRST_WEEK, JANUARY, SUNDAY};
use crate::types::Year;
use crate::CalendarDay;

/// Running calendar state for the day-by-day generator.
///
/// The cursor holds the record for the day it points at. `step` derives the
/// following day from that record alone with integer and boolean updates; the
/// only full calendar resolution is the January 1 weekday in `new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    current: CalendarDay,
}

impl Cursor {
    /// Positions the cursor on January 1 of `year`.
    pub(crate) const fn new(year: Year) -> Self {
        let year = year.get();
        let weekday = jan1_weekday(year);
        let leap = is_leap_year(year);
        let month_len = days_in_month(year, JANUARY);
        let year_len = days_in_year(year);
        let day_of_year = 1;

        Self {
            current: CalendarDay {
                year,
                quarter: quarter_of_month(JANUARY),
                month: JANUARY,
                day: FIRST_DAY,
                day_of_year,
                week: FIRST_WEEK,
                weekday,
                days_in_month: month_len,
                days_in_year: year_len,
                is_leap_year: leap,
                is_weekend: is_weekend(weekday),
                is_month_end: FIRST_DAY == month_len,
                is_quarter_end: is_quarter_end(JANUARY, FIRST_DAY),
                is_year_end: day_of_year == year_len,
            },
        }
    }

    /// The day the cursor points at.
    #[inline]
    pub(crate) const fn current(&self) -> CalendarDay {
        self.current
    }

    /// Year of the day the cursor points at. May be one past the last
    /// generated year once the generator is exhausted.
    #[inline]
    pub(crate) const fn year(&self) -> u16 {
        self.current.year
    }

    /// Advances to the next calendar day.
    pub(crate) fn step(&mut self) {
        let prev = self.current;
        let mut next = prev;

        next.day = if prev.is_month_end { FIRST_DAY } else { prev.day + 1 };
        next.day_of_year = prev.day_of_year + 1;
        // Week rolls over with the weekday: Sunday -> Monday
        if prev.weekday == SUNDAY {
            next.week = prev.week + 1;
        }

        if prev.is_year_end {
            next.year = prev.year + 1;
            next.day_of_year = 1;
            next.week = FIRST_WEEK;
            // Leap flag first: days_in_year and February both depend on it
            next.is_leap_year = is_leap_year(next.year);
            next.days_in_year = days_in_year(next.year);
            tracing::trace!(year = next.year, leap = next.is_leap_year, "year rollover");
        }

        if prev.is_month_end {
            next.month = if prev.month == DECEMBER { JANUARY } else { prev.month + 1 };
            next.days_in_month = days_in_month(next.year, next.month);
        }

        next.weekday = (prev.weekday + 1) % DAYS_IN_WEEK;
        next.quarter = quarter_of_month(next.month);

        next.is_weekend = is_weekend(next.weekday);
        next.is_month_end = next.day == next.days_in_month;
        next.is_quarter_end = is_quarter_end(next.month, next.day);
        next.is_year_end = next.day_of_year == next.days_in_year;

        self.current = next;
    }
}
