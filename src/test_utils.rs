//! Shared constructors for unit tests.

use crate::{CalendarDay, Year, YearRange};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("test year out of range")
}

pub fn range(start: u16, end: u16) -> YearRange {
    YearRange::from_years(start, end).expect("test range invalid")
}

/// Every record for a single year
pub fn year_days(value: u16) -> Vec<CalendarDay> {
    YearRange::single(year(value)).days().collect()
}

/// The record for `(year, month, day)`, found by generating its year
pub fn record(y: u16, m: u8, d: u8) -> CalendarDay {
    year_days(y)
        .into_iter()
        .find(|day| day.date() == (y, m, d))
        .expect("test date not generated")
}
