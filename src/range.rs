use std::{ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{calendar::days_in_year, prelude::*, CalendarDays, CalendarError, Year, RANGE_SEPARATOR};

/// An inclusive span of whole years, January 1 of `start` through December 31 of `end`.
/// The start year must be less than or equal to the end year.
///
/// Text form is `START/END` (e.g. `1999/2001`); a bare `YEAR` parses as a
/// single-year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct YearRange {
    start: Year,
    end:   Year,
}

impl YearRange {
    /// Creates a new year range with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYearRange` if start > end.
    pub const fn new(start: Year, end: Year) -> Result<Self, CalendarError> {
        if start.get() > end.get() {
            return Err(CalendarError::InvalidYearRange {
                start: start.get(),
                end:   end.get(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from raw year numbers.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if either year is outside `1..=MAX_YEAR`,
    /// or `CalendarError::InvalidYearRange` if start > end.
    pub fn from_years(start: u16, end: u16) -> Result<Self, CalendarError> {
        Self::new(Year::new(start)?, Year::new(end)?)
    }

    /// A range covering exactly one year
    pub const fn single(year: Year) -> Self {
        Self { start: year, end: year }
    }

    pub const fn start(&self) -> Year {
        self.start
    }

    pub const fn end(&self) -> Year {
        self.end
    }

    /// Year numbers covered by the range
    pub fn years(&self) -> RangeInclusive<u16> {
        self.start.get()..=self.end.get()
    }

    pub fn contains(&self, year: u16) -> bool {
        self.years().contains(&year)
    }

    /// Number of calendar days in the range, i.e. the number of records it generates.
    pub fn num_days(&self) -> usize {
        self.years().map(|year| usize::from(days_in_year(year))).sum()
    }

    /// A fresh lazy generator over every day in the range.
    pub fn days(&self) -> CalendarDays {
        CalendarDays::new(*self)
    }
}

impl FromStr for YearRange {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::InvalidFormat("empty range".to_owned()));
        }

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Ok(Self::single(parse_year(trimmed)?)),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    CalendarError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                Self::new(parse_year(start_str)?, parse_year(end_str)?)
            },
            _ => Err(CalendarError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

fn parse_year(s: &str) -> Result<Year, CalendarError> {
    let s = s.trim();
    let value = s
        .parse::<u16>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))?;
    Year::new(value)
}

impl Serialize for YearRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
