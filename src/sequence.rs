use std::iter::FusedIterator;

use crate::{cursor::Cursor, CalendarDay, CalendarError, YearRange};

/// Lazy, forward-only generator over every day of a [`YearRange`].
///
/// Each generator owns its own running state; cloning one yields an
/// independent generator that resumes from the same day. Dropping it early
/// has no side effects.
#[derive(Debug, Clone)]
pub struct CalendarDays {
    cursor:    Cursor,
    end:       u16,
    remaining: usize,
}

impl CalendarDays {
    pub(crate) fn new(range: YearRange) -> Self {
        let remaining = range.num_days();
        tracing::debug!(
            start = range.start().get(),
            end = range.end().get(),
            days = remaining,
            "starting date dimension"
        );
        Self {
            cursor: Cursor::new(range.start()),
            end: range.end().get(),
            remaining,
        }
    }
}

impl Iterator for CalendarDays {
    type Item = CalendarDay;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.year() > self.end {
            debug_assert_eq!(self.remaining, 0);
            return None;
        }
        let day = self.cursor.current();
        self.cursor.step();
        self.remaining -= 1;
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CalendarDays {}

impl FusedIterator for CalendarDays {}

/// Lazily generates one record per day from January 1 of `start_year` through
/// December 31 of `end_year`.
///
/// # Errors
/// Returns `CalendarError::InvalidYear` if either year is outside `1..=MAX_YEAR`,
/// or `CalendarError::InvalidYearRange` if `start_year > end_year`.
pub fn iterate(start_year: u16, end_year: u16) -> Result<CalendarDays, CalendarError> {
    Ok(YearRange::from_years(start_year, end_year)?.days())
}

/// Eagerly generates the full date dimension for `start_year..=end_year`.
///
/// # Errors
/// Same as [`iterate`]; no records are produced on error.
pub fn generate(start_year: u16, end_year: u16) -> Result<Vec<CalendarDay>, CalendarError> {
    let days = iterate(start_year, end_year)?;
    let mut records = Vec::with_capacity(days.len());
    records.extend(days);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length() {
        assert_eq!(generate(1900, 1900).unwrap().len(), 365);
        assert_eq!(generate(2000, 2000).unwrap().len(), 366);
        assert_eq!(generate(1999, 2001).unwrap().len(), 1096);
    }

    #[test]
    fn test_generate_rejects_reversed_range() {
        assert_eq!(
            generate(2001, 1999),
            Err(CalendarError::InvalidYearRange { start: 2001, end: 1999 })
        );
    }

    #[test]
    fn test_generate_rejects_invalid_year() {
        assert_eq!(generate(0, 1), Err(CalendarError::InvalidYear(0)));
        assert!(iterate(9999, 10000).is_err());
    }

    #[test]
    fn test_exact_size_while_iterating() {
        let mut days = iterate(2000, 2000).unwrap();
        assert_eq!(days.len(), 366);
        days.next();
        assert_eq!(days.len(), 365);
        for _ in 0..365 {
            assert!(days.next().is_some());
        }
        assert_eq!(days.len(), 0);
        assert_eq!(days.next(), None);
        assert_eq!(days.next(), None);
    }

    #[test]
    fn test_clone_resumes_independently() {
        let mut days = iterate(2024, 2024).unwrap();
        days.nth(58);
        let mut fork = days.clone();
        assert_eq!(days.next().map(|d| d.date()), Some((2024, 2, 29)));
        assert_eq!(fork.next().map(|d| d.date()), Some((2024, 2, 29)));
        assert_eq!(days.next(), fork.next());
    }

    #[test]
    fn test_lazy_matches_eager() {
        let eager = generate(1899, 1901).unwrap();
        let lazy: Vec<_> = iterate(1899, 1901).unwrap().collect();
        assert_eq!(eager, lazy);
    }

    #[test]
    fn test_last_supported_year() {
        let days = generate(9999, 9999).unwrap();
        assert_eq!(days.len(), 365);
        assert_eq!(days.last().map(CalendarDay::date), Some((9999, 12, 31)));
    }

    #[test]
    fn test_first_supported_year() {
        let days = generate(1, 1).unwrap();
        assert_eq!(days[0].to_string(), "0001-01-01");
        assert_eq!(days[0].weekday(), 0);
    }
}
