use crate::consts::MAX_YEAR;
use crate::CalendarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU16::new(value).ok_or(CalendarError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(CalendarError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a February 29
    #[inline]
    pub const fn is_leap(self) -> bool {
        crate::calendar::is_leap_year(self.get())
    }

    /// 365 or 366
    #[inline]
    pub const fn num_days(self) -> u16 {
        crate::calendar::days_in_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(CalendarError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(CalendarError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_try_from_and_into_u16() {
        let year: Year = 2024.try_into().unwrap();
        assert_eq!(year.get(), 2024);
        let value: u16 = year.into();
        assert_eq!(value, 2024);

        let result: Result<Year, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_leap_and_length() {
        let y1900 = Year::new(1900).unwrap();
        let y2000 = Year::new(2000).unwrap();
        assert!(!y1900.is_leap());
        assert_eq!(y1900.num_days(), 365);
        assert!(y2000.is_leap());
        assert_eq!(y2000.num_days(), 366);
    }

    #[test]
    fn test_year_display_and_ordering() {
        let y1 = Year::new(999).unwrap();
        let y2 = Year::new(2024).unwrap();
        assert_eq!(y1.to_string(), "999");
        assert!(y1 < y2);
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");
        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let result: Result<Year, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }
}
