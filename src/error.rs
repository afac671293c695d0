use crate::consts::{MAX_YEAR, MIN_YEAR};

/// Error type for date-dimension generation.
///
/// Every variant is raised before the first record is produced, so a caller
/// never observes a partial sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Year is zero or beyond the supported range, so its January 1 is not a
    /// representable date.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(u16),

    /// Start year is after end year.
    #[error("Invalid year range: start ({start}) is after end ({end})")]
    InvalidYearRange { start: u16, end: u16 },

    /// Year range text could not be parsed.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CalendarError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
        assert_eq!(
            CalendarError::InvalidYearRange { start: 2001, end: 1999 }.to_string(),
            "Invalid year range: start (2001) is after end (1999)"
        );
        assert_eq!(
            CalendarError::InvalidFormat("abc".to_owned()).to_string(),
            "Invalid range format: abc"
        );
    }

    #[test]
    fn test_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
