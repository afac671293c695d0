//! Calendar date-dimension generation.
//!
//! Produces one [`CalendarDay`] per day from January 1 of a start year
//! through December 31 of an end year, with quarter, day-of-year, a running
//! week counter, weekday and month/quarter/year boundary flags derived for
//! each day.
//!
//! Days are produced by stepping a running calendar state forward one day at
//! a time. The weekday of the first January 1 is resolved once; everything
//! after that is integer and boolean arithmetic on the previous day.
//!
//! ```
//! let days = date_dim::generate(2000, 2000)?;
//! assert_eq!(days.len(), 366);
//! assert_eq!(days[0].to_string(), "2000-01-01");
//!
//! // Lazily, without materializing the whole range
//! let quarter_ends = date_dim::iterate(1900, 2100)?
//!     .filter(|day| day.is_quarter_end())
//!     .count();
//! assert_eq!(quarter_ends, 201 * 4);
//! # Ok::<(), date_dim::CalendarError>(())
//! ```

mod calendar;
mod consts;
mod cursor;
mod error;
mod prelude;
mod range;
mod record;
mod sequence;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{
    days_in_month, days_in_year, is_leap_year, is_quarter_end, is_weekend, jan1_weekday,
    quarter_of_month,
};
pub use consts::*;
pub use error::CalendarError;
pub use range::YearRange;
pub use record::{CalendarDay, FIELD_NAMES};
pub use sequence::{generate, iterate, CalendarDays};
pub use types::Year;
