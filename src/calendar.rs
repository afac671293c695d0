//! Pure proleptic-Gregorian helpers used by the stepping cursor.
//!
//! Month arguments are expected in `1..=12`. Passing anything else is a
//! programming error and trips a `debug_assert!`; the cursor never does.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_WEEK, DECEMBER,
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JUNE, LEAP_YEAR_CYCLE, MARCH, MONTHS_PER_QUARTER,
    SATURDAY, SEPTEMBER,
};

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= DECEMBER);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Quarter (1-4) containing `month`.
pub const fn quarter_of_month(month: u8) -> u8 {
    debug_assert!(month != 0 && month <= DECEMBER);

    (month - 1) / MONTHS_PER_QUARTER + 1
}

/// True on Mar 31, Jun 30, Sep 30 and Dec 31.
pub const fn is_quarter_end(month: u8, day: u8) -> bool {
    matches!(
        (month, day),
        (MARCH, 31) | (JUNE, 30) | (SEPTEMBER, 30) | (DECEMBER, 31)
    )
}

pub const fn is_weekend(weekday: u8) -> bool {
    weekday >= SATURDAY
}

/// Weekday of January 1 of `year`, Monday=0 through Sunday=6.
///
/// Sakamoto's congruence with the January offset folded in. This is the only
/// full calendar resolution the generator performs; every later weekday is a
/// mod-7 increment.
pub const fn jan1_weekday(year: u16) -> u8 {
    debug_assert!(year != 0);

    let y = year - 1;
    // 0 = Sunday
    let sunday_based = (y + y / LEAP_YEAR_CYCLE - y / CENTURY_CYCLE + y / GREGORIAN_CYCLE + 1)
        % DAYS_IN_WEEK as u16;
    #[allow(clippy::cast_possible_truncation)]
    let sunday_based = sunday_based as u8; // always < 7
    (sunday_based + DAYS_IN_WEEK - 1) % DAYS_IN_WEEK
}
