/// Earliest generatable year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Latest generatable year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for June
pub const JUNE: u8 = 6;
/// Month number for September
pub const SEPTEMBER: u8 = 9;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// First day of any month
pub const FIRST_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month of a common year (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused
    31, // January
    28, // February (adjusted by is_leap_year)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Length of a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Length of a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Months per quarter
pub const MONTHS_PER_QUARTER: u8 = 3;

/// Weekday index for Monday, the first day of the week
pub const MONDAY: u8 = 0;
/// Weekday index for Saturday, the first weekend day
pub const SATURDAY: u8 = 5;
/// Weekday index for Sunday, the last day of the week
pub const SUNDAY: u8 = 6;
/// Days per week
pub const DAYS_IN_WEEK: u8 = 7;

/// Value of the running week counter on January 1
pub const FIRST_WEEK: u8 = 1;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator between start and end years in a range's text form
pub const RANGE_SEPARATOR: char = '/';
