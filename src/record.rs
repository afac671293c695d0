use serde::ser::SerializeStruct;

use crate::prelude::*;

/// One row of the date dimension: a calendar day and everything derived from it.
///
/// Records are snapshots of the generator's running state and never change
/// after they are produced. `Display` renders the date as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct CalendarDay {
    pub(crate) year:           u16,
    pub(crate) quarter:        u8,
    pub(crate) month:          u8,
    pub(crate) day:            u8,
    pub(crate) day_of_year:    u16,
    pub(crate) week:           u8,
    pub(crate) weekday:        u8,
    pub(crate) days_in_month:  u8,
    pub(crate) days_in_year:   u16,
    pub(crate) is_leap_year:   bool,
    pub(crate) is_weekend:     bool,
    pub(crate) is_month_end:   bool,
    pub(crate) is_quarter_end: bool,
    pub(crate) is_year_end:    bool,
}

/// Column names in serialized order, matching the `Serialize` impl.
pub const FIELD_NAMES: [&str; 15] = [
    "date",
    "year",
    "quarter",
    "month",
    "day",
    "day_of_year",
    "week",
    "weekday",
    "days_in_month",
    "days_in_year",
    "is_leap_year",
    "is_weekend",
    "is_month_end",
    "is_quarter_end",
    "is_year_end",
];

impl CalendarDay {
    /// Concrete `(year, month, day)`
    pub const fn date(&self) -> (u16, u8, u8) {
        (self.year, self.month, self.day)
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    /// 1-4
    pub const fn quarter(&self) -> u8 {
        self.quarter
    }

    /// 1-12
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of month, 1-31
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// 1 on January 1, up to 365 or 366
    pub const fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    /// Running week counter: 1 on January 1, incremented on every following Monday.
    /// Not an ISO-8601 week number.
    pub const fn week(&self) -> u8 {
        self.week
    }

    /// Monday=0 through Sunday=6
    pub const fn weekday(&self) -> u8 {
        self.weekday
    }

    pub const fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    pub const fn days_in_year(&self) -> u16 {
        self.days_in_year
    }

    pub const fn is_leap_year(&self) -> bool {
        self.is_leap_year
    }

    /// Saturday or Sunday
    pub const fn is_weekend(&self) -> bool {
        self.is_weekend
    }

    pub const fn is_month_end(&self) -> bool {
        self.is_month_end
    }

    /// Mar 31, Jun 30, Sep 30 or Dec 31
    pub const fn is_quarter_end(&self) -> bool {
        self.is_quarter_end
    }

    pub const fn is_year_end(&self) -> bool {
        self.is_year_end
    }
}

impl serde::Serialize for CalendarDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut row = serializer.serialize_struct("CalendarDay", FIELD_NAMES.len())?;
        row.serialize_field("date", &self.to_string())?;
        row.serialize_field("year", &self.year)?;
        row.serialize_field("quarter", &self.quarter)?;
        row.serialize_field("month", &self.month)?;
        row.serialize_field("day", &self.day)?;
        row.serialize_field("day_of_year", &self.day_of_year)?;
        row.serialize_field("week", &self.week)?;
        row.serialize_field("weekday", &self.weekday)?;
        row.serialize_field("days_in_month", &self.days_in_month)?;
        row.serialize_field("days_in_year", &self.days_in_year)?;
        row.serialize_field("is_leap_year", &self.is_leap_year)?;
        row.serialize_field("is_weekend", &self.is_weekend)?;
        row.serialize_field("is_month_end", &self.is_month_end)?;
        row.serialize_field("is_quarter_end", &self.is_quarter_end)?;
        row.serialize_field("is_year_end", &self.is_year_end)?;
        row.end()
    }
}
