//! # gnsscal
//!
//! A `cal`-like calendar annotated with GNSS week numbers and day-of-year.
//!
//! ```
//! use gnsscal::{CalendarConfig, CalendarDate, Layout, SatSystem};
//!
//! let today = "2021-10-19".parse::<CalendarDate>().unwrap();
//! let config = CalendarConfig::new(today, today, SatSystem::Gps, Layout::OneMonth);
//! let text = config.to_string();
//! assert!(text.contains("October 2021"));
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | `types` | Validated year, month, day and weekday values |
//! | `range` | Inclusive day spans |
//! | `satsys` | Satellite systems and their week epochs |
//! | `grid` | Fixed-width text blocks |
//! | `month` | One month panel |
//! | `layout` | Three-month and full-year composition |
//! | `config` | Resolved rendering configuration |

mod config;
mod consts;
mod grid;
mod layout;
mod month;
mod prelude;
mod range;
mod satsys;
mod types;

pub use config::{CalendarConfig, ConfigError, Options};
pub use consts::*;
pub use grid::{Block, pad_cell, visible_width};
pub use layout::{Layout, full_year, render, three_month};
pub use month::{
    HighlightStyle, HighlightStyleError, MonthHeader, MonthHeaderError, TodayMarker, render_month,
};
pub use range::{DateRange, Days};
pub use satsys::{SatSystem, SatSystemError};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};

use crate::consts::LEAP_YEAR_CYCLE;
use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use std::str::FromStr;

/// A calendar date without time of day or time zone.
///
/// Ordering follows the calendar: year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Creates a date from its numeric components.
    ///
    /// # Errors
    /// Returns the `DateError` of the first component out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// Builds a date from literal components, panicking at compile time if invalid.
    pub(crate) const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self {
            year: Year::from_literal(year),
            month: Month::from_literal(month),
            day: Day::from_literal(day, year, month),
        }
    }

    /// First day of the given month.
    pub const fn first_of(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: Day::FIRST,
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Same date in chrono's calendar, for day arithmetic.
    fn naive(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(
            i32::from(self.year.get()),
            u32::from(self.month.get()),
            u32::from(self.day.get()),
        )
        // years 1..=MAX_YEAR are always representable
        .unwrap_or(NaiveDate::MIN)
    }

    /// Whole days from `earlier` to `self`; negative when `earlier` is later.
    pub fn days_since(&self, earlier: &Self) -> i64 {
        self.naive().signed_duration_since(earlier.naive()).num_days()
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_sunday_index(self.naive().weekday().num_days_from_sunday())
    }

    /// The following day, or `None` past December 31st of `MAX_YEAR`.
    pub fn succ(&self) -> Option<Self> {
        let (year, month, day) = (self.year.get(), self.month.get(), self.day.get());
        if day < days_in_month(year, month) {
            Self::new(year, month, day + 1).ok()
        } else {
            self.first_of_next_month()
        }
    }

    pub const fn first_of_month(&self) -> Self {
        Self::first_of(self.year, self.month)
    }

    /// First day of the following month, rolling over December.
    /// Returns `None` if it would overflow `MAX_YEAR`.
    pub fn first_of_next_month(&self) -> Option<Self> {
        let (year, month) = (self.year.get(), self.month.get());
        if month == DECEMBER {
            Self::new(year.checked_add(1)?, JANUARY, MIN_DAY).ok()
        } else {
            Self::new(year, month + 1, MIN_DAY).ok()
        }
    }

    /// First day of the preceding month, rolling back over January.
    /// Returns `None` before year 1.
    pub fn first_of_previous_month(&self) -> Option<Self> {
        let (year, month) = (self.year.get(), self.month.get());
        if month == JANUARY {
            Self::new(year.checked_sub(1)?, DECEMBER, MIN_DAY).ok()
        } else {
            Self::new(year, month - 1, MIN_DAY).ok()
        }
    }

    /// 1-based ordinal of the date within its year.
    #[allow(clippy::cast_possible_truncation)]
    pub fn day_of_year(&self) -> u16 {
        self.naive().ordinal() as u16
    }

    /// Complete weeks elapsed from `epoch` to this date.
    /// `None` when the date precedes the epoch.
    pub fn weeks_since(&self, epoch: &Self) -> Option<u32> {
        let days = self.days_since(epoch);
        if days < 0 {
            return None;
        }
        u32::try_from(days / DAYS_PER_WEEK).ok()
    }

    /// January 1st of the latest year divisible by 4 at or before this date.
    ///
    /// Years 1 to 3 have no such year in range and map to their own January 1st.
    pub fn leap_year_date(&self) -> Self {
        let year = self.year.get();
        let leap = Year::new(year - year % LEAP_YEAR_CYCLE).unwrap_or(self.year);
        Self::first_of(leap, Month::JANUARY)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };

        let year = year
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(trimmed.to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(trimmed.to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(trimmed.to_owned()))?;

        Self::new(year, month, day)
    }
}
