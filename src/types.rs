use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MONTH_NAMES,
};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub const fn new(value: u16) -> Result<Self, DateError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(DateError::InvalidYear(value)),
        }
    }

    pub(crate) const fn from_literal(value: u16) -> Self {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Self(year),
            _ => panic!("year literal out of range"),
        }
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub const fn new(value: u8) -> Result<Self, DateError> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Ok(Self(month)),
            _ => Err(DateError::InvalidMonth(value)),
        }
    }

    pub(crate) const fn from_literal(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Self(month),
            _ => panic!("month literal out of range"),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// English name of the month ("January" ..= "December")
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[(self.get() - 1) as usize]
    }

    /// Looks a month up by its English name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        MONTH_NAMES
            .iter()
            .zip(1..=MAX_MONTH)
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .and_then(|(_, number)| Self::new(number).ok())
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day-of-month value, validated against its year and month on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub const fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let in_month = month != 0 && month <= MAX_MONTH && value <= days_in_month(year, month);
        match NonZeroU8::new(value) {
            Some(day) if in_month => Ok(Self(day)),
            _ => Err(DateError::InvalidDay {
                month,
                day: value,
                year,
            }),
        }
    }

    pub(crate) const fn from_literal(value: u8, year: u16, month: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(day)
                if month != 0 && month <= MAX_MONTH && value <= days_in_month(year, month) =>
            {
                Self(day)
            },
            _ => panic!("day literal out of range"),
        }
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, in the Sunday-first order used by the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday from a Sunday-based index, wrapping modulo 7.
    pub(crate) const fn from_sunday_index(index: u32) -> Self {
        Self::ALL[index as usize % Self::ALL.len()]
    }

    /// Number of days elapsed since the preceding (or same) Sunday.
    pub const fn days_from_sunday(self) -> usize {
        self as usize
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(1980).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(matches!(Year::new(0), Err(DateError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(DateError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_year_conversions() {
        let year: Year = 2021.try_into().unwrap();
        assert_eq!(u16::from(year), 2021);
        assert_eq!(year.to_string(), "2021");
        assert!(!year.is_leap());
        assert!(Year::new(2020).unwrap().is_leap());
    }

    #[test]
    fn test_month_range() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Month::new(1).unwrap().name(), "January");
        assert_eq!(Month::new(10).unwrap().to_string(), "October");
        assert_eq!(Month::new(12).unwrap().name(), "December");
    }

    #[test]
    fn test_month_from_name() {
        assert_eq!(Month::from_name("October"), Some(Month::new(10).unwrap()));
        assert_eq!(Month::from_name("february"), Some(Month::new(2).unwrap()));
        assert_eq!(Month::from_name("Oct"), None);
        assert_eq!(Month::from_name(""), None);
    }

    #[test]
    fn test_day_validated_against_month() {
        assert!(Day::new(31, 2021, 1).is_ok());
        assert!(Day::new(30, 2021, 4).is_ok());
        assert!(Day::new(31, 2021, 4).is_err());
        assert!(Day::new(29, 2020, 2).is_ok());
        assert!(Day::new(29, 2021, 2).is_err());
        assert!(Day::new(0, 2021, 1).is_err());
        assert!(matches!(
            Day::new(32, 2021, 1),
            Err(DateError::InvalidDay {
                month: 1,
                day: 32,
                year: 2021
            })
        ));
    }

    #[test]
    fn test_day_rejects_invalid_month_context() {
        assert!(Day::new(1, 2021, 0).is_err());
        assert!(Day::new(1, 2021, 13).is_err());
    }

    #[test]
    fn test_weekday_index() {
        assert_eq!(Weekday::from_sunday_index(0), Weekday::Sunday);
        assert_eq!(Weekday::from_sunday_index(6), Weekday::Saturday);
        assert_eq!(Weekday::from_sunday_index(7), Weekday::Sunday);
        assert_eq!(Weekday::Friday.days_from_sunday(), 5);
    }

    #[test]
    fn test_is_leap_year_cases() {
        let cases = [
            (2020, true, "divisible by 4"),
            (2021, false, "not divisible by 4"),
            (1900, false, "century not divisible by 400"),
            (2100, false, "century not divisible by 400"),
            (2000, true, "divisible by 400"),
        ];

        for (year, expected, description) in cases {
            assert_eq!(
                is_leap_year(year),
                expected,
                "Year {year} ({description})"
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2021, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2020, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }
}
