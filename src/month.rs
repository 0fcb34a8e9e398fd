//! One month panel: header, weekday row, then a week-number row and a
//! day-of-year row for every calendar week.

use crate::consts::{DAY_SLOT, TITLE_CENTER, WEEK_FIELD, WEEKDAY_HEADER};
use crate::grid::Block;
use crate::{CalendarDate, DateError, DateRange, Month, SatSystem, SatSystemError, Weekday, Year};
use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

const RESET: &str = "\u{1b}[0m";

/// How today's date is marked on a terminal
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    #[default]
    #[display(fmt = "reverse")]
    Reverse,
    #[display(fmt = "underline")]
    Underline,
}

impl HighlightStyle {
    const fn escape(self) -> &'static str {
        match self {
            Self::Reverse => "\u{1b}[7m",
            Self::Underline => "\u{1b}[4m",
        }
    }
}

/// Highlight style parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HighlightStyleError {
    #[error("unknown highlight style \"{0}\" (expected reverse or underline)")]
    Unknown(String),
}

impl FromStr for HighlightStyle {
    type Err = HighlightStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reverse" => Ok(Self::Reverse),
            "underline" => Ok(Self::Underline),
            _ => Err(HighlightStyleError::Unknown(s.to_owned())),
        }
    }
}

/// The date shown as "today", and how (if at all) to highlight it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodayMarker {
    date:  CalendarDate,
    style: Option<HighlightStyle>,
}

impl TodayMarker {
    pub const fn new(date: CalendarDate, style: Option<HighlightStyle>) -> Self {
        Self { date, style }
    }

    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    pub const fn is_highlighted(&self) -> bool {
        self.style.is_some()
    }

    /// Same date, never highlighted.
    pub const fn without_highlight(self) -> Self {
        Self {
            date:  self.date,
            style: None,
        }
    }

    fn style_for(&self, date: CalendarDate) -> Option<HighlightStyle> {
        self.style.filter(|_| date == self.date)
    }
}

/// First line of a month panel: system label and centred "Month YYYY".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthHeader {
    pub system: SatSystem,
    pub year:   Year,
    pub month:  Month,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthHeaderError {
    #[error("malformed month header: \"{0}\"")]
    Malformed(String),
    #[error("unknown month name \"{0}\"")]
    UnknownMonth(String),
    #[error(transparent)]
    SatSystem(#[from] SatSystemError),
    #[error(transparent)]
    Date(#[from] DateError),
}

impl MonthHeader {
    pub const fn new(system: SatSystem, year: Year, month: Month) -> Self {
        Self {
            system,
            year,
            month,
        }
    }
}

impl fmt::Display for MonthHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!("{} {:4}", self.month.name(), self.year.get());
        let width = TITLE_CENTER + title.len() / 2;
        write!(f, "{}{title:>width$}", self.system)
    }
}

impl FromStr for MonthHeader {
    type Err = MonthHeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [system, month, year] = tokens.as_slice() else {
            return Err(MonthHeaderError::Malformed(s.to_owned()));
        };

        let system = system.parse::<SatSystem>()?;
        let month = Month::from_name(month)
            .ok_or_else(|| MonthHeaderError::UnknownMonth((*month).to_owned()))?;
        let year = year
            .parse::<u16>()
            .map_err(|_| MonthHeaderError::Malformed(s.to_owned()))?;

        Ok(Self::new(system, Year::new(year)?, month))
    }
}

/// Renders one month.
///
/// Week numbers are counted from `epoch` and printed on the first row and at
/// every Sunday. When `epoch` does not fall on a Sunday (Glonass) the same
/// week number may therefore appear on two consecutive rows. Days before
/// `epoch` get a blank week field.
pub fn render_month(
    year: Year,
    month: Month,
    today: TodayMarker,
    epoch: CalendarDate,
    system: SatSystem,
) -> Block {
    let days = DateRange::month(year, month);

    let mut block = Block::new();
    block.push(MonthHeader::new(system, year, month).to_string());
    block.push(WEEKDAY_HEADER);

    let mut week_row = String::new();
    let mut doy_row = String::new();

    for date in days {
        let weekday = date.weekday();

        if date == days.start() || weekday == Weekday::Sunday {
            match date.weeks_since(&epoch) {
                Some(week) => week_row.push_str(&format!("{week:4}  ")),
                None => week_row.push_str(WEEK_FIELD),
            }
            doy_row.push_str(WEEK_FIELD);
            for _ in 0..weekday.days_from_sunday() {
                week_row.push_str(DAY_SLOT);
                doy_row.push_str(DAY_SLOT);
            }
        }

        let day = date.day().get();
        match today.style_for(date) {
            Some(style) => week_row.push_str(&format!("  {}{day:2}{RESET}", style.escape())),
            None => week_row.push_str(&format!("  {day:2}")),
        }
        doy_row.push_str(&format!(" {:3}", date.day_of_year()));

        if weekday == Weekday::Saturday {
            block.push(std::mem::take(&mut week_row));
            block.push(std::mem::take(&mut doy_row));
        }
    }

    if !week_row.is_empty() {
        block.push(week_row);
        block.push(doy_row);
    }

    log::trace!("rendered {system} {} {year}: {} lines", month.name(), block.len());
    block
}
