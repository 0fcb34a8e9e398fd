//! Resolution of raw command input into a [`CalendarConfig`].

use crate::consts::{MAX_YEAR, MIN_GNSS_YEAR};
use crate::month::{HighlightStyle, TodayMarker};
use crate::{CalendarDate, Layout, Month, SatSystem, Year, layout};
use std::fmt;

/// Configuration errors, raised before anything is rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Year not a number, or outside `MIN_GNSS_YEAR..=MAX_YEAR`.
    #[error("invalid year: {0}")]
    InvalidYear(String),

    /// Month not a number, or outside 1..=12.
    #[error("invalid month: {0}")]
    InvalidMonth(String),

    #[error("too many arguments: expected [[month] year], got {0} values")]
    TooManyArguments(usize),
}

/// Raw command input, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Positional `[[month] year]` values
    pub args:         Vec<String>,
    /// Satellite system name; unknown names fall back to GPS
    pub satsys:       String,
    pub three_month:  bool,
    pub no_highlight: bool,
    pub style:        HighlightStyle,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            args:         Vec::new(),
            satsys:       SatSystem::default().to_string(),
            three_month:  false,
            no_highlight: false,
            style:        HighlightStyle::default(),
        }
    }
}

/// Everything needed to render one calendar. Built once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarConfig {
    reference: CalendarDate,
    system:    SatSystem,
    epoch:     CalendarDate,
    layout:    Layout,
    highlight: bool,
    style:     HighlightStyle,
    today:     CalendarDate,
}

fn parse_year(raw: &str) -> Result<Year, ConfigError> {
    let invalid = || ConfigError::InvalidYear(raw.to_owned());
    let value = raw.trim().parse::<u16>().map_err(|_| invalid())?;
    if !(MIN_GNSS_YEAR..=MAX_YEAR).contains(&value) {
        return Err(invalid());
    }
    Year::new(value).map_err(|_| invalid())
}

fn parse_month(raw: &str) -> Result<Month, ConfigError> {
    let invalid = || ConfigError::InvalidMonth(raw.to_owned());
    let value = raw.trim().parse::<u8>().map_err(|_| invalid())?;
    Month::new(value).map_err(|_| invalid())
}

impl CalendarConfig {
    /// A highlighted calendar of `reference`, using `layout`.
    pub fn new(
        reference: CalendarDate,
        today: CalendarDate,
        system: SatSystem,
        layout: Layout,
    ) -> Self {
        Self {
            reference,
            system,
            epoch: system.epoch(reference),
            layout,
            highlight: true,
            style: HighlightStyle::default(),
            today,
        }
    }

    #[must_use]
    pub const fn with_highlight(self, highlight: bool) -> Self {
        Self { highlight, ..self }
    }

    #[must_use]
    pub const fn with_style(self, style: HighlightStyle) -> Self {
        Self { style, ..self }
    }

    /// Validates `options` against the current date `today`.
    ///
    /// - no value: the month of `today`
    /// - `year`: the whole year
    /// - `month year`: that month
    ///
    /// # Errors
    /// Returns a `ConfigError` naming the first invalid value.
    pub fn resolve(options: &Options, today: CalendarDate) -> Result<Self, ConfigError> {
        let (reference, layout) = match options.args.as_slice() {
            [] => (today, Layout::OneMonth),
            [year] => {
                let year = parse_year(year)?;
                (CalendarDate::first_of(year, Month::JANUARY), Layout::OneYear)
            },
            [month, year] => {
                let month = parse_month(month)?;
                let year = parse_year(year)?;
                let reference = if today.year() == year && today.month() == month {
                    today
                } else {
                    CalendarDate::first_of(year, month)
                };
                (reference, Layout::OneMonth)
            },
            args => return Err(ConfigError::TooManyArguments(args.len())),
        };

        let layout = if options.three_month {
            Layout::ThreeMonth
        } else {
            layout
        };
        let system = SatSystem::resolve_lenient(&options.satsys);

        let config = Self::new(reference, today, system, layout)
            .with_highlight(!options.no_highlight)
            .with_style(options.style);
        log::debug!("resolved configuration: {config:?}");
        Ok(config)
    }

    pub const fn reference(&self) -> CalendarDate {
        self.reference
    }

    pub const fn system(&self) -> SatSystem {
        self.system
    }

    /// Week epoch of the reference date
    pub const fn epoch(&self) -> CalendarDate {
        self.epoch
    }

    pub const fn layout(&self) -> Layout {
        self.layout
    }

    pub const fn highlight(&self) -> bool {
        self.highlight
    }

    pub const fn style(&self) -> HighlightStyle {
        self.style
    }

    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    pub fn today_marker(&self) -> TodayMarker {
        TodayMarker::new(self.today, self.highlight.then_some(self.style))
    }
}

impl fmt::Display for CalendarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&layout::render(self))
    }
}
