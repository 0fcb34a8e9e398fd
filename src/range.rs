use crate::{CalendarDate, Month, Year, days_in_month};

/// An inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

impl DateRange {
    /// Every day of one calendar month.
    pub fn month(year: Year, month: Month) -> Self {
        let start = CalendarDate::first_of(year, month);
        let last = days_in_month(year.get(), month.get());
        // the last day of a validated month always exists
        let end = CalendarDate::new(year.get(), month.get(), last).unwrap_or(start);
        Self { start, end }
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end date of the range (inclusive)
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Iterates over every day, in order.
    pub const fn iter(&self) -> Days {
        Days {
            next: Some(self.start),
            end:  self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = CalendarDate;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Day-by-day iterator over a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<CalendarDate>,
    end:  CalendarDate,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ()
        } else {
            None
        };
        Some(current)
    }
}
