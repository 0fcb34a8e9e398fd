//! Composition of month panels into the three-month and full-year views.

use crate::consts::{GUTTER_WIDTH, PANEL_WIDTH, QUARTER_ANCHORS};
use crate::grid::Block;
use crate::month::{TodayMarker, render_month};
use crate::{CalendarConfig, CalendarDate, Month, SatSystem, Year, prelude::*};

/// Which view of the calendar to print
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// The reference month only
    #[default]
    #[display(fmt = "one-month")]
    OneMonth,
    /// Previous, reference and next month side by side
    #[display(fmt = "three-month")]
    ThreeMonth,
    /// The twelve months of the reference year, three per row
    #[display(fmt = "one-year")]
    OneYear,
}

/// One panel of a multi-month row. Each panel resolves its own epoch, so a
/// Glonass panel after a leap year boundary counts from the new year.
fn panel(first: Option<CalendarDate>, today: TodayMarker, system: SatSystem) -> Block {
    first.map_or_else(Block::new, |first| {
        render_month(
            first.year(),
            first.month(),
            today,
            system.epoch(first),
            system,
        )
    })
}

/// Previous, current and next month of `reference`, side by side.
pub fn three_month(reference: CalendarDate, today: TodayMarker, system: SatSystem) -> Block {
    let center = reference.first_of_month();
    let panels = [
        panel(center.first_of_previous_month(), today, system),
        panel(Some(center), today, system),
        panel(center.first_of_next_month(), today, system),
    ];
    Block::side_by_side(&panels, PANEL_WIDTH, GUTTER_WIDTH)
}

/// The whole `year` as four three-month rows separated by an empty line.
///
/// Only the row holding today's month may highlight it.
pub fn full_year(year: Year, today: TodayMarker, system: SatSystem) -> Block {
    let mut block = Block::new();

    for (index, anchor) in QUARTER_ANCHORS.into_iter().enumerate() {
        let center = CalendarDate::first_of(year, Month::from_literal(anchor));
        let holds_today = today.date().year() == year
            && today.date().month().get().abs_diff(anchor) <= 1;
        let marker = if holds_today {
            today
        } else {
            today.without_highlight()
        };

        if index > 0 {
            block.push(String::new());
        }
        block.append(three_month(center, marker, system));
    }

    block
}

/// Renders the view selected by `config`, one line per row.
pub fn render(config: &CalendarConfig) -> String {
    let reference = config.reference();
    let today = config.today_marker();
    let system = config.system();

    log::debug!("rendering {} view of {reference} ({system})", config.layout());

    let block = match config.layout() {
        Layout::OneMonth => render_month(
            reference.year(),
            reference.month(),
            today,
            config.epoch(),
            system,
        ),
        Layout::ThreeMonth => three_month(reference, today, system),
        Layout::OneYear => full_year(reference.year(), today, system),
    };

    block.to_string()
}
