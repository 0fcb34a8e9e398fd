use clap::{ArgAction, Parser};
use gnsscal::{CalendarDate, HighlightStyle, Options};

/// Calendar with GNSS week numbers and day of year.
#[derive(Parser, Debug)]
#[command(
    name = "gnsscal",
    version,
    about = "Calendar with GNSS week numbers and day of year",
    after_help = "With no argument the current month is shown. A single YEAR shows the whole year."
)]
pub struct Cli {
    /// Show the previous, current and next month.
    #[arg(short = '3')]
    pub three_month: bool,

    /// Do not highlight today.
    #[arg(short = 'n', long = "no-highlight")]
    pub no_highlight: bool,

    /// Satellite system counting the weeks: GPS, QZS, GAL, BDS or GLO.
    #[arg(long, default_value = "GPS", value_name = "SYS")]
    pub satsys: String,

    /// How today is highlighted: reverse or underline.
    #[arg(long, default_value = "reverse")]
    pub style: HighlightStyle,

    /// Use this date (YYYY-MM-DD) as today instead of the system clock.
    #[arg(long, value_name = "DATE")]
    pub today: Option<CalendarDate>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// [[MONTH] YEAR]
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            args:         self.args.clone(),
            satsys:       self.satsys.clone(),
            three_month:  self.three_month,
            no_highlight: self.no_highlight,
            style:        self.style,
        }
    }
}
