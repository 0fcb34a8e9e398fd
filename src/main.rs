mod cli;
mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use gnsscal::{CalendarConfig, CalendarDate};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Reads the local date once. Every view of one run shares it.
fn local_today() -> Result<CalendarDate> {
    let now = Local::now().date_naive();
    let year = u16::try_from(now.year()).context("system clock year out of range")?;
    let month = u8::try_from(now.month()).context("system clock month out of range")?;
    let day = u8::try_from(now.day()).context("system clock day out of range")?;
    CalendarDate::new(year, month, day).context("system clock date is not supported")
}

/// Writes the calendar to `out`. A reader that went away early is not an error.
fn emit(mut out: impl Write, config: &CalendarConfig) -> Result<()> {
    match writeln!(out, "{config}").and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("stdout closed early");
            Ok(())
        },
        result => result.context("failed to write calendar"),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let today = match cli.today {
        Some(date) => date,
        None => local_today()?,
    };
    log::info!("today is {today}");

    let config = CalendarConfig::resolve(&cli.options(), today)?;
    emit(io::stdout().lock(), &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnsscal::{Layout, SatSystem};

    struct Failing(io::ErrorKind);

    impl Write for Failing {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(self.0.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn config() -> CalendarConfig {
        let today = CalendarDate::new(2021, 2, 10).unwrap();
        CalendarConfig::new(today, today, SatSystem::Gps, Layout::OneYear).with_highlight(false)
    }

    #[test]
    fn test_emit_writes_calendar() {
        let mut out = Vec::new();
        emit(&mut out, &config()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("GPS"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_emit_ignores_closed_reader() {
        assert!(emit(Failing(io::ErrorKind::BrokenPipe), &config()).is_ok());
    }

    #[test]
    fn test_emit_reports_other_failures() {
        let err = emit(Failing(io::ErrorKind::PermissionDenied), &config()).unwrap_err();
        assert!(err.to_string().contains("failed to write calendar"));
    }
}
