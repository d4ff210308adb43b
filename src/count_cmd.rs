use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};
use weekday_span::{CalendarDate, DateRange};

use crate::cli::Cli;

/// JSON shape printed by `--json`.
#[derive(Debug, Serialize)]
struct Report {
    start:        CalendarDate,
    end:          CalendarDate,
    days:         u32,
    weekdays:     u32,
    weekend_days: u32,
}

impl From<DateRange> for Report {
    fn from(range: DateRange) -> Self {
        Self {
            start:        range.start(),
            end:          range.end(),
            days:         range.span_days(),
            weekdays:     range.weekdays(),
            weekend_days: range.weekend_days(),
        }
    }
}

/// Parse both dates, count, and print the result to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let output = render(cli)?;
    println!("{output}");
    Ok(())
}

fn parse_date(raw: &str) -> Result<CalendarDate> {
    let date = raw
        .parse::<CalendarDate>()
        .with_context(|| format!("invalid date `{raw}`, expected YYYY-MM-DD"))?;
    debug!(input = raw, %date, ordinal = %date.ordinal(), weekday = %date.weekday(), "parsed date");
    Ok(date)
}

fn render(cli: &Cli) -> Result<String> {
    let first = parse_date(&cli.first)?;
    let second = parse_date(&cli.second)?;

    let range = DateRange::new(first, second);
    let weekdays = range.weekdays();
    info!(%range, days = range.span_days(), weekdays, "counted weekdays");

    if cli.json {
        let report = Report::from(range);
        return serde_json::to_string(&report).context("failed to serialize report");
    }

    Ok(format!(
        "weekdays between {} and {} (inclusive): {weekdays}",
        range.start(),
        range.end()
    ))
}
