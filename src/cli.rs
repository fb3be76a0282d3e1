use std::path::PathBuf;
use std::process;

use chrono::{Datelike, Duration, Local, NaiveDate};
use clap::Parser;

use crate::calendar::{self, YearAnchors};

use self::config::{ColorMode, Config};
use self::error::{Error, Result};
use self::parse::{CliDate, CliDatum};

mod anchors;
mod config;
mod error;
mod parse;
mod range;
mod show;
mod util;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Args {
    /// File to load the configuration from
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Overwrite the current date (`today`, `2024-12-25`, `2026-02/3` for the
    /// 3rd Sunday of February 2026, `today+2w`, ...)
    #[arg(short, long, default_value = "today")]
    date: String,
    /// When to use colors
    #[arg(long, value_enum)]
    color: Option<ColorMode>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Shows the season of one or more dates [default]
    #[command(alias = "s")]
    Show {
        /// Dates to show, in the same format as `--date`
        dates: Vec<String>,
    },
    /// Lists the days around the current date with their seasons
    #[command(alias = "r")]
    Range {
        /// How many days to include before the current date
        #[arg(short, long)]
        before: Option<u32>,
        /// How many days to include after the current date
        #[arg(short, long)]
        after: Option<u32>,
    },
    /// Shows the nth Sunday of a month
    Sunday { year: i32, month: u32, n: u32 },
    /// Lists the dates a year's seasons are derived from
    Anchors {
        /// Defaults to the year of the current date
        year: Option<i32>,
    },
}

fn resolve(date: CliDate, today: NaiveDate) -> Result<NaiveDate> {
    let datum = match date.datum {
        CliDatum::Date(date) => date,
        CliDatum::Today => today,
        CliDatum::NthSunday { year, month, n } => calendar::nth_sunday(year, month, n)?,
    };
    datum
        .checked_add_signed(Duration::days(date.delta))
        .ok_or(Error::DateOutOfRange)
}

fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let date: CliDate = input.parse().map_err(|error| Error::ParseDate {
        input: input.to_string(),
        error,
    })?;
    resolve(date, today)
}

fn run_command(args: Args, config: Config) -> Result<()> {
    let today = Local::now().date_naive();
    let date = parse_date(&args.date, today)?;

    match args.command {
        None => show::show(&[date], today),
        Some(Command::Show { dates }) if dates.is_empty() => show::show(&[date], today),
        Some(Command::Show { dates }) => {
            let dates = dates
                .iter()
                .map(|input| parse_date(input, today))
                .collect::<Result<Vec<_>>>()?;
            show::show(&dates, today);
        }
        Some(Command::Range { before, after }) => {
            let before = before.unwrap_or(config.before);
            let after = after.unwrap_or(config.after);
            let from = date
                .checked_sub_signed(Duration::days(before.into()))
                .ok_or(Error::DateOutOfRange)?;
            let to = date
                .checked_add_signed(Duration::days(after.into()))
                .ok_or(Error::DateOutOfRange)?;
            range::range(from, to, today);
        }
        Some(Command::Sunday { year, month, n }) => {
            let date = calendar::nth_sunday(year, month, n)?;
            show::show(&[date], today);
        }
        Some(Command::Anchors { year }) => {
            let year = year.unwrap_or_else(|| date.year());
            if !YearAnchors::supports(year) {
                return Err(calendar::Error::YearOutOfRange(year).into());
            }
            anchors::anchors(&YearAnchors::new(year));
        }
    }

    Ok(())
}

pub fn run() {
    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            e.eprint(args.color.unwrap_or(ColorMode::Auto).choice());
            process::exit(1);
        }
    };

    let color = args.color.unwrap_or(config.color);
    color.apply();

    if let Err(e) = run_command(args, config) {
        e.eprint(color.choice());
        process::exit(1);
    }
}
