use std::result;

use super::season;
use super::util;

fn month_name(month: &u32) -> &'static str {
    util::month_name(*month)
}

fn ordinal(n: &u32) -> String {
    season::ordinal(*n)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The month has fewer Sundays than requested.
    #[error("No such week: {} {year} has no {} Sunday", month_name(.month), ordinal(.n))]
    WeekNotFound { year: i32, month: u32, n: u32 },
    #[error("Invalid month {month} in year {year}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("Year {0} is outside the supported range")]
    YearOutOfRange(i32),
}

pub type Result<T> = result::Result<T, Error>;
