use chrono::NaiveDate;

use super::error::{Error, Result};
use super::util;

/// The `n`th Sunday (counting from 1) of a month.
///
/// Asking for a Sunday the month doesn't have is an ordinary outcome and
/// yields [`Error::WeekNotFound`].
pub fn nth_sunday(year: i32, month: u32, n: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth { year, month });
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::YearOutOfRange(year))?;
    let not_found = Error::WeekNotFound { year, month, n };

    let weeks = n.checked_sub(1).ok_or(not_found)?;
    let day = 1 + util::days_until_sunday(first) + 7 * i64::from(weeks);
    let day = u32::try_from(day).map_err(|_| not_found)?;

    // Fails exactly when the month ends before that day
    NaiveDate::from_ymd_opt(year, month, day).ok_or(not_found)
}
