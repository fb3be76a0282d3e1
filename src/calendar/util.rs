use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Move a date by a number of days, clamping to the representable range
/// instead of overflowing.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// Whole days from `from` to `to`, negative if `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// How many days from `date` until the next Sunday, 0 if `date` is one.
pub fn days_until_sunday(date: NaiveDate) -> i64 {
    (7 - i64::from(date.weekday().num_days_from_sunday())) % 7
}

pub fn first_sunday_on_or_after(date: NaiveDate) -> NaiveDate {
    add_days(date, days_until_sunday(date))
}

/// The first Sunday strictly after `date`. A Sunday maps to the Sunday one
/// week later.
pub fn first_sunday_after(date: NaiveDate) -> NaiveDate {
    first_sunday_on_or_after(add_days(date, 1))
}

pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

/// 1-based week index of `date` in a period starting at `start`.
pub fn week_of(start: NaiveDate, date: NaiveDate) -> u32 {
    weeks_since(start, date) + 1
}

/// Completed weeks between `start` and `date`. Dates before `start` count as
/// zero.
pub fn weeks_since(start: NaiveDate, date: NaiveDate) -> u32 {
    whole_weeks(days_between(start, date))
}

/// Completed weeks in a number of days, zero if negative.
pub fn whole_weeks(days: i64) -> u32 {
    u32::try_from(days.div_euclid(7).max(0)).unwrap_or(u32::MAX)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "month",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn sunday_stays_put_for_on_or_after() {
        // 2024-03-31 is a Sunday
        assert_eq!(first_sunday_on_or_after(ymd(2024, 3, 31)), ymd(2024, 3, 31));
        assert_eq!(first_sunday_on_or_after(ymd(2024, 4, 1)), ymd(2024, 4, 7));
    }

    #[test]
    fn sunday_moves_a_week_for_strictly_after() {
        assert_eq!(first_sunday_after(ymd(2022, 12, 25)), ymd(2023, 1, 1));
        assert_eq!(first_sunday_after(ymd(2024, 12, 25)), ymd(2024, 12, 29));
    }

    #[test]
    fn weeks_count_from_start() {
        let start = ymd(2024, 2, 14);
        assert_eq!(week_of(start, start), 1);
        assert_eq!(week_of(start, ymd(2024, 2, 20)), 1);
        assert_eq!(week_of(start, ymd(2024, 2, 21)), 2);
        assert_eq!(weeks_since(start, ymd(2024, 2, 1)), 0);
        assert_eq!(whole_weeks(13), 1);
        assert_eq!(whole_weeks(14), 2);
        assert_eq!(whole_weeks(-1), 0);
    }

    #[test]
    fn day_arithmetic_saturates() {
        assert_eq!(add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(add_days(NaiveDate::MIN, -1), NaiveDate::MIN);
        assert_eq!(add_days(ymd(2024, 2, 28), 2), ymd(2024, 3, 1));
    }
}
