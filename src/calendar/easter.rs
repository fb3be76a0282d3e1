use chrono::NaiveDate;

/// Month and day of Easter Sunday in the given year, using the anonymous
/// Gregorian computus (Meeus/Jones/Butcher).
///
/// Floor division and non-negative remainders keep this correct for
/// proleptic years before year 1.
pub fn easter_month_day(year: i32) -> (u32, u32) {
    let year = i64::from(year);

    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);

    let n = h + l - 7 * m + 114;
    let month = n.div_euclid(31);
    let day = n.rem_euclid(31) + 1;

    // month is 3 or 4 and day is at most 31
    (month as u32, day as u32)
}

/// Date of Easter Sunday in the given year.
///
/// # Panics
///
/// Panics if `year` lies outside the range of years chrono can represent.
pub fn easter(year: i32) -> NaiveDate {
    let (month, day) = easter_month_day(year);
    NaiveDate::from_ymd_opt(year, month, day).expect("year is representable")
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Weekday};

    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn known_dates() {
        assert_eq!(easter(2024), ymd(2024, 3, 31));
        assert_eq!(easter(2025), ymd(2025, 4, 20));
        assert_eq!(easter(2000), ymd(2000, 4, 23));
        assert_eq!(easter(1818), ymd(1818, 3, 22));
        assert_eq!(easter(2038), ymd(2038, 4, 25));
        assert_eq!(easter(2026), ymd(2026, 4, 5));
    }

    #[test]
    fn always_a_sunday_within_bounds() {
        for year in 1900..=2100 {
            let date = easter(year);
            assert_eq!(date.weekday(), Weekday::Sun, "easter {year} is {date}");
            assert!(date >= ymd(year, 3, 22), "easter {year} too early: {date}");
            assert!(date <= ymd(year, 4, 25), "easter {year} too late: {date}");
        }
    }

    #[test]
    fn agrees_with_computus_crate() {
        for year in 1583..=4099 {
            let expected = computus::gregorian(year).unwrap();
            assert_eq!(
                easter_month_day(year),
                (expected.month, expected.day),
                "easter {year}"
            );
        }
    }
}
