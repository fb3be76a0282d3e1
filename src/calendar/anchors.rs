use chrono::NaiveDate;

use super::easter::easter;
use super::util;

/// The fixed and movable dates that delimit the seasons of one civil year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearAnchors {
    pub year: i32,
    pub epiphany: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub easter: NaiveDate,
    pub pentecost: NaiveDate,
    pub trinity: NaiveDate,
    /// First Sunday of Advent, the Sunday between Nov 27 and Dec 3.
    pub advent: NaiveDate,
    pub christmas: NaiveDate,
    /// First Sunday strictly after Christmas. When Christmas falls on a
    /// Sunday, this is the Sunday one week later and may lie in the next
    /// year.
    pub christmas_sunday: NaiveDate,
}

impl YearAnchors {
    /// # Panics
    ///
    /// Panics if `year` lies outside the range of years chrono can represent.
    pub fn new(year: i32) -> Self {
        let fixed = |month, day| {
            NaiveDate::from_ymd_opt(year, month, day).expect("year is representable")
        };

        let easter = easter(year);
        let pentecost = util::add_days(easter, 49);
        let christmas = fixed(12, 25);

        Self {
            year,
            epiphany: fixed(1, 6),
            ash_wednesday: util::add_days(easter, -46),
            easter,
            pentecost,
            trinity: util::add_days(pentecost, 7),
            advent: util::first_sunday_on_or_after(fixed(11, 27)),
            christmas,
            christmas_sunday: util::first_sunday_after(christmas),
        }
    }

    /// Whether chrono can represent every anchor of `year`.
    pub fn supports(year: i32) -> bool {
        NaiveDate::from_ymd_opt(year, 1, 1).is_some()
            && NaiveDate::from_ymd_opt(year, 12, 31).is_some()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Weekday};

    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn anchors_2024() {
        let a = YearAnchors::new(2024);
        assert_eq!(a.easter, ymd(2024, 3, 31));
        assert_eq!(a.ash_wednesday, ymd(2024, 2, 14));
        assert_eq!(a.pentecost, ymd(2024, 5, 19));
        assert_eq!(a.trinity, ymd(2024, 5, 26));
        assert_eq!(a.advent, ymd(2024, 12, 1));
        assert_eq!(a.christmas, ymd(2024, 12, 25));
        assert_eq!(a.christmas_sunday, ymd(2024, 12, 29));
        assert_eq!(a.epiphany, ymd(2024, 1, 6));
    }

    #[test]
    fn christmas_sunday_skips_christmas_itself() {
        // Christmas 2022 was a Sunday
        let a = YearAnchors::new(2022);
        assert_eq!(a.christmas_sunday, ymd(2023, 1, 1));
    }

    #[test]
    fn advent_starts_on_a_sunday_between_nov_27_and_dec_3() {
        for year in 1583..=2500 {
            let advent = YearAnchors::new(year).advent;
            assert_eq!(advent.weekday(), Weekday::Sun, "advent {year} is {advent}");
            assert!(advent >= ymd(year, 11, 27), "advent {year} too early");
            assert!(advent <= ymd(year, 12, 3), "advent {year} too late");
        }
    }

    #[test]
    fn ash_wednesday_is_a_wednesday() {
        for year in 1900..=2100 {
            let a = YearAnchors::new(year);
            assert_eq!(a.ash_wednesday.weekday(), Weekday::Wed, "{year}");
            assert_eq!(a.pentecost.weekday(), Weekday::Sun, "{year}");
            assert_eq!(a.trinity.weekday(), Weekday::Sun, "{year}");
        }
    }

    #[test]
    fn extreme_years_are_supported() {
        assert!(YearAnchors::supports(NaiveDate::MAX.year()));
        assert!(YearAnchors::supports(NaiveDate::MIN.year()));
        assert!(!YearAnchors::supports(NaiveDate::MAX.year() + 1));

        let last = YearAnchors::new(NaiveDate::MAX.year());
        assert!(last.christmas_sunday >= last.christmas);
    }
}
