use chrono::NaiveDate;
use colored::Colorize;

use crate::calendar::{self, ordinal};

use super::util;

fn show_date(date: NaiveDate, today: NaiveDate) {
    let season = calendar::classify(date);

    let when = format!("{}, {}", util::weekday_name(date), date);
    if date == today {
        println!("{} {}", when.bold(), "(today)".bright_black());
    } else {
        println!("{}", when.bold());
    }
    println!("{}", season.title);

    println!("  {} {}", "Season:".bright_black(), season.name);
    if let Some(week) = season.week {
        println!("  {}   {}", "Week:".bright_black(), ordinal(week));
    }
    println!(
        "  {}  {}",
        "Label:".bright_black(),
        util::in_color(&season.label, season.color)
    );
    println!(
        "  {}  {} {}",
        "Color:".bright_black(),
        util::swatch(season.color),
        season.color
    );
    println!("  {}  {}", "Theme:".bright_black(), season.theme);
}

pub fn show(dates: &[NaiveDate], today: NaiveDate) {
    let Some((&first, rest)) = dates.split_first() else {
        // Nothing to do
        return;
    };

    show_date(first, today);
    for &date in rest {
        println!();
        show_date(date, today);
    }
}
