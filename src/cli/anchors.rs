use chrono::NaiveDate;
use colored::Colorize;

use crate::calendar::{self, YearAnchors};

use super::util;

fn show_anchor(name: &str, date: NaiveDate) {
    let season = calendar::classify(date);
    println!(
        "  {:30} {:9}  {}  {} {}",
        name,
        util::weekday_name(date),
        date,
        util::swatch(season.color),
        season.label.bright_black(),
    );
}

pub fn anchors(anchors: &YearAnchors) {
    println!("{}", format!("Church year anchors of {}", anchors.year).bold());
    show_anchor("Epiphany", anchors.epiphany);
    show_anchor("Ash Wednesday", anchors.ash_wednesday);
    show_anchor("Easter", anchors.easter);
    show_anchor("Pentecost", anchors.pentecost);
    show_anchor("Trinity Sunday", anchors.trinity);
    show_anchor("First Sunday of Advent", anchors.advent);
    show_anchor("Christmas", anchors.christmas);
    show_anchor("First Sunday after Christmas", anchors.christmas_sunday);
}
