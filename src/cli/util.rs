use chrono::{Datelike, NaiveDate, Weekday};
use colored::{ColoredString, Colorize};

use crate::calendar::LiturgicalColor;

pub fn rgb(color: LiturgicalColor) -> (u8, u8, u8) {
    match color {
        LiturgicalColor::Purple => (0x6b, 0x21, 0xa8),
        LiturgicalColor::White => (0xf0, 0xf9, 0xff),
        LiturgicalColor::Green => (0x15, 0x80, 0x3d),
        LiturgicalColor::Red => (0xdc, 0x26, 0x26),
    }
}

/// A small block in the given color.
pub fn swatch(color: LiturgicalColor) -> ColoredString {
    let (r, g, b) = rgb(color);
    "  ".on_truecolor(r, g, b)
}

/// Text drawn in the given color, bold so that it holds up on dark
/// terminals.
pub fn in_color(text: &str, color: LiturgicalColor) -> ColoredString {
    let (r, g, b) = rgb(color);
    text.truecolor(r, g, b).bold()
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
