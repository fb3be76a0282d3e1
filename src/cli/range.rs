use chrono::NaiveDate;
use colored::Colorize;

use crate::calendar::{self, Season, SeasonDescriptor};

use super::util;

struct RangeLines {
    today: NaiveDate,
    season: Option<Season>,
    result: String,
}

impl RangeLines {
    fn new(today: NaiveDate) -> Self {
        Self {
            today,
            season: None,
            result: String::new(),
        }
    }

    fn push(&mut self, line: &str) {
        self.result.push_str(line);
        self.result.push('\n');
    }

    /// A header whenever the season changes.
    fn display_title(&mut self, season: &SeasonDescriptor) {
        if self.season == Some(season.season) {
            return;
        }
        if self.season.is_some() {
            self.push("");
        }
        self.push(&format!("{}", season.title.bold()));
        self.season = Some(season.season);
    }

    fn display_day(&mut self, date: NaiveDate) {
        let season = calendar::classify(date);
        self.display_title(&season);

        let today = date == self.today;
        let styled = |s: &str| {
            if today {
                s.bright_cyan().bold()
            } else {
                s.cyan()
            }
        };

        let weekday = format!("{:9}", util::weekday_name(date));
        self.push(&format!(
            "{} {}  {}  {} {}",
            styled("==="),
            styled(&weekday),
            styled(&date.to_string()),
            util::swatch(season.color),
            season.label,
        ));
    }
}

/// One line per day from `from` to `to`, both inclusive.
pub fn range(from: NaiveDate, to: NaiveDate, today: NaiveDate) {
    let mut lines = RangeLines::new(today);
    for date in from.iter_days().take_while(|date| *date <= to) {
        lines.display_day(date);
    }
    print!("{}", lines.result);
}
