//! Mapping a date to its season.
//!
//! The seasons are an ordered table of rules, each a predicate over the
//! date's [`Context`] and a function describing the date once the predicate
//! holds. The first matching rule wins. The predicates partition the year, so
//! the order only matters for readability and the fallback should never be
//! reached.

use chrono::{Datelike, NaiveDate};

use super::anchors::YearAnchors;
use super::season::{ordinal, LiturgicalColor, Season, SeasonDescriptor};
use super::util;

/// Everything the rules need to know about a date, derived once per call.
struct Context {
    date: NaiveDate,
    anchors: YearAnchors,
    /// The Christmas the date may belong to. In January, this is the
    /// Christmas of the previous year, which doesn't exist in chrono's first
    /// year.
    christmas: Option<NaiveDate>,
    /// Days from the first Sunday after that Christmas to the date, negative
    /// before that Sunday.
    since_christmas_sunday: i64,
}

impl Context {
    fn new(date: NaiveDate) -> Self {
        let anchors = YearAnchors::new(date.year());

        let (christmas, since_christmas) = if date.month() == 1 {
            // Jan 1 is exactly one week after Christmas
            let christmas = NaiveDate::from_ymd_opt(date.year() - 1, 12, 25);
            (christmas, i64::from(date.day0()) + 7)
        } else {
            let christmas = anchors.christmas;
            (Some(christmas), util::days_between(christmas, date))
        };

        // The first Sunday after Christmas is one to seven days after it
        let weekday = i64::from(date.weekday().num_days_from_sunday());
        let christmas_weekday = (weekday - since_christmas).rem_euclid(7);
        let since_christmas_sunday = since_christmas - (7 - christmas_weekday);

        Self {
            date,
            anchors,
            christmas,
            since_christmas_sunday,
        }
    }

    fn is_sunday(&self) -> bool {
        util::is_sunday(self.date)
    }

    /// `Lent, 3rd Sunday` on Sundays, `Lent, 3rd week` on other days.
    fn weekly_label(&self, name: &str, week: u32) -> String {
        let unit = if self.is_sunday() { "Sunday" } else { "week" };
        format!("{name}, {} {unit}", ordinal(week))
    }

    fn weekly(&self, season: Season, start: NaiveDate) -> SeasonDescriptor {
        self.numbered(season, util::week_of(start, self.date))
    }

    fn numbered(&self, season: Season, week: u32) -> SeasonDescriptor {
        SeasonDescriptor::new(season, self.weekly_label(season.name(), week)).with_week(week)
    }
}

struct Rule {
    applies: fn(&Context) -> bool,
    describe: fn(&Context) -> SeasonDescriptor,
}

static RULES: [Rule; 6] = [
    Rule {
        applies: is_advent,
        describe: describe_advent,
    },
    Rule {
        applies: is_christmas,
        describe: describe_christmas,
    },
    Rule {
        applies: is_epiphany,
        describe: describe_epiphany,
    },
    Rule {
        applies: is_lent,
        describe: describe_lent,
    },
    Rule {
        applies: is_easter,
        describe: describe_easter,
    },
    Rule {
        applies: is_after_pentecost,
        describe: describe_after_pentecost,
    },
];

// Advent lasts until the evening of Dec 24, which for whole days means up to
// and including Dec 24.
fn is_advent(cx: &Context) -> bool {
    cx.anchors.advent <= cx.date && cx.date < cx.anchors.christmas
}

fn describe_advent(cx: &Context) -> SeasonDescriptor {
    cx.weekly(Season::Advent, cx.anchors.advent)
}

fn is_christmas(cx: &Context) -> bool {
    cx.date >= cx.anchors.christmas || cx.date < cx.anchors.epiphany
}

/// Christmas Day is never also the first Sunday after Christmas. If it falls
/// on a Sunday, the weeks are counted from the Sunday after.
fn describe_christmas(cx: &Context) -> SeasonDescriptor {
    if cx.christmas == Some(cx.date) {
        SeasonDescriptor::new(Season::Christmas, "Christmas Day")
    } else if cx.since_christmas_sunday < 0 {
        SeasonDescriptor::new(Season::Christmas, "Christmastide, weekday")
    } else {
        let week = util::whole_weeks(cx.since_christmas_sunday) + 1;
        cx.numbered(Season::Christmas, week)
    }
}

fn is_epiphany(cx: &Context) -> bool {
    cx.anchors.epiphany <= cx.date && cx.date < cx.anchors.ash_wednesday
}

fn describe_epiphany(cx: &Context) -> SeasonDescriptor {
    if cx.date == cx.anchors.epiphany {
        SeasonDescriptor::new(Season::Epiphany, "Epiphany").with_color(LiturgicalColor::White)
    } else {
        cx.weekly(Season::Epiphany, cx.anchors.epiphany)
    }
}

fn is_lent(cx: &Context) -> bool {
    cx.anchors.ash_wednesday <= cx.date && cx.date < cx.anchors.easter
}

fn describe_lent(cx: &Context) -> SeasonDescriptor {
    cx.weekly(Season::Lent, cx.anchors.ash_wednesday)
}

fn is_easter(cx: &Context) -> bool {
    cx.anchors.easter <= cx.date && cx.date <= cx.anchors.pentecost
}

fn describe_easter(cx: &Context) -> SeasonDescriptor {
    if cx.date == cx.anchors.easter {
        SeasonDescriptor::new(Season::Easter, "Easter Day")
    } else if cx.date == cx.anchors.pentecost {
        SeasonDescriptor::new(Season::Pentecost, "Pentecost")
    } else {
        cx.weekly(Season::Easter, cx.anchors.easter)
    }
}

fn is_after_pentecost(cx: &Context) -> bool {
    cx.anchors.pentecost < cx.date && cx.date < cx.anchors.advent
}

fn describe_after_pentecost(cx: &Context) -> SeasonDescriptor {
    let season = Season::Ordinary;
    match util::weeks_since(cx.anchors.pentecost, cx.date) {
        0 => SeasonDescriptor::new(season, season.name()),
        1 => {
            let label = if cx.is_sunday() {
                "Trinity Sunday"
            } else {
                "Trinity week"
            };
            SeasonDescriptor::new(season, label)
                .with_color(LiturgicalColor::White)
                .with_week(1)
        }
        week => cx.numbered(season, week),
    }
}

fn fallback() -> SeasonDescriptor {
    SeasonDescriptor::new(Season::Ordinary, Season::Ordinary.name())
}

/// The season, color and label of a date.
pub fn classify(date: NaiveDate) -> SeasonDescriptor {
    let cx = Context::new(date);
    RULES
        .iter()
        .find(|rule| (rule.applies)(&cx))
        .map_or_else(fallback, |rule| (rule.describe)(&cx))
}
