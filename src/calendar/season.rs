use std::fmt;

/// The liturgical seasons. [`Season::Pentecost`] is the day of Pentecost
/// only; the weeks after it are [`Season::Ordinary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Advent,
    Christmas,
    Epiphany,
    Lent,
    Easter,
    Pentecost,
    Ordinary,
}

impl Season {
    /// Short English name (`Advent`, `Lent`, `Season after Pentecost`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Advent => "Advent",
            Self::Christmas => "Christmas",
            Self::Epiphany => "Epiphany",
            Self::Lent => "Lent",
            Self::Easter => "Easter",
            Self::Pentecost => "Pentecost",
            Self::Ordinary => "Season after Pentecost",
        }
    }

    /// Korean name as used by the congregations this calendar was made for.
    pub fn korean_name(self) -> &'static str {
        match self {
            Self::Advent => "대림절",
            Self::Christmas => "성탄절",
            Self::Epiphany => "주현절",
            Self::Lent => "사순절",
            Self::Easter => "부활절",
            Self::Pentecost => "성령강림절",
            Self::Ordinary => "창조절 (평주일)",
        }
    }

    /// Bilingual header, e.g. `Lent · 사순절`.
    pub fn title(self) -> String {
        format!("{} · {}", self.name(), self.korean_name())
    }

    pub fn theme(self) -> &'static str {
        match self {
            Self::Advent => "Waiting, repentance, the coming of the King",
            Self::Christmas => "Joy, light, purity, celebration",
            Self::Epiphany => "Revelation to the world, growth and mission",
            Self::Lent => "Repentance, self-denial, suffering",
            Self::Easter => "Victory, joy, eternal life",
            Self::Pentecost => "Fire of the Spirit, zeal, martyrdom, the church",
            Self::Ordinary => "Growth in faith, hope, maturity",
        }
    }

    /// The color in force on an ordinary day of the season. Single feast days
    /// may override it.
    pub fn color(self) -> LiturgicalColor {
        match self {
            Self::Advent | Self::Lent => LiturgicalColor::Purple,
            Self::Christmas | Self::Easter => LiturgicalColor::White,
            Self::Epiphany | Self::Ordinary => LiturgicalColor::Green,
            Self::Pentecost => LiturgicalColor::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiturgicalColor {
    Purple,
    White,
    Green,
    Red,
}

impl LiturgicalColor {
    pub fn name(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::White => "white",
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for LiturgicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Everything there is to say about a single date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonDescriptor {
    pub season: Season,
    /// Short season name.
    pub name: &'static str,
    pub color: LiturgicalColor,
    /// Season name plus week within the season, e.g. `Lent, 3rd Sunday`.
    pub label: String,
    pub title: String,
    /// Ordinal week within the season, if the label carries one.
    pub week: Option<u32>,
    pub theme: &'static str,
}

impl SeasonDescriptor {
    /// A descriptor with the season's own name and color and the given label.
    pub fn new(season: Season, label: impl Into<String>) -> Self {
        Self {
            season,
            name: season.name(),
            color: season.color(),
            label: label.into(),
            title: season.title(),
            week: None,
            theme: season.theme(),
        }
    }

    pub fn with_color(mut self, color: LiturgicalColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_week(mut self, week: u32) -> Self {
        self.week = Some(week);
        self
    }
}

static ORDINALS: [&str; 30] = [
    "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th", "10th", "11th", "12th", "13th",
    "14th", "15th", "16th", "17th", "18th", "19th", "20th", "21st", "22nd", "23rd", "24th", "25th",
    "26th", "27th", "28th", "29th", "30th",
];

/// `1` becomes `1st`, `2` becomes `2nd` and so on. Numbers past the table
/// (and zero) fall back to `{n}th`.
pub fn ordinal(n: u32) -> String {
    let index = usize::try_from(n).ok().and_then(|n| n.checked_sub(1));
    match index.and_then(|i| ORDINALS.get(i)) {
        Some(word) => word.to_string(),
        None => format!("{n}th"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(23), "23rd");
        assert_eq!(ordinal(30), "30th");
        assert_eq!(ordinal(31), "31th");
        assert_eq!(ordinal(0), "0th");
    }

    #[test]
    fn seasonal_colors() {
        assert_eq!(Season::Advent.color(), LiturgicalColor::Purple);
        assert_eq!(Season::Lent.color(), LiturgicalColor::Purple);
        assert_eq!(Season::Christmas.color(), LiturgicalColor::White);
        assert_eq!(Season::Easter.color(), LiturgicalColor::White);
        assert_eq!(Season::Epiphany.color(), LiturgicalColor::Green);
        assert_eq!(Season::Ordinary.color(), LiturgicalColor::Green);
        assert_eq!(Season::Pentecost.color(), LiturgicalColor::Red);
    }

    #[test]
    fn descriptor_builders() {
        let d = SeasonDescriptor::new(Season::Epiphany, "Epiphany")
            .with_color(LiturgicalColor::White)
            .with_week(2);
        assert_eq!(d.name, "Epiphany");
        assert_eq!(d.title, "Epiphany · 주현절");
        assert_eq!(d.color, LiturgicalColor::White);
        assert_eq!(d.week, Some(2));
    }
}
