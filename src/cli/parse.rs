use std::result;
use std::str::FromStr;

use chrono::NaiveDate;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::Files;
use pest::error::{ErrorVariant, InputLocation};
use pest::iterators::Pair;
use pest::{Parser, Span};
use termcolor::StandardStream;

use crate::error::Eprint;

use super::config::{ColorMode, Config};

#[derive(pest_derive::Parser)]
#[grammar = "cli/grammar.pest"]
struct CliParser;

pub type Error = pest::error::Error<Rule>;
pub type Result<T> = result::Result<T, Error>;

/// Larger than the whole range of dates chrono can represent.
const MAX_DELTA_DAYS: i64 = 200_000_000;

/// A parse error in a single, unnamed piece of text.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct ParseError {
    error: Box<Error>,
}

impl ParseError {
    pub fn new(error: Error) -> Self {
        Self {
            error: Box::new(error),
        }
    }
}

impl<'a, F: Files<'a, FileId = ()>> Eprint<'a, F> for ParseError {
    fn eprint<'f: 'a>(&self, files: &'f F, out: &mut StandardStream) {
        let range = match self.error.location {
            InputLocation::Pos(at) => at..at,
            InputLocation::Span((start, end)) => start..end,
        };
        let diagnostic = Diagnostic::error()
            .with_message(self.error.variant.message())
            .with_labels(vec![Label::primary((), range)]);
        Self::emit_diagnostic(files, out, &diagnostic);
    }
}

fn error<S: Into<String>>(span: Span<'_>, message: S) -> Error {
    Error::new_from_span(
        ErrorVariant::CustomError {
            message: message.into(),
        },
        span,
    )
}

fn fail<S: Into<String>, T>(span: Span<'_>, message: S) -> Result<T> {
    Err(error(span, message))
}

fn from_str_via_parse<P, R>(s: &str, rule: Rule, parse: P) -> result::Result<R, ParseError>
where
    P: FnOnce(Pair<'_, Rule>) -> Result<R>,
{
    let mut pairs = CliParser::parse(rule, s).map_err(ParseError::new)?;
    let p = pairs.next().unwrap();
    assert_eq!(pairs.next(), None);

    parse(p).map_err(ParseError::new)
}

fn parse_number<T: FromStr>(p: Pair<'_, Rule>) -> Result<T> {
    assert_eq!(p.as_rule(), Rule::number);
    match p.as_str().parse() {
        Ok(n) => Ok(n),
        Err(_) => fail(p.as_span(), "number too large"),
    }
}

fn parse_month(p: Pair<'_, Rule>) -> Result<u32> {
    assert_eq!(p.as_rule(), Rule::month);
    let month = p.as_str().parse().unwrap();
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        fail(p.as_span(), "invalid month")
    }
}

///////////
// Dates //
///////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliDatum {
    Date(NaiveDate),
    /// The `n`th Sunday of a month, resolved later since it may not exist.
    NthSunday {
        year: i32,
        month: u32,
        n: u32,
    },
    Today,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliDate {
    pub datum: CliDatum,
    /// Days to move the datum by.
    pub delta: i64,
}

fn parse_datum(p: Pair<'_, Rule>) -> Result<NaiveDate> {
    assert_eq!(p.as_rule(), Rule::datum);
    let span = p.as_span();
    let mut p = p.into_inner();

    let year = p.next().unwrap().as_str().parse().unwrap();
    let month = parse_month(p.next().unwrap())?;
    let day = p.next().unwrap().as_str().parse().unwrap();

    assert_eq!(p.next(), None);

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => Ok(date),
        None => fail(span, "invalid date"),
    }
}

fn parse_nth_sunday(p: Pair<'_, Rule>) -> Result<CliDatum> {
    assert_eq!(p.as_rule(), Rule::nth_sunday);
    let mut p = p.into_inner();

    let year = p.next().unwrap().as_str().parse().unwrap();
    let month = parse_month(p.next().unwrap())?;
    let n = parse_number(p.next().unwrap())?;

    assert_eq!(p.next(), None);

    Ok(CliDatum::NthSunday { year, month, n })
}

fn parse_cli_datum(p: Pair<'_, Rule>) -> Result<CliDatum> {
    assert_eq!(p.as_rule(), Rule::cli_datum);
    let p = p.into_inner().next().unwrap();
    Ok(match p.as_rule() {
        Rule::datum => CliDatum::Date(parse_datum(p)?),
        Rule::nth_sunday => parse_nth_sunday(p)?,
        Rule::today => CliDatum::Today,
        _ => unreachable!(),
    })
}

fn parse_delta_step(p: Pair<'_, Rule>) -> Result<i64> {
    assert_eq!(p.as_rule(), Rule::delta_step);
    let span = p.as_span();
    let mut p = p.into_inner();

    let negative = p.next().unwrap().as_str() == "-";
    let amount: i64 = parse_number(p.next().unwrap())?;
    let per_unit = match p.next().unwrap().as_str() {
        "d" => 1,
        "w" => 7,
        _ => unreachable!(),
    };

    assert_eq!(p.next(), None);

    match amount.checked_mul(per_unit) {
        Some(days) if days <= MAX_DELTA_DAYS => Ok(if negative { -days } else { days }),
        _ => fail(span, "delta too large"),
    }
}

fn parse_cli_date(p: Pair<'_, Rule>) -> Result<CliDate> {
    assert_eq!(p.as_rule(), Rule::cli_date);
    let span = p.as_span();
    let mut p = p.into_inner();

    let datum = parse_cli_datum(p.next().unwrap())?;
    let mut delta = 0_i64;
    for p in p {
        match p.as_rule() {
            Rule::delta_step => delta += parse_delta_step(p)?,
            Rule::EOI => {}
            _ => unreachable!(),
        }
        if delta.abs() > MAX_DELTA_DAYS {
            return fail(span, "delta too large");
        }
    }

    Ok(CliDate { datum, delta })
}

impl FromStr for CliDate {
    type Err = ParseError;

    fn from_str(s: &str) -> result::Result<Self, ParseError> {
        from_str_via_parse(s, Rule::cli_date, parse_cli_date)
    }
}

////////////
// Config //
////////////

fn parse_days(p: Pair<'_, Rule>) -> Result<u32> {
    assert_eq!(p.as_rule(), Rule::value);
    match p.as_str().parse() {
        Ok(days) => Ok(days),
        Err(_) => fail(p.as_span(), "expected a number of days"),
    }
}

fn parse_color_mode(p: Pair<'_, Rule>) -> Result<ColorMode> {
    assert_eq!(p.as_rule(), Rule::value);
    match p.as_str() {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => fail(p.as_span(), "expected auto, always or never"),
    }
}

fn parse_setting(p: Pair<'_, Rule>, config: &mut Config) -> Result<()> {
    assert_eq!(p.as_rule(), Rule::setting);
    let mut p = p.into_inner();

    let key = p.next().unwrap();
    let value = p.next().unwrap();

    assert_eq!(p.next(), None);

    match key.as_str() {
        "color" => config.color = parse_color_mode(value)?,
        "before" => config.before = parse_days(value)?,
        "after" => config.after = parse_days(value)?,
        _ => return fail(key.as_span(), "unknown setting"),
    }
    Ok(())
}

fn parse_config(p: Pair<'_, Rule>) -> Result<Config> {
    assert_eq!(p.as_rule(), Rule::config);

    let mut config = Config::default();
    for p in p.into_inner() {
        match p.as_rule() {
            Rule::setting => parse_setting(p, &mut config)?,
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }

    Ok(config)
}

impl FromStr for Config {
    type Err = ParseError;

    fn from_str(s: &str) -> result::Result<Self, ParseError> {
        from_str_via_parse(s, Rule::config, parse_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn date(s: &str) -> CliDate {
        s.parse().unwrap()
    }

    fn message(e: ParseError) -> String {
        e.error.variant.message().into_owned()
    }

    #[test]
    fn plain_dates() {
        let d = date("2024-12-25");
        assert_eq!(d.datum, CliDatum::Date(ymd(2024, 12, 25)));
        assert_eq!(d.delta, 0);
        assert_eq!(date("2024-3-1").datum, CliDatum::Date(ymd(2024, 3, 1)));
    }

    #[test]
    fn today_with_deltas() {
        assert_eq!(date("today").datum, CliDatum::Today);
        assert_eq!(date("t").datum, CliDatum::Today);
        assert_eq!(date("t+1w").delta, 7);
        assert_eq!(date("today-2d").delta, -2);
        assert_eq!(date("t+1w-3d+10d").delta, 14);
    }

    #[test]
    fn nth_sunday() {
        let d = date("2026-02/5+1d");
        assert_eq!(
            d.datum,
            CliDatum::NthSunday {
                year: 2026,
                month: 2,
                n: 5
            }
        );
        assert_eq!(d.delta, 1);
    }

    #[test]
    fn invalid_dates() {
        let e = "2026-02-30".parse::<CliDate>().unwrap_err();
        assert_eq!(message(e), "invalid date");

        let e = "2026-13/1".parse::<CliDate>().unwrap_err();
        assert_eq!(message(e), "invalid month");

        assert!("tomorrow".parse::<CliDate>().is_err());
        assert!("2026-01-01 ".parse::<CliDate>().is_err());
        assert!("+1d".parse::<CliDate>().is_err());
    }

    #[test]
    fn huge_deltas() {
        let e = "t+99999999999999999999d".parse::<CliDate>().unwrap_err();
        assert_eq!(message(e), "number too large");

        let e = "t+100000000w".parse::<CliDate>().unwrap_err();
        assert_eq!(message(e), "delta too large");

        let e = "t+150000000d+150000000d".parse::<CliDate>().unwrap_err();
        assert_eq!(message(e), "delta too large");
    }

    #[test]
    fn empty_config() {
        assert_eq!("".parse::<Config>().unwrap(), Config::default());
        assert_eq!("\n\n  \n".parse::<Config>().unwrap(), Config::default());
    }

    #[test]
    fn config_settings() {
        let config: Config = "# liturgy settings\n\
                              color = never\n\
                              \n\
                              before=7   # a week\n\
                              \tafter = 21\n"
            .parse()
            .unwrap();
        assert_eq!(
            config,
            Config {
                color: ColorMode::Never,
                before: 7,
                after: 21,
            }
        );
    }

    #[test]
    fn config_errors() {
        let e = "colour = never".parse::<Config>().unwrap_err();
        assert_eq!(message(e), "unknown setting");

        let e = "color = sometimes".parse::<Config>().unwrap_err();
        assert_eq!(message(e), "expected auto, always or never");

        let e = "before = -3".parse::<Config>().unwrap_err();
        assert_eq!(message(e), "expected a number of days");

        assert!("before 3".parse::<Config>().is_err());
    }
}
