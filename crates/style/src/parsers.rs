//! nom parsers for length values used in document settings.

use crate::dimension::{Margins, PT_PER_MM};
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n};
use nom::character::complete::{char, space1};
use nom::combinator::{map_res, opt, recognize, value};
use nom::multi::separated_list1;
use nom::sequence::pair;
use nom::{IResult, Parser};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

fn digits(input: &str) -> IResult<&str, &str> {
    take_while_m_n(1, 10, |c: char| c.is_ascii_digit()).parse(input)
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digits, opt(pair(char('.'), digits)))),
                recognize(pair(char('.'), digits)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(72.0, tag_no_case("in")),
        value(PT_PER_MM * 10.0, tag_no_case("cm")),
        value(PT_PER_MM, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length with an optional unit (`"12pt"`, `"1in"`, `"10mm"`) into
/// points. A bare number is taken as points.
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, amount) = parse_f32(input)?;
    let (input, unit) = opt(parse_unit).parse(input)?;
    Ok((input, amount * unit.unwrap_or(1.0)))
}

/// Parses margin shorthand with 1, 2 or 4 lengths, in CSS order.
pub fn parse_margins(input: &str) -> Result<Margins, StyleParseError> {
    match separated_list1(space1, parse_length).parse(input.trim()) {
        Ok(("", parts)) => match parts.as_slice() {
            [all] => Ok(Margins::all(*all)),
            [y, x] => Ok(Margins {
                top: *y,
                right: *x,
                bottom: *y,
                left: *x,
            }),
            [top, right, bottom, left] => Ok(Margins {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(StyleParseError::Parse(format!(
                "Invalid number of values for margin shorthand: got {}, expected 1, 2, or 4.",
                parts.len()
            ))),
        },
        _ => Err(StyleParseError::Parse(format!(
            "Failed to parse margins value: '{}'",
            input
        ))),
    }
}

/// Runs a parser over the whole (trimmed) input.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}
