//! Stateless, per-line classification of flattened pattern text.
//!
//! The grammar is deliberately shallow: a line's role depends only on its own
//! leading characters, never on the lines around it.

use crate::sanitize::sanitize;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::{char, digit1, space1};
use nom::combinator::{eof, recognize};
use nom::sequence::terminated;
use nom::{IResult, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A `#` heading; the level is the length of the `#` run, unclamped.
    Heading(usize),
    Blank,
    Bullet,
    Numbered,
    Narrative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    /// The sanitized content with any heading or bullet marker removed.
    pub text: String,
}

impl ClassifiedLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// `#`-run followed by whitespace or end of line; yields the run length.
fn heading_marker(input: &str) -> IResult<&str, usize> {
    terminated(take_while1(|c: char| c == '#'), alt((space1, eof)))
        .map(|hashes: &str| hashes.len())
        .parse(input)
}

fn bullet_marker(input: &str) -> IResult<&str, &str> {
    alt((
        tag("- "),
        tag("* "),
        terminated(alt((tag("-"), tag("*"))), eof),
    ))
    .parse(input)
}

fn numbered_marker(input: &str) -> IResult<&str, &str> {
    recognize(terminated(digit1, char('.'))).parse(input)
}

/// Sanitizes `line` and classifies it.
pub fn classify(line: &str) -> ClassifiedLine {
    classify_sanitized(&sanitize(line))
}

/// Classifies a line that has already been through [`sanitize`].
pub fn classify_sanitized(line: &str) -> ClassifiedLine {
    if let Ok((rest, level)) = heading_marker(line) {
        let text = rest.trim_start_matches(|c: char| c == '#' || c.is_whitespace());
        return ClassifiedLine::new(LineKind::Heading(level), text.trim());
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ClassifiedLine::new(LineKind::Blank, "");
    }
    if let Ok((rest, _)) = bullet_marker(trimmed) {
        return ClassifiedLine::new(LineKind::Bullet, rest.trim());
    }
    if numbered_marker(trimmed).is_ok() {
        return ClassifiedLine::new(LineKind::Numbered, trimmed);
    }
    ClassifiedLine::new(LineKind::Narrative, trimmed)
}

/// Classifies every line of `text`.
pub fn classify_text(text: &str) -> Vec<ClassifiedLine> {
    let lines: Vec<ClassifiedLine> = text.lines().map(classify).collect();
    log::debug!("Classified {} lines", lines.len());
    lines
}
