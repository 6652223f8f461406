//! Finds round/row range references such as `"Rnds 5-10"` in a line.
use gurumi_types::RoundRange;
use once_cell::sync::Lazy;
use regex::Regex;

static ROUND_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:Rnds?|Rows?|Rs?|Varv|Rounds?)\.?\s*([0-9]+)\s*(?:-|–|to)\s*(?:(?:Rnds?|Rows?|Rs?|Varv|Rounds?)\.?\s*)?([0-9]+)",
    )
    .unwrap()
});

/// The first range reference in `line`, if it is a valid [`RoundRange`].
///
/// Only the first match counts: a later valid range is not considered when
/// the first one is out of bounds.
pub fn find_round_range(line: &str) -> Option<RoundRange> {
    let caps = ROUND_RANGE_REGEX.captures(line)?;
    let start = caps[1].parse::<u32>().ok()?;
    let end = caps[2].parse::<u32>().ok()?;
    let range = RoundRange::new(start, end);
    if range.is_none() {
        log::debug!("Ignoring round range {}-{} in '{}'", start, end, line);
    }
    range
}

/// Counter tokens for the range in `line`, e.g. `["5", ..., "9", "|", "10"]`.
pub fn round_counter(line: &str) -> Option<Vec<String>> {
    find_round_range(line).map(|range| range.counter_tokens())
}

/// Counter tokens joined with spaces, e.g. `"5 6 7 8 9 | 10"`.
pub fn round_counter_text(line: &str) -> Option<String> {
    find_round_range(line).map(|range| range.counter_text())
}
