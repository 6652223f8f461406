use itertools::Itertools;

/// Counter tokens between consecutive separators.
const GROUP_SIZE: u32 = 5;
/// Ranges spanning this many rounds or more are rejected.
const MAX_SPAN: u32 = 50;
pub const SEPARATOR: &str = "|";

/// An inclusive range of rounds or rows, e.g. "Rnds 5-10".
///
/// Construction validates `start < end` and `end - start < 50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundRange {
    start: u32,
    end: u32,
}

impl RoundRange {
    pub fn new(start: u32, end: u32) -> Option<Self> {
        if start < end && end - start < MAX_SPAN {
            Some(Self { start, end })
        } else {
            None
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of rounds covered, both ends included.
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The rounds as strings with `|` after every fifth one, never trailing.
    pub fn counter_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.len() + self.len() / GROUP_SIZE as usize);
        for (i, n) in (self.start..=self.end).enumerate() {
            tokens.push(n.to_string());
            let position = i as u32 + 1;
            if position % GROUP_SIZE == 0 && n != self.end {
                tokens.push(SEPARATOR.to_string());
            }
        }
        tokens
    }

    /// Tokens joined with single spaces: `"5 6 7 8 9 | 10"`.
    pub fn counter_text(&self) -> String {
        self.counter_tokens().iter().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_descending_equal_and_wide_ranges() {
        assert!(RoundRange::new(10, 9).is_none());
        assert!(RoundRange::new(7, 7).is_none());
        assert!(RoundRange::new(1, 51).is_none());
        assert!(RoundRange::new(1, 50).is_some());
    }

    #[test]
    fn separator_after_every_fifth_token() {
        let range = RoundRange::new(5, 10).unwrap();
        assert_eq!(range.counter_text(), "5 6 7 8 9 | 10");
        assert_eq!(
            RoundRange::new(1, 12).unwrap().counter_text(),
            "1 2 3 4 5 | 6 7 8 9 10 | 11 12"
        );
    }

    #[test]
    fn no_trailing_separator() {
        assert_eq!(RoundRange::new(1, 5).unwrap().counter_text(), "1 2 3 4 5");
        assert_eq!(
            RoundRange::new(1, 10).unwrap().counter_tokens().last().unwrap(),
            "10"
        );
    }

    #[test]
    fn widest_range_has_nine_separators() {
        let tokens = RoundRange::new(1, 50).unwrap().counter_tokens();
        assert_eq!(tokens.iter().filter(|t| *t == SEPARATOR).count(), 9);
        assert_eq!(tokens.len(), 59);
    }
}
