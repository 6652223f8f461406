use crate::fonts::StandardFont;

/// Greedy word wrap of `text` into rows no wider than `max_width` points.
///
/// Words longer than a row are split between characters. A row always holds
/// at least one character, so a very narrow column cannot loop forever.
/// Empty input yields a single empty row.
pub fn break_lines(text: &str, font: StandardFont, size: f32, max_width: f32) -> Vec<String> {
    let fits = |s: &str| font.text_width(s, size) <= max_width;
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if fits(word) {
            current = word.to_string();
            continue;
        }

        for c in word.chars() {
            let mut extended = current.clone();
            extended.push(c);
            if !current.is_empty() && !fits(&extended) {
                rows.push(std::mem::take(&mut current));
                current.push(c);
            } else {
                current = extended;
            }
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: StandardFont = StandardFont::Courier;
    // Courier at 10pt is exactly 6pt per character.
    const SIZE: f32 = 10.0;

    #[test]
    fn short_text_stays_on_one_row() {
        assert_eq!(break_lines("sc around", FONT, SIZE, 600.0), ["sc around"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        // 10 characters per row.
        let rows = break_lines("sc in each st around", FONT, SIZE, 60.0);
        assert_eq!(rows, ["sc in each", "st around"]);
    }

    #[test]
    fn splits_words_longer_than_a_row() {
        let rows = break_lines("abcdefghijklmnop q", FONT, SIZE, 36.0);
        assert_eq!(rows, ["abcdef", "ghijkl", "mnop q"]);
    }

    #[test]
    fn empty_text_is_one_empty_row() {
        assert_eq!(break_lines("", FONT, SIZE, 60.0), [""]);
    }

    #[test]
    fn degenerate_width_still_progresses() {
        let rows = break_lines("abc", FONT, SIZE, 1.0);
        assert_eq!(rows, ["a", "b", "c"]);
    }

    #[test]
    fn rows_respect_width_with_proportional_font() {
        let text = "Rnd 4: (sc in next 2 sts, inc in next st) repeat 6 times around, 24 sts total";
        let max = 150.0;
        for row in break_lines(text, StandardFont::Helvetica, 12.0, max) {
            assert!(StandardFont::Helvetica.text_width(&row, 12.0) <= max, "{row}");
        }
    }
}
