//! Normalizes a line into the character set the PDF standard fonts can show.
use unicode_normalization::UnicodeNormalization;

/// Characters the WinAnsi-encoded standard fonts can represent.
pub fn is_encodable(c: char) -> bool {
    (c as u32) <= 0xFF
}

/// NFC-normalizes `line`, drops markdown emphasis markers, folds smart
/// punctuation to ASCII and replaces anything else outside Latin-1 with `?`.
///
/// Never fails, and `sanitize(&sanitize(s)) == sanitize(s)`.
pub fn sanitize(line: &str) -> String {
    let mut text: String = line.nfc().collect();
    // Removing one marker can join two halves of another ("_**_").
    while text.contains("**") || text.contains("__") {
        text = text.replace("**", "").replace("__", "");
    }
    text.chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{2013}' | '\u{2014}' => '-',
            c if is_encodable(c) => c,
            _ => '?',
        })
        .collect()
}
