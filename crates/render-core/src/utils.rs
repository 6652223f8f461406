/// Converts a top-left-origin y coordinate to PDF's bottom-left origin.
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Encodes text for a WinAnsi-encoded standard font, one byte per character.
///
/// Characters above U+00FF become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}
