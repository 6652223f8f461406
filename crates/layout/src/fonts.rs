//! The PDF standard Type1 fonts the document is set in, with their metrics.
//!
//! Widths are the AFM advance widths in 1/1000 em for the printable ASCII
//! range. Latin-1 letters measure as their unaccented base letter; other
//! Latin-1 symbols fall back to the width of a digit.

use gurumi_style::{FontFamily, FontStyle, FontWeight, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
}

const FIRST_CHAR: u32 = 32;
const LAST_CHAR: u32 = 126;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const COURIER_WIDTH: u16 = 600;
const FALLBACK_WIDTH: u16 = 556;

/// Base letter used to measure each character in `U+00C0..=U+00FF`.
const LATIN1_BASE: &[u8; 64] =
    b"AAAAAAWCEEEEIIIIDNOOOOO+OUUUUYPbaaaaaamceeeettttonooooo+ouuuuypy";

impl StandardFont {
    pub const ALL: [StandardFont; 6] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::HelveticaBoldOblique,
        StandardFont::Courier,
        StandardFont::CourierBold,
    ];

    pub fn for_style(style: &TextStyle) -> Self {
        match (style.family, style.weight, style.style) {
            (FontFamily::Mono, FontWeight::Bold, _) => StandardFont::CourierBold,
            (FontFamily::Mono, FontWeight::Regular, _) => StandardFont::Courier,
            (FontFamily::Sans, FontWeight::Regular, FontStyle::Normal) => StandardFont::Helvetica,
            (FontFamily::Sans, FontWeight::Bold, FontStyle::Normal) => StandardFont::HelveticaBold,
            (FontFamily::Sans, FontWeight::Regular, FontStyle::Italic) => {
                StandardFont::HelveticaOblique
            }
            (FontFamily::Sans, FontWeight::Bold, FontStyle::Italic) => {
                StandardFont::HelveticaBoldOblique
            }
        }
    }

    pub fn postscript_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
        }
    }

    /// Name of the font in a page's resource dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
            StandardFont::HelveticaOblique => "F3",
            StandardFont::HelveticaBoldOblique => "F4",
            StandardFont::Courier => "F5",
            StandardFont::CourierBold => "F6",
        }
    }

    fn widths(&self) -> Option<&'static [u16; 95]> {
        match self {
            StandardFont::Helvetica | StandardFont::HelveticaOblique => Some(&HELVETICA_WIDTHS),
            StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique => {
                Some(&HELVETICA_BOLD_WIDTHS)
            }
            StandardFont::Courier | StandardFont::CourierBold => None,
        }
    }

    /// Advance width of `c` in 1/1000 em.
    pub fn char_width(&self, c: char) -> u16 {
        let Some(widths) = self.widths() else {
            return COURIER_WIDTH;
        };
        let code = c as u32;
        match code {
            FIRST_CHAR..=LAST_CHAR => widths[(code - FIRST_CHAR) as usize],
            0xC0..=0xFF => {
                let base = LATIN1_BASE[(code - 0xC0) as usize] as u32;
                widths[(base - FIRST_CHAR) as usize]
            }
            _ => FALLBACK_WIDTH,
        }
    }

    /// Width of `text` set at `size` points, in points.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * size / 1000.0
    }
}
