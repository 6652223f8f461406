pub mod dimension;
pub mod font;
pub mod parsers;
pub mod text;

pub use dimension::{Margins, PageSize, mm};
pub use font::{FontFamily, FontStyle, FontWeight};
pub use parsers::StyleParseError;
pub use text::{TextAlign, TextStyle};
