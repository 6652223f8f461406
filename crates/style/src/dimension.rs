//! Page size and spacing, stored in points.
use crate::parsers::{parse_length, parse_margins, run_parser};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeMap};

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Converts millimetres to points.
pub fn mm(value: f32) -> f32 {
    value * PT_PER_MM
}

/// Page margins in points. The bottom margin doubles as the automatic page
/// break distance from the bottom edge.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn from_mm(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top: mm(top),
            right: mm(right),
            bottom: mm(bottom),
            left: mm(left),
        }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarginsVisitor;
        impl<'de> de::Visitor<'de> for MarginsVisitor {
            type Value = Margins;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string like '10mm' or '10mm 10mm 15mm 10mm' or a map")
            }

            fn visit_str<E>(self, value: &str) -> Result<Margins, E>
            where
                E: de::Error,
            {
                parse_margins(value).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Margins, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut margins = Margins::default();
                while let Some(key) = map.next_key::<String>()? {
                    let value: LengthValue = map.next_value()?;
                    let value = value.points().map_err(de::Error::custom)?;
                    match key.as_str() {
                        "top" => margins.top = value,
                        "right" => margins.right = value,
                        "bottom" => margins.bottom = value,
                        "left" => margins.left = value,
                        _ => {}
                    }
                }
                Ok(margins)
            }
        }
        deserializer.deserialize_any(MarginsVisitor)
    }
}

/// A map entry may be a bare number of points or a length string.
#[derive(Deserialize)]
#[serde(untagged)]
enum LengthValue {
    Num(f32),
    Str(String),
}

impl LengthValue {
    fn points(&self) -> Result<f32, crate::StyleParseError> {
        match self {
            LengthValue::Num(n) => Ok(*n),
            LengthValue::Str(s) => run_parser(parse_length, s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl PageSize {
    /// `(width, height)` in points.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (mm(210.0), mm(297.0)),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn a4_is_210_by_297_mm() {
        let (w, h) = PageSize::A4.dimensions_pt();
        assert!(close(w, 595.28));
        assert!(close(h, 841.89));
    }

    #[test]
    fn margins_deserialize_from_shorthand_and_map() {
        let m: Margins = serde_json::from_str("\"10mm 10mm 15mm 10mm\"").unwrap();
        assert!(close(m.bottom, mm(15.0)));
        assert!(close(m.left, mm(10.0)));

        let m: Margins = serde_json::from_str(r#"{"top": 20, "bottom": "1in"}"#).unwrap();
        assert_eq!(m.top, 20.0);
        assert!(close(m.bottom, 72.0));
        assert_eq!(m.left, 0.0);
    }

    #[test]
    fn page_size_deserializes_names_and_custom() {
        let p: PageSize = serde_json::from_str("\"letter\"").unwrap();
        assert_eq!(p, PageSize::Letter);
        let p: PageSize = serde_json::from_str(r#"{"width": 300, "height": 400}"#).unwrap();
        assert_eq!(p.dimensions_pt(), (300.0, 400.0));
    }
}
