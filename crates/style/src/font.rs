use crate::parsers::StyleParseError;
use serde::{Deserialize, Deserializer, Serialize, de};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// Parses `"regular"`, `"normal"`, `"bold"` or a numeric weight.
    ///
    /// Numeric weights of 600 and above count as bold.
    pub fn parse(s: &str) -> Result<Self, StyleParseError> {
        match s.trim().to_lowercase().as_str() {
            "regular" | "normal" => Ok(FontWeight::Regular),
            "bold" => Ok(FontWeight::Bold),
            other => other
                .parse::<u16>()
                .map(Self::from_numeric)
                .map_err(|_| StyleParseError::InvalidValue {
                    property: "font-weight".to_string(),
                    value: s.to_string(),
                }),
        }
    }

    pub fn from_numeric(weight: u16) -> Self {
        if weight >= 600 {
            FontWeight::Bold
        } else {
            FontWeight::Regular
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(Self::from_numeric(n)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// The two families the document uses: proportional text and counters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Sans,
    Mono,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_numbers() {
        assert_eq!(FontWeight::parse("Bold").unwrap(), FontWeight::Bold);
        assert_eq!(FontWeight::parse("normal").unwrap(), FontWeight::Regular);
        assert_eq!(FontWeight::parse("700").unwrap(), FontWeight::Bold);
        assert_eq!(FontWeight::parse("400").unwrap(), FontWeight::Regular);
        assert!(FontWeight::parse("heavy-ish").is_err());
    }

    #[test]
    fn deserializes_from_string_or_number() {
        let w: FontWeight = serde_json::from_str("\"bold\"").unwrap();
        assert_eq!(w, FontWeight::Bold);
        let w: FontWeight = serde_json::from_str("300").unwrap();
        assert_eq!(w, FontWeight::Regular);
    }
}
