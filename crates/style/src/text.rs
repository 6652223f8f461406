use crate::font::{FontFamily, FontStyle, FontWeight};
use gurumi_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Everything needed to pick a font and paint a run of text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TextStyle {
    #[serde(default)]
    pub family: FontFamily,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub style: FontStyle,
    /// Font size in points.
    pub size: f32,
    #[serde(default)]
    pub color: Color,
}

impl TextStyle {
    pub fn regular(size: f32) -> Self {
        Self {
            family: FontFamily::Sans,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
            size,
            color: Color::BLACK,
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::regular(size)
        }
    }

    pub fn italic(size: f32) -> Self {
        Self {
            style: FontStyle::Italic,
            ..Self::regular(size)
        }
    }

    pub fn mono_bold(size: f32) -> Self {
        Self {
            family: FontFamily::Mono,
            ..Self::bold(size)
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::regular(12.0)
    }
}
