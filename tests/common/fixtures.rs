use gurumi::{Component, HybridSuggestion, PatternDocument};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, Rgba};
use std::io::Cursor;

/// Two components with three steps each, one of them a round range.
pub fn frog_pattern() -> PatternDocument {
    PatternDocument {
        project_name: "Frog".to_string(),
        difficulty: "Easy".to_string(),
        materials: vec!["Green yarn".to_string(), "4mm hook".to_string()],
        hybrid_suggestion: None,
        components: vec![
            Component::new(
                "Head",
                vec![
                    "Rnd 1: 6 sc in magic ring".to_string(),
                    "Rnds 2-4: sc around".to_string(),
                    "Fasten off".to_string(),
                ],
            ),
            Component::new(
                "Body",
                vec![
                    "Ch 2".to_string(),
                    "R5-R10: sc around".to_string(),
                    "Stuff firmly".to_string(),
                ],
            ),
        ],
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn with_suggestion(mut pattern: PatternDocument) -> PatternDocument {
    pattern.hybrid_suggestion = Some(HybridSuggestion {
        kind: "Eyes".to_string(),
        description: "Print the eyes in black PLA".to_string(),
        search_term: "amigurumi safety eyes".to_string(),
    });
    pattern
}

/// One component with `steps` numbered rounds.
#[allow(dead_code)]
pub fn long_pattern(steps: usize) -> PatternDocument {
    PatternDocument {
        project_name: "Long Snake".to_string(),
        components: vec![Component::new(
            "Body",
            (1..=steps)
                .map(|i| format!("Rnd {}: sc in each st around, keeping the tension even", i))
                .collect(),
        )],
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = ImageBuffer::from_pixel(width, height, Rgba([30u8, 160, 60, 255]));
    encode(DynamicImage::ImageRgba8(img), ImageFormat::Png)
}

#[allow(dead_code)]
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = ImageBuffer::from_pixel(width, height, Rgb([200u8, 40, 40]));
    encode(DynamicImage::ImageRgb8(img), ImageFormat::Jpeg)
}

fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).expect("encode test image");
    out.into_inner()
}
