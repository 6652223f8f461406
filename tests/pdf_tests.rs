mod common;

use common::fixtures::*;
use common::pdf_assertions::{font_names, images};
use common::{TestResult, render_pdf, render_pdf_with, test_config};
use gurumi::{
    DocumentSettings, GurumiConfig, LopdfCanvas, PaginatedSurface, PatternDocument, PatternSurface,
};

#[test]
fn test_cover_page_then_body() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = render_pdf(frog_pattern(), None)?;
    assert_pdf_page_count!(pdf, 2);

    let cover = pdf.page_text(1);
    assert!(cover.contains("Frog"), "{cover}");
    assert!(cover.contains("Created by Ani-Gurumi AI"), "{cover}");
    assert!(cover.contains("Page 1"), "{cover}");
    assert!(!cover.contains("Ani-Gurumi AI - Crochet Pattern"), "{cover}");

    let body = pdf.page_text(2);
    for expected in [
        "Ani-Gurumi AI - Crochet Pattern",
        "Difficulty: Easy",
        "Pattern",
        "Head",
        "Body",
        "- Rnds 2-4: sc around",
        "2 3 4",
        "5 6 7 8 9 | 10",
        "Page 2",
    ] {
        assert!(body.contains(expected), "missing {expected:?} in:\n{body}");
    }
    Ok(())
}

#[test]
fn test_standard_fonts_are_referenced() -> TestResult {
    let pdf = render_pdf(frog_pattern(), None)?;
    let fonts = font_names(&pdf.doc);
    for font in ["Helvetica", "Helvetica-Bold", "Helvetica-Oblique", "Courier-Bold"] {
        assert!(fonts.iter().any(|f| f == font), "{font} not in {fonts:?}");
    }
    Ok(())
}

#[test]
fn test_long_pattern_paginates() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = render_pdf(long_pattern(150), None)?;
    assert_pdf_min_pages!(pdf, 5);
    assert_pdf_contains_text!(pdf, "Rnd 150: sc in each st around");
    let last = pdf.page_count() as u32;
    assert!(pdf.page_text(last).contains(&format!("Page {}", last)));
    Ok(())
}

#[test]
fn test_cover_picture_is_embedded_as_jpeg() -> TestResult {
    let pdf = render_pdf(frog_pattern(), Some(png_bytes(40, 30)))?;
    let embedded = images(&pdf.doc);
    assert_eq!(embedded, [(40, 30, "DCTDecode".to_string())]);
    assert_pdf_page_count!(pdf, 2);
    Ok(())
}

#[test]
fn test_corrupt_cover_picture_still_renders() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = render_pdf(frog_pattern(), Some(b"not a picture at all".to_vec()))?;
    assert!(images(&pdf.doc).is_empty());
    assert_pdf_contains_text!(pdf, "Created by Ani-Gurumi AI");
    Ok(())
}

#[test]
fn test_logo_is_drawn_when_configured() -> TestResult {
    let dir = tempfile::tempdir()?;
    let logo = dir.path().join("logo.png");
    std::fs::write(&logo, png_bytes(16, 16))?;
    let config = GurumiConfig::builder().logo_path(&logo).build();

    let pdf = render_pdf_with(frog_pattern(), Some(jpeg_bytes(20, 20)), &config)?;
    assert_eq!(images(&pdf.doc).len(), 2);

    let missing = GurumiConfig::builder()
        .logo_path(dir.path().join("absent.png"))
        .build();
    let pdf = render_pdf_with(frog_pattern(), None, &missing)?;
    assert!(images(&pdf.doc).is_empty());
    Ok(())
}

#[test]
fn test_scratch_file_is_removed_after_rendering() -> TestResult {
    let scratch = tempfile::tempdir()?;
    let settings = DocumentSettings {
        scratch_dir: Some(scratch.path().to_path_buf()),
        ..DocumentSettings::default()
    };
    let canvas = LopdfCanvas::new(settings.page_size);
    let surface = PaginatedSurface::new(canvas, settings).with_cover_bytes(&png_bytes(8, 8));
    let staged = surface.cover_path().expect("cover staged").to_path_buf();
    assert!(staged.starts_with(scratch.path()));
    assert!(staged.exists());

    let bytes = surface.render(&frog_pattern())?;
    assert!(bytes.starts_with(b"%PDF"));
    assert!(!staged.exists());
    assert_eq!(std::fs::read_dir(scratch.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_unencodable_characters_degrade() -> TestResult {
    let pattern = PatternDocument {
        project_name: "Bear \u{1f9f8}".to_string(),
        ..frog_pattern()
    };
    let pdf = render_pdf(pattern, None)?;
    assert!(pdf.page_text(1).contains("Bear ?"));
    Ok(())
}

#[test]
fn test_letter_page_size() -> TestResult {
    let config = GurumiConfig {
        document: DocumentSettings {
            page_size: gurumi::style::PageSize::Letter,
            ..DocumentSettings::default()
        },
        ..test_config()
    };
    let pdf = render_pdf_with(frog_pattern(), None, &config)?;
    let (_, page_id) = pdf.doc.get_pages().into_iter().next().expect("a page");
    let page = pdf.doc.get_dictionary(page_id)?;
    let media_box = page.get(b"MediaBox")?.as_array()?;
    let height = media_box[3].as_float()?;
    assert!((height - 792.0).abs() < 0.01);
    Ok(())
}
