mod common;

use common::fixtures::*;
use gurumi::text::{LineKind, classify, classify_text, round_counter_text, sanitize};
use gurumi::to_text;

#[test]
fn test_round_range_scenarios() {
    assert_eq!(
        round_counter_text("R5-R10: sc around").as_deref(),
        Some("5 6 7 8 9 | 10")
    );
    assert_eq!(round_counter_text("Rnd 3 to 4").as_deref(), Some("3 4"));
    assert_eq!(round_counter_text("Repeat rows 10-9"), None);
    assert_eq!(round_counter_text("Varv 1\u{2013}3: fm").as_deref(), Some("1 2 3"));
    assert_eq!(round_counter_text("Rounds 1-51"), None);
}

#[test]
fn test_separator_placement_over_all_lengths() {
    for start in [1u32, 7, 100] {
        for len in 1..50u32 {
            let end = start + len;
            let counter = round_counter_text(&format!("Rows {}-{}", start, end))
                .unwrap_or_else(|| panic!("Rows {start}-{end} should expand"));
            let tokens: Vec<&str> = counter.split(' ').collect();
            let numbers: Vec<u32> = tokens
                .iter()
                .filter(|t| **t != "|")
                .map(|t| t.parse().unwrap())
                .collect();
            assert_eq!(numbers, (start..=end).collect::<Vec<_>>());
            assert_ne!(tokens.last(), Some(&"|"));
            let mut since_separator = 0;
            for token in &tokens {
                if *token == "|" {
                    assert_eq!(since_separator, 5, "{counter}");
                    since_separator = 0;
                } else {
                    since_separator += 1;
                }
            }
            let separators = tokens.iter().filter(|t| **t == "|").count();
            assert_eq!(separators, (numbers.len() - 1) / 5, "{counter}");
        }
    }
}

#[test]
fn test_line_scenarios() {
    let heading = classify("# Head");
    assert_eq!((heading.kind, heading.text.as_str()), (LineKind::Heading(1), "Head"));
    let bullet = classify("- sc in each st around");
    assert_eq!(
        (bullet.kind, bullet.text.as_str()),
        (LineKind::Bullet, "sc in each st around")
    );
}

#[test]
fn test_sanitize_is_idempotent() {
    for input in [
        "**bold** and __under__",
        "****nested**** ___x___",
        "\u{201c}Rnd 1\u{201d} \u{2014} it\u{2019}s \u{1f9f6}",
        "Cafe\u{301} cr\u{e8}me",
        "plain",
    ] {
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once, "{input:?}");
        assert!(once.chars().all(|c| (c as u32) <= 0xFF), "{once:?}");
    }
}

#[test]
fn test_flattened_text_reclassifies_to_the_structure() {
    let pattern = frog_pattern();
    let lines = classify_text(&to_text(&pattern));
    let pattern_start = lines
        .iter()
        .position(|l| l.kind == LineKind::Heading(2) && l.text == "Pattern")
        .expect("pattern heading");

    let mut expected = Vec::new();
    for component in &pattern.components {
        expected.push((LineKind::Heading(3), component.name.clone()));
        for step in &component.steps {
            expected.push((LineKind::Bullet, step.clone()));
        }
    }
    let actual: Vec<(LineKind, String)> = lines[pattern_start + 1..]
        .iter()
        .filter(|l| l.kind != LineKind::Blank)
        .map(|l| (l.kind, l.text.clone()))
        .collect();
    assert_eq!(actual, expected);
}
