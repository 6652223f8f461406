mod common;

use common::TestResult;
use common::fixtures::*;
use gurumi::{PatternDocument, PatternStore, Session, StepId, StoreError};

#[test]
fn test_save_and_load_round_trip() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir()?;
    let store = PatternStore::new(dir.path().join("inventory"));

    let mut session = Session::with_pattern(frog_pattern());
    session.toggle(StepId::new(0, 2))?;
    session.set_picture(Some(jpeg_bytes(12, 12)));
    let path = session.save(&store)?;
    assert_eq!(path, dir.path().join("inventory").join("Frog.json"));
    assert!(dir.path().join("inventory").join("Frog.png").is_file());

    let mut restored = Session::new();
    restored.load(&store, "Frog")?;
    assert_eq!(restored.pattern(), session.pattern());
    assert!(restored.pattern().unwrap().progress.is_checked(StepId::new(0, 2)));
    let picture = restored.picture().expect("picture restored");
    assert!(picture.starts_with(b"\x89PNG"));
    Ok(())
}

#[test]
fn test_saved_json_layout() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = PatternStore::new(dir.path());
    let mut pattern = frog_pattern();
    pattern.project_name = "Caf\u{e9} Bear".to_string();
    pattern.progress.set(StepId::new(1, 0), true);
    pattern.progress.set(StepId::new(9, 9), true);

    let path = store.save(&pattern, None)?;
    assert_eq!(path.file_name().unwrap(), "Caf\u{e9}_Bear.json");

    let text = std::fs::read_to_string(&path)?;
    assert!(text.contains("\"project_name\": \"Caf\u{e9} Bear\""), "{text}");
    let value: serde_json::Value = serde_json::from_str(&text)?;
    assert_eq!(value["difficulty"], "Easy");
    assert_eq!(value["components"][1]["steps"][1], "R5-R10: sc around");
    assert_eq!(value["progress"], serde_json::json!({ "1_0": true }));
    assert!(value.get("hybrid_suggestion").is_none());
    Ok(())
}

#[test]
fn test_legacy_records_load() -> TestResult {
    let dir = tempfile::tempdir()?;
    std::fs::write(
        dir.path().join("Old_Owl.json"),
        r#"{
            "name": "Old Owl",
            "materials": ["Brown yarn"],
            "hybrid_suggestion": "none",
            "components": [{ "name": "Wing", "steps": ["Ch 4", "Rows 1-3: sc"] }],
            "progress": { "step_0_1": true, "garbage": true }
        }"#,
    )?;
    let store = PatternStore::new(dir.path());
    let (pattern, picture) = store.load("Old_Owl")?;
    assert_eq!(pattern.project_name, "Old Owl");
    assert_eq!(pattern.difficulty, "Unknown");
    assert_eq!(pattern.hybrid_suggestion, None);
    assert!(pattern.progress.is_checked(StepId::new(0, 1)));
    assert_eq!(pattern.progress.len(), 1);
    assert_eq!(picture, None);
    Ok(())
}

#[test]
fn test_list_is_sorted_and_skips_unreadable_records() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = PatternStore::new(dir.path());
    store.save(&frog_pattern(), None)?;
    store.save(
        &PatternDocument {
            project_name: "Bee".to_string(),
            ..Default::default()
        },
        None,
    )?;
    std::fs::write(dir.path().join("Broken.json"), "{ not json")?;
    std::fs::write(dir.path().join("notes.txt"), "ignore me")?;
    std::fs::write(dir.path().join("Anon.json"), "{}")?;

    let listed: Vec<(String, String)> = store
        .list()?
        .into_iter()
        .map(|s| (s.name, s.title))
        .collect();
    assert_eq!(
        listed,
        [
            ("Anon".to_string(), "Unnamed Project".to_string()),
            ("Bee".to_string(), "Bee".to_string()),
            ("Frog".to_string(), "Frog".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn test_loaded_project_saves_back_to_its_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = PatternStore::new(dir.path());
    std::fs::write(
        dir.path().join("Custom.json"),
        frog_pattern().to_json_pretty()?,
    )?;

    let mut session = Session::new();
    session.load(&store, "Custom")?;
    assert_eq!(session.loaded_as(), Some("Custom"));
    session.toggle(StepId::new(0, 0))?;
    let path = session.save(&store)?;

    assert_eq!(path, dir.path().join("Custom.json"));
    assert!(!dir.path().join("Frog.json").exists());
    let (reloaded, _) = store.load("Custom")?;
    assert!(reloaded.progress.is_checked(StepId::new(0, 0)));
    Ok(())
}

#[test]
fn test_missing_project() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = PatternStore::new(dir.path());
    assert!(matches!(store.load("Nobody"), Err(StoreError::NotFound(_))));
    Ok(())
}

#[test]
fn test_bad_picture_does_not_block_saving() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = PatternStore::new(dir.path());
    store.save(&frog_pattern(), Some(b"not an image"))?;
    assert!(dir.path().join("Frog.json").is_file());
    assert!(!dir.path().join("Frog.png").exists());
    Ok(())
}
