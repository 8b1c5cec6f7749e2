use tasklist::constants::DARK_MODE_KEY;
use tasklist::storage::PreferenceStore;

#[test]
fn test_first_run_defaults_to_light() {
    let dir = tempfile::tempdir().unwrap();
    let store = PreferenceStore::open(dir.path().join("preferences.json"));
    assert!(!store.load_dark_mode());
}

#[test]
fn test_dark_mode_round_trips_across_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("preferences.json");

    let mut store = PreferenceStore::open(&path);
    store.persist_dark_mode(true).unwrap();

    let reloaded = PreferenceStore::open(&path);
    assert!(reloaded.load_dark_mode());

    let mut reloaded = reloaded;
    reloaded.persist_dark_mode(false).unwrap();
    assert!(!PreferenceStore::open(&path).load_dark_mode());
}

#[test]
fn test_stored_as_json_boolean_under_fixed_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    PreferenceStore::open(&path).persist_dark_mode(true).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[DARK_MODE_KEY], serde_json::Value::Bool(true));
}

#[test]
fn test_other_keys_survive_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, r#"{"lastSeen": "2024-05-01"}"#).unwrap();

    let mut store = PreferenceStore::open(&path);
    store.persist_dark_mode(true).unwrap();

    let reloaded = PreferenceStore::open(&path);
    assert_eq!(reloaded.get::<String>("lastSeen").as_deref(), Some("2024-05-01"));
    assert!(reloaded.load_dark_mode());
}

#[test]
fn test_corrupt_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    std::fs::write(&path, "{not json").unwrap();
    assert!(!PreferenceStore::open(&path).load_dark_mode());

    std::fs::write(&path, "[true]").unwrap();
    let mut store = PreferenceStore::open(&path);
    assert!(!store.load_dark_mode());

    // The next write replaces the unreadable content
    store.persist_dark_mode(true).unwrap();
    assert!(PreferenceStore::open(&path).load_dark_mode());
}
