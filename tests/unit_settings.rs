// Unit tests for the settings store: defaults, the original plugin's
// camelCase key names, and partial-file tolerance.

use cf_browser::catalog::SortOrder;
use cf_browser::settings::Settings;
use cf_browser::storage;

#[test]
fn defaults() {
    let settings = Settings::default();
    assert!(settings.user_handle.is_empty());
    assert_eq!(settings.sort_order, SortOrder::None);
    assert_eq!(settings.difficulty_sort_order, SortOrder::RatingAsc);
    assert!(settings.notify_solution_template);
    assert!(settings.notify_preferred_language);
    assert!(!settings.verify_feed_order);
}

#[test]
fn wire_keys_are_camel_case() {
    let mut buf: Vec<u8> = Vec::new();
    storage::save(&mut buf, &Settings::default()).unwrap();
    let text = String::from_utf8(buf).unwrap();
    for key in [
        "userHandle",
        "sortOrder",
        "difficultySortOrder",
        "preferredCodingLanguage",
        "defaultSolutionsFolderPath",
        "solutionTemplate",
        "notifySolutionTemplate",
        "notifyPreferredLanguage",
        "verifyFeedOrder",
    ]
    .iter()
    {
        assert!(text.contains(key), "missing key {} in {}", key, text);
    }
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let yaml = b"userHandle: tourist\nsortOrder: RatingDesc\n";
    let settings: Settings = storage::load(&yaml[..]).unwrap();
    assert_eq!(settings.user_handle, "tourist");
    assert_eq!(settings.sort_order, SortOrder::RatingDesc);
    assert_eq!(settings.difficulty_sort_order, SortOrder::RatingAsc);
    assert!(settings.notify_solution_template);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(dir.path().join("settings.yaml")).unwrap();
    assert!(settings.user_handle.is_empty());
}

#[test]
fn round_trip_preserves_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.yaml");
    let mut settings = Settings::default();
    settings.user_handle = "tourist".to_string();
    settings.sort_order = SortOrder::RatingAsc;
    settings.preferred_coding_language = "Rust".to_string();
    settings.verify_feed_order = true;
    settings.save(&path).unwrap();
    let loaded = Settings::load_or_default(&path).unwrap();
    assert_eq!(loaded.user_handle, "tourist");
    assert_eq!(loaded.sort_order, SortOrder::RatingAsc);
    assert_eq!(loaded.preferred_coding_language, "Rust");
    assert!(loaded.verify_feed_order);
}
