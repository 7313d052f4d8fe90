/*!
 * Tests for the expected-file and keyword tables
 */

use locheck::app_config::{Config, ExpectedFile};

/// Test that the built-in table lists every expected locale file
#[test]
fn test_defaultConfig_shouldContainAllExpectedFiles() {
    let config = Config::default();

    let filenames: Vec<&str> = config
        .expected_files
        .iter()
        .map(|entry| entry.filename.as_str())
        .collect();

    assert_eq!(filenames.len(), 18);
    assert!(filenames.contains(&"bg.json"));
    assert!(filenames.contains(&"de-CH.json"));
    assert!(filenames.contains(&"en.json"));
    assert!(filenames.contains(&"ro.json"));
}

/// Test that the table preserves its defined report order
#[test]
fn test_defaultConfig_shouldPreserveTableOrder() {
    let config = Config::default();

    assert_eq!(config.expected_files[0].filename, "bg.json");
    assert_eq!(config.expected_files[17].filename, "ro.json");
}

/// Test that every expected language has a non-empty keyword set
#[test]
fn test_defaultConfig_everyLanguage_shouldHaveKeywords() {
    let config = Config::default();

    for entry in &config.expected_files {
        assert!(
            !config.keywords_for(&entry.language).is_empty(),
            "No keywords for {}",
            entry.language
        );
    }
}

/// Test that regional variants carry their own language label
#[test]
fn test_defaultConfig_regionalVariants_shouldHaveOwnLabels() {
    let config = Config::default();

    let de_ch = config
        .expected_files
        .iter()
        .find(|entry| entry.filename == "de-CH.json")
        .unwrap();

    assert_eq!(de_ch.language, "Swiss German");
}

/// Test that a custom table validates its own invariants
#[test]
fn test_validate_withCustomTableMissingKeywords_shouldFail() {
    let mut config = Config::default();
    config.expected_files.push(ExpectedFile {
        filename: "sv.json".to_string(),
        language: "Swedish".to_string(),
    });

    assert!(config.validate().is_err());
}
