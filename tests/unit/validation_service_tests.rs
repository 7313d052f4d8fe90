/*!
 * Tests for the validation service pass
 */

use std::collections::HashMap;
use anyhow::Result;
use locheck::app_config::{Config, ExpectedFile};
use locheck::validation::{Finding, ValidationService};
use crate::common;

/// Builds a one-entry table for isolating single-file behavior
fn single_file_config(filename: &str, language: &str, keywords: &[&str]) -> Config {
    let mut keyword_table = HashMap::new();
    keyword_table.insert(
        language.to_string(),
        keywords.iter().map(|word| word.to_string()).collect(),
    );

    Config {
        expected_files: vec![ExpectedFile {
            filename: filename.to_string(),
            language: language.to_string(),
        }],
        keywords: keyword_table,
    }
}

/// Findings that refer to a given file
fn findings_for<'a>(findings: &'a [Finding], file: &str) -> Vec<&'a Finding> {
    findings.iter().filter(|finding| finding.file() == file).collect()
}

/// Test that an absent file yields exactly one MissingFile finding
#[test]
fn test_run_withAbsentFile_shouldReportMissingFileOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let service = ValidationService::new(single_file_config("de.json", "German", &["und"]));

    let findings = service.run(temp_dir.path())?;

    assert_eq!(
        findings,
        vec![Finding::MissingFile {
            file: "de.json".to_string()
        }]
    );

    Ok(())
}

/// Test that invalid JSON yields FileFound plus one InvalidFormat, and
/// that the keyword and line checks are skipped for that file
#[test]
fn test_run_withInvalidJson_shouldSkipKeywordAndLineChecks() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    // Double space would trip the line check if it ran
    common::create_test_file(temp_dir.path(), "it.json", "not  valid json")?;
    let service = ValidationService::new(single_file_config("it.json", "Italian", &["il"]));

    let findings = service.run(temp_dir.path())?;

    assert_eq!(findings.len(), 2);
    assert_eq!(
        findings[0],
        Finding::FileFound {
            file: "it.json".to_string()
        }
    );
    assert!(matches!(findings[1], Finding::InvalidFormat { .. }));

    Ok(())
}

/// Test that a valid file with a marker keyword reports KeywordsFound
#[test]
fn test_run_withKeywordPresent_shouldReportKeywordsFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "en.json", r#"{"greeting": "the world"}"#)?;
    let service =
        ValidationService::new(single_file_config("en.json", "English", &["the", "and", "is"]));

    let findings = service.run(temp_dir.path())?;

    assert_eq!(
        findings,
        vec![
            Finding::FileFound {
                file: "en.json".to_string()
            },
            Finding::KeywordsFound {
                file: "en.json".to_string(),
                language: "English".to_string()
            },
        ]
    );

    Ok(())
}

/// Test that the keyword check matches on raw text, keys included
#[test]
fn test_run_keywordCheck_shouldMatchRawTextNotValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    // "is" only occurs inside the key name
    common::create_test_file(temp_dir.path(), "en.json", r#"{"dismiss": "close"}"#)?;
    let service = ValidationService::new(single_file_config("en.json", "English", &["is"]));

    let findings = service.run(temp_dir.path())?;

    assert!(findings.contains(&Finding::KeywordsFound {
        file: "en.json".to_string(),
        language: "English".to_string()
    }));

    Ok(())
}

/// Test that a missing keyword does not stop the line checks
#[test]
fn test_run_withMissingKeywords_shouldStillRunLineChecks() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "fr.json", r#"{"a": ""}"#)?;
    let service =
        ValidationService::new(single_file_config("fr.json", "French", &["le", "la", "et", "est"]));

    let findings = service.run(temp_dir.path())?;

    assert_eq!(
        findings,
        vec![
            Finding::FileFound {
                file: "fr.json".to_string()
            },
            Finding::MissingKeywords {
                file: "fr.json".to_string(),
                language: "French".to_string()
            },
            Finding::EmptyOrWhitespaceValue {
                file: "fr.json".to_string(),
                line: 1
            },
        ]
    );

    Ok(())
}

/// Test that a double space inside a value is reported with its line number
#[test]
fn test_run_withAdjacentWhitespace_shouldReportLineNumber() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "en.json", r#"{"greeting": "the  end"}"#)?;
    let service =
        ValidationService::new(single_file_config("en.json", "English", &["the", "and", "is"]));

    let findings = service.run(temp_dir.path())?;

    assert_eq!(
        findings,
        vec![
            Finding::FileFound {
                file: "en.json".to_string()
            },
            Finding::KeywordsFound {
                file: "en.json".to_string(),
                language: "English".to_string()
            },
            Finding::AdjacentWhitespace {
                file: "en.json".to_string(),
                line: 1
            },
        ]
    );

    Ok(())
}

/// Test that line numbers are 1-indexed across a multi-line file
#[test]
fn test_run_withMultiLineFile_shouldReportOneIndexedLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = "{\n  \"title\": \"de wereld\",\n  \"empty\": \"\"\n}";
    common::create_test_file(temp_dir.path(), "nl.json", content)?;
    let service =
        ValidationService::new(single_file_config("nl.json", "Dutch", &["en", "de", "het"]));

    let findings = service.run(temp_dir.path())?;
    let failures: Vec<&Finding> = findings.iter().filter(|f| f.is_failure()).collect();

    // Indented lines carry leading double spaces, so every indented line
    // trips the adjacent-whitespace check alongside the empty value on line 3
    assert!(failures.contains(&&Finding::EmptyOrWhitespaceValue {
        file: "nl.json".to_string(),
        line: 3
    }));
    assert!(failures.contains(&&Finding::AdjacentWhitespace {
        file: "nl.json".to_string(),
        line: 2
    }));
    assert!(failures.contains(&&Finding::AdjacentWhitespace {
        file: "nl.json".to_string(),
        line: 3
    }));

    Ok(())
}

/// Test that one file's failures never stop the next entry's checks
#[test]
fn test_run_withMixedEntries_shouldProcessAllInTableOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "it.json", "not valid json")?;
    common::create_test_file(temp_dir.path(), "pt.json", r#"{"greeting": "o mundo"}"#)?;

    let mut keyword_table = HashMap::new();
    keyword_table.insert("Italian".to_string(), vec!["il".to_string()]);
    keyword_table.insert("Portuguese".to_string(), vec!["o".to_string()]);
    let config = Config {
        expected_files: vec![
            ExpectedFile {
                filename: "de.json".to_string(),
                language: "German".to_string(),
            },
            ExpectedFile {
                filename: "it.json".to_string(),
                language: "Italian".to_string(),
            },
            ExpectedFile {
                filename: "pt.json".to_string(),
                language: "Portuguese".to_string(),
            },
        ],
        keywords: keyword_table,
    };
    let service = ValidationService::new(config);

    let findings = service.run(temp_dir.path())?;

    assert_eq!(
        findings_for(&findings, "de.json"),
        vec![&Finding::MissingFile {
            file: "de.json".to_string()
        }]
    );
    assert!(matches!(
        findings_for(&findings, "it.json").as_slice(),
        [Finding::FileFound { .. }, Finding::InvalidFormat { .. }]
    ));
    assert_eq!(
        findings_for(&findings, "pt.json"),
        vec![
            &Finding::FileFound {
                file: "pt.json".to_string()
            },
            &Finding::KeywordsFound {
                file: "pt.json".to_string(),
                language: "Portuguese".to_string()
            },
        ]
    );

    Ok(())
}

/// Test that a JSON array parses as a valid document
#[test]
fn test_run_withTopLevelArray_shouldPassFormatCheck() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "en.json", r#"["the", "and"]"#)?;
    let service = ValidationService::new(single_file_config("en.json", "English", &["the"]));

    let findings = service.run(temp_dir.path())?;

    assert!(!findings.iter().any(|f| matches!(f, Finding::InvalidFormat { .. })));

    Ok(())
}

/// Test that an unreadable target directory fails the run itself
#[test]
fn test_run_withMissingDirectory_shouldError() {
    let service = ValidationService::with_defaults();

    assert!(service.run("definitely/not/a/directory").is_err());
}
