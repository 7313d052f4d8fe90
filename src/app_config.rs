use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::errors::AppError;

/// Application configuration module
/// This module holds the expected-file table (filename to language label)
/// and the per-language keyword sets used by the validation pass. The
/// tables are fixed data: built once, injected into the validator, and
/// never mutated during a run.
/// One expected localization file and the language it must contain
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExpectedFile {
    /// File name, e.g. "de-CH.json"
    pub filename: String,

    /// Human-readable language label, e.g. "Swiss German"
    pub language: String,
}

impl ExpectedFile {
    fn new(filename: &str, language: &str) -> Self {
        Self {
            filename: filename.to_string(),
            language: language.to_string(),
        }
    }
}

/// Represents the validator configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Expected files, in report order
    pub expected_files: Vec<ExpectedFile>,

    /// Language label to marker keywords
    pub keywords: HashMap<String, Vec<String>>,
}

impl Config {
    /// Keywords registered for a language label, empty when unknown
    pub fn keywords_for(&self, language: &str) -> &[String] {
        self.keywords
            .get(language)
            .map(|words| words.as_slice())
            .unwrap_or(&[])
    }

    /// Validate the table invariants: unique filenames, and a non-empty
    /// keyword set for every language referenced by the expected files.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for entry in &self.expected_files {
            if !seen.insert(entry.filename.as_str()) {
                return Err(AppError::Config(format!(
                    "Duplicate expected file: {}",
                    entry.filename
                )));
            }

            if self.keywords_for(&entry.language).is_empty() {
                return Err(AppError::Config(format!(
                    "No keywords registered for language: {}",
                    entry.language
                )));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let expected_files = vec![
            ExpectedFile::new("bg.json", "Bulgarian"),
            ExpectedFile::new("ca.json", "Canadian"),
            ExpectedFile::new("da.json", "Danish"),
            ExpectedFile::new("de-CH.json", "Swiss German"),
            ExpectedFile::new("de.json", "German"),
            ExpectedFile::new("en-CA.json", "Canadian English"),
            ExpectedFile::new("en.json", "English"),
            ExpectedFile::new("es.json", "Spanish"),
            ExpectedFile::new("fr-CA.json", "Canadian French"),
            ExpectedFile::new("fr.json", "French"),
            ExpectedFile::new("he.json", "Hebrew"),
            ExpectedFile::new("it.json", "Italian"),
            ExpectedFile::new("nl-BE.json", "Belgian Dutch"),
            ExpectedFile::new("nl.json", "Dutch"),
            ExpectedFile::new("no.json", "Norwegian"),
            ExpectedFile::new("pl.json", "Polish"),
            ExpectedFile::new("pt.json", "Portuguese"),
            ExpectedFile::new("ro.json", "Romanian"),
        ];

        let keyword_table: [(&str, &[&str]); 18] = [
            ("Bulgarian", &["и", "да", "е", "не"]),
            ("Canadian", &["the", "and", "with"]),
            ("Danish", &["og", "er", "det"]),
            ("Swiss German", &["der", "die", "und", "ist"]),
            ("German", &["und", "ist", "zu"]),
            ("Canadian English", &["the", "and", "with"]),
            ("English", &["the", "and", "is"]),
            ("Spanish", &["el", "la", "y", "es"]),
            ("Canadian French", &["le", "la", "est", "et"]),
            ("French", &["le", "la", "et", "est"]),
            ("Hebrew", &["ו", "של", "את"]),
            ("Italian", &["e", "il", "la"]),
            ("Belgian Dutch", &["en", "de", "het"]),
            ("Dutch", &["en", "de", "het"]),
            ("Norwegian", &["og", "er", "det"]),
            ("Polish", &["i", "jest", "na"]),
            ("Portuguese", &["o", "e", "é"]),
            ("Romanian", &["și", "este", "în"]),
        ];

        let keywords = keyword_table
            .iter()
            .map(|(language, words)| {
                (
                    language.to_string(),
                    words.iter().map(|word| word.to_string()).collect(),
                )
            })
            .collect();

        Self {
            expected_files,
            keywords,
        }
    }
}
