/*!
 * Validation service that orchestrates all checks.
 *
 * This module runs the full validation pass: for each entry of the
 * expected-file table, in table order, it checks presence, JSON format,
 * keyword containment, and line-level whitespace hygiene. Every finding
 * is reported the moment it is discovered; no finding aborts the run.
 */

use anyhow::Result;
use log::{error, info};
use std::collections::HashSet;
use std::path::Path;

use crate::app_config::{Config, ExpectedFile};
use crate::file_utils::FileManager;

use super::content::ContentValidator;
use super::findings::Finding;
use super::lines::{LineIssue, LineValidator};

/// Validation service for a directory of localization files
pub struct ValidationService {
    /// Expected-file and keyword tables, immutable for the lifetime of the service
    config: Config,
}

impl ValidationService {
    /// Create a service with the given tables
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create a service with the built-in tables
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    /// Run the validation pass over a directory.
    ///
    /// Checks run per expected file, in table order: presence, JSON
    /// format, keyword containment, line-level whitespace. A missing file
    /// skips the remaining checks for that entry; a read or parse failure
    /// skips the keyword and line checks for that file. Nothing else
    /// affects control flow, and no finding aborts the run.
    ///
    /// Each finding is logged when discovered (info for passes, error for
    /// failures) and also collected into the returned list.
    ///
    /// # Errors
    /// Fails only when the directory itself cannot be listed.
    pub fn run<P: AsRef<Path>>(&self, folder: P) -> Result<Vec<Finding>> {
        let folder = folder.as_ref();

        // One listing per run; entries are matched against it by name
        let present: HashSet<String> =
            FileManager::list_file_names(folder)?.into_iter().collect();

        let mut findings = Vec::new();
        for entry in &self.config.expected_files {
            self.validate_entry(folder, entry, &present, &mut findings);
        }

        Ok(findings)
    }

    /// Run all checks for one expected file
    fn validate_entry(
        &self,
        folder: &Path,
        entry: &ExpectedFile,
        present: &HashSet<String>,
        findings: &mut Vec<Finding>,
    ) {
        if !present.contains(&entry.filename) {
            Self::report(
                Finding::MissingFile {
                    file: entry.filename.clone(),
                },
                findings,
            );
            return;
        }

        Self::report(
            Finding::FileFound {
                file: entry.filename.clone(),
            },
            findings,
        );

        // Read and parse share one protected step: a file that cannot be
        // read or is not valid JSON gets a single InvalidFormat finding,
        // and the keyword and line checks are skipped for it.
        let content = match FileManager::read_to_string(folder.join(&entry.filename)) {
            Ok(content) => content,
            Err(error) => {
                Self::report(
                    Finding::InvalidFormat {
                        file: entry.filename.clone(),
                        detail: error.to_string(),
                    },
                    findings,
                );
                return;
            }
        };

        if let Err(error) = serde_json::from_str::<serde_json::Value>(&content) {
            Self::report(
                Finding::InvalidFormat {
                    file: entry.filename.clone(),
                    detail: error.to_string(),
                },
                findings,
            );
            return;
        }

        // Both remaining checks operate on the raw text, not the parsed value
        self.check_keywords(entry, &content, findings);
        Self::check_lines(entry, &content, findings);
    }

    /// Keyword containment check; never affects control flow
    fn check_keywords(&self, entry: &ExpectedFile, content: &str, findings: &mut Vec<Finding>) {
        let keywords = self.config.keywords_for(&entry.language);

        let finding = if ContentValidator::contains_any_keyword(content, keywords) {
            Finding::KeywordsFound {
                file: entry.filename.clone(),
                language: entry.language.clone(),
            }
        } else {
            Finding::MissingKeywords {
                file: entry.filename.clone(),
                language: entry.language.clone(),
            }
        };

        Self::report(finding, findings);
    }

    /// Line-level whitespace checks
    fn check_lines(entry: &ExpectedFile, content: &str, findings: &mut Vec<Finding>) {
        for issue in LineValidator::check_content(content) {
            let finding = match issue {
                LineIssue::EmptyOrWhitespaceValue { line } => Finding::EmptyOrWhitespaceValue {
                    file: entry.filename.clone(),
                    line,
                },
                LineIssue::AdjacentWhitespace { line } => Finding::AdjacentWhitespace {
                    file: entry.filename.clone(),
                    line,
                },
            };

            Self::report(finding, findings);
        }
    }

    /// Emit a finding to the log the moment it is discovered, then keep it
    fn report(finding: Finding, findings: &mut Vec<Finding>) {
        if finding.is_failure() {
            error!("{}", finding);
        } else {
            info!("{}", finding);
        }

        findings.push(finding);
    }
}
