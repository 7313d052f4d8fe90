/*!
 * Finding model for the validation pass.
 *
 * A finding is one reported outcome (success or failure) for one check on
 * one file. Findings are produced as checks run, rendered to the report,
 * and discarded; nothing is persisted across runs.
 */

use std::fmt;

/// One reported outcome for one check on one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Expected file is present in the directory
    FileFound {
        /// File name from the expected-file table
        file: String,
    },

    /// Expected file is absent from the directory
    MissingFile {
        /// File name from the expected-file table
        file: String,
    },

    /// File content could not be read or parsed as JSON
    InvalidFormat {
        /// File name
        file: String,
        /// Parser or read error message
        detail: String,
    },

    /// Raw content contains at least one language marker keyword
    KeywordsFound {
        /// File name
        file: String,
        /// Language label from the expected-file table
        language: String,
    },

    /// Raw content contains none of the language marker keywords
    MissingKeywords {
        /// File name
        file: String,
        /// Language label from the expected-file table
        language: String,
    },

    /// A line carries an empty or whitespace-only quoted value
    EmptyOrWhitespaceValue {
        /// File name
        file: String,
        /// 1-indexed line number
        line: usize,
    },

    /// A line contains two or more consecutive whitespace characters
    AdjacentWhitespace {
        /// File name
        file: String,
        /// 1-indexed line number
        line: usize,
    },
}

impl Finding {
    /// Whether this finding is a failure (reported at error level)
    pub fn is_failure(&self) -> bool {
        !matches!(
            self,
            Finding::FileFound { .. } | Finding::KeywordsFound { .. }
        )
    }

    /// File name this finding refers to
    pub fn file(&self) -> &str {
        match self {
            Finding::FileFound { file }
            | Finding::MissingFile { file }
            | Finding::InvalidFormat { file, .. }
            | Finding::KeywordsFound { file, .. }
            | Finding::MissingKeywords { file, .. }
            | Finding::EmptyOrWhitespaceValue { file, .. }
            | Finding::AdjacentWhitespace { file, .. } => file,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::FileFound { file } => {
                write!(f, "Found file: {}", file)
            }
            Finding::MissingFile { file } => {
                write!(f, "Missing file: {}", file)
            }
            Finding::InvalidFormat { file, detail } => {
                write!(f, "{} has invalid JSON format: {}", file, detail)
            }
            Finding::KeywordsFound { file, language } => {
                write!(f, "{} contains expected {} keywords.", file, language)
            }
            Finding::MissingKeywords { file, language } => {
                write!(f, "{} does not contain expected {} keywords.", file, language)
            }
            Finding::EmptyOrWhitespaceValue { file, line } => {
                write!(
                    f,
                    "{} contains missing or whitespace-only string on line {}",
                    file, line
                )
            }
            Finding::AdjacentWhitespace { file, line } => {
                write!(
                    f,
                    "{} contains multiple adjacent whitespaces on line {}",
                    file, line
                )
            }
        }
    }
}
