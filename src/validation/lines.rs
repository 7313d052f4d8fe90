/*!
 * Line-level whitespace checks for localization files.
 *
 * This module scans raw file text line by line for two independent
 * hygiene problems:
 * - Empty or whitespace-only quoted values (`key: ""` or `key: "   "`)
 * - Two or more consecutive whitespace characters anywhere on a line
 *
 * Lines are 1-indexed and split on `\n` only; carriage returns are kept
 * as part of the line. Both checks can fire on the same line.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for a colon followed by an empty quoted value
static EMPTY_VALUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#":\s*"""#).expect("Invalid empty value regex")
});

/// Regex for a colon followed by a whitespace-only quoted value
static WHITESPACE_VALUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#":\s*"\s+""#).expect("Invalid whitespace value regex")
});

/// Regex for two or more consecutive whitespace characters
static ADJACENT_WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s{2,}").expect("Invalid adjacent whitespace regex")
});

/// One line-level problem found at a 1-indexed line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineIssue {
    /// Quoted value is empty or entirely whitespace
    EmptyOrWhitespaceValue {
        /// 1-indexed line number
        line: usize,
    },
    /// Two or more consecutive whitespace characters on the line
    AdjacentWhitespace {
        /// 1-indexed line number
        line: usize,
    },
}

/// Line-level whitespace validator
pub struct LineValidator;

impl LineValidator {
    /// Check whether a single line carries an empty or whitespace-only value
    pub fn has_empty_or_whitespace_value(line: &str) -> bool {
        EMPTY_VALUE_REGEX.is_match(line) || WHITESPACE_VALUE_REGEX.is_match(line)
    }

    /// Check whether a single line contains adjacent whitespace
    pub fn has_adjacent_whitespace(line: &str) -> bool {
        ADJACENT_WHITESPACE_REGEX.is_match(line)
    }

    /// Scan raw text and collect all line-level issues in line order.
    ///
    /// The two checks are independent; a single line may yield both an
    /// `EmptyOrWhitespaceValue` and an `AdjacentWhitespace` issue.
    pub fn check_content(content: &str) -> Vec<LineIssue> {
        let mut issues = Vec::new();

        for (index, line) in content.split('\n').enumerate() {
            let line_number = index + 1;

            if Self::has_empty_or_whitespace_value(line) {
                issues.push(LineIssue::EmptyOrWhitespaceValue { line: line_number });
            }

            if Self::has_adjacent_whitespace(line) {
                issues.push(LineIssue::AdjacentWhitespace { line: line_number });
            }
        }

        issues
    }
}
