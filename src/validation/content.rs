/*!
 * Content validation for localization files.
 *
 * This module checks that a file's raw text contains at least one of the
 * marker keywords registered for its language. The check is a plain
 * case-sensitive substring containment: no normalization, no tokenization,
 * and a keyword embedded inside a longer word still counts as a match. It
 * is a crude presence heuristic, not linguistic validation.
 */

use log::debug;

/// Keyword containment validator
pub struct ContentValidator;

impl ContentValidator {
    /// Check whether the raw text contains any of the given keywords.
    ///
    /// # Arguments
    /// * `content` - Raw file text (not the parsed structure)
    /// * `keywords` - Marker keywords for the file's language
    ///
    /// # Returns
    /// * `true` when at least one keyword occurs as a substring
    pub fn contains_any_keyword(content: &str, keywords: &[String]) -> bool {
        let matched = keywords.iter().any(|keyword| content.contains(keyword.as_str()));

        debug!(
            "Keyword check: candidates={}, matched={}",
            keywords.len(),
            matched
        );

        matched
    }
}
