/*!
 * Validation module for localization file checks.
 *
 * This module provides the full validation pass over a directory of
 * localization JSON files:
 * - Presence validation (expected files exist)
 * - Format validation (content parses as JSON)
 * - Content validation (language marker keywords present)
 * - Line validation (whitespace hygiene)
 *
 * # Architecture
 *
 * - `findings`: Finding model and report messages
 * - `content`: Validates keyword containment in raw text
 * - `lines`: Validates per-line whitespace hygiene
 * - `service`: Orchestrates all checks per expected file
 */

pub mod findings;
pub mod content;
pub mod lines;
pub mod service;

// Re-export main types
pub use findings::Finding;
pub use content::ContentValidator;
pub use lines::{LineValidator, LineIssue};
pub use service::ValidationService;
