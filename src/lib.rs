/*!
 * # locheck - Localization file checker
 *
 * A Rust library for validating localization (translation) JSON files
 * before shipping.
 *
 * ## Features
 *
 * - Presence check against a fixed table of expected files
 * - JSON syntax validation
 * - Language marker keyword detection
 * - Line-level whitespace hygiene checks
 * - Human-readable, glyph-prefixed report output
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Expected-file and keyword tables
 * - `validation`: The validation pass and its checks:
 *   - `validation::findings`: Finding model and report messages
 *   - `validation::content`: Keyword containment check
 *   - `validation::lines`: Line-level whitespace checks
 *   - `validation::service`: Orchestrates all checks per file
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod validation;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::{Config, ExpectedFile};
pub use validation::{Finding, ValidationService};
pub use errors::AppError;
