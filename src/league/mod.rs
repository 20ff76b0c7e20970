//! League operations: validation, match application, and recording
//!
//! [`MatchRecorder`] is the entry point used by applications; the pure
//! pieces it is built from are exposed for direct use and testing.

pub mod outcome;
pub mod recorder;
pub mod validation;

// Re-export commonly used types
pub use outcome::{apply_match, MatchOutcome};
pub use recorder::MatchRecorder;
pub use validation::{normalize_player_name, validate_submission};
