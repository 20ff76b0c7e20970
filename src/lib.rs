//! Babyfoot League - Elo standings for a table-football league
//!
//! This crate computes Elo ratings for 1v1 and 2v2 matches and records
//! results against a shared roster store without losing concurrent updates.

pub mod config;
pub mod error;
pub mod league;
pub mod rating;
pub mod roster;
pub mod store;
pub mod types;

// Re-export commonly used types and traits
pub use error::{LeagueError, Result, ValidationError};
pub use types::*;

// Re-export key components
pub use league::MatchRecorder;
pub use roster::{PlayerRegistry, RosterSnapshot, VersionToken};
pub use store::{HttpRosterStore, InMemoryRosterStore, RosterStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
