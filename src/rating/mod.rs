//! Rating system using the Elo model
//!
//! This module holds the pure rating math used when recording matches:
//! head-to-head updates, 2v2 team adjustments, and the league constants.

pub mod elo;

// Re-export commonly used items
pub use elo::{
    apply_delta, expected_score, team_adjustment, update_pair, EloError, TeamDeltas,
    DEFAULT_RATING, K_FACTOR,
};
