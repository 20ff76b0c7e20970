//! Error types for the league service
//!
//! Library operations return a typed [`LeagueError`] so callers can tell
//! input problems apart from store problems. The binary and the config
//! loader wrap these in anyhow at the edge.

use crate::types::{MatchKind, PlayerId};

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LeagueError>;

/// Caller input that is malformed or inconsistent with the current roster
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Player name is required")]
    InvalidName,

    #[error("Player already exists: {player_id}")]
    DuplicatePlayer { player_id: PlayerId },

    #[error("Player appears more than once in the match: {player_id}")]
    DuplicateParticipant { player_id: PlayerId },

    #[error("Unknown players: {}", .missing.join(", "))]
    UnknownPlayer { missing: Vec<PlayerId> },

    #[error(
        "{kind} match needs {} winner(s) and {} loser(s), got {winners} and {losers}",
        .kind.team_size(),
        .kind.team_size()
    )]
    InvalidCardinality {
        kind: MatchKind,
        winners: usize,
        losers: usize,
    },
}

/// Top-level error for every league operation
#[derive(Debug, thiserror::Error)]
pub enum LeagueError {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error(
        "Roster store request failed ({}): {detail}",
        .status.map_or_else(|| "no status".to_string(), |s| s.to_string())
    )]
    Transport { status: Option<u16>, detail: String },

    #[error("Roster changed since it was fetched (version {expected} is stale)")]
    ConcurrentModification { expected: String },

    #[error("Rating calculation failed: {reason}")]
    RatingCalculationFailed { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal service error: {message}")]
    InternalError { message: String },
}

impl LeagueError {
    /// Transport error without an HTTP status (unreachable, timed out, undecodable)
    pub fn transport(detail: impl Into<String>) -> Self {
        LeagueError::Transport {
            status: None,
            detail: detail.into(),
        }
    }

    /// Whether re-running the whole operation may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LeagueError::Transport { .. } | LeagueError::ConcurrentModification { .. }
        )
    }

    /// The validation failure, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            LeagueError::Validation(e) => Some(e),
            _ => None,
        }
    }
}
