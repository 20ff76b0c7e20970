//! Common types used throughout the league service

use crate::error::ValidationError;
use crate::rating::DEFAULT_RATING;
use serde::{Deserialize, Serialize};

/// Player identifier: the unique, case-sensitive player name
pub type PlayerId = String;

/// A league player with current standing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub rating: i32,
    pub wins: u32,
    pub losses: u32,
}

impl Player {
    /// Create a fresh player at the default rating with no matches
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            rating: DEFAULT_RATING,
            wins: 0,
            losses: 0,
        }
    }

    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses
    }

    /// Fraction of matches won, 0.0 before the first match
    pub fn win_rate(&self) -> f64 {
        match self.matches_played() {
            0 => 0.0,
            played => f64::from(self.wins) / f64::from(played),
        }
    }

    /// Copy of this player after a win at the given rating
    pub fn after_win(&self, rating: i32) -> Self {
        Self {
            rating,
            wins: self.wins + 1,
            ..self.clone()
        }
    }

    /// Copy of this player after a loss at the given rating
    pub fn after_loss(&self, rating: i32) -> Self {
        Self {
            rating,
            losses: self.losses + 1,
            ..self.clone()
        }
    }
}

/// Format of a reported match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    /// One versus one
    Solo,
    /// Two versus two
    Duo,
}

impl MatchKind {
    /// Players per side
    pub fn team_size(&self) -> usize {
        match self {
            MatchKind::Solo => 1,
            MatchKind::Duo => 2,
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchKind::Solo => write!(f, "Solo"),
            MatchKind::Duo => write!(f, "Duo"),
        }
    }
}

/// A reported match outcome
///
/// Both sides are guaranteed non-empty. Cardinality against `kind` and
/// participant uniqueness are checked later against the live roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSubmission {
    kind: MatchKind,
    winners: Vec<PlayerId>,
    losers: Vec<PlayerId>,
}

impl MatchSubmission {
    pub fn new(
        kind: MatchKind,
        winners: Vec<PlayerId>,
        losers: Vec<PlayerId>,
    ) -> Result<Self, ValidationError> {
        if winners.is_empty() || losers.is_empty() {
            return Err(ValidationError::InvalidCardinality {
                kind,
                winners: winners.len(),
                losers: losers.len(),
            });
        }

        Ok(Self {
            kind,
            winners,
            losers,
        })
    }

    /// Shorthand for a 1v1 result
    pub fn solo(winner: impl Into<PlayerId>, loser: impl Into<PlayerId>) -> Self {
        Self {
            kind: MatchKind::Solo,
            winners: vec![winner.into()],
            losers: vec![loser.into()],
        }
    }

    /// Shorthand for a 2v2 result
    pub fn duo(winners: [&str; 2], losers: [&str; 2]) -> Self {
        Self {
            kind: MatchKind::Duo,
            winners: winners.iter().map(|id| id.to_string()).collect(),
            losers: losers.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    pub fn losers(&self) -> &[PlayerId] {
        &self.losers
    }

    /// Winners followed by losers, in submission order
    pub fn participants(&self) -> impl Iterator<Item = &PlayerId> {
        self.winners.iter().chain(self.losers.iter())
    }
}

/// Rating change applied to one player by a recorded match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub old_rating: i32,
    pub new_rating: i32,
}

impl RatingChange {
    pub fn delta(&self) -> i32 {
        self.new_rating - self.old_rating
    }
}
