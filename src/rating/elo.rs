//! Elo rating math
//!
//! Pure functions only: no state, no I/O. Win probabilities come from the
//! skillratings Elo model; the K-factor update and team aggregation are
//! applied on top so that fractional scores and 2v2 averaging are supported.

use serde::{Deserialize, Serialize};
use skillratings::elo::EloRating;

/// Maximum rating swing per match, identical for every player
pub const K_FACTOR: f64 = 32.0;

/// Rating given to newly added players
pub const DEFAULT_RATING: i32 = 1000;

/// Errors from the rating functions
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EloError {
    #[error("Score must be within [0, 1], got {0}")]
    InvalidScore(f64),
}

impl From<EloError> for crate::error::LeagueError {
    fn from(err: EloError) -> Self {
        crate::error::LeagueError::RatingCalculationFailed {
            reason: err.to_string(),
        }
    }
}

/// Rating deltas for both sides of a team match, before rounding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamDeltas {
    pub winners: f64,
    pub losers: f64,
}

/// Probability that a player rated `rating_a` beats one rated `rating_b`
///
/// The probability is evaluated once for the (lower, higher) ordering and
/// the reverse direction is its complement, so
/// `expected_score(a, b) + expected_score(b, a) == 1.0` holds exactly.
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    let (lower, higher) = if rating_a <= rating_b {
        (rating_a, rating_b)
    } else {
        (rating_b, rating_a)
    };

    let (lower_wins, _) = skillratings::elo::expected_score(
        &EloRating { rating: lower },
        &EloRating { rating: higher },
    );

    if rating_a <= rating_b {
        lower_wins
    } else {
        1.0 - lower_wins
    }
}

/// New ratings for a head-to-head result where `score_a` is A's score
///
/// `score_a` is 1.0 for a win by A, 0.0 for a loss, anything in between for
/// partial results.
pub fn update_pair(
    rating_a: i32,
    rating_b: i32,
    score_a: f64,
    k: f64,
) -> Result<(i32, i32), EloError> {
    if !(0.0..=1.0).contains(&score_a) {
        return Err(EloError::InvalidScore(score_a));
    }

    let (a, b) = (f64::from(rating_a), f64::from(rating_b));
    let new_a = a + k * (score_a - expected_score(a, b));
    let new_b = b + k * ((1.0 - score_a) - expected_score(b, a));

    Ok((round_rating(new_a), round_rating(new_b)))
}

/// Deltas for a 2v2 result, computed from the mean rating of each team
///
/// Every member of a team receives the same delta; it is added to each
/// player's own rating via [`apply_delta`].
pub fn team_adjustment(winners: (i32, i32), losers: (i32, i32), k: f64) -> TeamDeltas {
    let winners_avg = (f64::from(winners.0) + f64::from(winners.1)) / 2.0;
    let losers_avg = (f64::from(losers.0) + f64::from(losers.1)) / 2.0;
    let expected_winners = expected_score(winners_avg, losers_avg);
    let expected_losers = expected_score(losers_avg, winners_avg);

    TeamDeltas {
        winners: k * (1.0 - expected_winners),
        losers: -k * expected_losers,
    }
}

/// Add an unrounded delta to an individual rating and round the result
pub fn apply_delta(rating: i32, delta: f64) -> i32 {
    round_rating(f64::from(rating) + delta)
}

/// Round to nearest, ties toward positive infinity
fn round_rating(value: f64) -> i32 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded as i32
}
