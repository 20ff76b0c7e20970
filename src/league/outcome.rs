//! Applying a validated match result to a roster

use crate::error::Result;
use crate::league::validation::validate_submission;
use crate::rating::{apply_delta, team_adjustment, update_pair, K_FACTOR};
use crate::roster::PlayerRegistry;
use crate::types::{MatchKind, MatchSubmission, Player, RatingChange};

/// Roster after a match, with the per-player rating changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub registry: PlayerRegistry,
    pub changes: Vec<RatingChange>,
}

/// Validate a submission and compute the resulting roster
///
/// Ratings are read from `registry` as it is now; the input is left
/// untouched and a new registry is returned.
pub fn apply_match(registry: &PlayerRegistry, submission: &MatchSubmission) -> Result<MatchOutcome> {
    validate_submission(submission, registry)?;

    match submission.kind() {
        MatchKind::Solo => apply_solo(registry, submission),
        MatchKind::Duo => apply_duo(registry, submission),
    }
}

fn apply_solo(registry: &PlayerRegistry, submission: &MatchSubmission) -> Result<MatchOutcome> {
    let winner = registry.lookup(&submission.winners()[0])?;
    let loser = registry.lookup(&submission.losers()[0])?;

    let (winner_rating, loser_rating) = update_pair(winner.rating, loser.rating, 1.0, K_FACTOR)?;

    let updated = vec![winner.after_win(winner_rating), loser.after_loss(loser_rating)];
    Ok(outcome(registry, &[winner, loser], updated))
}

fn apply_duo(registry: &PlayerRegistry, submission: &MatchSubmission) -> Result<MatchOutcome> {
    let winners = [
        registry.lookup(&submission.winners()[0])?,
        registry.lookup(&submission.winners()[1])?,
    ];
    let losers = [
        registry.lookup(&submission.losers()[0])?,
        registry.lookup(&submission.losers()[1])?,
    ];

    let deltas = team_adjustment(
        (winners[0].rating, winners[1].rating),
        (losers[0].rating, losers[1].rating),
        K_FACTOR,
    );

    let updated = winners
        .iter()
        .map(|p| p.after_win(apply_delta(p.rating, deltas.winners)))
        .chain(
            losers
                .iter()
                .map(|p| p.after_loss(apply_delta(p.rating, deltas.losers))),
        )
        .collect();

    let before = [winners[0], winners[1], losers[0], losers[1]];
    Ok(outcome(registry, &before, updated))
}

fn outcome(registry: &PlayerRegistry, before: &[&Player], updated: Vec<Player>) -> MatchOutcome {
    let changes = before
        .iter()
        .zip(updated.iter())
        .map(|(old, new)| RatingChange {
            player_id: new.id.clone(),
            old_rating: old.rating,
            new_rating: new.rating,
        })
        .collect();

    let registry = updated
        .into_iter()
        .fold(registry.clone(), |registry, player| registry.upsert(player));

    MatchOutcome { registry, changes }
}
