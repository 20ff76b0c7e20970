//! Submission checks against the live roster

use crate::error::ValidationError;
use crate::roster::PlayerRegistry;
use crate::types::{MatchSubmission, PlayerId};
use std::collections::HashSet;

/// Check a match against the roster it will be applied to
///
/// Checks run in a fixed order: distinct participants, then known
/// participants, then team sizes for the match kind.
pub fn validate_submission(
    submission: &MatchSubmission,
    registry: &PlayerRegistry,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in submission.participants() {
        if !seen.insert(id.as_str()) {
            return Err(ValidationError::DuplicateParticipant {
                player_id: id.clone(),
            });
        }
    }

    let missing: Vec<PlayerId> = submission
        .participants()
        .filter(|id| !registry.contains(id))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::UnknownPlayer { missing });
    }

    let team_size = submission.kind().team_size();
    if submission.winners().len() != team_size || submission.losers().len() != team_size {
        return Err(ValidationError::InvalidCardinality {
            kind: submission.kind(),
            winners: submission.winners().len(),
            losers: submission.losers().len(),
        });
    }

    Ok(())
}

/// Trim a requested player name, rejecting blank ones
pub fn normalize_player_name(name: &str) -> Result<PlayerId, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::InvalidName);
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MatchKind, Player};

    fn roster(ids: &[&str]) -> PlayerRegistry {
        ids.iter().map(|id| Player::new(*id)).collect()
    }

    fn ids(ids: &[&str]) -> Vec<PlayerId> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_valid_submissions() {
        let registry = roster(&["A", "B", "C", "D"]);
        assert!(validate_submission(&MatchSubmission::solo("A", "B"), &registry).is_ok());
        assert!(
            validate_submission(&MatchSubmission::duo(["A", "B"], ["C", "D"]), &registry).is_ok()
        );
    }

    #[test]
    fn test_same_player_on_both_sides() {
        let registry = roster(&["A", "B"]);
        let err = validate_submission(&MatchSubmission::solo("A", "A"), &registry).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateParticipant {
                player_id: "A".to_string()
            }
        );
    }

    #[test]
    fn test_same_player_twice_in_team() {
        let registry = roster(&["A", "B", "C"]);
        let err = validate_submission(&MatchSubmission::duo(["A", "A"], ["B", "C"]), &registry)
            .unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateParticipant { .. }));
    }

    #[test]
    fn test_unknown_players_all_named() {
        let registry = roster(&["A", "B"]);
        let err = validate_submission(&MatchSubmission::duo(["A", "X"], ["B", "Y"]), &registry)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownPlayer {
                missing: ids(&["X", "Y"])
            }
        );
    }

    #[test]
    fn test_duo_with_one_winner() {
        let registry = roster(&["A", "B", "C"]);
        let submission = MatchSubmission::new(MatchKind::Duo, ids(&["A"]), ids(&["B", "C"])).unwrap();
        let err = validate_submission(&submission, &registry).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidCardinality {
                kind: MatchKind::Duo,
                winners: 1,
                losers: 2,
            }
        );
    }

    #[test]
    fn test_solo_with_two_losers() {
        let registry = roster(&["A", "B", "C"]);
        let submission =
            MatchSubmission::new(MatchKind::Solo, ids(&["A"]), ids(&["B", "C"])).unwrap();
        assert!(matches!(
            validate_submission(&submission, &registry),
            Err(ValidationError::InvalidCardinality { .. })
        ));
    }

    #[test]
    fn test_duplicates_reported_before_unknowns() {
        let registry = roster(&["A"]);
        let err = validate_submission(&MatchSubmission::solo("Z", "Z"), &registry).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateParticipant { .. }));
    }

    #[test]
    fn test_normalize_player_name() {
        assert_eq!(normalize_player_name("  Alice ").unwrap(), "Alice");
        assert_eq!(normalize_player_name("   "), Err(ValidationError::InvalidName));
        assert_eq!(normalize_player_name(""), Err(ValidationError::InvalidName));
    }
}
