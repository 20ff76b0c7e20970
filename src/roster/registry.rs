//! In-memory roster with uniqueness and lookup invariants

use crate::error::ValidationError;
use crate::types::{Player, PlayerId};
use std::collections::BTreeMap;

/// The set of players in one roster snapshot, keyed by id
///
/// Mutation consumes the registry and hands back the new state, so a
/// half-finished update is never observable through a shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRegistry {
    players: BTreeMap<PlayerId, Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a player by id
    pub fn lookup(&self, id: &str) -> Result<&Player, ValidationError> {
        self.players
            .get(id)
            .ok_or_else(|| ValidationError::UnknownPlayer {
                missing: vec![id.to_string()],
            })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.players.contains_key(id)
    }

    /// Insert the player, replacing any existing entry with the same id
    pub fn upsert(mut self, player: Player) -> Self {
        self.players.insert(player.id.clone(), player);
        self
    }

    /// All players ordered by rating descending, ties by ascending id
    pub fn all(&self) -> Vec<Player> {
        let mut players: Vec<Player> = self.players.values().cloned().collect();
        // Stable sort over id-ordered input keeps ties in id order
        players.sort_by(|a, b| b.rating.cmp(&a.rating));
        players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate players in id order
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }
}

impl FromIterator<Player> for PlayerRegistry {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        iter.into_iter()
            .fold(PlayerRegistry::new(), |registry, player| {
                registry.upsert(player)
            })
    }
}
