//! In-memory roster store
//!
//! Versioned with a counter that moves on every successful replace, so it
//! behaves like a remote store with conditional writes.

use crate::error::{LeagueError, Result};
use crate::roster::{PlayerRegistry, RosterSnapshot, VersionToken};
use crate::store::RosterStore;
use crate::types::Player;
use async_trait::async_trait;
use std::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct StoredRoster {
    registry: PlayerRegistry,
    version: u64,
}

/// Process-local store backed by a lock-protected roster
#[derive(Debug, Default)]
pub struct InMemoryRosterStore {
    roster: RwLock<StoredRoster>,
}

impl InMemoryRosterStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with players
    pub fn with_players(players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            roster: RwLock::new(StoredRoster {
                registry: players.into_iter().collect(),
                version: 0,
            }),
        }
    }

    /// Current contents, for inspection
    pub fn players(&self) -> Result<PlayerRegistry> {
        let roster = self
            .roster
            .read()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire roster read lock".to_string(),
            })?;

        Ok(roster.registry.clone())
    }

    /// Number of successful replaces so far
    pub fn version(&self) -> Result<u64> {
        let roster = self
            .roster
            .read()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire roster read lock".to_string(),
            })?;

        Ok(roster.version)
    }
}

#[async_trait]
impl RosterStore for InMemoryRosterStore {
    async fn fetch(&self) -> Result<RosterSnapshot> {
        let roster = self
            .roster
            .read()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire roster read lock".to_string(),
            })?;

        Ok(RosterSnapshot::new(
            roster.registry.clone(),
            VersionToken::new(roster.version.to_string()),
        ))
    }

    async fn replace(&self, snapshot: RosterSnapshot) -> Result<()> {
        let mut roster = self
            .roster
            .write()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire roster write lock".to_string(),
            })?;

        let (registry, expected) = snapshot.into_parts();
        if expected.as_str() != roster.version.to_string() {
            debug!(
                "Rejecting replace at version {} (current {})",
                expected, roster.version
            );
            return Err(LeagueError::ConcurrentModification {
                expected: expected.to_string(),
            });
        }

        roster.registry = registry;
        roster.version += 1;
        Ok(())
    }
}
