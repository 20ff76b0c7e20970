//! Match recorder: the read-modify-write cycle against the roster store
//!
//! Every mutation runs fetch → compute → persist as one unit. Writers in
//! this process are serialized through an async write gate; writers in
//! other processes are caught by the store's version check and surface as
//! `ConcurrentModification`. Each store round trip is bounded by the
//! configured request timeout.

use crate::config::AppConfig;
use crate::error::{LeagueError, Result, ValidationError};
use crate::league::outcome::{apply_match, MatchOutcome};
use crate::league::validation::normalize_player_name;
use crate::roster::{PlayerRegistry, RosterSnapshot};
use crate::store::RosterStore;
use crate::types::{MatchSubmission, Player};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Records matches and new players against a shared roster store
pub struct MatchRecorder {
    /// Backing store for the roster document
    store: Arc<dyn RosterStore>,
    /// Upper bound for a single store round trip
    request_timeout: Duration,
    /// Automatic re-runs after a concurrent modification
    conflict_retries: u32,
    /// Held for the whole fetch → persist cycle of a mutation
    write_gate: Mutex<()>,
}

impl MatchRecorder {
    /// Create a recorder over a store using the application configuration
    pub fn new(store: Arc<dyn RosterStore>, config: &AppConfig) -> Self {
        Self {
            store,
            request_timeout: config.store.request_timeout(),
            conflict_retries: config.recorder.conflict_retries,
            write_gate: Mutex::new(()),
        }
    }

    /// Current standings, highest rating first
    pub async fn list_players(&self) -> Result<Vec<Player>> {
        let snapshot = self.fetch().await?;
        Ok(snapshot.registry().all())
    }

    /// Register a new player at the default rating
    pub async fn add_player(&self, name: &str) -> Result<Vec<Player>> {
        let player_id = normalize_player_name(name)?;

        let outcome = self
            .mutate(|registry| {
                if registry.contains(&player_id) {
                    return Err(ValidationError::DuplicatePlayer {
                        player_id: player_id.clone(),
                    }
                    .into());
                }
                Ok(MatchOutcome {
                    registry: registry.clone().upsert(Player::new(player_id.clone())),
                    changes: Vec::new(),
                })
            })
            .await?;

        info!("Player {} joined the league", player_id);
        Ok(outcome.registry.all())
    }

    /// Apply a match result and persist the new ratings
    pub async fn record_match(&self, submission: &MatchSubmission) -> Result<Vec<Player>> {
        let outcome = self
            .mutate(|registry| apply_match(registry, submission))
            .await?;

        info!(
            "Recorded {} match: {} beat {}",
            submission.kind(),
            submission.winners().join(" & "),
            submission.losers().join(" & ")
        );
        for change in &outcome.changes {
            info!(
                "  {}: {} -> {} ({:+})",
                change.player_id,
                change.old_rating,
                change.new_rating,
                change.delta()
            );
        }

        Ok(outcome.registry.all())
    }

    /// Run one fetch → compute → persist cycle under the write gate
    ///
    /// `compute` sees the freshly fetched roster on every attempt, so a
    /// retried cycle is validated again against current state.
    async fn mutate<F>(&self, compute: F) -> Result<MatchOutcome>
    where
        F: Fn(&PlayerRegistry) -> Result<MatchOutcome>,
    {
        let _gate = self.write_gate.lock().await;
        let mut attempt = 0;

        loop {
            let snapshot = self.fetch().await?;
            let outcome = compute(snapshot.registry())?;

            match self
                .persist(snapshot.with_registry(outcome.registry.clone()))
                .await
            {
                Ok(()) => return Ok(outcome),
                Err(LeagueError::ConcurrentModification { expected })
                    if attempt < self.conflict_retries =>
                {
                    attempt += 1;
                    warn!(
                        "Roster changed underneath us (version {}), retry {}/{}",
                        expected, attempt, self.conflict_retries
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch(&self) -> Result<RosterSnapshot> {
        let snapshot = timeout(self.request_timeout, self.store.fetch())
            .await
            .map_err(|_| {
                LeagueError::transport(format!(
                    "Roster fetch timed out after {:?}",
                    self.request_timeout
                ))
            })??;

        debug!(
            "Fetched roster version {} with {} players",
            snapshot.version(),
            snapshot.registry().len()
        );
        Ok(snapshot)
    }

    async fn persist(&self, snapshot: RosterSnapshot) -> Result<()> {
        let version = snapshot.version().clone();

        timeout(self.request_timeout, self.store.replace(snapshot))
            .await
            .map_err(|_| {
                LeagueError::transport(format!(
                    "Roster write timed out after {:?}",
                    self.request_timeout
                ))
            })??;

        debug!("Persisted roster over version {}", version);
        Ok(())
    }
}
