//! Test fixtures and store wrappers for integration testing

#![allow(dead_code)]

use async_trait::async_trait;
use babyfoot_league::config::AppConfig;
use babyfoot_league::error::{LeagueError, Result};
use babyfoot_league::store::{InMemoryRosterStore, RosterStore};
use babyfoot_league::{Player, RosterSnapshot};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Player with explicit stats
pub fn player(id: &str, rating: i32, wins: u32, losses: u32) -> Player {
    Player {
        id: id.to_string(),
        rating,
        wins,
        losses,
    }
}

/// Default config with a short request timeout
pub fn test_config(request_timeout_ms: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.store.request_timeout_ms = request_timeout_ms;
    config
}

/// Store that waits before every round trip, so concurrent callers overlap
#[derive(Debug)]
pub struct SlowStore {
    inner: Arc<InMemoryRosterStore>,
    latency: Duration,
    fetches: AtomicUsize,
    replaces: AtomicUsize,
}

impl SlowStore {
    pub fn new(inner: Arc<InMemoryRosterStore>, latency: Duration) -> Self {
        Self {
            inner,
            latency,
            fetches: AtomicUsize::new(0),
            replaces: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn replace_count(&self) -> usize {
        self.replaces.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RosterStore for SlowStore {
    async fn fetch(&self) -> Result<RosterSnapshot> {
        tokio::time::sleep(self.latency).await;
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch().await
    }

    async fn replace(&self, snapshot: RosterSnapshot) -> Result<()> {
        tokio::time::sleep(self.latency).await;
        self.replaces.fetch_add(1, Ordering::SeqCst);
        self.inner.replace(snapshot).await
    }
}

/// Which round trip a [`FaultyStore`] breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    FetchStatus(u16),
    ReplaceStatus(u16),
    FetchHangs,
    ReplaceHangs,
}

/// Store that injects one kind of failure and records attempted writes
#[derive(Debug)]
pub struct FaultyStore {
    inner: Arc<InMemoryRosterStore>,
    fault: Fault,
    attempted_writes: Mutex<Vec<RosterSnapshot>>,
}

impl FaultyStore {
    pub fn new(inner: Arc<InMemoryRosterStore>, fault: Fault) -> Self {
        Self {
            inner,
            fault,
            attempted_writes: Mutex::new(Vec::new()),
        }
    }

    pub fn attempted_writes(&self) -> Vec<RosterSnapshot> {
        self.attempted_writes
            .lock()
            .map(|writes| writes.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RosterStore for FaultyStore {
    async fn fetch(&self) -> Result<RosterSnapshot> {
        match self.fault {
            Fault::FetchStatus(status) => Err(LeagueError::Transport {
                status: Some(status),
                detail: "injected fetch failure".to_string(),
            }),
            Fault::FetchHangs => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                self.inner.fetch().await
            }
            _ => self.inner.fetch().await,
        }
    }

    async fn replace(&self, snapshot: RosterSnapshot) -> Result<()> {
        if let Ok(mut writes) = self.attempted_writes.lock() {
            writes.push(snapshot.clone());
        }

        match self.fault {
            Fault::ReplaceStatus(status) => Err(LeagueError::Transport {
                status: Some(status),
                detail: "injected write failure".to_string(),
            }),
            Fault::ReplaceHangs => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                self.inner.replace(snapshot).await
            }
            _ => self.inner.replace(snapshot).await,
        }
    }
}
