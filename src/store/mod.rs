//! Roster persistence interface and implementations
//!
//! The league keeps its whole roster as a single document. A store hands
//! out the document with a version token on fetch and only accepts a
//! replacement that names the current token, which lets the recorder
//! detect writers it cannot see.

pub mod http;
pub mod memory;
pub mod wire;

use crate::error::Result;
use crate::roster::RosterSnapshot;
use async_trait::async_trait;

pub use http::HttpRosterStore;
pub use memory::InMemoryRosterStore;
pub use wire::PlayerRecord;

/// Key-value endpoint holding the league roster
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Read the full roster; an absent document is an empty roster
    async fn fetch(&self) -> Result<RosterSnapshot>;

    /// Overwrite the full roster if the snapshot's version is still current
    ///
    /// Fails with `ConcurrentModification` when another writer got there
    /// first, and with `Transport` for any other non-success.
    async fn replace(&self, snapshot: RosterSnapshot) -> Result<()>;
}
