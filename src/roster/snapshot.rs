//! Point-in-time copy of the persisted roster

use crate::roster::registry::PlayerRegistry;
use serde::{Deserialize, Serialize};

/// Opaque store version handed out on fetch and checked on replace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionToken(String);

impl VersionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VersionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The full roster as fetched from the store, tagged with its version
///
/// Passed by value from fetch through compute to persist; never cached
/// between operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSnapshot {
    registry: PlayerRegistry,
    version: VersionToken,
}

impl RosterSnapshot {
    pub fn new(registry: PlayerRegistry, version: VersionToken) -> Self {
        Self { registry, version }
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn version(&self) -> &VersionToken {
        &self.version
    }

    /// Same base version, new contents
    pub fn with_registry(self, registry: PlayerRegistry) -> Self {
        Self {
            registry,
            version: self.version,
        }
    }

    pub fn into_parts(self) -> (PlayerRegistry, VersionToken) {
        (self.registry, self.version)
    }
}
