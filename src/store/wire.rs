//! JSON document format of the stored roster
//!
//! The document is an object keyed by player id:
//! `{"Alice": {"elo": 1016, "wins": 1, "losses": 0}, ...}`

use crate::error::{LeagueError, Result};
use crate::rating::DEFAULT_RATING;
use crate::roster::PlayerRegistry;
use crate::types::{Player, PlayerId};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

/// Stored stats for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub elo: i32,
    pub wins: u32,
    pub losses: u32,
}

impl PlayerRecord {
    /// Read a stored entry field by field
    ///
    /// A field that is absent, `null` or not numeric takes its default.
    /// Fractional numbers and numeric strings are truncated toward zero;
    /// negative counters read as zero. The entry itself is always kept.
    pub fn from_entry(id: &str, entry: &Map<String, Value>) -> Self {
        let elo = read_field(id, entry, "elo")
            .or_else(|| read_field(id, entry, "rating"))
            .map(|value| value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
            .unwrap_or(DEFAULT_RATING);

        Self {
            elo,
            wins: read_counter(id, entry, "wins"),
            losses: read_counter(id, entry, "losses"),
        }
    }

    pub fn into_player(self, id: PlayerId) -> Player {
        Player {
            id,
            rating: self.elo,
            wins: self.wins,
            losses: self.losses,
        }
    }
}

fn read_field(id: &str, entry: &Map<String, Value>, key: &str) -> Option<i64> {
    let value = entry.get(key)?;
    let number = match value {
        Value::Null => None,
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(truncate),
        _ => None,
    };
    if number.is_none() && !value.is_null() {
        warn!("Roster entry {} has unreadable {} ({}), using default", id, key, value);
    }
    number
}

fn read_counter(id: &str, entry: &Map<String, Value>, key: &str) -> u32 {
    match read_field(id, entry, key) {
        Some(value) if value < 0 => {
            warn!("Roster entry {} has negative {} ({}), reading as 0", id, key, value);
            0
        }
        Some(value) => u32::try_from(value).unwrap_or(u32::MAX),
        None => 0,
    }
}

fn truncate(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self {
            elo: player.rating,
            wins: player.wins,
            losses: player.losses,
        }
    }
}

/// Parse a stored document into a registry
pub fn decode_roster(payload: &str) -> Result<PlayerRegistry> {
    let payload = payload.trim();
    if payload.is_empty() {
        return Ok(PlayerRegistry::new());
    }

    let document: Value = serde_json::from_str(payload)
        .map_err(|e| LeagueError::transport(format!("Roster payload is not valid JSON: {}", e)))?;

    let entries = match document {
        Value::Null => return Ok(PlayerRegistry::new()),
        Value::Object(entries) => entries,
        other => {
            return Err(LeagueError::transport(format!(
                "Roster payload must be a JSON object, got {}",
                other
            )))
        }
    };

    let mut registry = PlayerRegistry::new();
    for (id, entry) in entries {
        let Value::Object(fields) = entry else {
            warn!("Skipping roster entry {} that is not an object", id);
            continue;
        };
        let record = PlayerRecord::from_entry(&id, &fields);
        registry = registry.upsert(record.into_player(id));
    }

    Ok(registry)
}

/// Build the stored document for a registry
pub fn encode_roster(registry: &PlayerRegistry) -> BTreeMap<PlayerId, PlayerRecord> {
    registry
        .iter()
        .map(|player| (player.id.clone(), PlayerRecord::from(player)))
        .collect()
}
