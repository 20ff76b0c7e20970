//! Roster store over the Firebase Realtime Database REST API
//!
//! The roster lives at `<base>/players.json`. Reads ask for an ETag with
//! `X-Firebase-ETag: true`; writes are `PUT` with `if-match`, which the
//! server rejects with 412 once the document has moved on.

use crate::config::StoreSettings;
use crate::error::{LeagueError, Result};
use crate::roster::{RosterSnapshot, VersionToken};
use crate::store::wire::{decode_roster, encode_roster};
use crate::store::RosterStore;
use async_trait::async_trait;
use reqwest::header::{ETAG, IF_MATCH};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

const ROSTER_DOCUMENT: &str = "players.json";
const FIREBASE_ETAG_HEADER: &str = "X-Firebase-ETag";

/// HTTP-backed roster store
#[derive(Debug, Clone)]
pub struct HttpRosterStore {
    client: Client,
    roster_url: String,
}

impl HttpRosterStore {
    /// Create a store client from settings
    ///
    /// The request timeout applies to every round trip.
    pub fn new(settings: &StoreSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.request_timeout())
            .connect_timeout(settings.request_timeout())
            .build()
            .map_err(|e| LeagueError::ConfigurationError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            roster_url: roster_url(&settings.url),
        })
    }

    pub fn roster_url(&self) -> &str {
        &self.roster_url
    }
}

#[async_trait]
impl RosterStore for HttpRosterStore {
    async fn fetch(&self) -> Result<RosterSnapshot> {
        debug!("Fetching roster from {}", self.roster_url);

        let response = self
            .client
            .get(&self.roster_url)
            .header(FIREBASE_ETAG_HEADER, "true")
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        let version = response
            .headers()
            .get(ETAG)
            .and_then(|value| value.to_str().ok())
            .map(VersionToken::new)
            .ok_or_else(|| LeagueError::Transport {
                status: Some(status.as_u16()),
                detail: "Roster response carried no ETag".to_string(),
            })?;

        let body = response.text().await.map_err(request_error)?;
        let registry = decode_roster(&body)?;

        Ok(RosterSnapshot::new(registry, version))
    }

    async fn replace(&self, snapshot: RosterSnapshot) -> Result<()> {
        let (registry, expected) = snapshot.into_parts();
        debug!(
            "Replacing roster at {} ({} players, version {})",
            self.roster_url,
            registry.len(),
            expected
        );

        let response = self
            .client
            .put(&self.roster_url)
            .header(IF_MATCH, expected.as_str())
            .json(&encode_roster(&registry))
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if status == StatusCode::PRECONDITION_FAILED {
            warn!("Roster moved past version {} before write", expected);
            return Err(LeagueError::ConcurrentModification {
                expected: expected.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        Ok(())
    }
}

fn roster_url(base: &str) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, ROSTER_DOCUMENT)
    } else {
        format!("{}/{}", base, ROSTER_DOCUMENT)
    }
}

fn status_error(status: StatusCode, body: String) -> LeagueError {
    LeagueError::Transport {
        status: Some(status.as_u16()),
        detail: if body.is_empty() {
            status.canonical_reason().unwrap_or("unknown").to_string()
        } else {
            body
        },
    }
}

fn request_error(err: reqwest::Error) -> LeagueError {
    let detail = if err.is_timeout() {
        format!("Request timed out: {}", err)
    } else if err.is_connect() {
        format!("Store unreachable: {}", err)
    } else {
        format!("Request failed: {}", err)
    };

    LeagueError::Transport {
        status: err.status().map(|s| s.as_u16()),
        detail,
    }
}
