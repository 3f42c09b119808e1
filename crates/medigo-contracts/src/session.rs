//! The persisted session record.
//!
//! A single JSON document is written under [`SESSION_KEY`] at login and
//! removed at logout. There is no schema version: any record that does not
//! decode, or whose identity fails validation, is `StorageCorrupt`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HubError, HubResult};
use crate::identity::Identity;

/// The fixed session-storage key.
pub const SESSION_KEY: &str = "medigo.session";

/// Unique identifier for one login session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub uuid::Uuid);

impl SessionId {
    /// Create a new, unique session ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoredSession {
    pub session_id: SessionId,
    pub identity: Identity,
    /// Wall-clock time the login completed (UTC).
    pub issued_at: DateTime<Utc>,
}

impl StoredSession {
    /// Open a fresh session for `identity`.
    pub fn new(identity: Identity) -> Self {
        Self {
            session_id: SessionId::new(),
            identity,
            issued_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> HubResult<String> {
        serde_json::to_string(self).map_err(|e| HubError::StorageUnavailable {
            reason: format!("failed to encode session: {}", e),
        })
    }

    /// Decode and validate a stored record.
    pub fn from_json(raw: &str) -> HubResult<Self> {
        let session: StoredSession =
            serde_json::from_str(raw).map_err(|e| HubError::StorageCorrupt {
                reason: format!("failed to decode session: {}", e),
            })?;
        session
            .identity
            .validate()
            .map_err(|e| HubError::StorageCorrupt {
                reason: e.to_string(),
            })?;
        Ok(session)
    }
}
