//! Error types for the MediGo Hub access layer.
//!
//! Fallible operations (loaders, store adapters, `login`/`logout`) return
//! `HubResult<T>`. Render-path functions never surface these: navigation
//! filtering and predicates degrade to an empty or `false` result instead.

use thiserror::Error;

/// The unified error type for the MediGo Hub crates.
#[derive(Debug, Error)]
pub enum HubError {
    /// A role string that is not one of PLATFORM, PROVIDER, STAFF.
    #[error("unknown role '{value}'")]
    UnknownRole { value: String },

    /// A provider category that is not present in the registry.
    #[error("unknown provider category '{value}'")]
    UnknownCategory { value: String },

    /// A provider type, staff type, parent entity type or verification
    /// status string outside its closed set.
    #[error("unknown {kind} '{value}'")]
    UnknownSubType { kind: &'static str, value: String },

    /// A provider identity that is not verified tried to use provider features.
    #[error("provider '{identity_id}' is not verified")]
    UnverifiedProvider { identity_id: String },

    /// The persisted session record could not be decoded or failed validation.
    #[error("stored session is corrupt: {reason}")]
    StorageCorrupt { reason: String },

    /// The session store could not be read or written.
    #[error("session storage unavailable: {reason}")]
    StorageUnavailable { reason: String },

    /// Email/password did not match any account.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An identity violates the role/sub-type presence rules.
    #[error("invalid identity: {reason}")]
    InvalidIdentity { reason: String },

    /// A login is already pending on this context.
    #[error("a login is already in progress")]
    LoginInProgress,

    /// A catalog document is missing, malformed or inconsistent.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A demo scenario observed behavior other than what it expects.
    #[error("demo scenario check failed: {expectation}")]
    ScenarioFailed { expectation: String },
}

/// Convenience alias used throughout the MediGo Hub crates.
pub type HubResult<T> = Result<T, HubError>;
