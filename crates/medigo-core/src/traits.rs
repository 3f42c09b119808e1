//! Port traits for the auth context.
//!
//! These two traits are the only side-effecting seams of the access layer:
//!
//! - `SessionStore`: the browser-session-style key/value store that
//!   holds the serialized session record
//! - `CredentialStore`: the account backend `login` checks against
//!
//! The composition root picks implementations; tests pass doubles.

use medigo_contracts::{error::HubResult, identity::Identity};

/// A string key/value store scoped to one session.
///
/// Implementations return `HubError::StorageUnavailable` for I/O failures.
/// A missing key is `Ok(None)`, never an error.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> HubResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> HubResult<()>;

    /// Delete `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> HubResult<()>;
}

/// The account backend.
pub trait CredentialStore: Send + Sync {
    /// Check `email`/`password`.
    ///
    /// Returns `Ok(None)` for any mismatch, including an unknown email. `Err`
    /// is reserved for transport or backend failures so a real backend can
    /// be swapped in without changing `login`'s contract.
    fn authenticate(&self, email: &str, password: &str) -> HubResult<Option<Identity>>;
}
