//! Mock credential store backed by the demo accounts.

use std::thread;
use std::time::Duration;

use tracing::debug;

use medigo_contracts::{error::HubResult, identity::Identity};
use medigo_core::traits::CredentialStore;

use crate::mock_data::{demo_accounts, DemoAccount};

/// Checks logins against a fixed account list.
///
/// An optional latency is slept inside `authenticate` to stand in for the
/// network round-trip of a real backend.
#[derive(Debug, Clone)]
pub struct MockCredentialStore {
    accounts: Vec<DemoAccount>,
    latency: Option<Duration>,
}

impl MockCredentialStore {
    pub fn new(accounts: Vec<DemoAccount>) -> Self {
        Self {
            accounts,
            latency: None,
        }
    }

    /// A store holding every account from [`demo_accounts`].
    pub fn demo() -> Self {
        Self::new(demo_accounts())
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn accounts(&self) -> &[DemoAccount] {
        &self.accounts
    }
}

impl CredentialStore for MockCredentialStore {
    fn authenticate(&self, email: &str, password: &str) -> HubResult<Option<Identity>> {
        if let Some(latency) = self.latency {
            thread::sleep(latency);
        }

        let found = self
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email.trim()) && a.password == password)
            .map(|a| a.identity.clone());

        debug!(email = %email, matched = found.is_some(), "credential check");
        Ok(found)
    }
}
