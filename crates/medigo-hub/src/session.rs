//! The composition root: one auth context wired to a navigation engine.

use tracing::info;

use medigo_contracts::{
    error::{HubError, HubResult},
    navigation::NavigationEntry,
};
use medigo_core::{
    traits::{CredentialStore, SessionStore},
    AuthContext, GuardDecision, RouteGuard, RouteRequirements,
};
use medigo_navigation::NavigationEngine;

use crate::credentials::MockCredentialStore;

/// Everything one session needs to render: the auth context and the
/// navigation engine. Constructing a `HubSession` hydrates it.
pub struct HubSession {
    auth: AuthContext,
    engine: NavigationEngine,
}

impl HubSession {
    pub fn new(
        engine: NavigationEngine,
        store: Box<dyn SessionStore>,
        credentials: Box<dyn CredentialStore>,
    ) -> Self {
        let auth = AuthContext::new(store, credentials);
        let status = auth.hydrate();
        info!(status = ?status, "session hydrated");
        Self { auth, engine }
    }

    /// Built-in registry and catalog, demo accounts, the given store.
    pub fn demo(store: Box<dyn SessionStore>) -> HubResult<Self> {
        Ok(Self::new(
            NavigationEngine::builtin()?,
            store,
            Box::new(MockCredentialStore::demo()),
        ))
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn engine(&self) -> &NavigationEngine {
        &self.engine
    }

    /// Log in, treating rejected credentials as an error.
    pub fn sign_in(&self, email: &str, password: &str) -> HubResult<()> {
        if self.auth.login(email, password)? {
            Ok(())
        } else {
            Err(HubError::InvalidCredentials)
        }
    }

    pub fn sign_out(&self) -> HubResult<()> {
        self.auth.logout()
    }

    /// The menu for the current identity; empty when anonymous.
    pub fn navigation(&self) -> Vec<NavigationEntry> {
        self.auth
            .current_identity()
            .map(|identity| self.engine.navigation_for(&identity))
            .unwrap_or_default()
    }

    pub fn check_route(&self, route: &str, requirements: &RouteRequirements) -> GuardDecision {
        RouteGuard::new(self.engine.registry()).check(&self.auth, requirements, route)
    }
}
