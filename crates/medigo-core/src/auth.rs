//! The auth context: session-scoped identity state.
//!
//! State machine:
//!
//!   Uninitialized → Loading → { Authenticated, Anonymous }
//!   Anonymous     → Loading → Authenticated          (login succeeded)
//!   Authenticated → Anonymous                        (logout)
//!
//! The only mutations are `hydrate`, `login` and `logout`. Every predicate is
//! derived from the current identity and answers `false` whenever no
//! identity is authenticated, including while a login is pending.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, error, info, warn};

use medigo_contracts::{
    error::{HubError, HubResult},
    identity::{Identity, Role, StaffType, DISPLAY_NAME_PLACEHOLDER},
    session::{SessionId, StoredSession, SESSION_KEY},
};

use crate::traits::{CredentialStore, SessionStore};

/// Permission that lets a PLATFORM identity manage providers.
pub const PROVIDERS_MANAGE: &str = "providers_manage";

/// Permission that lets an identity manage its organization's staff.
pub const STAFF_MANAGE: &str = "staff_manage";

/// Observable phase of the auth context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Uninitialized,
    Loading,
    Authenticated,
    Anonymous,
}

#[derive(Debug)]
enum AuthState {
    Uninitialized,
    Loading,
    Authenticated(StoredSession),
    Anonymous,
}

impl AuthState {
    fn status(&self) -> AuthStatus {
        match self {
            Self::Uninitialized => AuthStatus::Uninitialized,
            Self::Loading => AuthStatus::Loading,
            Self::Authenticated(_) => AuthStatus::Authenticated,
            Self::Anonymous => AuthStatus::Anonymous,
        }
    }
}

/// Owns the current identity for the lifetime of one session.
///
/// Build one per session at the composition root and hand references to the
/// navigation engine and route guard.
pub struct AuthContext {
    store: Box<dyn SessionStore>,
    credentials: Box<dyn CredentialStore>,
    state: Mutex<AuthState>,
}

impl AuthContext {
    /// Create an `Uninitialized` context over the given ports.
    pub fn new(store: Box<dyn SessionStore>, credentials: Box<dyn CredentialStore>) -> Self {
        Self {
            store,
            credentials,
            state: Mutex::new(AuthState::Uninitialized),
        }
    }

    /// Restore the identity persisted by an earlier login.
    ///
    /// Only acts from `Uninitialized`; later calls return the current status.
    ///
    /// - valid record  → `Authenticated`
    /// - no record     → `Anonymous`
    /// - corrupt record → record removed, warning logged, `Anonymous`
    /// - storage error → error logged, `Anonymous`
    pub fn hydrate(&self) -> AuthStatus {
        let Ok(mut state) = self.state.lock() else {
            error!("auth state lock poisoned during hydration");
            return AuthStatus::Anonymous;
        };
        if !matches!(*state, AuthState::Uninitialized) {
            return state.status();
        }
        *state = AuthState::Loading;

        let next = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => match StoredSession::from_json(&raw) {
                Ok(session) => {
                    info!(
                        session_id = %session.session_id.0,
                        role = %session.identity.role,
                        "session restored from storage"
                    );
                    AuthState::Authenticated(session)
                }
                Err(e) => {
                    warn!(error = %e, "discarding corrupt stored session");
                    if let Err(e) = self.store.remove(SESSION_KEY) {
                        warn!(error = %e, "failed to remove corrupt stored session");
                    }
                    AuthState::Anonymous
                }
            },
            Ok(None) => {
                debug!("no stored session");
                AuthState::Anonymous
            }
            Err(e) => {
                error!(error = %e, "session storage unreadable; starting anonymous");
                AuthState::Anonymous
            }
        };

        *state = next;
        state.status()
    }

    /// Authenticate and open a session.
    ///
    /// Returns `Ok(false)` when the credentials do not match; the previous
    /// state is restored. Returns `Err(LoginInProgress)` if another login is
    /// pending, and other errors only for credential-backend or storage
    /// failures. The session record is persisted before the context reports
    /// `Authenticated`.
    pub fn login(&self, email: &str, password: &str) -> HubResult<bool> {
        let previous = {
            let mut state = self.lock_state()?;
            if matches!(*state, AuthState::Loading) {
                warn!(email = %email, "login rejected: another login is pending");
                return Err(HubError::LoginInProgress);
            }
            std::mem::replace(&mut *state, AuthState::Loading)
        };

        // The credential check runs without the lock; concurrent callers
        // observe `Loading` until it settles.
        let outcome = self.open_session(email, password);

        let mut state = self.lock_state()?;
        match outcome {
            Ok(Some(session)) => {
                info!(
                    session_id = %session.session_id.0,
                    role = %session.identity.role,
                    "login succeeded"
                );
                *state = AuthState::Authenticated(session);
                Ok(true)
            }
            Ok(None) => {
                info!(email = %email, "login rejected: invalid credentials");
                *state = previous;
                Ok(false)
            }
            Err(e) => {
                warn!(email = %email, error = %e, "login failed");
                *state = previous;
                Err(e)
            }
        }
    }

    fn open_session(&self, email: &str, password: &str) -> HubResult<Option<StoredSession>> {
        let Some(identity) = self.credentials.authenticate(email, password)? else {
            return Ok(None);
        };
        identity.validate()?;

        let session = StoredSession::new(identity);
        self.store.set(SESSION_KEY, &session.to_json()?)?;
        Ok(Some(session))
    }

    /// End the session.
    ///
    /// Idempotent: from `Anonymous` this does nothing. The stored record and
    /// the in-memory identity are cleared under the state lock; if the store
    /// cannot remove the record the identity stays authenticated and the
    /// error is returned, so memory and storage never disagree.
    pub fn logout(&self) -> HubResult<()> {
        let mut state = self.lock_state()?;
        let session_id = match &*state {
            AuthState::Anonymous => {
                debug!("logout with no active session");
                return Ok(());
            }
            AuthState::Loading => return Err(HubError::LoginInProgress),
            AuthState::Uninitialized => None,
            AuthState::Authenticated(session) => Some(session.session_id),
        };

        self.store.remove(SESSION_KEY)?;
        *state = AuthState::Anonymous;

        match session_id {
            Some(id) => info!(session_id = %id.0, "logged out"),
            None => debug!("cleared stored session before hydration"),
        }
        Ok(())
    }

    pub fn status(&self) -> AuthStatus {
        self.state
            .lock()
            .map(|s| s.status())
            .unwrap_or(AuthStatus::Anonymous)
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == AuthStatus::Authenticated
    }

    /// A snapshot of the authenticated identity.
    pub fn current_identity(&self) -> Option<Identity> {
        self.with_session(|s| s.identity.clone())
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.with_session(|s| s.session_id)
    }

    /// True iff the identity holds the wildcard or exactly `permission`.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.with_identity(|i| i.permissions.has_token(permission))
            .unwrap_or(false)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.with_identity(|i| i.role == role).unwrap_or(false)
    }

    pub fn is_provider_verified(&self) -> bool {
        self.with_identity(Identity::is_verified_provider)
            .unwrap_or(false)
    }

    /// PLATFORM identities holding `providers_manage`.
    pub fn can_manage_providers(&self) -> bool {
        self.with_identity(|i| {
            i.role == Role::Platform && i.permissions.has_token(PROVIDERS_MANAGE)
        })
        .unwrap_or(false)
    }

    /// Identities holding `staff_manage` that may act on it: PLATFORM,
    /// verified PROVIDERs, and STAFF of type ADMIN.
    pub fn can_manage_staff(&self) -> bool {
        self.with_identity(|i| {
            let eligible = match i.role {
                Role::Platform => true,
                Role::Provider => i.is_verified_provider(),
                Role::Staff => i.effective_staff_type() == Some(StaffType::Admin),
            };
            eligible && i.permissions.has_token(STAFF_MANAGE)
        })
        .unwrap_or(false)
    }

    /// The identity's resolved display name, or the placeholder when no one
    /// is authenticated. Never empty.
    pub fn display_name(&self) -> String {
        self.with_identity(Identity::resolved_display_name)
            .unwrap_or_else(|| DISPLAY_NAME_PLACEHOLDER.to_string())
    }

    fn with_session<R>(&self, f: impl FnOnce(&StoredSession) -> R) -> Option<R> {
        let state = self.state.lock().ok()?;
        match &*state {
            AuthState::Authenticated(session) => Some(f(session)),
            _ => None,
        }
    }

    fn with_identity<R>(&self, f: impl FnOnce(&Identity) -> R) -> Option<R> {
        self.with_session(|s| f(&s.identity))
    }

    fn lock_state(&self) -> HubResult<MutexGuard<'_, AuthState>> {
        self.state.lock().map_err(|e| HubError::StorageUnavailable {
            reason: format!("auth state lock poisoned: {}", e),
        })
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
