//! Route guard: decides whether the current identity may render a route.
//!
//! Checks run in this order, first failure wins:
//!
//! 1. No authenticated identity → `RedirectToLogin`
//! 2. Role outside a non-empty `required_roles` → `Denied`
//! 3. Route owned by a registry category → PLATFORM passes, a PROVIDER must
//!    be verified and own that category, STAFF must belong to a provider
//! 4. `required_permission` not held (or held by an unverified provider) →
//!    `Denied`
//!
//! Anything that gets through all four is `Allow`.

use tracing::debug;

use medigo_contracts::{
    error::HubError,
    identity::{Identity, ParentEntityType, Role},
};
use medigo_registry::CapabilityRegistry;

use crate::auth::AuthContext;

/// What a route demands of the identity rendering it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRequirements {
    pub required_permission: Option<String>,
    /// Empty means any role.
    pub required_roles: Vec<Role>,
}

impl RouteRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.required_permission = Some(permission.into());
        self
    }

    pub fn roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.required_roles = roles.into_iter().collect();
        self
    }
}

/// The outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    Denied { reason: String },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    fn denied(reason: impl Into<String>) -> Self {
        Self::Denied {
            reason: reason.into(),
        }
    }
}

/// Route guard over a capability registry.
#[derive(Debug, Clone, Copy)]
pub struct RouteGuard<'a> {
    registry: &'a CapabilityRegistry,
}

impl<'a> RouteGuard<'a> {
    pub fn new(registry: &'a CapabilityRegistry) -> Self {
        Self { registry }
    }

    /// Decide whether the identity in `auth` may render `route`.
    pub fn check(
        &self,
        auth: &AuthContext,
        requirements: &RouteRequirements,
        route: &str,
    ) -> GuardDecision {
        let Some(identity) = auth.current_identity() else {
            debug!(route = %route, "guard: no identity, redirecting to login");
            return GuardDecision::RedirectToLogin;
        };

        let decision = self.evaluate(&identity, requirements, route);
        debug!(
            route = %route,
            role = %identity.role,
            decision = ?decision,
            "guard evaluated"
        );
        decision
    }

    fn evaluate(
        &self,
        identity: &Identity,
        requirements: &RouteRequirements,
        route: &str,
    ) -> GuardDecision {
        if !requirements.required_roles.is_empty()
            && !requirements.required_roles.contains(&identity.role)
        {
            return GuardDecision::denied(format!(
                "role {} may not open {}",
                identity.role, route
            ));
        }

        if let Some(config) = self.registry.config_by_route(route) {
            match identity.role {
                Role::Platform => {}
                Role::Provider => {
                    if !identity.is_verified_provider() {
                        return GuardDecision::denied(
                            HubError::UnverifiedProvider {
                                identity_id: identity.id.clone(),
                            }
                            .to_string(),
                        );
                    }
                    let owns = identity.provider_type.and_then(|t| t.category())
                        == Some(config.category);
                    if !owns {
                        return GuardDecision::denied(format!(
                            "{} belongs to the {} category",
                            route, config.category
                        ));
                    }
                }
                Role::Staff => {
                    // Staff identities carry no link to their provider, so
                    // provider staff pass every category route here and are
                    // narrowed only by `required_permission`.
                    if identity.parent_entity_type != Some(ParentEntityType::Provider) {
                        return GuardDecision::denied(format!(
                            "platform staff may not open provider route {}",
                            route
                        ));
                    }
                }
            }
        }

        if let Some(permission) = &requirements.required_permission {
            if identity.is_unverified_provider() {
                return GuardDecision::denied(
                    HubError::UnverifiedProvider {
                        identity_id: identity.id.clone(),
                    }
                    .to_string(),
                );
            }
            if !identity.permissions.has_token(permission) {
                return GuardDecision::denied(format!("missing permission '{}'", permission));
            }
        }

        GuardDecision::Allow
    }
}
