//! # medigo-core
//!
//! Session-scoped identity state for the MediGo Hub access layer.
//!
//! This crate provides:
//! - The two ports (`SessionStore`, `CredentialStore`)
//! - [`AuthContext`], the hydrate/login/logout state machine and the
//!   permission predicates derived from it
//! - [`RouteGuard`], which turns those predicates plus the capability
//!   registry into allow / redirect / deny decisions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medigo_core::{AuthContext, RouteGuard, RouteRequirements};
//!
//! let auth = AuthContext::new(Box::new(store), Box::new(credentials));
//! auth.hydrate();
//! let decision = RouteGuard::new(&registry).check(&auth, &RouteRequirements::new(), "/dashboard");
//! ```

pub mod auth;
pub mod guard;
pub mod traits;

pub use auth::{AuthContext, AuthStatus};
pub use guard::{GuardDecision, RouteGuard, RouteRequirements};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use medigo_contracts::{
        error::HubResult,
        identity::{Identity, ParentEntityType, ProviderType, Role, StaffType, VerificationStatus},
        permission::PermissionSet,
    };
    use medigo_registry::CapabilityRegistry;

    use crate::traits::{CredentialStore, SessionStore};
    use crate::{AuthContext, GuardDecision, RouteGuard, RouteRequirements};

    // ── Mock helpers ──────────────────────────────────────────────────────────

    #[derive(Default)]
    struct MemoryStore(Mutex<HashMap<String, String>>);

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> HubResult<Option<String>> {
            Ok(self.0.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> HubResult<()> {
            self.0
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> HubResult<()> {
            self.0.lock().unwrap().remove(key);
            Ok(())
        }
    }

    /// Accepts any password for the one identity it holds.
    struct SingleAccount(Identity);

    impl CredentialStore for SingleAccount {
        fn authenticate(&self, email: &str, _password: &str) -> HubResult<Option<Identity>> {
            Ok((email == self.0.email).then(|| self.0.clone()))
        }
    }

    fn logged_in(identity: Identity) -> AuthContext {
        let email = identity.email.clone();
        let ctx = AuthContext::new(
            Box::new(MemoryStore::default()),
            Box::new(SingleAccount(identity)),
        );
        ctx.hydrate();
        assert!(ctx.login(&email, "secret").unwrap());
        ctx
    }

    fn provider(provider_type: ProviderType, status: VerificationStatus, tokens: &[&str]) -> Identity {
        Identity {
            provider_type: Some(provider_type),
            verification_status: Some(status),
            permissions: PermissionSet::from_tokens(tokens.iter().copied()),
            ..Identity::new("prov-1", "proveedor@medgohub.com", Role::Provider)
        }
    }

    fn platform(tokens: &[&str]) -> Identity {
        Identity {
            permissions: PermissionSet::from_tokens(tokens.iter().copied()),
            ..Identity::new("admin-1", "admin@medgohub.com", Role::Platform)
        }
    }

    fn registry() -> CapabilityRegistry {
        CapabilityRegistry::builtin().unwrap()
    }

    fn is_denied(decision: &GuardDecision) -> bool {
        matches!(decision, GuardDecision::Denied { .. })
    }

    // ── Guard ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_anonymous_is_redirected() {
        let registry = registry();
        let ctx = AuthContext::new(
            Box::new(MemoryStore::default()),
            Box::new(SingleAccount(platform(&["all"]))),
        );
        ctx.hydrate();

        let decision = RouteGuard::new(&registry).check(
            &ctx,
            &RouteRequirements::new(),
            "/dashboard/pharmacy",
        );
        assert_eq!(decision, GuardDecision::RedirectToLogin);
    }

    #[test]
    fn test_platform_opens_every_category_route() {
        let registry = registry();
        let ctx = logged_in(platform(&["all"]));
        let guard = RouteGuard::new(&registry);

        for config in registry.categories() {
            let decision = guard.check(&ctx, &RouteRequirements::new(), &config.base_route);
            assert!(decision.is_allowed(), "{}", config.base_route);
        }
    }

    #[test]
    fn test_required_roles_are_enforced() {
        let registry = registry();
        let ctx = logged_in(provider(
            ProviderType::Pharmacy,
            VerificationStatus::Verified,
            &["all"],
        ));
        let admin_only = RouteRequirements::new().roles([Role::Platform]);

        let decision = RouteGuard::new(&registry).check(&ctx, &admin_only, "/dashboard/providers");
        assert!(is_denied(&decision));
    }

    #[test]
    fn test_verified_provider_only_opens_own_category() {
        let registry = registry();
        let ctx = logged_in(provider(
            ProviderType::Pharmacy,
            VerificationStatus::Verified,
            &["orders_manage"],
        ));
        let guard = RouteGuard::new(&registry);
        let none = RouteRequirements::new();

        assert!(guard.check(&ctx, &none, "/dashboard/pharmacy/orders").is_allowed());
        assert!(is_denied(&guard.check(&ctx, &none, "/dashboard/laboratory")));
    }

    #[test]
    fn test_unverified_provider_is_denied_everywhere() {
        let registry = registry();
        let ctx = logged_in(provider(
            ProviderType::Pharmacy,
            VerificationStatus::Pending,
            &["all"],
        ));
        let guard = RouteGuard::new(&registry);

        let decision = guard.check(&ctx, &RouteRequirements::new(), "/dashboard/pharmacy");
        match decision {
            GuardDecision::Denied { reason } => assert!(reason.contains("not verified")),
            other => panic!("expected Denied, got {:?}", other),
        }

        // Outside any category route the permission check still refuses.
        let decision = guard.check(
            &ctx,
            &RouteRequirements::new().permission("orders_manage"),
            "/dashboard/settings",
        );
        assert!(is_denied(&decision));
    }

    #[test]
    fn test_required_permission() {
        let registry = registry();
        let ctx = logged_in(provider(
            ProviderType::Pharmacy,
            VerificationStatus::Verified,
            &["inventory_manage"],
        ));
        let guard = RouteGuard::new(&registry);
        let route = "/dashboard/pharmacy/inventory";

        let inventory = RouteRequirements::new().permission("inventory_manage");
        assert!(guard.check(&ctx, &inventory, route).is_allowed());

        let delivery = RouteRequirements::new().permission("delivery_manage");
        assert!(is_denied(&guard.check(&ctx, &delivery, route)));
    }

    #[test]
    fn test_wildcard_satisfies_any_required_permission() {
        let registry = registry();
        let ctx = logged_in(platform(&["all"]));
        let requirements = RouteRequirements::new().permission("anything_at_all");

        let decision = RouteGuard::new(&registry).check(&ctx, &requirements, "/dashboard/reports");
        assert!(decision.is_allowed());
    }

    #[test]
    fn test_staff_category_routes_follow_parent() {
        let registry = registry();
        let guard = RouteGuard::new(&registry);
        let none = RouteRequirements::new();

        let platform_staff = logged_in(Identity {
            staff_type: Some(StaffType::Finance),
            parent_entity_type: Some(ParentEntityType::Platform),
            permissions: PermissionSet::from_tokens(["billing_manage"]),
            ..Identity::new("s1", "finanzas@medgohub.com", Role::Staff)
        });
        assert!(is_denied(&guard.check(&platform_staff, &none, "/dashboard/pharmacy")));
        assert!(guard.check(&platform_staff, &none, "/dashboard/billing").is_allowed());

        let provider_staff = logged_in(Identity {
            staff_type: Some(StaffType::Support),
            parent_entity_type: Some(ParentEntityType::Provider),
            ..Identity::new("s2", "mostrador@medgohub.com", Role::Staff)
        });
        assert!(guard.check(&provider_staff, &none, "/dashboard/pharmacy").is_allowed());
    }

    /// Provider staff carry no provider link: every category route is open
    /// to them and only `required_permission` narrows access.
    #[test]
    fn test_provider_staff_narrowed_only_by_permission() {
        let registry = registry();
        let guard = RouteGuard::new(&registry);
        let ctx = logged_in(Identity {
            staff_type: Some(StaffType::Support),
            parent_entity_type: Some(ParentEntityType::Provider),
            permissions: PermissionSet::from_tokens(["orders_manage"]),
            ..Identity::new("s3", "mostrador@medgohub.com", Role::Staff)
        });

        for route in ["/dashboard/pharmacy/orders", "/dashboard/emergency"] {
            assert!(guard.check(&ctx, &RouteRequirements::new(), route).is_allowed());
        }

        let fleet = RouteRequirements::new().permission("fleet_manage");
        assert!(is_denied(&guard.check(&ctx, &fleet, "/dashboard/emergency/fleet")));

        let orders = RouteRequirements::new().permission("orders_manage");
        assert!(guard.check(&ctx, &orders, "/dashboard/pharmacy/orders").is_allowed());
    }
}
