//! The navigation filter engine.
//!
//! Evaluation algorithm for `filtered_navigation`:
//!
//! 1. Resolve the base set from the decision table. No row → empty menu.
//! 2. A PROVIDER whose verification status is not VERIFIED gets the core
//!    entries of the pending-verification set and nothing else, whatever
//!    permissions it carries (including the wildcard).
//! 3. Keep each candidate that is core, or whose required permissions
//!    intersect the grant.
//! 4. Return survivors in declaration order.
//!
//! The engine never errors and never mutates its inputs: it runs on every
//! render, so every ambiguous input degrades to fewer entries.

use tracing::{debug, warn};

use medigo_contracts::{
    error::HubResult,
    identity::{
        Identity, ParentEntityType, ProviderType, Role, StaffType, VerificationStatus,
    },
    navigation::NavigationEntry,
    permission::PermissionSet,
};
use medigo_registry::CapabilityRegistry;

use crate::catalog::NavigationCatalog;
use crate::table::{resolve_set, NavigationSetId};

/// The identity attributes navigation depends on.
#[derive(Debug, Clone, Copy)]
pub struct NavigationSubject<'a> {
    pub role: Role,
    pub permissions: &'a PermissionSet,
    pub staff_type: Option<StaffType>,
    pub provider_type: Option<ProviderType>,
    pub parent_entity_type: Option<ParentEntityType>,
    pub verification_status: Option<VerificationStatus>,
}

impl<'a> NavigationSubject<'a> {
    pub fn from_identity(identity: &'a Identity) -> Self {
        Self {
            role: identity.role,
            permissions: &identity.permissions,
            staff_type: identity.staff_type,
            provider_type: identity.provider_type,
            parent_entity_type: identity.parent_entity_type,
            verification_status: identity.verification_status,
        }
    }

    fn is_unverified_provider(&self) -> bool {
        self.role == Role::Provider
            && self.verification_status != Some(VerificationStatus::Verified)
    }
}

/// Computes the visible menu for an identity.
///
/// ```rust,ignore
/// use medigo_navigation::NavigationEngine;
///
/// let engine = NavigationEngine::builtin()?;
/// let menu = engine.navigation_for(&identity);
/// ```
#[derive(Debug, Clone)]
pub struct NavigationEngine {
    registry: CapabilityRegistry,
    catalog: NavigationCatalog,
}

impl NavigationEngine {
    pub fn new(registry: CapabilityRegistry, catalog: NavigationCatalog) -> Self {
        Self { registry, catalog }
    }

    /// Engine over the compiled-in registry and navigation catalog.
    pub fn builtin() -> HubResult<Self> {
        Ok(Self::new(
            CapabilityRegistry::builtin()?,
            NavigationCatalog::builtin()?,
        ))
    }

    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    /// The ordered menu for `subject`.
    pub fn filtered_navigation(&self, subject: &NavigationSubject<'_>) -> Vec<NavigationEntry> {
        let Some(set) = resolve_set(
            subject.role,
            subject.provider_type,
            subject.staff_type,
            subject.parent_entity_type,
        ) else {
            warn!(
                role = %subject.role,
                provider_type = ?subject.provider_type,
                staff_type = ?subject.staff_type,
                parent_entity_type = ?subject.parent_entity_type,
                "no navigation set for identity; returning empty navigation"
            );
            return Vec::new();
        };

        if subject.is_unverified_provider() {
            debug!(
                provider_type = ?subject.provider_type,
                verification_status = ?subject.verification_status,
                "provider is not verified; showing pending-verification navigation"
            );
            return self.catalog_entries(NavigationSetId::PendingVerification, &PermissionSet::new());
        }

        let entries: Vec<NavigationEntry> = match set {
            NavigationSetId::ProviderCategory(category) => self
                .registry
                .visible_modules(category, subject.permissions)
                .into_iter()
                .map(|m| m.to_navigation_entry())
                .collect(),
            other => self.catalog_entries(other, subject.permissions),
        };

        debug!(set = %set, entries = entries.len(), "navigation computed");
        entries
    }

    /// Convenience wrapper over [`filtered_navigation`](Self::filtered_navigation).
    pub fn navigation_for(&self, identity: &Identity) -> Vec<NavigationEntry> {
        self.filtered_navigation(&NavigationSubject::from_identity(identity))
    }

    /// The same computation over raw discriminant strings.
    ///
    /// Any string outside its closed set (an unknown role, provider type,
    /// staff type, parent type or verification status) yields an empty menu.
    pub fn filtered_navigation_raw(
        &self,
        role: &str,
        permissions: &[&str],
        staff_type: Option<&str>,
        provider_type: Option<&str>,
        parent_entity_type: Option<&str>,
        verification_status: Option<&str>,
    ) -> Vec<NavigationEntry> {
        let permissions = PermissionSet::from_tokens(permissions.iter().copied());

        let parsed = parse_subject(
            &permissions,
            role,
            staff_type,
            provider_type,
            parent_entity_type,
            verification_status,
        );

        match parsed {
            Ok(subject) => self.filtered_navigation(&subject),
            Err(e) => {
                warn!(error = %e, "unparseable identity attributes; returning empty navigation");
                Vec::new()
            }
        }
    }

    fn catalog_entries(&self, id: NavigationSetId, granted: &PermissionSet) -> Vec<NavigationEntry> {
        match self.catalog.set(id) {
            Some(set) => set
                .entries
                .iter()
                .filter(|item| item.is_visible_to(granted))
                .map(|item| item.to_entry())
                .collect(),
            None => {
                warn!(set = %id, "navigation set missing from catalog");
                Vec::new()
            }
        }
    }
}

fn parse_subject<'a>(
    permissions: &'a PermissionSet,
    role: &str,
    staff_type: Option<&str>,
    provider_type: Option<&str>,
    parent_entity_type: Option<&str>,
    verification_status: Option<&str>,
) -> HubResult<NavigationSubject<'a>> {
    Ok(NavigationSubject {
        role: role.parse::<Role>()?,
        permissions,
        staff_type: staff_type.map(str::parse::<StaffType>).transpose()?,
        provider_type: provider_type.map(str::parse::<ProviderType>).transpose()?,
        parent_entity_type: parent_entity_type
            .map(str::parse::<ParentEntityType>)
            .transpose()?,
        verification_status: verification_status
            .map(str::parse::<VerificationStatus>)
            .transpose()?,
    })
}
