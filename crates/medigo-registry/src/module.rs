//! Capability module and category configuration schema.
//!
//! A `RegistryConfig` is deserialized from TOML and holds an ordered list of
//! `CategoryConfig`s, each with an ordered list of `CapabilityModule`s.
//! Declaration order is menu order and route precedence order; nothing in
//! the registry is ever re-sorted.

use serde::{Deserialize, Serialize};

use medigo_contracts::{
    identity::ProviderCategory, navigation::NavigationEntry, permission::PermissionSet,
};

/// One navigable feature unit of a provider category.
///
/// Example in TOML:
/// ```toml
/// [[categories.modules]]
/// id = "inventory"
/// name = "Inventario"
/// description = "Existencias, lotes y vencimientos"
/// route = "/dashboard/pharmacy/inventory"
/// icon = "package"
/// required_permissions = ["inventory_manage"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityModule {
    /// Stable identifier, unique within its category.
    pub id: String,

    /// Menu title.
    pub name: String,

    pub description: String,

    pub route: String,

    /// Symbolic icon key. Empty means "no icon".
    #[serde(default)]
    pub icon: String,

    /// Holding any one of these makes the module visible.
    #[serde(default)]
    pub required_permissions: Vec<String>,

    /// Core modules are visible regardless of permissions.
    #[serde(default)]
    pub is_core: bool,
}

impl CapabilityModule {
    /// True if the module is core, or `granted` intersects its required
    /// permissions (the wildcard intersects everything).
    pub fn is_visible_to(&self, granted: &PermissionSet) -> bool {
        self.is_core || granted.grants_any(&self.required_permissions)
    }

    pub fn to_navigation_entry(&self) -> NavigationEntry {
        NavigationEntry {
            title: self.name.clone(),
            href: self.route.clone(),
            icon: self.icon.clone(),
            description: self.description.clone(),
            is_core: self.is_core,
        }
    }
}

/// Everything the registry declares for one provider category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub category: ProviderCategory,

    pub name: String,

    pub description: String,

    /// Root dashboard route; every URL under it belongs to this category.
    pub base_route: String,

    /// The full permission vocabulary of the category. Every module's
    /// `required_permissions` must be drawn from this list.
    #[serde(default)]
    pub permissions: Vec<String>,

    /// Modules in menu order.
    #[serde(default)]
    pub modules: Vec<CapabilityModule>,
}

impl CategoryConfig {
    /// Segment-aware prefix test: `route` is the base route itself or lies
    /// below it (`/dashboard/pharmacy` does not own `/dashboard/pharmacyx`).
    pub fn owns_route(&self, route: &str) -> bool {
        let base = self.base_route.trim_end_matches('/');
        match route.strip_prefix(base) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Length of `base_route` without trailing slashes, the prefix
    /// `owns_route` actually matches on.
    pub fn effective_base_len(&self) -> usize {
        self.base_route.trim_end_matches('/').len()
    }

    /// Look up a module by id.
    pub fn module(&self, id: &str) -> Option<&CapabilityModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn core_modules(&self) -> impl Iterator<Item = &CapabilityModule> {
        self.modules.iter().filter(|m| m.is_core)
    }
}

/// The top-level structure deserialized from a registry TOML document.
///
/// Example:
/// ```toml
/// [[categories]]
/// category = "pharmacy"
/// name = "Farmacia"
/// description = "Dispensación de medicamentos"
/// base_route = "/dashboard/pharmacy"
/// permissions = ["inventory_manage"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Categories in precedence order.
    pub categories: Vec<CategoryConfig>,
}
