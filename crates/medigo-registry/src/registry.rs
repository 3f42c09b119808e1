//! TOML-driven capability registry implementation.
//!
//! `CapabilityRegistry` loads a `RegistryConfig` from a TOML string or file,
//! validates it once, and then answers visibility questions without
//! allocation-heavy work or I/O.
//!
//! Visibility algorithm for `visible_modules`:
//!
//! 1. Look up the category; an unknown category yields no modules.
//! 2. Walk its modules in declaration order.
//! 3. Keep a module when it is core, when the grant holds the wildcard, or
//!    when the grant intersects the module's `required_permissions`.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use medigo_contracts::{
    error::{HubError, HubResult},
    identity::ProviderCategory,
    permission::PermissionSet,
};

use crate::module::{CapabilityModule, CategoryConfig, RegistryConfig};

/// The builtin MediGo Hub provider catalog.
const BUILTIN_CATALOG: &str = include_str!("../catalog/providers.toml");

/// The static catalog of provider categories and their modules.
///
/// ```rust,ignore
/// use medigo_registry::CapabilityRegistry;
///
/// let registry = CapabilityRegistry::from_file(Path::new("catalog/providers.toml"))?;
/// let pharmacy = registry.config_by_route("/dashboard/pharmacy/orders");
/// ```
#[derive(Debug, Clone)]
pub struct CapabilityRegistry {
    config: RegistryConfig,
}

impl CapabilityRegistry {
    /// The catalog compiled into this crate.
    pub fn builtin() -> HubResult<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse `s` as TOML and build a validated registry.
    ///
    /// Returns `HubError::ConfigError` if the TOML is malformed, does not
    /// match `RegistryConfig`, or fails validation.
    pub fn from_toml_str(s: &str) -> HubResult<Self> {
        let config: RegistryConfig = toml::from_str(s).map_err(|e| HubError::ConfigError {
            reason: format!("failed to parse registry TOML: {}", e),
        })?;
        Self::from_config(config)
    }

    /// Read the file at `path` and parse it as a registry document.
    pub fn from_file(path: &Path) -> HubResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HubError::ConfigError {
            reason: format!("failed to read registry file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Validate an already-built config.
    pub fn from_config(config: RegistryConfig) -> HubResult<Self> {
        validate(&config)?;
        debug!(categories = config.categories.len(), "capability registry loaded");
        Ok(Self { config })
    }

    /// All categories in precedence order.
    pub fn categories(&self) -> &[CategoryConfig] {
        &self.config.categories
    }

    /// The configuration for `category`.
    ///
    /// Total for the builtin catalog; a loaded catalog that omits the
    /// category yields `HubError::UnknownCategory`.
    pub fn category_config(&self, category: ProviderCategory) -> HubResult<&CategoryConfig> {
        self.config
            .categories
            .iter()
            .find(|c| c.category == category)
            .ok_or_else(|| HubError::UnknownCategory {
                value: category.as_str().to_string(),
            })
    }

    /// String form of [`category_config`](Self::category_config).
    pub fn category_config_by_name(&self, name: &str) -> HubResult<&CategoryConfig> {
        let category: ProviderCategory = name.parse()?;
        self.category_config(category)
    }

    /// Modules of `category` visible to `granted`, in declaration order.
    ///
    /// With no grants this is exactly the category's core modules.
    pub fn visible_modules(
        &self,
        category: ProviderCategory,
        granted: &PermissionSet,
    ) -> Vec<&CapabilityModule> {
        let Ok(config) = self.category_config(category) else {
            warn!(category = %category, "visibility requested for unregistered category");
            return Vec::new();
        };

        config
            .modules
            .iter()
            .filter(|m| m.is_visible_to(granted))
            .collect()
    }

    /// Membership test with wildcard short-circuit.
    ///
    /// Returns false when `category` is not registered.
    pub fn has_permission(
        &self,
        category: ProviderCategory,
        granted: &PermissionSet,
        permission: &str,
    ) -> bool {
        if self.category_config(category).is_err() {
            return false;
        }
        granted.has_token(permission)
    }

    /// The category whose base route owns `route`.
    ///
    /// The longest matching base route wins; between equally long matches
    /// the earliest registry entry wins.
    pub fn config_by_route(&self, route: &str) -> Option<&CategoryConfig> {
        let mut best: Option<&CategoryConfig> = None;

        for config in &self.config.categories {
            if !config.owns_route(route) {
                continue;
            }
            let longer = best
                .map(|b| config.effective_base_len() > b.effective_base_len())
                .unwrap_or(true);
            if longer {
                best = Some(config);
            }
        }

        if best.is_none() {
            debug!(route = %route, "route is not owned by any provider category");
        }
        best
    }
}

/// Check the structural rules every registry document must satisfy.
fn validate(config: &RegistryConfig) -> HubResult<()> {
    let mut seen_categories = HashSet::new();

    for category in &config.categories {
        if !seen_categories.insert(category.category) {
            return Err(config_error(format!(
                "category '{}' is declared more than once",
                category.category
            )));
        }

        if !category.base_route.starts_with('/') {
            return Err(config_error(format!(
                "category '{}' base_route '{}' must start with '/'",
                category.category, category.base_route
            )));
        }

        let vocabulary: HashSet<&str> = category.permissions.iter().map(String::as_str).collect();
        let mut seen_modules = HashSet::new();

        for module in &category.modules {
            if !seen_modules.insert(module.id.as_str()) {
                return Err(config_error(format!(
                    "module '{}' is declared more than once in category '{}'",
                    module.id, category.category
                )));
            }

            if let Some(missing) = module
                .required_permissions
                .iter()
                .find(|p| !vocabulary.contains(p.as_str()))
            {
                return Err(config_error(format!(
                    "module '{}' in category '{}' requires '{}' which the category does not declare",
                    module.id, category.category, missing
                )));
            }
        }
    }

    Ok(())
}

fn config_error(reason: String) -> HubError {
    HubError::ConfigError { reason }
}
