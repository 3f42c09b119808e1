//! Navigation sets that are not backed by a registry category.
//!
//! Platform, staff, specialist and pending-verification menus are declared
//! in a TOML document (`catalog/navigation.toml` is compiled in). Each set
//! is an ordered list of `NavigationItem`s gated the same way registry
//! modules are: core, or any one required permission.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use medigo_contracts::{
    error::{HubError, HubResult},
    navigation::NavigationEntry,
    permission::PermissionSet,
};

use crate::table::NavigationSetId;

const BUILTIN_CATALOG: &str = include_str!("../catalog/navigation.toml");

/// One candidate menu entry and the permissions that reveal it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub required_permissions: Vec<String>,
    #[serde(default)]
    pub is_core: bool,
}

impl NavigationItem {
    pub fn is_visible_to(&self, granted: &PermissionSet) -> bool {
        self.is_core || granted.grants_any(&self.required_permissions)
    }

    pub fn to_entry(&self) -> NavigationEntry {
        NavigationEntry {
            title: self.title.clone(),
            href: self.href.clone(),
            icon: self.icon.clone(),
            description: self.description.clone(),
            is_core: self.is_core,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSet {
    /// Matches `NavigationSetId::catalog_key`.
    pub id: String,
    #[serde(default)]
    pub entries: Vec<NavigationItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CatalogDocument {
    sets: Vec<NavigationSet>,
}

/// The validated set of catalog-backed navigation menus.
#[derive(Debug, Clone)]
pub struct NavigationCatalog {
    sets: Vec<NavigationSet>,
}

impl NavigationCatalog {
    pub fn builtin() -> HubResult<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog document.
    ///
    /// Every set in `NavigationSetId::CATALOG_SETS` must be present, ids must
    /// be unique, hrefs must be absolute, and the pending-verification set
    /// may only hold core entries.
    pub fn from_toml_str(s: &str) -> HubResult<Self> {
        let document: CatalogDocument = toml::from_str(s).map_err(|e| HubError::ConfigError {
            reason: format!("failed to parse navigation TOML: {}", e),
        })?;

        let catalog = Self {
            sets: document.sets,
        };
        catalog.validate()?;
        debug!(sets = catalog.sets.len(), "navigation catalog loaded");
        Ok(catalog)
    }

    pub fn from_file(path: &Path) -> HubResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HubError::ConfigError {
            reason: format!("failed to read navigation file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The catalog set for `id`; `None` for registry-backed sets.
    pub fn set(&self, id: NavigationSetId) -> Option<&NavigationSet> {
        let key = id.catalog_key()?;
        self.sets.iter().find(|s| s.id == key)
    }

    fn validate(&self) -> HubResult<()> {
        let mut seen = HashSet::new();
        for set in &self.sets {
            if !seen.insert(set.id.as_str()) {
                return Err(config_error(format!(
                    "navigation set '{}' is declared more than once",
                    set.id
                )));
            }
            if let Some(item) = set.entries.iter().find(|e| !e.href.starts_with('/')) {
                return Err(config_error(format!(
                    "entry '{}' in navigation set '{}' has relative href '{}'",
                    item.title, set.id, item.href
                )));
            }
        }

        for id in NavigationSetId::CATALOG_SETS {
            if self.set(id).is_none() {
                return Err(config_error(format!("navigation set '{}' is missing", id)));
            }
        }

        if let Some(pending) = self.set(NavigationSetId::PendingVerification) {
            if let Some(item) = pending.entries.iter().find(|e| !e.is_core) {
                return Err(config_error(format!(
                    "pending-verification entry '{}' must be core",
                    item.title
                )));
            }
        }

        Ok(())
    }
}

fn config_error(reason: String) -> HubError {
    HubError::ConfigError { reason }
}
