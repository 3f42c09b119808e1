//! Navigation entry types shared by the registry, the navigation engine and
//! the presentation layer.

use serde::{Deserialize, Serialize};

/// One visible item in the header/sidebar menu.
///
/// Entries are derived on every call from an identity and the registry;
/// they are never stored. `icon` is a symbolic key resolved by the
/// presentation layer, which renders no icon for keys it does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub title: String,
    pub href: String,
    pub icon: String,
    pub description: String,
    /// Whether the entry is shown regardless of permission grants.
    pub is_core: bool,
}
