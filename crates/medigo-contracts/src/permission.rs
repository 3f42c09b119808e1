//! Permission tokens and permission sets.
//!
//! A permission is either the wildcard, written `"all"` in stored identities
//! and catalogs, or a named token such as `"inventory_manage"`. The wildcard
//! satisfies every check made through `PermissionSet`, so call sites never
//! compare against the `"all"` literal themselves.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The textual form of [`Permission::Wildcard`].
pub const WILDCARD_TOKEN: &str = "all";

/// A single permission grant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Permission {
    /// Universal grant. Satisfies every permission check.
    Wildcard,
    /// A named permission token.
    Named(String),
}

impl Permission {
    /// Parse a token; `"all"` becomes the wildcard.
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        if token == WILDCARD_TOKEN {
            Self::Wildcard
        } else {
            Self::Named(token)
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Wildcard => WILDCARD_TOKEN,
            Self::Named(name) => name,
        }
    }
}

impl From<String> for Permission {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for Permission {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        match permission {
            Permission::Wildcard => WILDCARD_TOKEN.to_string(),
            Permission::Named(name) => name,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The permissions held by one identity.
///
/// Serialized as a sorted list of tokens so stored sessions are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Permission>", into = "Vec<Permission>")]
pub struct PermissionSet {
    inner: HashSet<Permission>,
}

impl PermissionSet {
    /// An empty set. Grants nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tokens.into_iter().map(Permission::new).collect()
    }

    /// Grant a permission to this set.
    pub fn grant(&mut self, permission: Permission) {
        self.inner.insert(permission);
    }

    /// True if the set holds the wildcard.
    pub fn is_wildcard(&self) -> bool {
        self.inner.contains(&Permission::Wildcard)
    }

    /// True if the set holds the wildcard or exactly `permission`.
    pub fn has(&self, permission: &Permission) -> bool {
        self.is_wildcard() || self.inner.contains(permission)
    }

    /// String form of [`has`](Self::has). `"all"` asks for the wildcard itself.
    pub fn has_token(&self, token: &str) -> bool {
        self.has(&Permission::new(token))
    }

    /// True if the wildcard is held or any of `required` is held.
    ///
    /// An empty `required` list is only satisfied by the wildcard.
    pub fn grants_any<S: AsRef<str>>(&self, required: &[S]) -> bool {
        self.is_wildcard() || required.iter().any(|r| self.has_token(r.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterate over all granted permissions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.inner.iter()
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Permission>> for PermissionSet {
    fn from(permissions: Vec<Permission>) -> Self {
        permissions.into_iter().collect()
    }
}

impl From<PermissionSet> for Vec<Permission> {
    fn from(set: PermissionSet) -> Self {
        let mut permissions: Vec<Permission> = set.inner.into_iter().collect();
        permissions.sort();
        permissions
    }
}
