//! # medigo-registry
//!
//! The provider capability registry for the MediGo Hub access layer.
//!
//! ## Overview
//!
//! Each provider category (pharmacy, laboratory, medical-center, emergency,
//! homecare) declares its permission vocabulary and an ordered list of
//! capability modules. A module is visible to a user when it is core or when
//! the user holds at least one of its required permissions. The catalog is a
//! TOML document; the default one is compiled in.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medigo_contracts::{identity::ProviderCategory, permission::PermissionSet};
//! use medigo_registry::CapabilityRegistry;
//!
//! let registry = CapabilityRegistry::builtin()?;
//! let granted = PermissionSet::from_tokens(["inventory_manage"]);
//! let modules = registry.visible_modules(ProviderCategory::Pharmacy, &granted);
//! ```

pub mod module;
pub mod registry;

pub use module::{CapabilityModule, CategoryConfig, RegistryConfig};
pub use registry::CapabilityRegistry;

// ── Tests ─────────────────────────────────────────────────────────────────────
