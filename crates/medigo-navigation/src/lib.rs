//! # medigo-navigation
//!
//! The navigation filter engine for the MediGo Hub access layer.
//!
//! ## Overview
//!
//! [`NavigationEngine`] turns an identity's role, sub-types, verification
//! status and permissions into the ordered list of menu entries the header
//! and sidebar render. The base set comes from an explicit decision table
//! ([`table::DECISION_TABLE`]); provider sets are built from the capability
//! registry, the rest from a TOML navigation catalog.
//!
//! ## Fail-closed rules
//!
//! - A discriminant tuple with no table row yields an empty menu.
//! - An unverified PROVIDER only ever sees the pending-verification entries.
//! - Unknown raw strings yield an empty menu.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medigo_navigation::NavigationEngine;
//!
//! let engine = NavigationEngine::builtin()?;
//! for entry in engine.navigation_for(&identity) {
//!     println!("{} -> {}", entry.title, entry.href);
//! }
//! ```

pub mod catalog;
pub mod engine;
pub mod table;

pub use catalog::{NavigationCatalog, NavigationItem, NavigationSet};
pub use engine::{NavigationEngine, NavigationSubject};
pub use table::{resolve_set, NavigationSetId, DECISION_TABLE};

// ── Tests ─────────────────────────────────────────────────────────────────────
