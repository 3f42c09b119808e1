//! # medigo-hub
//!
//! Reference runtime for the MediGo Hub access layer.
//!
//! Provides the adapters a deployment plugs into `medigo-core`'s ports, plus
//! demo material:
//!
//! - [`credentials::MockCredentialStore`] over the demo accounts in
//!   [`mock_data`], with optional simulated latency
//! - [`storage::InMemorySessionStore`] and [`storage::FileSessionStore`]
//! - [`session::HubSession`], the composition root
//! - [`menu`], text rendering of navigation entries
//! - four [`scenarios`] exercising the full stack
//!
//! All accounts are fictional. No external systems are contacted.

pub mod credentials;
pub mod menu;
pub mod mock_data;
pub mod scenarios;
pub mod session;
pub mod storage;

pub use credentials::MockCredentialStore;
pub use session::HubSession;
pub use storage::{FileSessionStore, InMemorySessionStore};

// ── Tests ─────────────────────────────────────────────────────────────────────
