//! Scenario 4: Session reload
//!
//! Two `HubSession`s over clones of one in-memory store stand in for a page
//! before and after a reload.
//!
//! - login, reload → same session restored
//! - wrong password → rejected, session untouched
//! - logout, reload → anonymous
//! - corrupt record, reload → anonymous and the record is cleared

use medigo_contracts::{
    error::{HubError, HubResult},
    session::SESSION_KEY,
};
use medigo_core::{traits::SessionStore, AuthStatus};

use crate::scenarios::ensure;
use crate::session::HubSession;
use crate::storage::InMemorySessionStore;

pub fn run_scenario() -> HubResult<()> {
    println!("=== Scenario 4: Session reload ===");
    println!();

    let store = InMemorySessionStore::new();

    let before = HubSession::demo(Box::new(store.clone()))?;
    before.sign_in("farmacia@medgohub.com", "pharmacy123")?;
    let session_id = before.auth().session_id();
    println!("  Login:            {:?}", before.auth().status());

    let after = HubSession::demo(Box::new(store.clone()))?;
    println!("  After reload:     {:?}", after.auth().status());
    ensure(
        after.auth().session_id() == session_id,
        "reload restores the same session",
    )?;

    match after.sign_in("farmacia@medgohub.com", "wrong-password") {
        Err(HubError::InvalidCredentials) => println!("  Wrong password:   rejected"),
        other => {
            return ensure(false, &format!("wrong password is rejected, got {:?}", other));
        }
    }
    ensure(after.auth().is_authenticated(), "failed login keeps the session")?;

    after.sign_out()?;
    let reloaded = HubSession::demo(Box::new(store.clone()))?;
    println!("  Logout + reload:  {:?}", reloaded.auth().status());
    ensure(
        reloaded.auth().status() == AuthStatus::Anonymous,
        "logout survives reload",
    )?;

    store.set(SESSION_KEY, "{\"session_id\":42}")?;
    let recovered = HubSession::demo(Box::new(store.clone()))?;
    println!("  Corrupt record:   {:?}", recovered.auth().status());
    ensure(
        recovered.auth().status() == AuthStatus::Anonymous,
        "corrupt record yields anonymous",
    )?;
    ensure(store.get(SESSION_KEY)?.is_none(), "corrupt record is cleared")?;
    println!();
    Ok(())
}
