//! MediGo Hub demo scenarios.
//!
//! Each scenario wires a [`HubSession`](crate::session::HubSession) over an
//! in-memory store and the demo accounts, prints what the user would see,
//! and fails if the access layer does not behave as described.

pub mod finance_staff;
pub mod platform_admin;
pub mod session_reload;
pub mod unverified_provider;

use medigo_contracts::error::{HubError, HubResult};

use crate::menu::render_menu;
use crate::session::HubSession;

/// Fail the scenario when an expectation does not hold.
fn ensure(condition: bool, expectation: &str) -> HubResult<()> {
    if condition {
        Ok(())
    } else {
        Err(HubError::ScenarioFailed {
            expectation: expectation.to_string(),
        })
    }
}

fn print_menu(session: &HubSession) -> Vec<String> {
    let entries = session.navigation();
    print!("{}", render_menu(&entries));
    println!();
    entries.into_iter().map(|e| e.title).collect()
}
