//! Scenario 1: Platform administrator
//!
//! The admin account holds the wildcard permission. It sees every platform
//! menu entry, passes every permission check and may open any provider
//! category route.

use medigo_contracts::error::HubResult;
use medigo_core::RouteRequirements;

use crate::scenarios::{ensure, print_menu};
use crate::session::HubSession;
use crate::storage::InMemorySessionStore;

pub fn run_scenario() -> HubResult<()> {
    println!("=== Scenario 1: Platform administrator ===");
    println!();

    let session = HubSession::demo(Box::new(InMemorySessionStore::new()))?;
    session.sign_in("admin@medgohub.com", "platform123")?;

    let auth = session.auth();
    println!("  Signed in as: {}", auth.display_name());
    println!("  Permissions:  [all]");
    println!();

    let titles = print_menu(&session);
    ensure(
        titles.iter().any(|t| t == "Proveedores"),
        "admin menu lists Proveedores",
    )?;
    ensure(
        titles.iter().any(|t| t == "Configuración"),
        "admin menu lists Configuración",
    )?;

    ensure(auth.can_manage_providers(), "admin manages providers")?;
    ensure(auth.can_manage_staff(), "admin manages staff")?;
    ensure(
        auth.has_permission("any_future_permission"),
        "wildcard grants undeclared permissions",
    )?;

    for route in ["/dashboard/pharmacy/orders", "/dashboard/emergency/fleet"] {
        let decision = session.check_route(route, &RouteRequirements::new());
        println!("  Route {:<28} → {:?}", route, decision);
        ensure(decision.is_allowed(), "admin opens provider routes")?;
    }
    println!();

    session.sign_out()?;
    println!("  Signed out. Menu entries now: {}", session.navigation().len());
    println!();
    Ok(())
}
