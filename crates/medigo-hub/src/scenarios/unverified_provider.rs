//! Scenario 3: Unverified provider
//!
//! Sub-case A: a PENDING pharmacy that (wrongly) holds the wildcard. It only
//! sees the pending-verification entry and every provider route is refused.
//!
//! Sub-case B: a VERIFIED pharmacy with inventory and orders permissions.
//! It sees its own category modules and may open only its own routes.

use medigo_contracts::error::HubResult;
use medigo_core::{GuardDecision, RouteRequirements};

use crate::scenarios::{ensure, print_menu};
use crate::session::HubSession;
use crate::storage::InMemorySessionStore;

pub fn run_scenario() -> HubResult<()> {
    println!("=== Scenario 3: Unverified provider ===");
    println!();

    let session = HubSession::demo(Box::new(InMemorySessionStore::new()))?;
    let auth = session.auth();

    // ── Sub-case A: pending ───────────────────────────────────────────────────

    session.sign_in("pendiente@medgohub.com", "pending123")?;
    println!("  [A] {} (PENDING, permissions [all])", auth.display_name());
    println!();

    let titles = print_menu(&session);
    ensure(
        titles == ["Verificación pendiente"],
        "pending provider sees only the verification notice",
    )?;
    ensure(!auth.is_provider_verified(), "pending provider is unverified")?;

    let decision = session.check_route(
        "/dashboard/pharmacy/inventory",
        &RouteRequirements::new().permission("inventory_manage"),
    );
    println!("  Route /dashboard/pharmacy/inventory → {:?}", decision);
    ensure(
        matches!(decision, GuardDecision::Denied { .. }),
        "pending provider is refused its category routes",
    )?;
    println!();

    session.sign_out()?;

    // ── Sub-case B: verified ──────────────────────────────────────────────────

    session.sign_in("farmacia@medgohub.com", "pharmacy123")?;
    println!("  [B] {} (VERIFIED)", auth.display_name());
    println!();

    let titles = print_menu(&session);
    ensure(
        titles == ["Panel", "Inventario", "Pedidos", "Perfil"],
        "verified pharmacy sees its granted modules in order",
    )?;

    let own = session.check_route("/dashboard/pharmacy/orders", &RouteRequirements::new());
    let other = session.check_route("/dashboard/laboratory", &RouteRequirements::new());
    println!("  Route /dashboard/pharmacy/orders → {:?}", own);
    println!("  Route /dashboard/laboratory      → {:?}", other);
    ensure(own.is_allowed(), "pharmacy opens its own routes")?;
    ensure(!other.is_allowed(), "pharmacy is refused other categories")?;
    println!();
    Ok(())
}
