//! Scenario 2: Platform finance staff
//!
//! A STAFF identity of type FINANCE under the platform, holding
//! `billing_manage` and `reports_view`. The finance menu shows billing and
//! reports; provider-only entries such as "Inventario" or "Paramédicos"
//! never appear and provider routes are refused.

use medigo_contracts::error::HubResult;
use medigo_core::{GuardDecision, RouteRequirements};

use crate::scenarios::{ensure, print_menu};
use crate::session::HubSession;
use crate::storage::InMemorySessionStore;

pub fn run_scenario() -> HubResult<()> {
    println!("=== Scenario 2: Platform finance staff ===");
    println!();

    let session = HubSession::demo(Box::new(InMemorySessionStore::new()))?;
    session.sign_in("finanzas@medgohub.com", "finance123")?;

    let auth = session.auth();
    println!("  Signed in as: {}", auth.display_name());
    println!("  Permissions:  [billing_manage, reports_view]");
    println!();

    let titles = print_menu(&session);
    ensure(
        titles.iter().any(|t| t == "Facturación"),
        "finance menu lists Facturación",
    )?;
    ensure(
        !titles.iter().any(|t| t == "Inventario" || t == "Paramédicos"),
        "finance menu hides provider modules",
    )?;
    ensure(!auth.can_manage_staff(), "finance staff cannot manage staff")?;

    let billing = RouteRequirements::new().permission("billing_manage");
    let decision = session.check_route("/dashboard/admin/billing", &billing);
    println!("  Route /dashboard/admin/billing   → {:?}", decision);
    ensure(decision.is_allowed(), "finance opens billing")?;

    let decision = session.check_route("/dashboard/emergency/paramedics", &RouteRequirements::new());
    println!("  Route /dashboard/emergency/...   → {:?}", decision);
    ensure(
        matches!(decision, GuardDecision::Denied { .. }),
        "finance is refused provider routes",
    )?;
    println!();
    Ok(())
}
