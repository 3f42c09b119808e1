//! MediGo Hub access layer demo CLI
//!
//! Runs the demo scenarios, or drives one session by hand. Sessions are kept
//! in a file store so `login`, `whoami`, `nav`, `route` and `logout` can be
//! issued as separate invocations.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- login --email farmacia@medgohub.com --password pharmacy123
//!   cargo run -p demo -- nav
//!   cargo run -p demo -- route /dashboard/pharmacy/orders --permission orders_manage
//!   cargo run -p demo -- logout

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use medigo_contracts::{
    error::{HubError, HubResult},
    identity::Role,
};
use medigo_core::RouteRequirements;
use medigo_hub::{
    menu::render_menu,
    scenarios::{finance_staff, platform_admin, session_reload, unverified_provider},
    FileSessionStore, HubSession, MockCredentialStore,
};
use medigo_navigation::{NavigationCatalog, NavigationEngine};
use medigo_registry::CapabilityRegistry;

// ── CLI definition ────────────────────────────────────────────────────────────

/// MediGo Hub: role- and permission-based navigation demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "MediGo Hub access layer demo",
    long_about = "Runs MediGo Hub demo scenarios showing session hydration,\n\
                  permission-filtered navigation and route guarding."
)]
struct Cli {
    /// Directory holding the session file (default: <tmp>/medigo-hub).
    #[arg(long, global = true)]
    session_dir: Option<PathBuf>,

    /// Capability registry TOML to use instead of the built-in one.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all four scenarios in sequence.
    RunAll,
    /// Scenario 1: platform administrator with the wildcard.
    PlatformAdmin,
    /// Scenario 2: platform finance staff.
    FinanceStaff,
    /// Scenario 3: pending vs. verified provider.
    UnverifiedProvider,
    /// Scenario 4: login, reload, logout, corrupt record.
    SessionReload,
    /// Log in with a demo account.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the current identity.
    Whoami,
    /// End the current session.
    Logout,
    /// Print the navigation menu for the current identity.
    Nav,
    /// Check whether the current identity may open a route.
    Route {
        path: String,
        /// Permission the route requires.
        #[arg(long)]
        permission: Option<String>,
        /// Roles allowed on the route (repeatable).
        #[arg(long = "role")]
        roles: Vec<Role>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Command::RunAll => run_all(),
        Command::PlatformAdmin => platform_admin::run_scenario(),
        Command::FinanceStaff => finance_staff::run_scenario(),
        Command::UnverifiedProvider => unverified_provider::run_scenario(),
        Command::SessionReload => session_reload::run_scenario(),
        Command::Login { email, password } => login(&cli, email, password),
        Command::Whoami => whoami(&cli),
        Command::Logout => logout(&cli),
        Command::Nav => nav(&cli),
        Command::Route {
            path,
            permission,
            roles,
        } => route(&cli, path, permission.as_deref(), roles),
    };

    if let Err(e) = result {
        match e {
            HubError::InvalidCredentials => eprintln!("Login failed: invalid email or password."),
            other => eprintln!("Demo error: {}", other),
        }
        std::process::exit(1);
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> HubResult<()> {
    print_banner();
    platform_admin::run_scenario()?;
    finance_staff::run_scenario()?;
    unverified_provider::run_scenario()?;
    session_reload::run_scenario()?;
    println!("All scenarios completed successfully.");
    Ok(())
}

// ── Interactive session ───────────────────────────────────────────────────────

fn open_session(cli: &Cli) -> HubResult<HubSession> {
    let dir = cli
        .session_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("medigo-hub"));
    debug!(dir = %dir.display(), "opening session store");
    let store = FileSessionStore::new(dir)?;

    let registry = match &cli.catalog {
        Some(path) => CapabilityRegistry::from_file(path)?,
        None => CapabilityRegistry::builtin()?,
    };
    let engine = NavigationEngine::new(registry, NavigationCatalog::builtin()?);

    Ok(HubSession::new(
        engine,
        Box::new(store),
        Box::new(MockCredentialStore::demo()),
    ))
}

fn login(cli: &Cli, email: &str, password: &str) -> HubResult<()> {
    let session = open_session(cli)?;
    session.sign_in(email, password)?;
    println!("Logged in as {}.", session.auth().display_name());
    Ok(())
}

fn whoami(cli: &Cli) -> HubResult<()> {
    let session = open_session(cli)?;
    let Some(identity) = session.auth().current_identity() else {
        println!("Not logged in.");
        return Ok(());
    };

    let mut permissions: Vec<&str> = identity.permissions.iter().map(|p| p.as_str()).collect();
    permissions.sort_unstable();

    println!("Name:         {}", identity.resolved_display_name());
    println!("Email:        {}", identity.email);
    println!("Role:         {}", identity.role);
    if let Some(provider_type) = identity.provider_type {
        println!("Provider:     {}", provider_type.as_str());
    }
    if let Some(staff_type) = identity.effective_staff_type() {
        println!("Staff type:   {:?}", staff_type);
    }
    if let Some(status) = identity.verification_status {
        println!("Verification: {:?}", status);
    }
    println!("Permissions:  [{}]", permissions.join(", "));
    Ok(())
}

fn logout(cli: &Cli) -> HubResult<()> {
    open_session(cli)?.sign_out()?;
    println!("Logged out.");
    Ok(())
}

fn nav(cli: &Cli) -> HubResult<()> {
    let session = open_session(cli)?;
    if !session.auth().is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }
    print!("{}", render_menu(&session.navigation()));
    Ok(())
}

fn route(cli: &Cli, path: &str, permission: Option<&str>, roles: &[Role]) -> HubResult<()> {
    let session = open_session(cli)?;

    let mut requirements = RouteRequirements::new().roles(roles.iter().copied());
    if let Some(permission) = permission {
        requirements = requirements.permission(permission);
    }

    println!("{} → {:?}", path, session.check_route(path, &requirements));
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("MediGo Hub — Access Layer Demo");
    println!("==============================");
    println!();
    println!("Per request:");
    println!("  [1] Session hydrated from storage (corrupt records are discarded)");
    println!("  [2] Decision table picks the navigation set for role + sub-type");
    println!("  [3] Unverified providers are confined to the verification notice");
    println!("  [4] Entries shown when core or when any required permission is held");
    println!("  [5] Route guard re-checks role, category ownership and permission");
    println!();
}
