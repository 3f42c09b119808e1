//! Demo accounts for the MediGo Hub reference runtime.
//!
//! All accounts are fictional and the passwords are plain text. This module
//! stands in for the account backend of a real deployment.

use medigo_contracts::{
    identity::{Identity, ParentEntityType, ProviderType, Role, StaffType, VerificationStatus},
    permission::PermissionSet,
};

/// One login the mock credential store accepts.
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub identity: Identity,
}

fn account(email: &'static str, password: &'static str, identity: Identity) -> DemoAccount {
    DemoAccount {
        email,
        password,
        identity,
    }
}

fn grants(tokens: &[&str]) -> PermissionSet {
    PermissionSet::from_tokens(tokens.iter().copied())
}

fn provider(
    id: &str,
    email: &str,
    provider_type: ProviderType,
    status: VerificationStatus,
    organization: &str,
    tokens: &[&str],
) -> Identity {
    Identity {
        provider_type: Some(provider_type),
        verification_status: Some(status),
        permissions: grants(tokens),
        organization_name: Some(organization.to_string()),
        ..Identity::new(id, email, Role::Provider)
    }
}

fn staff(
    id: &str,
    email: &str,
    staff_type: StaffType,
    parent: ParentEntityType,
    tokens: &[&str],
) -> Identity {
    Identity {
        staff_type: Some(staff_type),
        parent_entity_type: Some(parent),
        permissions: grants(tokens),
        ..Identity::new(id, email, Role::Staff)
    }
}

/// Every demo account, one per navigation set plus a pending provider.
///
/// | email                      | password      | who                         |
/// |----------------------------|---------------|-----------------------------|
/// | admin@medgohub.com         | platform123   | platform admin, wildcard    |
/// | finanzas@medgohub.com      | finance123    | platform finance staff      |
/// | soporte@medgohub.com       | support123    | platform support staff      |
/// | farmacia@medgohub.com      | pharmacy123   | verified pharmacy           |
/// | laboratorio@medgohub.com   | lab123        | verified laboratory         |
/// | clinica@medgohub.com       | clinic123     | verified medical center     |
/// | emergencias@medgohub.com   | emergency123  | verified emergency service  |
/// | domicilio@medgohub.com     | homecare123   | verified homecare           |
/// | pendiente@medgohub.com     | pending123    | pending pharmacy, wildcard  |
/// | consultorio@medgohub.com   | office123     | office specialist           |
/// | telemedicina@medgohub.com  | virtual123    | virtual specialist          |
/// | mostrador@medgohub.com     | counter123    | pharmacy counter staff      |
pub fn demo_accounts() -> Vec<DemoAccount> {
    vec![
        account(
            "admin@medgohub.com",
            "platform123",
            Identity {
                permissions: grants(&["all"]),
                name: Some("Administrador MediGo".to_string()),
                ..Identity::new("usr-platform-001", "admin@medgohub.com", Role::Platform)
            },
        ),
        account(
            "finanzas@medgohub.com",
            "finance123",
            Identity {
                first_name: Some("Lucía".to_string()),
                last_names: Some("Fernández Ortiz".to_string()),
                ..staff(
                    "usr-staff-001",
                    "finanzas@medgohub.com",
                    StaffType::Finance,
                    ParentEntityType::Platform,
                    &["billing_manage", "reports_view"],
                )
            },
        ),
        account(
            "soporte@medgohub.com",
            "support123",
            Identity {
                display_name: Some("Mesa de ayuda".to_string()),
                ..staff(
                    "usr-staff-002",
                    "soporte@medgohub.com",
                    StaffType::Support,
                    ParentEntityType::Platform,
                    &["tickets_manage", "users_view"],
                )
            },
        ),
        account(
            "farmacia@medgohub.com",
            "pharmacy123",
            provider(
                "prv-pharmacy-001",
                "farmacia@medgohub.com",
                ProviderType::Pharmacy,
                VerificationStatus::Verified,
                "Farmacia San Rafael",
                &["inventory_manage", "orders_manage"],
            ),
        ),
        account(
            "laboratorio@medgohub.com",
            "lab123",
            provider(
                "prv-lab-001",
                "laboratorio@medgohub.com",
                ProviderType::Laboratory,
                VerificationStatus::Verified,
                "Laboratorio Clínico Andes",
                &["tests_manage", "samples_manage", "results_manage"],
            ),
        ),
        account(
            "clinica@medgohub.com",
            "clinic123",
            provider(
                "prv-clinic-001",
                "clinica@medgohub.com",
                ProviderType::MedicalCenter,
                VerificationStatus::Verified,
                "Centro Médico La Esperanza",
                &["appointments_manage", "telemedicine_manage", "staff_manage"],
            ),
        ),
        account(
            "emergencias@medgohub.com",
            "emergency123",
            provider(
                "prv-emergency-001",
                "emergencias@medgohub.com",
                ProviderType::Emergency,
                VerificationStatus::Verified,
                "Ambulancias Rápidas del Sur",
                &["emergency_requests_manage", "dispatch_manage", "fleet_manage"],
            ),
        ),
        account(
            "domicilio@medgohub.com",
            "homecare123",
            provider(
                "prv-homecare-001",
                "domicilio@medgohub.com",
                ProviderType::Homecare,
                VerificationStatus::Verified,
                "Cuidados en Casa",
                &["bookings_manage", "caregivers_manage"],
            ),
        ),
        account(
            "pendiente@medgohub.com",
            "pending123",
            provider(
                "prv-pharmacy-002",
                "pendiente@medgohub.com",
                ProviderType::Pharmacy,
                VerificationStatus::Pending,
                "Farmacia Nueva Vida",
                &["all"],
            ),
        ),
        account(
            "consultorio@medgohub.com",
            "office123",
            Identity {
                first_name: Some("Andrés".to_string()),
                last_names: Some("Salazar".to_string()),
                ..provider(
                    "prv-specialist-001",
                    "consultorio@medgohub.com",
                    ProviderType::OfficeSpecialist,
                    VerificationStatus::Verified,
                    "Consultorio Dr. Salazar",
                    &["appointments_manage", "consultations_manage", "patients_view"],
                )
            },
        ),
        account(
            "telemedicina@medgohub.com",
            "virtual123",
            Identity {
                first_name: Some("Valeria".to_string()),
                last_names: Some("Mejía".to_string()),
                ..provider(
                    "prv-specialist-002",
                    "telemedicina@medgohub.com",
                    ProviderType::VirtualSpecialist,
                    VerificationStatus::Verified,
                    "Telesalud Mejía",
                    &["telemedicine_manage"],
                )
            },
        ),
        account(
            "mostrador@medgohub.com",
            "counter123",
            staff(
                "usr-staff-003",
                "mostrador@medgohub.com",
                StaffType::Support,
                ParentEntityType::Provider,
                &["orders_manage"],
            ),
        ),
    ]
}
