//! The role/sub-type decision table.
//!
//! Maps the tuple (role, provider_type, staff_type, parent_entity_type) to
//! the navigation set an identity starts from. Lookup is an exact tuple
//! match against `DECISION_TABLE`; a tuple with no row resolves to `None`
//! and the engine returns an empty menu. A STAFF identity without a staff
//! type is looked up as ADMIN.

use std::fmt;

use medigo_contracts::identity::{
    ParentEntityType, ProviderCategory, ProviderType, Role, StaffType,
};

/// Identifies one base navigation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationSetId {
    PlatformAdmin,
    PlatformFinance,
    PlatformSupport,
    /// Platform staff with the ADMIN staff type.
    PlatformStaff,
    ProviderStaff,
    OfficeSpecialist,
    VirtualSpecialist,
    /// What unverified providers see instead of their operational set.
    PendingVerification,
    /// Built from the capability registry rather than the navigation catalog.
    ProviderCategory(ProviderCategory),
}

impl NavigationSetId {
    /// Every set the navigation catalog must declare.
    pub const CATALOG_SETS: [NavigationSetId; 8] = [
        Self::PlatformAdmin,
        Self::PlatformFinance,
        Self::PlatformSupport,
        Self::PlatformStaff,
        Self::ProviderStaff,
        Self::OfficeSpecialist,
        Self::VirtualSpecialist,
        Self::PendingVerification,
    ];

    /// The `id` of this set in the navigation catalog, or `None` for
    /// registry-backed sets.
    pub fn catalog_key(&self) -> Option<&'static str> {
        match self {
            Self::PlatformAdmin => Some("platform-admin"),
            Self::PlatformFinance => Some("platform-finance"),
            Self::PlatformSupport => Some("platform-support"),
            Self::PlatformStaff => Some("platform-staff"),
            Self::ProviderStaff => Some("provider-staff"),
            Self::OfficeSpecialist => Some("office-specialist"),
            Self::VirtualSpecialist => Some("virtual-specialist"),
            Self::PendingVerification => Some("pending-verification"),
            Self::ProviderCategory(_) => None,
        }
    }
}

impl fmt::Display for NavigationSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProviderCategory(category) => write!(f, "provider:{}", category),
            other => f.write_str(other.catalog_key().unwrap_or_default()),
        }
    }
}

/// One row of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionRow {
    pub role: Role,
    pub provider_type: Option<ProviderType>,
    pub staff_type: Option<StaffType>,
    pub parent_entity_type: Option<ParentEntityType>,
    pub set: NavigationSetId,
}

const fn row(
    role: Role,
    provider_type: Option<ProviderType>,
    staff_type: Option<StaffType>,
    parent_entity_type: Option<ParentEntityType>,
    set: NavigationSetId,
) -> DecisionRow {
    DecisionRow {
        role,
        provider_type,
        staff_type,
        parent_entity_type,
        set,
    }
}

const fn provider_row(provider_type: ProviderType, set: NavigationSetId) -> DecisionRow {
    row(Role::Provider, Some(provider_type), None, None, set)
}

const fn staff_row(staff_type: StaffType, parent: ParentEntityType, set: NavigationSetId) -> DecisionRow {
    row(Role::Staff, None, Some(staff_type), Some(parent), set)
}

/// Every supported discriminant combination.
pub const DECISION_TABLE: &[DecisionRow] = &[
    row(Role::Platform, None, None, None, NavigationSetId::PlatformAdmin),
    provider_row(
        ProviderType::MedicalCenter,
        NavigationSetId::ProviderCategory(ProviderCategory::MedicalCenter),
    ),
    provider_row(
        ProviderType::Pharmacy,
        NavigationSetId::ProviderCategory(ProviderCategory::Pharmacy),
    ),
    provider_row(
        ProviderType::Laboratory,
        NavigationSetId::ProviderCategory(ProviderCategory::Laboratory),
    ),
    provider_row(
        ProviderType::Emergency,
        NavigationSetId::ProviderCategory(ProviderCategory::Emergency),
    ),
    provider_row(
        ProviderType::Homecare,
        NavigationSetId::ProviderCategory(ProviderCategory::Homecare),
    ),
    provider_row(ProviderType::OfficeSpecialist, NavigationSetId::OfficeSpecialist),
    provider_row(ProviderType::VirtualSpecialist, NavigationSetId::VirtualSpecialist),
    staff_row(StaffType::Finance, ParentEntityType::Platform, NavigationSetId::PlatformFinance),
    staff_row(StaffType::Support, ParentEntityType::Platform, NavigationSetId::PlatformSupport),
    staff_row(StaffType::Admin, ParentEntityType::Platform, NavigationSetId::PlatformStaff),
    staff_row(StaffType::Finance, ParentEntityType::Provider, NavigationSetId::ProviderStaff),
    staff_row(StaffType::Support, ParentEntityType::Provider, NavigationSetId::ProviderStaff),
    staff_row(StaffType::Admin, ParentEntityType::Provider, NavigationSetId::ProviderStaff),
];

/// Look up the base navigation set for a discriminant tuple.
pub fn resolve_set(
    role: Role,
    provider_type: Option<ProviderType>,
    staff_type: Option<StaffType>,
    parent_entity_type: Option<ParentEntityType>,
) -> Option<NavigationSetId> {
    let staff_type = match role {
        Role::Staff => Some(staff_type.unwrap_or(StaffType::Admin)),
        _ => staff_type,
    };

    DECISION_TABLE
        .iter()
        .find(|r| {
            r.role == role
                && r.provider_type == provider_type
                && r.staff_type == staff_type
                && r.parent_entity_type == parent_entity_type
        })
        .map(|r| r.set)
}
