//! Identity and role discriminator types.
//!
//! An `Identity` is created at login and held in session storage until
//! logout. Its role is exactly one of PLATFORM, PROVIDER or STAFF; the
//! sub-type fields only make sense for particular roles, which
//! `Identity::validate` enforces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HubError, HubResult};
use crate::permission::PermissionSet;

/// Shown when an identity carries no usable name at all.
pub const DISPLAY_NAME_PLACEHOLDER: &str = "Usuario";

/// The single role an identity holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Platform,
    Provider,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Platform => "PLATFORM",
            Self::Provider => "PROVIDER",
            Self::Staff => "STAFF",
        }
    }
}

impl FromStr for Role {
    type Err = HubError;

    fn from_str(s: &str) -> HubResult<Self> {
        match s {
            "PLATFORM" => Ok(Self::Platform),
            "PROVIDER" => Ok(Self::Provider),
            "STAFF" => Ok(Self::Staff),
            other => Err(HubError::UnknownRole {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of organization a PROVIDER identity operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderType {
    MedicalCenter,
    Pharmacy,
    Laboratory,
    Emergency,
    Homecare,
    OfficeSpecialist,
    VirtualSpecialist,
}

impl ProviderType {
    pub const ALL: [ProviderType; 7] = [
        Self::MedicalCenter,
        Self::Pharmacy,
        Self::Laboratory,
        Self::Emergency,
        Self::Homecare,
        Self::OfficeSpecialist,
        Self::VirtualSpecialist,
    ];

    /// The registry category backing this provider type.
    ///
    /// Specialists have their own navigation sets and no registry category.
    pub fn category(&self) -> Option<ProviderCategory> {
        match self {
            Self::MedicalCenter => Some(ProviderCategory::MedicalCenter),
            Self::Pharmacy => Some(ProviderCategory::Pharmacy),
            Self::Laboratory => Some(ProviderCategory::Laboratory),
            Self::Emergency => Some(ProviderCategory::Emergency),
            Self::Homecare => Some(ProviderCategory::Homecare),
            Self::OfficeSpecialist | Self::VirtualSpecialist => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MedicalCenter => "MEDICAL_CENTER",
            Self::Pharmacy => "PHARMACY",
            Self::Laboratory => "LABORATORY",
            Self::Emergency => "EMERGENCY",
            Self::Homecare => "HOMECARE",
            Self::OfficeSpecialist => "OFFICE_SPECIALIST",
            Self::VirtualSpecialist => "VIRTUAL_SPECIALIST",
        }
    }
}

impl FromStr for ProviderType {
    type Err = HubError;

    fn from_str(s: &str) -> HubResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| HubError::UnknownSubType {
                kind: "provider type",
                value: s.to_string(),
            })
    }
}

/// Job function of a STAFF identity. Absent on a STAFF identity means `Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffType {
    Finance,
    Support,
    Admin,
}

impl FromStr for StaffType {
    type Err = HubError;

    fn from_str(s: &str) -> HubResult<Self> {
        match s {
            "FINANCE" => Ok(Self::Finance),
            "SUPPORT" => Ok(Self::Support),
            "ADMIN" => Ok(Self::Admin),
            other => Err(HubError::UnknownSubType {
                kind: "staff type",
                value: other.to_string(),
            }),
        }
    }
}

/// Whose organization a STAFF identity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParentEntityType {
    Platform,
    Provider,
}

impl FromStr for ParentEntityType {
    type Err = HubError;

    fn from_str(s: &str) -> HubResult<Self> {
        match s {
            "PLATFORM" => Ok(Self::Platform),
            "PROVIDER" => Ok(Self::Provider),
            other => Err(HubError::UnknownSubType {
                kind: "parent entity type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
    Suspended,
}

impl FromStr for VerificationStatus {
    type Err = HubError;

    fn from_str(s: &str) -> HubResult<Self> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "VERIFIED" => Ok(Self::Verified),
            "REJECTED" => Ok(Self::Rejected),
            "SUSPENDED" => Ok(Self::Suspended),
            other => Err(HubError::UnknownSubType {
                kind: "verification status",
                value: other.to_string(),
            }),
        }
    }
}

/// A provider category in the capability registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderCategory {
    Pharmacy,
    Laboratory,
    MedicalCenter,
    Emergency,
    Homecare,
}

impl ProviderCategory {
    pub const ALL: [ProviderCategory; 5] = [
        Self::Pharmacy,
        Self::Laboratory,
        Self::MedicalCenter,
        Self::Emergency,
        Self::Homecare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pharmacy => "pharmacy",
            Self::Laboratory => "laboratory",
            Self::MedicalCenter => "medical-center",
            Self::Emergency => "emergency",
            Self::Homecare => "homecare",
        }
    }
}

impl FromStr for ProviderCategory {
    type Err = HubError;

    fn from_str(s: &str) -> HubResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| HubError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for ProviderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user's role, permission and verification record.
///
/// Unknown fields are rejected on decode so a stored record with a drifted
/// shape fails closed instead of being half-read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<ProviderType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_type: Option<StaffType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_entity_type: Option<ParentEntityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<VerificationStatus>,
    #[serde(default)]
    pub permissions: PermissionSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_names: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
}

impl Identity {
    /// A bare identity with no sub-types, permissions or names.
    pub fn new(id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role,
            provider_type: None,
            staff_type: None,
            parent_entity_type: None,
            verification_status: None,
            permissions: PermissionSet::new(),
            display_name: None,
            name: None,
            first_name: None,
            last_names: None,
            organization_name: None,
        }
    }

    /// Check the role/sub-type presence rules.
    ///
    /// - PLATFORM carries no sub-type.
    /// - PROVIDER carries `provider_type` and neither staff field.
    /// - STAFF carries `parent_entity_type` and no `provider_type`.
    pub fn validate(&self) -> HubResult<()> {
        if self.id.trim().is_empty() {
            return Err(invalid("identity id is empty"));
        }
        if self.email.trim().is_empty() {
            return Err(invalid("identity email is empty"));
        }

        match self.role {
            Role::Platform => {
                if self.provider_type.is_some()
                    || self.staff_type.is_some()
                    || self.parent_entity_type.is_some()
                {
                    return Err(invalid("PLATFORM identity must not carry sub-types"));
                }
            }
            Role::Provider => {
                if self.provider_type.is_none() {
                    return Err(invalid("PROVIDER identity requires provider_type"));
                }
                if self.staff_type.is_some() || self.parent_entity_type.is_some() {
                    return Err(invalid("PROVIDER identity must not carry staff fields"));
                }
            }
            Role::Staff => {
                if self.parent_entity_type.is_none() {
                    return Err(invalid("STAFF identity requires parent_entity_type"));
                }
                if self.provider_type.is_some() {
                    return Err(invalid("STAFF identity must not carry provider_type"));
                }
            }
        }

        Ok(())
    }

    /// True only for a PROVIDER whose verification status is VERIFIED.
    pub fn is_verified_provider(&self) -> bool {
        self.role == Role::Provider
            && self.verification_status == Some(VerificationStatus::Verified)
    }

    /// True for a PROVIDER that is not (yet) verified.
    pub fn is_unverified_provider(&self) -> bool {
        self.role == Role::Provider && !self.is_verified_provider()
    }

    /// Staff type with the ADMIN default applied; `None` for other roles.
    pub fn effective_staff_type(&self) -> Option<StaffType> {
        match self.role {
            Role::Staff => Some(self.staff_type.unwrap_or(StaffType::Admin)),
            _ => None,
        }
    }

    /// Resolve the name to show for this identity.
    ///
    /// Tries `display_name`, `name`, `first_name` + `last_names`,
    /// `organization_name`, then [`DISPLAY_NAME_PLACEHOLDER`]. Blank values
    /// count as absent, so the result is never empty.
    pub fn resolved_display_name(&self) -> String {
        if let Some(name) = present(&self.display_name).or_else(|| present(&self.name)) {
            return name.to_string();
        }

        let full_name = [present(&self.first_name), present(&self.last_names)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if !full_name.is_empty() {
            return full_name;
        }

        present(&self.organization_name)
            .unwrap_or(DISPLAY_NAME_PLACEHOLDER)
            .to_string()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn invalid(reason: &str) -> HubError {
    HubError::InvalidIdentity {
        reason: reason.to_string(),
    }
}
