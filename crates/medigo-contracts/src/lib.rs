//! # medigo-contracts
//!
//! Shared types for the MediGo Hub access layer.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate beyond validation: only the identity model, permissions,
//! navigation entries, the stored session record and error types.

pub mod error;
pub mod identity;
pub mod navigation;
pub mod permission;
pub mod session;

#[cfg(test)]
mod tests {
    use super::*;
    use error::HubError;
    use identity::{
        Identity, ParentEntityType, ProviderCategory, ProviderType, Role, StaffType,
        VerificationStatus, DISPLAY_NAME_PLACEHOLDER,
    };
    use permission::{Permission, PermissionSet};
    use session::StoredSession;

    fn provider(provider_type: ProviderType) -> Identity {
        Identity {
            provider_type: Some(provider_type),
            verification_status: Some(VerificationStatus::Verified),
            ..Identity::new("prov-1", "farmacia@medgohub.com", Role::Provider)
        }
    }

    // ── Permission / PermissionSet ───────────────────────────────────────────

    #[test]
    fn all_token_parses_to_wildcard() {
        assert_eq!(Permission::new("all"), Permission::Wildcard);
        assert_eq!(
            Permission::new("inventory_manage"),
            Permission::Named("inventory_manage".to_string())
        );
        assert_eq!(Permission::Wildcard.as_str(), "all");
    }

    #[test]
    fn permission_set_grant_and_has() {
        let mut perms = PermissionSet::new();
        let orders = Permission::new("orders_manage");
        let inventory = Permission::new("inventory_manage");

        assert!(!perms.has(&orders));

        perms.grant(orders.clone());
        assert!(perms.has(&orders));
        assert!(!perms.has(&inventory));
    }

    #[test]
    fn wildcard_grants_every_token() {
        let perms = PermissionSet::from_tokens(["all"]);

        assert!(perms.is_wildcard());
        assert!(perms.has_token("all"));
        assert!(perms.has_token("inventory_manage"));
        assert!(perms.has_token("a-token-no-catalog-declares"));
        assert!(perms.has_token(""));
        assert!(perms.grants_any::<&str>(&[]));
    }

    #[test]
    fn named_set_does_not_imply_wildcard() {
        let perms = PermissionSet::from_tokens(["billing_manage"]);
        assert!(!perms.has_token("all"));
        assert!(!perms.is_wildcard());
    }

    #[test]
    fn grants_any_needs_an_intersection() {
        let perms = PermissionSet::from_tokens(["billing_manage", "reports_view"]);

        assert!(perms.grants_any(&["reports_view", "inventory_manage"]));
        assert!(!perms.grants_any(&["inventory_manage"]));
        assert!(!perms.grants_any::<&str>(&[]));
    }

    #[test]
    fn permission_set_serializes_sorted_tokens() {
        let perms = PermissionSet::from_tokens(["orders_manage", "all", "inventory_manage"]);
        let json = serde_json::to_string(&perms).unwrap();
        assert_eq!(json, r#"["all","inventory_manage","orders_manage"]"#);

        let decoded: PermissionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, perms);
        assert!(decoded.is_wildcard());
    }

    // ── Role / sub-type parsing ──────────────────────────────────────────────

    #[test]
    fn role_parsing_is_closed() {
        assert_eq!("PLATFORM".parse::<Role>().unwrap(), Role::Platform);
        assert_eq!("STAFF".parse::<Role>().unwrap(), Role::Staff);

        match "ADMIN".parse::<Role>() {
            Err(HubError::UnknownRole { value }) => assert_eq!(value, "ADMIN"),
            other => panic!("expected UnknownRole, got {:?}", other),
        }
        assert!("provider".parse::<Role>().is_err(), "parsing is case-sensitive");
    }

    #[test]
    fn sub_type_parsing_reports_kind() {
        assert_eq!(
            "VIRTUAL_SPECIALIST".parse::<ProviderType>().unwrap(),
            ProviderType::VirtualSpecialist
        );
        assert_eq!("FINANCE".parse::<StaffType>().unwrap(), StaffType::Finance);
        assert_eq!(
            "PROVIDER".parse::<ParentEntityType>().unwrap(),
            ParentEntityType::Provider
        );

        match "DENTIST".parse::<ProviderType>() {
            Err(HubError::UnknownSubType { kind, value }) => {
                assert_eq!(kind, "provider type");
                assert_eq!(value, "DENTIST");
            }
            other => panic!("expected UnknownSubType, got {:?}", other),
        }
    }

    #[test]
    fn provider_category_names_round_trip() {
        for category in ProviderCategory::ALL {
            assert_eq!(category.as_str().parse::<ProviderCategory>().unwrap(), category);
        }
        assert!(matches!(
            "dental".parse::<ProviderCategory>(),
            Err(HubError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn specialists_own_no_category() {
        assert_eq!(ProviderType::Pharmacy.category(), Some(ProviderCategory::Pharmacy));
        assert_eq!(
            ProviderType::MedicalCenter.category(),
            Some(ProviderCategory::MedicalCenter)
        );
        assert_eq!(ProviderType::OfficeSpecialist.category(), None);
        assert_eq!(ProviderType::VirtualSpecialist.category(), None);
    }

    // ── Identity validation ──────────────────────────────────────────────────

    #[test]
    fn validate_accepts_well_formed_identities() {
        Identity::new("u1", "admin@medgohub.com", Role::Platform)
            .validate()
            .unwrap();
        provider(ProviderType::Laboratory).validate().unwrap();

        let staff = Identity {
            parent_entity_type: Some(ParentEntityType::Platform),
            ..Identity::new("u2", "staff@medgohub.com", Role::Staff)
        };
        staff.validate().unwrap();
    }

    #[test]
    fn validate_rejects_misplaced_sub_types() {
        let provider_without_type = Identity::new("p", "p@x.com", Role::Provider);
        assert!(matches!(
            provider_without_type.validate(),
            Err(HubError::InvalidIdentity { .. })
        ));

        let platform_with_staff_type = Identity {
            staff_type: Some(StaffType::Finance),
            ..Identity::new("a", "a@x.com", Role::Platform)
        };
        assert!(platform_with_staff_type.validate().is_err());

        let staff_without_parent = Identity::new("s", "s@x.com", Role::Staff);
        assert!(staff_without_parent.validate().is_err());

        let staff_with_provider_type = Identity {
            parent_entity_type: Some(ParentEntityType::Provider),
            provider_type: Some(ProviderType::Pharmacy),
            ..Identity::new("s", "s@x.com", Role::Staff)
        };
        assert!(staff_with_provider_type.validate().is_err());
    }

    #[test]
    fn verification_helpers() {
        let verified = provider(ProviderType::Pharmacy);
        assert!(verified.is_verified_provider());
        assert!(!verified.is_unverified_provider());

        let pending = Identity {
            verification_status: Some(VerificationStatus::Pending),
            ..provider(ProviderType::Pharmacy)
        };
        assert!(pending.is_unverified_provider());

        let missing_status = Identity {
            verification_status: None,
            ..provider(ProviderType::Pharmacy)
        };
        assert!(missing_status.is_unverified_provider());

        // Verification only means something for providers.
        let platform = Identity {
            verification_status: Some(VerificationStatus::Verified),
            ..Identity::new("a", "a@x.com", Role::Platform)
        };
        assert!(!platform.is_verified_provider());
        assert!(!platform.is_unverified_provider());
    }

    #[test]
    fn staff_type_defaults_to_admin() {
        let staff = Identity {
            parent_entity_type: Some(ParentEntityType::Provider),
            ..Identity::new("s", "s@x.com", Role::Staff)
        };
        assert_eq!(staff.effective_staff_type(), Some(StaffType::Admin));
        assert_eq!(provider(ProviderType::Pharmacy).effective_staff_type(), None);
    }

    // ── Display name fallback chain ──────────────────────────────────────────

    #[test]
    fn display_name_fallback_chain() {
        let mut identity = Identity::new("u", "u@x.com", Role::Platform);
        assert_eq!(identity.resolved_display_name(), DISPLAY_NAME_PLACEHOLDER);

        identity.organization_name = Some("Farmacia Central".to_string());
        assert_eq!(identity.resolved_display_name(), "Farmacia Central");

        identity.last_names = Some("Pérez Gómez".to_string());
        assert_eq!(identity.resolved_display_name(), "Pérez Gómez");

        identity.first_name = Some("Ana".to_string());
        assert_eq!(identity.resolved_display_name(), "Ana Pérez Gómez");

        identity.name = Some("Ana P.".to_string());
        assert_eq!(identity.resolved_display_name(), "Ana P.");

        identity.display_name = Some("Dra. Ana".to_string());
        assert_eq!(identity.resolved_display_name(), "Dra. Ana");
    }

    #[test]
    fn blank_names_are_skipped() {
        let identity = Identity {
            display_name: Some("   ".to_string()),
            name: Some(String::new()),
            first_name: Some(" ".to_string()),
            ..Identity::new("u", "u@x.com", Role::Platform)
        };
        assert_eq!(identity.resolved_display_name(), DISPLAY_NAME_PLACEHOLDER);
    }

    // ── StoredSession ────────────────────────────────────────────────────────

    #[test]
    fn stored_session_decodes_what_it_encodes() {
        let session = StoredSession::new(provider(ProviderType::Emergency));
        let json = session.to_json().unwrap();
        assert!(json.contains("\"role\":\"PROVIDER\""));
        assert!(json.contains("\"provider_type\":\"EMERGENCY\""));

        let decoded = StoredSession::from_json(&json).unwrap();
        assert_eq!(decoded, session);
    }

    #[test]
    fn stored_session_rejects_shape_drift() {
        let session = StoredSession::new(provider(ProviderType::Pharmacy));
        let mut value: serde_json::Value =
            serde_json::from_str(&session.to_json().unwrap()).unwrap();
        value["identity"]["schema_version"] = serde_json::json!(2);

        match StoredSession::from_json(&value.to_string()) {
            Err(HubError::StorageCorrupt { reason }) => {
                assert!(reason.contains("schema_version"), "got: {reason}");
            }
            other => panic!("expected StorageCorrupt, got {:?}", other),
        }

        assert!(matches!(
            StoredSession::from_json("not json"),
            Err(HubError::StorageCorrupt { .. })
        ));
    }

    #[test]
    fn stored_session_rejects_invalid_identity() {
        let mut bad = provider(ProviderType::Pharmacy);
        bad.provider_type = None;
        let json = serde_json::to_string(&StoredSession::new(bad)).unwrap();

        assert!(matches!(
            StoredSession::from_json(&json),
            Err(HubError::StorageCorrupt { .. })
        ));
    }

    #[test]
    fn stored_session_rejects_unknown_role() {
        let session = StoredSession::new(Identity::new("u", "u@x.com", Role::Platform));
        let json = session.to_json().unwrap().replace("PLATFORM", "SUPERUSER");

        assert!(matches!(
            StoredSession::from_json(&json),
            Err(HubError::StorageCorrupt { .. })
        ));
    }

    // ── HubError display messages ────────────────────────────────────────────

    #[test]
    fn error_display_messages() {
        let err = HubError::UnknownCategory {
            value: "dental".to_string(),
        };
        assert!(err.to_string().contains("dental"));

        let err = HubError::UnverifiedProvider {
            identity_id: "prov-9".to_string(),
        };
        assert!(err.to_string().contains("prov-9"));
        assert!(err.to_string().contains("not verified"));

        assert_eq!(HubError::InvalidCredentials.to_string(), "invalid credentials");
        assert!(HubError::LoginInProgress.to_string().contains("in progress"));

        let err = HubError::ConfigError {
            reason: "duplicate category".to_string(),
        };
        assert!(err.to_string().contains("configuration error"));
    }
}
