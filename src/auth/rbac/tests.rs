//! Tests for RBAC functionality

use crate::auth::rbac::RbacSystem;
use crate::config::RbacConfig;
use crate::core::models::{User, UserRole};

fn create_test_rbac() -> RbacSystem {
    RbacSystem::new(&RbacConfig::default()).unwrap()
}

fn create_test_user(role: UserRole) -> User {
    User::new(
        "Test User".to_string(),
        format!("{}@clinic.test", role),
        "hash".to_string(),
        role,
    )
}

#[test]
fn test_rbac_initialization() {
    let rbac = create_test_rbac();

    assert_eq!(rbac.list_roles().len(), UserRole::ALL.len());
    assert!(!rbac.list_permissions().is_empty());
    assert!(rbac.get_permission("patients:read").is_some());
    assert!(rbac.get_permission("financial:delete").is_some());
    assert!(rbac.get_permission("bogus:token").is_none());
}

#[test]
fn test_every_role_grants_nonempty_subset() {
    let rbac = create_test_rbac();
    let catalog = rbac.list_permissions().len();

    for role in UserRole::ALL {
        let granted = rbac.role_permissions(role);
        assert!(!granted.is_empty(), "role {} has no permissions", role);
        assert!(granted.len() <= catalog);
    }
}

#[test]
fn test_administrator_covers_full_catalog() {
    let rbac = create_test_rbac();
    let admin = create_test_user(UserRole::Administrator);

    for permission in rbac.list_permissions() {
        assert!(
            rbac.has_permission(&admin, &permission.name),
            "administrator missing {}",
            permission.name
        );
    }
}

#[test]
fn test_permission_exactness_per_role() {
    // has_permission must be true for exactly the table's tokens and false
    // for every other catalog entry.
    let rbac = create_test_rbac();

    for role in UserRole::ALL {
        let user = create_test_user(role);
        let granted = rbac.role_permissions(role).clone();

        for permission in rbac.list_permissions() {
            assert_eq!(
                rbac.has_permission(&user, &permission.name),
                granted.contains(&permission.name),
                "role {} permission {}",
                role,
                permission.name
            );
        }
    }
}

#[test]
fn test_receptionist_lacks_financial_delete() {
    let rbac = create_test_rbac();
    let receptionist = create_test_user(UserRole::Receptionist);

    assert!(rbac.has_permission(&receptionist, "financial:read"));
    assert!(rbac.has_permission(&receptionist, "financial:write"));
    assert!(!rbac.has_permission(&receptionist, "financial:delete"));
}

#[test]
fn test_check_all() {
    let rbac = create_test_rbac();
    let doctor = create_test_user(UserRole::Doctor);

    assert!(rbac.check_all(&doctor, &["patients:read", "records:write"]));
    assert!(!rbac.check_all(&doctor, &["patients:read", "financial:delete"]));
    // Empty requirement list is vacuously satisfied.
    assert!(rbac.check_all(&doctor, &[]));
}

#[test]
fn test_check_any() {
    let rbac = create_test_rbac();
    let viewer = create_test_user(UserRole::Viewer);

    assert!(rbac.check_any(&viewer, &["patients:read", "settings:write"]));
    assert!(!rbac.check_any(&viewer, &["records:write", "settings:write"]));
}

#[test]
fn test_check_any_empty_list_is_false() {
    // No candidate permission means nothing can match, for any role.
    let rbac = create_test_rbac();

    for role in UserRole::ALL {
        let user = create_test_user(role);
        assert!(!rbac.check_any(&user, &[]));
    }
}

#[test]
fn test_check_detailed() {
    let rbac = create_test_rbac();
    let nurse = create_test_user(UserRole::Nurse);

    let granted = rbac.check_detailed(&nurse, "records:write");
    assert!(granted.granted);
    assert_eq!(granted.granted_by_role, Some(UserRole::Nurse));
    assert!(granted.denial_reason.is_none());

    let denied = rbac.check_detailed(&nurse, "settings:write");
    assert!(!denied.granted);
    assert!(denied.granted_by_role.is_none());
    assert_eq!(
        denied.denial_reason.as_deref(),
        Some("missing permission: settings:write")
    );
}

#[test]
fn test_check_resource() {
    let rbac = create_test_rbac();
    let receptionist = create_test_user(UserRole::Receptionist);

    assert!(rbac.check_resource(&receptionist, "financial", "write"));
    assert!(!rbac.check_resource(&receptionist, "financial", "delete"));
}

#[test]
fn test_is_admin_follows_config() {
    let rbac = create_test_rbac();

    assert!(rbac.is_admin(&create_test_user(UserRole::Administrator)));
    assert!(!rbac.is_admin(&create_test_user(UserRole::Doctor)));

    let custom = RbacConfig {
        admin_roles: vec!["administrator".to_string(), "doctor".to_string()],
        ..Default::default()
    };
    let rbac = RbacSystem::new(&custom).unwrap();
    assert!(rbac.is_admin(&create_test_user(UserRole::Doctor)));
}

#[test]
fn test_permissions_recomputed_after_role_change() {
    // The permission set must follow the role with no stale copy.
    let rbac = create_test_rbac();
    let mut user = create_test_user(UserRole::Viewer);
    assert!(!rbac.has_permission(&user, "records:write"));

    user.role = UserRole::Doctor;
    assert!(rbac.has_permission(&user, "records:write"));
}
