//! Tests for user models

use super::preferences::Theme;
use super::types::{User, UserRole, UserStatus, UserUpdate};

fn create_test_user() -> User {
    User::new(
        "Ana Souza".to_string(),
        "ana@clinic.test".to_string(),
        "hash".to_string(),
        UserRole::Doctor,
    )
}

#[test]
fn test_new_user_defaults() {
    let user = create_test_user();

    assert_eq!(user.role, UserRole::Doctor);
    assert_eq!(user.status, UserStatus::Active);
    assert!(user.is_active());
    assert!(user.last_login_at.is_none());
    assert_eq!(user.preferences.theme, Theme::Light);
}

#[test]
fn test_role_display_round_trip() {
    for role in UserRole::ALL {
        let parsed: UserRole = role.to_string().parse().unwrap();
        assert_eq!(parsed, role);
    }
    assert!("janitor".parse::<UserRole>().is_err());
}

#[test]
fn test_inactive_user_is_not_active() {
    let mut user = create_test_user();
    user.status = UserStatus::Inactive;
    assert!(!user.is_active());

    user.status = UserStatus::Suspended;
    assert!(!user.is_active());
}

#[test]
fn test_apply_update_merges_present_fields() {
    let mut user = create_test_user();
    let original_email = user.email.clone();
    let version_before = user.metadata.version;

    user.apply_update(UserUpdate {
        name: Some("Ana S. Souza".to_string()),
        phone: Some("555-0100".to_string()),
        ..Default::default()
    });

    assert_eq!(user.name, "Ana S. Souza");
    assert_eq!(user.phone.as_deref(), Some("555-0100"));
    // Absent fields untouched
    assert_eq!(user.email, original_email);
    assert_eq!(user.role, UserRole::Doctor);
    assert_eq!(user.metadata.version, version_before + 1);
}

#[test]
fn test_update_last_login_stamps_time() {
    let mut user = create_test_user();
    user.update_last_login();
    assert!(user.last_login_at.is_some());
}

#[test]
fn test_password_hash_not_serialized() {
    let user = create_test_user();
    let json = serde_json::to_string(&user).unwrap();
    assert!(!json.contains("password_hash"));
    assert!(!json.contains("hash"));
}
