//! Access guard for protected views
//!
//! A `Guard` describes the role and permission requirements of a piece of
//! protected content. Evaluating it against the session user yields one of
//! three denial outcomes or a grant, in fixed precedence order:
//! authentication first, then the allowed-role list, then the permission
//! combinator.

use crate::auth::rbac::RbacSystem;
use crate::core::models::{User, UserRole};
use tracing::debug;

/// Requirements for rendering protected content
#[derive(Debug, Clone, Default)]
pub struct Guard {
    /// Roles allowed through, when restricted by role
    allowed_roles: Option<Vec<UserRole>>,
    /// Permission tokens required
    required_permissions: Vec<String>,
    /// Require every listed permission (ALL) instead of at least one (ANY)
    require_all: bool,
}

/// Outcome of evaluating a guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected content
    Granted,
    /// No authenticated user
    NotAuthenticated,
    /// The user's role is not in the allowed list
    RoleRestricted,
    /// The permission combinator evaluated false
    InsufficientPermissions,
}

impl GuardDecision {
    /// Whether the content should render
    pub fn is_granted(&self) -> bool {
        matches!(self, GuardDecision::Granted)
    }

    /// Stable reason token for fallback display. Display text is a
    /// presentation-layer concern; only the token lives here.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            GuardDecision::Granted => None,
            GuardDecision::NotAuthenticated => Some("not_authenticated"),
            GuardDecision::RoleRestricted => Some("role_restricted"),
            GuardDecision::InsufficientPermissions => Some("insufficient_permissions"),
        }
    }
}

impl Guard {
    /// Guard with no requirements beyond an authenticated session
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given roles
    pub fn allow_roles(mut self, roles: impl IntoIterator<Item = UserRole>) -> Self {
        self.allowed_roles = Some(roles.into_iter().collect());
        self
    }

    /// Require every listed permission
    pub fn require_all(mut self, permissions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.required_permissions = permissions.into_iter().map(Into::into).collect();
        self.require_all = true;
        self
    }

    /// Require at least one listed permission
    pub fn require_any(mut self, permissions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.required_permissions = permissions.into_iter().map(Into::into).collect();
        self.require_all = false;
        self
    }

    /// Evaluate the guard against the session user
    pub fn evaluate(&self, rbac: &RbacSystem, user: Option<&User>) -> GuardDecision {
        let user = match user {
            Some(user) => user,
            None => {
                debug!("guard denied: no authenticated user");
                return GuardDecision::NotAuthenticated;
            }
        };

        if let Some(allowed) = &self.allowed_roles {
            if !allowed.contains(&user.role) {
                debug!(user = %user.email, role = %user.role, "guard denied: role restricted");
                return GuardDecision::RoleRestricted;
            }
        }

        if !self.required_permissions.is_empty() {
            let required: Vec<&str> = self
                .required_permissions
                .iter()
                .map(String::as_str)
                .collect();
            let satisfied = if self.require_all {
                rbac.check_all(user, &required)
            } else {
                rbac.check_any(user, &required)
            };
            if !satisfied {
                debug!(
                    user = %user.email,
                    required = ?self.required_permissions,
                    require_all = self.require_all,
                    "guard denied: insufficient permissions"
                );
                return GuardDecision::InsufficientPermissions;
            }
        }

        GuardDecision::Granted
    }

    /// Evaluate and pick between protected content and a fallback
    pub fn render<'a, T>(
        &self,
        rbac: &RbacSystem,
        user: Option<&User>,
        content: &'a T,
        fallback: &'a T,
    ) -> &'a T {
        if self.evaluate(rbac, user).is_granted() {
            content
        } else {
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RbacConfig;

    fn rbac() -> RbacSystem {
        RbacSystem::new(&RbacConfig::default()).unwrap()
    }

    fn user(role: UserRole) -> User {
        User::new(
            "Test User".to_string(),
            format!("{}@clinic.test", role),
            "hash".to_string(),
            role,
        )
    }

    #[test]
    fn test_no_user_is_not_authenticated() {
        let rbac = rbac();
        let guard = Guard::new().require_all(["patients:read"]);

        assert_eq!(
            guard.evaluate(&rbac, None),
            GuardDecision::NotAuthenticated
        );
    }

    #[test]
    fn test_empty_guard_grants_any_authenticated_user() {
        let rbac = rbac();
        let viewer = user(UserRole::Viewer);

        assert_eq!(
            Guard::new().evaluate(&rbac, Some(&viewer)),
            GuardDecision::Granted
        );
    }

    #[test]
    fn test_role_restriction() {
        let rbac = rbac();
        let guard = Guard::new().allow_roles([UserRole::Administrator, UserRole::Doctor]);

        assert!(guard.evaluate(&rbac, Some(&user(UserRole::Doctor))).is_granted());
        assert_eq!(
            guard.evaluate(&rbac, Some(&user(UserRole::Nurse))),
            GuardDecision::RoleRestricted
        );
    }

    #[test]
    fn test_role_check_precedes_permission_check() {
        // A user failing both checks must see the role outcome.
        let rbac = rbac();
        let guard = Guard::new()
            .allow_roles([UserRole::Administrator])
            .require_all(["settings:write"]);

        assert_eq!(
            guard.evaluate(&rbac, Some(&user(UserRole::Viewer))),
            GuardDecision::RoleRestricted
        );
    }

    #[test]
    fn test_receptionist_cannot_delete_financial_records() {
        // End-to-end scenario: receptionist + required [financial:delete]
        // with the ALL combinator.
        let rbac = rbac();
        let guard = Guard::new().require_all(["financial:delete"]);

        assert_eq!(
            guard.evaluate(&rbac, Some(&user(UserRole::Receptionist))),
            GuardDecision::InsufficientPermissions
        );
        assert!(guard
            .evaluate(&rbac, Some(&user(UserRole::Administrator)))
            .is_granted());
    }

    #[test]
    fn test_any_combinator() {
        let rbac = rbac();
        let guard = Guard::new().require_any(["settings:write", "patients:read"]);

        assert!(guard.evaluate(&rbac, Some(&user(UserRole::Viewer))).is_granted());

        let none_match = Guard::new().require_any(["settings:write", "team:write"]);
        assert_eq!(
            none_match.evaluate(&rbac, Some(&user(UserRole::Viewer))),
            GuardDecision::InsufficientPermissions
        );
    }

    #[test]
    fn test_all_combinator_requires_every_permission() {
        let rbac = rbac();
        let guard = Guard::new().require_all(["patients:read", "records:write"]);

        assert!(guard.evaluate(&rbac, Some(&user(UserRole::Doctor))).is_granted());
        assert_eq!(
            guard.evaluate(&rbac, Some(&user(UserRole::Viewer))),
            GuardDecision::InsufficientPermissions
        );
    }

    #[test]
    fn test_render_picks_fallback_on_denial() {
        let rbac = rbac();
        let guard = Guard::new().require_all(["settings:write"]);
        let viewer = user(UserRole::Viewer);

        let content = "settings-page";
        let fallback = "access-denied";

        assert_eq!(
            *guard.render(&rbac, Some(&viewer), &content, &fallback),
            "access-denied"
        );
        assert_eq!(*guard.render(&rbac, None, &content, &fallback), "access-denied");

        let admin = user(UserRole::Administrator);
        assert_eq!(
            *guard.render(&rbac, Some(&admin), &content, &fallback),
            "settings-page"
        );
    }

    #[test]
    fn test_decision_reason_tokens() {
        assert_eq!(GuardDecision::Granted.reason(), None);
        assert_eq!(
            GuardDecision::NotAuthenticated.reason(),
            Some("not_authenticated")
        );
        assert_eq!(
            GuardDecision::RoleRestricted.reason(),
            Some("role_restricted")
        );
        assert_eq!(
            GuardDecision::InsufficientPermissions.reason(),
            Some("insufficient_permissions")
        );
    }
}
