//! Authentication and authorization
//!
//! RBAC role table and predicates, the view guard, and the session
//! lifecycle.

pub mod guard;
pub mod rbac;
pub mod session;

pub use guard::{Guard, GuardDecision};
pub use rbac::{Permission, PermissionCheck, RbacSystem, Role};
pub use session::{SessionManager, SessionStore};
