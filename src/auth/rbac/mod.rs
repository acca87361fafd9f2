//! Role-Based Access Control (RBAC)
//!
//! Static role table plus permission predicates over it.

mod permissions;
mod roles;
mod system;
#[cfg(test)]
mod tests;
mod types;

pub use system::RbacSystem;
pub use types::{Permission, PermissionCheck, Role};
