//! Staff user models

pub mod preferences;
pub mod types;

#[cfg(test)]
mod tests;

pub use preferences::{Theme, UserPreferences};
pub use types::{User, UserRole, UserStatus, UserUpdate};
