//! User presentation preferences

use serde::{Deserialize, Serialize};

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserPreferences {
    /// Theme preference
    #[serde(default)]
    pub theme: Theme,
    /// Preferred language tag (e.g. "en", "pt-BR"); display-layer concern only
    pub language: Option<String>,
    /// Email notifications enabled
    #[serde(default)]
    pub notifications_enabled: bool,
}

/// Theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
    /// Follow the system setting
    System,
}
