//! Shared utilities for the clinic core

pub mod crypto;
pub mod error;
pub mod logging;
