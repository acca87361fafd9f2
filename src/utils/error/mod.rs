//! Error handling for the clinic core

mod helpers;
mod types;

pub use types::{ClinicError, Result};
