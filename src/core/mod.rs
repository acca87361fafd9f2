//! Core domain types for the clinic

pub mod models;
