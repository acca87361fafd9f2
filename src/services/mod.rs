//! Application services over the directory

pub mod search;
