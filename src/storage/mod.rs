//! Storage backends for the clinic directory

pub mod directory;
pub mod memory;
pub mod seed;

pub use directory::Directory;
pub use memory::MemoryDirectory;
pub use seed::{seed_demo_data, DEMO_PASSWORD};
