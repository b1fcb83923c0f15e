//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against a payload loaded from disk.

pub mod config;
pub mod flashback;
pub mod gallery;
pub mod present;
pub mod timeline;

// Re-export execute functions for convenience
pub use self::config::execute as config;
pub use flashback::execute as flashback;
pub use gallery::execute as gallery;
pub use timeline::execute as timeline;
