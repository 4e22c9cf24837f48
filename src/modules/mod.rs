//! Execution modules for GlassFish server administration

pub mod error;
pub mod glassfish;
pub mod interface;
pub mod registry;

// Re-export commonly used types
pub use error::*;
pub use interface::*;
pub use registry::ModuleRegistry;
