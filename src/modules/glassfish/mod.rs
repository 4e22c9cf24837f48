//! GlassFish asadmin administration modules

pub mod asadmin;
pub mod domain;
pub mod parse;
pub mod process;
pub mod properties;

pub use asadmin::AsadminConfig;
pub use domain::GlassfishDomainModule;
pub use properties::GlassfishPropertiesModule;
