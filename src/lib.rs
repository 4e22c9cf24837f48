//! GlassFish Modules - idempotent asadmin administration
//!
//! This crate provides execution modules that manage a GlassFish application
//! server through its `asadmin` command-line tool: domain provisioning and
//! cluster-config system property reconciliation.

pub mod modules;

pub use modules::ModuleRegistry;
