//! Module interface traits and types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::modules::error::{ModuleError, ValidationError};

/// Unified interface for all execution modules
#[async_trait]
pub trait ExecutionModule: Send + Sync {
    /// Module name (e.g., "glassfish_domain")
    fn name(&self) -> &'static str;

    /// Module version
    fn version(&self) -> &'static str;

    /// Supported platforms
    fn supported_platforms(&self) -> &[Platform];

    /// Execute the module with given arguments
    async fn execute(
        &self,
        args: &ModuleArgs,
        context: &ExecutionContext,
    ) -> Result<ModuleResult, ModuleError>;

    /// Validate module arguments before execution
    fn validate_args(&self, args: &ModuleArgs) -> Result<(), ValidationError>;

    /// Check if module operation would make changes (dry-run)
    async fn check_mode(
        &self,
        args: &ModuleArgs,
        context: &ExecutionContext,
    ) -> Result<ModuleResult, ModuleError>;

    /// Get module documentation
    fn documentation(&self) -> ModuleDocumentation;
}

/// Module execution arguments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleArgs {
    /// Direct module arguments
    pub args: HashMap<String, serde_json::Value>,
    /// Special parameters
    pub special: SpecialParameters,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecialParameters {
    pub check_mode: bool,
}

/// Module execution context
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub host_info: HostInfo,
    pub working_directory: PathBuf,
    pub environment: HashMap<String, String>,
    pub check_mode: bool,
    pub verbosity: u8,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            host_info: HostInfo::detect(),
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/")),
            environment: std::env::vars().collect(),
            check_mode: false,
            verbosity: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HostInfo {
    pub hostname: String,
    pub platform: Platform,
    pub architecture: String,
    pub os_family: String,
}

impl HostInfo {
    pub fn detect() -> Self {
        let hostname = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "unknown".to_string());

        let platform = if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux // Default fallback
        };

        Self {
            hostname,
            platform,
            architecture: std::env::consts::ARCH.to_string(),
            os_family: std::env::consts::FAMILY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    MacOS,
    Windows,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Linux => write!(f, "linux"),
            Platform::MacOS => write!(f, "macos"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}

/// Module execution result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleResult {
    pub changed: bool,
    pub failed: bool,
    pub msg: Option<String>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub rc: Option<i32>,
    pub results: HashMap<String, serde_json::Value>,
    pub warnings: Vec<String>,
}

impl ModuleResult {
    /// An ok result that made no changes
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            failed: false,
            msg: None,
            stdout: None,
            stderr: None,
            rc: Some(0),
            results: HashMap::new(),
            warnings: Vec::new(),
        }
    }

    /// An ok result that made changes
    pub fn changed() -> Self {
        Self {
            changed: true,
            ..Self::unchanged()
        }
    }
}

/// Module documentation
#[derive(Debug, Clone)]
pub struct ModuleDocumentation {
    pub description: String,
    pub arguments: Vec<ArgumentSpec>,
    pub examples: Vec<String>,
    pub return_values: Vec<ReturnValueSpec>,
}

#[derive(Debug, Clone)]
pub struct ArgumentSpec {
    pub name: String,
    pub description: String,
    pub required: bool,
    pub argument_type: String,
    pub default: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReturnValueSpec {
    pub name: String,
    pub description: String,
    pub returned: String,
    pub value_type: String,
}
