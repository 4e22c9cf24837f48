//! Command builders for the asadmin administration tool
//!
//! Every asadmin invocation the modules make is assembled here, as a plain
//! argument vector. The builders are pure: the same config always yields the
//! same vector, and no quoting or escaping is applied (the process runner
//! passes arguments directly, never through a shell).

use serde_json::Value;

use crate::modules::error::ValidationError;
use crate::modules::interface::ModuleArgs;

pub const DEFAULT_ASADMIN_PATH: &str = "/opt/glassfish3/glassfish/bin/asadmin";
pub const DEFAULT_USER: &str = "admin";
pub const DEFAULT_PASSWORD_FILE: &str = "/home/glassfish/.glassfishlogin";
pub const DEFAULT_PORT: &str = "4848";
pub const DEFAULT_DOMAIN: &str = "domain1";

/// Connection settings shared by every asadmin command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsadminConfig {
    pub asadmin_path: String,
    pub user: String,
    pub password_file: Option<String>,
    pub port: Option<String>,
}

impl Default for AsadminConfig {
    fn default() -> Self {
        Self {
            asadmin_path: DEFAULT_ASADMIN_PATH.to_string(),
            user: DEFAULT_USER.to_string(),
            password_file: Some(DEFAULT_PASSWORD_FILE.to_string()),
            port: Some(DEFAULT_PORT.to_string()),
        }
    }
}

impl AsadminConfig {
    /// Build the config from module arguments.
    ///
    /// An absent key takes its default; an explicit JSON `null` disables the
    /// corresponding flag entirely.
    pub fn from_args(args: &ModuleArgs) -> Self {
        Self {
            asadmin_path: args
                .args
                .get("asadmin_path")
                .and_then(|v| v.as_str())
                .unwrap_or(DEFAULT_ASADMIN_PATH)
                .to_string(),
            user: args
                .args
                .get("glassfish_user")
                .and_then(|v| v.as_str())
                .unwrap_or(DEFAULT_USER)
                .to_string(),
            password_file: optional_arg(args, "glassfish_password_file", DEFAULT_PASSWORD_FILE),
            port: optional_arg(args, "glassfish_port", DEFAULT_PORT),
        }
    }

    /// `asadmin --user U [--passwordfile F] [--port P]`
    fn base_args(&self) -> Vec<String> {
        let mut argv = vec![self.asadmin_path.clone()];
        argv.push("--user".to_string());
        argv.push(self.user.clone());
        if let Some(ref password_file) = self.password_file {
            argv.push("--passwordfile".to_string());
            argv.push(password_file.clone());
        }
        if let Some(ref port) = self.port {
            argv.push("--port".to_string());
            argv.push(port.clone());
        }
        argv
    }

    pub fn list_clusters(&self) -> Vec<String> {
        let mut argv = self.base_args();
        argv.push("list-clusters".to_string());
        argv
    }

    /// create-domain places its operation token before the credential flags
    /// and takes `--portbase` instead of `--port`; both quirks belong to
    /// asadmin's own interface.
    pub fn create_domain(&self, domain: &str) -> Vec<String> {
        let mut argv = vec![self.asadmin_path.clone(), "create-domain".to_string()];
        argv.push("--user".to_string());
        argv.push(self.user.clone());
        if let Some(ref password_file) = self.password_file {
            argv.push("--passwordfile".to_string());
            argv.push(password_file.clone());
        }
        if let Some(ref port) = self.port {
            argv.push("--portbase".to_string());
            argv.push(port.clone());
        }
        argv.push(domain.to_string());
        argv
    }

    pub fn start_domain(&self, domain: &str) -> Vec<String> {
        let mut argv = self.base_args();
        argv.push("start-domain".to_string());
        argv.push(domain.to_string());
        argv
    }

    pub fn restart_domain(&self, domain: &str) -> Vec<String> {
        let mut argv = self.base_args();
        argv.push("restart-domain".to_string());
        argv.push(domain.to_string());
        argv
    }

    pub fn enable_secure_admin(&self, domain: &str) -> Vec<String> {
        let mut argv = self.base_args();
        argv.push("enable-secure-admin".to_string());
        argv.push(domain.to_string());
        argv
    }

    pub fn list_system_properties(&self, target: &str) -> Vec<String> {
        let mut argv = self.base_args();
        argv.push("list-system-properties".to_string());
        argv.push(target.to_string());
        argv
    }

    pub fn delete_system_property(&self, target: &str, key: &str) -> Vec<String> {
        let mut argv = self.base_args();
        argv.push("delete-system-property".to_string());
        argv.push("--target".to_string());
        argv.push(target.to_string());
        argv.push(key.to_string());
        argv
    }

    pub fn create_system_properties(&self, target: &str, key: &str, value: &str) -> Vec<String> {
        let mut argv = self.base_args();
        argv.push("create-system-properties".to_string());
        argv.push("--target".to_string());
        argv.push(target.to_string());
        argv.push(format!("{key}={value}"));
        argv
    }
}

/// Validate the connection arguments shared by every module.
///
/// `from_args` would otherwise stringify any JSON value into the argv
/// (`--port true`), so non-conforming types are rejected before anything
/// runs.
pub fn validate_connection_args(args: &ModuleArgs) -> Result<(), ValidationError> {
    for arg in ["asadmin_path", "glassfish_user"] {
        if let Some(value) = args.args.get(arg) {
            if !value.is_string() {
                return Err(ValidationError::InvalidArgValue {
                    arg: arg.to_string(),
                    value: value.to_string(),
                    reason: "must be a string".to_string(),
                });
            }
        }
    }
    if let Some(value) = args.args.get("glassfish_password_file") {
        if !(value.is_string() || value.is_null()) {
            return Err(ValidationError::InvalidArgValue {
                arg: "glassfish_password_file".to_string(),
                value: value.to_string(),
                reason: "must be a string or null".to_string(),
            });
        }
    }
    if let Some(value) = args.args.get("glassfish_port") {
        if !(value.is_string() || value.is_number() || value.is_null()) {
            return Err(ValidationError::InvalidArgValue {
                arg: "glassfish_port".to_string(),
                value: value.to_string(),
                reason: "must be a string, number or null".to_string(),
            });
        }
    }
    Ok(())
}

/// Optional string-or-number argument: absent -> default, JSON null -> None.
fn optional_arg(args: &ModuleArgs, key: &str, default: &str) -> Option<String> {
    match args.args.get(key) {
        None => Some(default.to_string()),
        Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
