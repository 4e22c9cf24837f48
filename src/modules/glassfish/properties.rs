//! GlassFish properties module - reconciles cluster-config system properties
//!
//! Observes the current properties with `list-system-properties`, loads the
//! desired state from a `key=value` file, and converges each divergent key.
//! asadmin has no in-place update, so an existing property with the wrong
//! value is deleted and recreated as two sequential commands. Keys present on
//! the server but absent from the file are left alone.

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::info;

use crate::modules::{
    error::{ModuleError, ValidationError},
    glassfish::asadmin::{self, AsadminConfig},
    glassfish::parse::parse_key_value_lines,
    glassfish::process::run_command,
    interface::{
        ArgumentSpec, ExecutionContext, ExecutionModule, ModuleArgs, ModuleDocumentation,
        ModuleResult, Platform, ReturnValueSpec,
    },
};

/// GlassFish properties module - reconciles cluster-config system properties
pub struct GlassfishPropertiesModule;

/// Desired entries that are missing from the observed mapping or present
/// with a different value. Always a subset of the desired keys.
pub fn divergence(
    desired: &HashMap<String, String>,
    observed: &HashMap<String, String>,
) -> HashMap<String, String> {
    desired
        .iter()
        .filter(|(key, value)| observed.get(*key) != Some(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

impl GlassfishPropertiesModule {
    fn required_str<'a>(args: &'a ModuleArgs, arg: &str) -> Result<&'a str, ModuleError> {
        args.args
            .get(arg)
            .and_then(|v| v.as_str())
            .ok_or_else(|| ModuleError::InvalidArgs {
                message: format!("{arg} is required"),
            })
    }

    /// List-and-diff shared by execute and check_mode. Returns the observed
    /// mapping and the divergence against the desired file.
    async fn observe_and_diff(
        args: &ModuleArgs,
        context: &ExecutionContext,
    ) -> Result<
        (
            AsadminConfig,
            String,
            HashMap<String, String>,
            HashMap<String, String>,
        ),
        ModuleError,
    > {
        let config = AsadminConfig::from_args(args);
        let target = Self::required_str(args, "cluster_config")?.to_string();
        let property_file = Self::required_str(args, "property_file")?;

        let listing =
            run_command(&config.list_system_properties(&target), context, true).await?;
        let observed = parse_key_value_lines(&listing.stdout);

        let text = tokio::fs::read_to_string(property_file)
            .await
            .map_err(|e| ModuleError::ExecutionFailed {
                message: format!("failed to read property file {property_file}: {e}"),
            })?;
        let desired = parse_key_value_lines(&text);

        let diff = divergence(&desired, &observed);
        Ok((config, target, observed, diff))
    }

    fn report(diff: HashMap<String, String>, check_mode: bool) -> Result<ModuleResult, ModuleError> {
        let mut result = if diff.is_empty() {
            let mut result = ModuleResult::unchanged();
            result.msg = Some("system properties already converged".to_string());
            result
        } else {
            let mut result = ModuleResult::changed();
            result.msg = Some(if check_mode {
                format!("{} system properties would change", diff.len())
            } else {
                format!("{} system properties updated", diff.len())
            });
            result
        };
        if !diff.is_empty() {
            result
                .results
                .insert("properties".to_string(), serde_json::to_value(&diff)?);
        }
        Ok(result)
    }
}

#[async_trait]
impl ExecutionModule for GlassfishPropertiesModule {
    fn name(&self) -> &'static str {
        "glassfish_properties"
    }

    fn version(&self) -> &'static str {
        "1.0.0"
    }

    fn supported_platforms(&self) -> &[Platform] {
        &[Platform::Linux, Platform::MacOS, Platform::Windows]
    }

    async fn execute(
        &self,
        args: &ModuleArgs,
        context: &ExecutionContext,
    ) -> Result<ModuleResult, ModuleError> {
        let (config, target, observed, diff) = Self::observe_and_diff(args, context).await?;

        for (key, value) in &diff {
            if observed.contains_key(key) {
                // delete-then-recreate is asadmin's update idiom; if the
                // recreate fails the property stays deleted and the run
                // aborts there.
                run_command(&config.delete_system_property(&target, key), context, true).await?;
            }
            run_command(
                &config.create_system_properties(&target, key, value),
                context,
                true,
            )
            .await?;
            info!(%key, %value, %target, "system property set");
        }

        Self::report(diff, false)
    }

    fn validate_args(&self, args: &ModuleArgs) -> Result<(), ValidationError> {
        asadmin::validate_connection_args(args)?;
        for arg in ["cluster_config", "property_file"] {
            match args.args.get(arg) {
                Some(value) if value.is_string() => {}
                Some(value) => {
                    return Err(ValidationError::InvalidArgValue {
                        arg: arg.to_string(),
                        value: value.to_string(),
                        reason: "must be a string".to_string(),
                    })
                }
                None => {
                    return Err(ValidationError::MissingRequiredArg {
                        arg: arg.to_string(),
                    })
                }
            }
        }
        Ok(())
    }

    async fn check_mode(
        &self,
        args: &ModuleArgs,
        context: &ExecutionContext,
    ) -> Result<ModuleResult, ModuleError> {
        let (_, _, _, diff) = Self::observe_and_diff(args, context).await?;
        Self::report(diff, true)
    }

    fn documentation(&self) -> ModuleDocumentation {
        ModuleDocumentation {
            description: "Reconcile GlassFish cluster-config system properties against a property file"
                .to_string(),
            arguments: vec![
                ArgumentSpec {
                    name: "asadmin_path".to_string(),
                    description: "Full path to the asadmin tool.".to_string(),
                    required: false,
                    argument_type: "path".to_string(),
                    default: Some("/opt/glassfish3/glassfish/bin/asadmin".to_string()),
                },
                ArgumentSpec {
                    name: "glassfish_user".to_string(),
                    description: "Administration user name.".to_string(),
                    required: false,
                    argument_type: "str".to_string(),
                    default: Some("admin".to_string()),
                },
                ArgumentSpec {
                    name: "glassfish_password_file".to_string(),
                    description:
                        "File containing AS_ADMIN_PASSWORD=<password>. Pass null to omit the flag."
                            .to_string(),
                    required: false,
                    argument_type: "path".to_string(),
                    default: Some("/home/glassfish/.glassfishlogin".to_string()),
                },
                ArgumentSpec {
                    name: "glassfish_port".to_string(),
                    description: "Administration port. Pass null to omit the flag.".to_string(),
                    required: false,
                    argument_type: "str or int".to_string(),
                    default: Some("4848".to_string()),
                },
                ArgumentSpec {
                    name: "cluster_config".to_string(),
                    description: "Cluster-config whose system properties are managed.".to_string(),
                    required: true,
                    argument_type: "str".to_string(),
                    default: None,
                },
                ArgumentSpec {
                    name: "property_file".to_string(),
                    description: "File of newline-separated key=value pairs describing the desired state."
                        .to_string(),
                    required: true,
                    argument_type: "path".to_string(),
                    default: None,
                },
            ],
            examples: vec![r#"glassfish_properties:
    cluster_config: default_cluster-config
    property_file: /etc/glassfish/app.properties"#
                .to_string()],
            return_values: vec![ReturnValueSpec {
                name: "properties".to_string(),
                description: "The key/value pairs that were created or replaced".to_string(),
                returned: "changed".to_string(),
                value_type: "dict".to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn divergence_reports_new_and_changed_keys() {
        let observed = mapping(&[("a", "1"), ("b", "2")]);
        let desired = mapping(&[("a", "1"), ("b", "3"), ("c", "4")]);
        assert_eq!(
            divergence(&desired, &observed),
            mapping(&[("b", "3"), ("c", "4")])
        );
    }

    #[test]
    fn divergence_is_empty_for_identical_mappings() {
        let state = mapping(&[("a", "1"), ("b", "2")]);
        assert!(divergence(&state, &state).is_empty());
    }

    #[test]
    fn divergence_ignores_observed_only_keys() {
        let observed = mapping(&[("a", "1"), ("stale", "x")]);
        let desired = mapping(&[("a", "1")]);
        assert!(divergence(&desired, &observed).is_empty());
    }

    #[test]
    fn divergence_of_empty_desired_is_empty() {
        let observed = mapping(&[("a", "1")]);
        assert!(divergence(&HashMap::new(), &observed).is_empty());
    }

    #[test]
    fn divergence_is_subset_of_desired() {
        let observed = mapping(&[("a", "0"), ("b", "2")]);
        let desired = mapping(&[("a", "1"), ("c", "3")]);
        let diff = divergence(&desired, &observed);
        assert!(diff.keys().all(|k| desired.contains_key(k)));
    }
}
