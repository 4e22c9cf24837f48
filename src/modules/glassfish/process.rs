//! Subprocess execution for asadmin invocations

use tokio::process::Command;
use tracing::debug;

use crate::modules::error::ModuleError;
use crate::modules::interface::ExecutionContext;

/// Captured output of one asadmin run
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub rc: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.rc == 0
    }
}

/// Run one argument vector to completion and capture its output.
///
/// The first element is the program, the rest are passed as discrete
/// arguments; nothing goes through a shell. With `check_rc` set, a non-zero
/// exit becomes a `ToolFailed` error carrying the exit code and stderr.
pub async fn run_command(
    argv: &[String],
    context: &ExecutionContext,
    check_rc: bool,
) -> Result<CommandOutput, ModuleError> {
    let (program, rest) = argv.split_first().ok_or_else(|| ModuleError::InvalidArgs {
        message: "Empty command".to_string(),
    })?;

    debug!(command = %argv.join(" "), "running asadmin command");

    let mut cmd = Command::new(program);
    cmd.args(rest);
    cmd.current_dir(&context.working_directory);
    for (key, value) in &context.environment {
        cmd.env(key, value);
    }

    let output = cmd
        .output()
        .await
        .map_err(|e| ModuleError::ExecutionFailed {
            message: format!("failed to run {program}: {e}"),
        })?;

    let result = CommandOutput {
        rc: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    };

    if check_rc && !result.success() {
        return Err(ModuleError::ToolFailed {
            command: argv.join(" "),
            rc: result.rc,
            stderr: result.stderr,
        });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn captures_stdout_and_exit_code() {
        let context = ExecutionContext::default();
        let out = run_command(&argv(&["echo", "hello"]), &context, true)
            .await
            .unwrap();
        assert_eq!(out.rc, 0);
        assert!(out.stdout.contains("hello"));
    }

    #[tokio::test]
    async fn nonzero_exit_without_check_rc_is_returned() {
        let context = ExecutionContext::default();
        let out = run_command(&argv(&["false"]), &context, false).await.unwrap();
        assert!(!out.success());
    }

    #[tokio::test]
    async fn nonzero_exit_with_check_rc_is_fatal() {
        let context = ExecutionContext::default();
        let err = run_command(&argv(&["false"]), &context, true)
            .await
            .unwrap_err();
        match err {
            ModuleError::ToolFailed { rc, .. } => assert_ne!(rc, 0),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn missing_binary_is_execution_failure() {
        let context = ExecutionContext::default();
        let err = run_command(
            &argv(&["/nonexistent/asadmin", "list-clusters"]),
            &context,
            false,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ModuleError::ExecutionFailed { .. }));
    }

    #[tokio::test]
    async fn empty_argv_is_rejected() {
        let context = ExecutionContext::default();
        let err = run_command(&[], &context, false).await.unwrap_err();
        assert!(matches!(err, ModuleError::InvalidArgs { .. }));
    }
}
