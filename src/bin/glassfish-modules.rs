use anyhow::{Context, Result};
use clap::Parser;
use glassfish_modules::modules::{ExecutionContext, ModuleArgs, ModuleRegistry};
use std::collections::HashMap;
use tokio::io::AsyncReadExt;
use tracing::error;

#[derive(Parser)]
#[command(name = "glassfish-modules")]
#[command(about = "Idempotent GlassFish administration via asadmin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct GlassfishModulesCli {
    /// Module to run (glassfish_domain or glassfish_properties)
    module: String,

    /// Module arguments as a JSON object (@file to read a file, - for stdin)
    #[arg(short, long, default_value = "{}")]
    args: String,

    /// Report what would change without running mutating commands
    #[arg(long)]
    check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = GlassfishModulesCli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let raw_args = if cli.args == "-" {
        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read module arguments from stdin")?;
        buffer
    } else if let Some(path) = cli.args.strip_prefix('@') {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read module arguments from {path}"))?
    } else {
        cli.args.clone()
    };

    let args_map: HashMap<String, serde_json::Value> =
        serde_json::from_str(&raw_args).context("Module arguments must be a JSON object")?;
    let args = ModuleArgs {
        args: args_map,
        special: Default::default(),
    };

    let context = ExecutionContext {
        check_mode: cli.check,
        verbosity: u8::from(cli.verbose),
        ..ExecutionContext::default()
    };

    let registry = ModuleRegistry::with_glassfish_modules();
    match registry.execute_module(&cli.module, &args, &context).await {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            if result.failed {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            error!("Module {} failed: {}", cli.module, e);
            Err(e.into())
        }
    }
}
