// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use resource_gateway::config::Config;
use resource_gateway::handlers::ToolHandler;
use resource_gateway::kubernetes::create_client;

#[derive(Parser, Debug)]
#[command(name = "resource-gateway", version, about = "Generic access to tenant resources")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create or update a resource from a JSON or YAML document
    Apply {
        /// Path to the document, or "-" for stdin
        #[arg(short = 'f', long = "file")]
        file: String,
    },
    /// Show a single resource
    Get {
        kind: String,
        name: String,
        #[arg(short = 'n', long = "namespace", default_value = "")]
        namespace: String,
    },
    /// Delete a single resource
    Delete {
        kind: String,
        name: String,
        #[arg(short = 'n', long = "namespace", default_value = "")]
        namespace: String,
    },
    /// List resources of a kind
    List {
        kind: String,
        /// Namespace to list in (default: all namespaces)
        #[arg(short = 'n', long = "namespace", default_value = "")]
        namespace: String,
    },
    /// List the tenant types registered in the cluster
    Types,
    /// Describe a type by its CRD name, e.g. "widgets.tenant.dev"
    Type { name: String },
    /// Compare the cluster-scoped kind table against the cluster
    CheckScope,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read a JSON or YAML document and normalize it to JSON
fn read_document(file: &str) -> Result<String> {
    let mut content = String::new();
    if file == "-" {
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read document from stdin")?;
    } else {
        content = std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?;
    }

    let value: serde_yaml::Value = serde_yaml::from_str(&content).context("Failed to parse document")?;
    let json = serde_json::to_string(&value).context("Failed to convert document to JSON")?;
    Ok(json)
}

/// Check the scope table against the live catalog before serving a request.
/// Drift is only logged unless the policy is strict.
async fn verify_scope_table(handler: &ToolHandler, strict: bool) -> Result<()> {
    match handler
        .schemas
        .check_scope_drift(handler.resources.scope_policy())
        .await
    {
        Ok(drift) if strict && !drift.is_empty() => bail!(
            "Scope table disagrees with the cluster for {} kinds (STRICT_SCOPE_POLICY=true)",
            drift.len()
        ),
        Ok(_) => Ok(()),
        Err(e) if strict => Err(e).context("Failed to verify scope table"),
        Err(e) => {
            warn!("Could not verify scope table against the cluster: {}", e);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: tenant_group={}, default_namespace={}, cluster_scoped_kinds={}",
        config.tenant_group,
        config.default_namespace,
        config.cluster_scoped_kinds.len()
    );
    let strict = config.strict_scope_policy;

    let client = create_client().await?;
    let handler = ToolHandler::new(client, config);

    if !matches!(cli.command, Commands::CheckScope) {
        verify_scope_table(&handler, strict).await?;
    }

    let output = match cli.command {
        Commands::Apply { file } => handler.apply_resource(&read_document(&file)?).await?,
        Commands::Get {
            kind,
            name,
            namespace,
        } => handler.get_resource(&kind, &name, &namespace).await?,
        Commands::Delete {
            kind,
            name,
            namespace,
        } => handler.delete_resource(&kind, &name, &namespace).await?,
        Commands::List { kind, namespace } => handler.list_resources(&kind, &namespace).await?,
        Commands::Types => handler.list_types().await?,
        Commands::Type { name } => handler.get_type_detail(&name).await?,
        Commands::CheckScope => {
            let drift = handler
                .schemas
                .check_scope_drift(handler.resources.scope_policy())
                .await?;
            println!("{}", serde_json::to_string(&drift)?);
            if strict && !drift.is_empty() {
                bail!("{} kinds disagree with the cluster", drift.len());
            }
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}
