use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use evidence_authz::authz::{Actor, Policy, PolicyEvaluator, PolicyRegistry};
use evidence_authz::models::Resource;

#[derive(Parser, Debug)]
#[command(author, version, about = "evidence-authz policy tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one decision from JSON snapshots
    Check {
        /// File holding the actor, e.g. {"id": "...", "role": "analyst", "is_active": true}
        #[arg(long)]
        actor: PathBuf,
        /// Resource kind, e.g. evidence
        #[arg(long)]
        kind: String,
        /// Action name, e.g. update
        #[arg(long)]
        action: String,
        /// File holding the resource snapshot, tagged with "kind"
        #[arg(long)]
        resource: PathBuf,
    },
    /// Print policy tables, optionally for a single kind
    Policies { kind: Option<String> },
}

fn main() -> anyhow::Result<ExitCode> {
    if dotenvy::dotenv().is_err() {
        let crate_env = Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
        let _ = dotenvy::from_path(crate_env);
    }

    let cli = Cli::parse();
    let registry = PolicyRegistry::standard().context("failed to build policy tables")?;

    match cli.command {
        Commands::Check {
            actor,
            kind,
            action,
            resource,
        } => {
            let actor: Actor = read_json(&actor)?;
            let resource: Resource = read_json(&resource)?;
            let decision = registry.authorize(&actor, &kind, &action, &resource);

            match decision.reason {
                None => {
                    println!("allowed");
                    Ok(ExitCode::SUCCESS)
                }
                Some(reason) => {
                    println!("denied ({})", reason);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Policies { kind } => {
            match kind {
                Some(kind) => {
                    let policy = registry
                        .get(&kind)
                        .with_context(|| format!("no policy for resource kind {kind}"))?;
                    print_policy(policy);
                }
                None => {
                    for kind in registry.kinds() {
                        if let Some(policy) = registry.get(kind.as_str()) {
                            print_policy(policy);
                        }
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut de = serde_json::Deserializer::from_str(&raw);
    serde_path_to_error::deserialize(&mut de)
        .with_context(|| format!("invalid snapshot in {}", path.display()))
}

fn print_policy(policy: &Policy) {
    println!("[{}]", policy.kind());
    for action in policy.actions() {
        let clauses = policy.rule(action).unwrap_or_default();
        for (i, clause) in clauses.iter().enumerate() {
            let label = if i == 0 { action } else { "" };
            let joiner = if i == 0 { " " } else { "∨" };
            println!("  {:<16} {} {}", label, joiner, clause);
        }
    }
    println!();
}
