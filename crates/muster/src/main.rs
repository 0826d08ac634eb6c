//! Muster - expand SLURM node lists into explicit hostnames.

use clap::Parser;
use miette::{miette, IntoDiagnostic, Result};
use muster_cli::Args;
use muster_slurm::env::{job_nodelist, NODELIST_VAR};
use muster_slurm::nodelist::expand;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up tracing
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Explicit argument wins; otherwise read the job environment.
    let raw = match args.nodelist {
        Some(list) => list,
        None => job_nodelist()
            .ok_or_else(|| miette!("no node list given and {} is not set", NODELIST_VAR))?,
    };

    tracing::debug!("expanding node list: {}", raw);
    let nodes = expand(&raw).into_diagnostic()?;

    if args.json {
        println!("{}", serde_json::to_string(&nodes).into_diagnostic()?);
    } else {
        for node in &nodes {
            println!("{}", node);
        }
    }

    Ok(())
}
