//! CLI argument parsing for muster.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "muster")]
#[command(about = "Expand SLURM node lists into explicit hostnames")]
pub struct Args {
    /// Node list to expand (default: $SLURM_JOB_NODELIST)
    pub nodelist: Option<String>,

    /// Print the expanded list as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging (set log level to debug)
    #[arg(short, long)]
    pub verbose: bool,
}
