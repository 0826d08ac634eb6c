//! SLURM scheduler environment adapter.
//!
//! The expander itself never touches the process environment; this module
//! is the one place the raw node-list string is fetched from it.

use std::env;

/// Variable SLURM sets inside an allocation with the compact node list.
pub const NODELIST_VAR: &str = "SLURM_JOB_NODELIST";

/// Spelling used by SLURM releases before 2.x.
const NODELIST_VAR_LEGACY: &str = "SLURM_NODELIST";

/// Get the compact node list of the current job (e.g. `node[01-04]`).
///
/// Returns `None` when neither variable is set, i.e. when not running
/// under SLURM.
pub fn job_nodelist() -> Option<String> {
    env::var(NODELIST_VAR)
        .or_else(|_| {
            tracing::debug!("{} not set, trying {}", NODELIST_VAR, NODELIST_VAR_LEGACY);
            env::var(NODELIST_VAR_LEGACY)
        })
        .ok()
}
