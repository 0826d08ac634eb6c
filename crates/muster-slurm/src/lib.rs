//! SLURM node-list handling for muster.
//!
//! Decode the compact node-list strings SLURM hands to a job
//! (e.g. `node[01-03,05]`) into explicit hostname lists.

pub mod env;
pub mod nodelist;

pub use env::job_nodelist;
pub use nodelist::{expand, NodeListError};
