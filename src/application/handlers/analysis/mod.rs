//! Analysis command handlers.

mod run_dematel;

pub use run_dematel::{RunCrispDematelCommand, RunDematelCommand, RunDematelHandler};
