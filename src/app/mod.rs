pub(crate) mod logs;
mod progress;
mod runner;

pub(crate) use logs::ExecutionLogs;
pub(crate) use runner::{RunSettings, RunSummary, run_get};
