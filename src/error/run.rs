use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to build runtime: {source}")]
    RuntimeBuildFailed {
        #[source]
        source: std::io::Error,
    },
    #[error("Thread #{worker} did not complete: {source}")]
    WorkerJoinFailed {
        worker: usize,
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("Failed to set up thread #{worker}: {source}")]
    WorkerSetupFailed {
        worker: usize,
        #[source]
        source: super::TemplateError,
    },
    #[error("Failed to prepare execution logs in '{path}': {source}")]
    LogSetupFailed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
