use mowsim_core::{MowError, MowerKey};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation setup failed: {0}")]
    Setup(#[from] MowError),

    #[error("applying a step for {key} failed: {source}")]
    Step {
        key: MowerKey,
        #[source]
        source: MowError,
    },

    #[error("step handshake violated: {0}")]
    Protocol(String),

    #[error("all workers disconnected with {pending} mower(s) still unfinished")]
    WorkerVanished { pending: usize },

    #[error("simulation did not finish within {0:?}")]
    DeadlineExceeded(Duration),

    #[error("simulation has already run")]
    AlreadyRan,

    #[error("worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
