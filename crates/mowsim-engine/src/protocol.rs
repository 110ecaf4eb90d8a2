use mowsim_core::{Command, MowerKey};

// ─── Worker → coordinator ─────────────────────────────────────────────────

/// Messages a mower worker sends on the shared request channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Request {
    /// Ask the coordinator to apply one command. The worker then waits for
    /// an [`Ack`] before sending anything else.
    Step { key: MowerKey, command: Command },
    /// The worker has no commands left. Always the last message it sends.
    Done { key: MowerKey },
}

impl Request {
    pub(crate) fn key(&self) -> MowerKey {
        match self {
            Request::Step { key, .. } | Request::Done { key } => *key,
        }
    }
}

// ─── Coordinator → worker ─────────────────────────────────────────────────

/// Acknowledgment that the last step of `key` has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ack {
    pub key: MowerKey,
}
