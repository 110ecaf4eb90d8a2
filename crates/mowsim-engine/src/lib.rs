//! `mowsim-engine`: concurrent driver for the mower simulation.
//!
//! # Architecture
//!
//! ```text
//! Simulator::run
//!     │  spawns one worker task per mower (JoinSet)
//!     ▼
//! worker::drive    ← Step{key, command} ──► shared mpsc request channel
//!     ▲                                           │
//!     │  Ack{key} on the mower's own channel      ▼
//!     └──────────────────────────────── coordinating loop
//!                                         (sole mutator of Lawn + Mowers)
//! ```
//!
//! Each worker emits one command, then waits for its acknowledgment before
//! emitting the next. The coordinating loop applies each command to
//! completion before servicing the next request from any worker, so the
//! occupancy check and update of a move are never interleaved with another
//! mower's move. When a worker runs out of commands it sends `Done` and the
//! mower's final state is recorded.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use mowsim_core::{config::SimConfig, input::parse_input};
//! use mowsim_engine::simulate;
//!
//! let input = parse_input("5 5\n1 2 N\nLFLFLFLFF\n")?;
//! let report = simulate(&input, SimConfig::default()).await?;
//! for (key, state) in &report.mowers {
//!     println!("{key}: {state}");
//! }
//! ```

pub mod error;
pub mod simulator;

pub(crate) mod protocol;
pub(crate) mod worker;

pub use error::SimError;
pub use simulator::{simulate, SimulationReport, Simulator};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, SimError>;
