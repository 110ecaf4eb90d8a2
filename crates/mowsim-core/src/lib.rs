pub mod config;
pub mod error;
pub mod input;
pub mod lawn;
pub mod mower;
pub mod types;

pub use error::{MowError, Result};
pub use lawn::Lawn;
pub use mower::{FinalState, Mower, MowerKey};
pub use types::{Command, Orientation, Position};
