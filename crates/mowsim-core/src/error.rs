use crate::types::Position;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MowError {
    #[error("invalid lawn dimensions: x={x}, y={y}")]
    InvalidLawnDimension { x: i32, y: i32 },

    #[error("position {0} is outside the lawn")]
    PositionOutsideLawn(Position),

    #[error("position {0} is already occupied")]
    AlreadyOccupiedPosition(Position),

    #[error("input is empty")]
    EmptyInput,

    #[error("line 1: expected lawn dimensions '<x> <y>'")]
    MissingLawnDimensions,

    #[error("line 1: lawn dimensions must be numbers")]
    LawnDimensionsNotNumbers,

    #[error("line {line}: incomplete mower definition")]
    IncompleteMowerDefinition { line: usize },

    #[error("line {line}: invalid mower coordinates or orientation")]
    InvalidMowerCoordinates { line: usize },

    #[error("line {line}: invalid command '{found}' (expected L, R or F)")]
    InvalidCommand { line: usize, found: char },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl MowError {
    /// True for errors raised while placing mowers or sizing the lawn, as
    /// opposed to errors in the textual input itself.
    pub fn is_placement(&self) -> bool {
        matches!(
            self,
            MowError::InvalidLawnDimension { .. }
                | MowError::PositionOutsideLawn(_)
                | MowError::AlreadyOccupiedPosition(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MowError>;
