use crate::error::Result;
use crate::lawn::Lawn;
use crate::types::{Command, Orientation, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// MowerKey
// ---------------------------------------------------------------------------

/// Identifier of a mower, assigned from its 1-based position in the input.
///
/// Rendered as `mower-<n>` and ordered by `n`, so `mower-2` sorts before
/// `mower-10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MowerKey(usize);

impl MowerKey {
    /// Key for the mower at zero-based input index `index`.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    pub fn number(self) -> usize {
        self.0
    }
}

impl fmt::Display for MowerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mower-{}", self.0)
    }
}

impl Serialize for MowerKey {
    fn serialize<S: serde::Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// FinalState
// ---------------------------------------------------------------------------

/// Snapshot of a mower once its command stream is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalState {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
}

impl fmt::Display for FinalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.orientation)
    }
}

// ---------------------------------------------------------------------------
// Mower
// ---------------------------------------------------------------------------

/// A positioned, oriented mower with a fixed command sequence.
///
/// The mower does not hold a reference to its lawn; every operation that
/// touches occupancy takes the lawn it was placed on. While a mower exists
/// its current position is marked occupied on that lawn.
#[derive(Debug, Clone)]
pub struct Mower {
    key: MowerKey,
    position: Position,
    orientation: Orientation,
    commands: Vec<Command>,
}

impl Mower {
    /// Place a new mower on `lawn`, claiming its starting cell.
    ///
    /// Fails with `PositionOutsideLawn` or `AlreadyOccupiedPosition` and
    /// leaves the lawn untouched if the cell cannot be claimed.
    pub fn place(
        key: MowerKey,
        position: Position,
        orientation: Orientation,
        commands: Vec<Command>,
        lawn: &mut Lawn,
    ) -> Result<Self> {
        lawn.occupy(position)?;
        Ok(Self {
            key,
            position,
            orientation,
            commands,
        })
    }

    pub fn key(&self) -> MowerKey {
        self.key
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn turn_right(&mut self) {
        self.orientation = self.orientation.right();
    }

    pub fn turn_left(&mut self) {
        self.orientation = self.orientation.left();
    }

    /// Advance one cell along the current heading.
    ///
    /// Stays in place when the next cell is outside the lawn or occupied and
    /// returns `Ok(false)`. Otherwise the current cell is freed before the
    /// next one is claimed, and `Ok(true)` is returned.
    pub fn move_forward(&mut self, lawn: &mut Lawn) -> Result<bool> {
        let Some(next) = self.position.step(self.orientation) else {
            return Ok(false);
        };
        if !lawn.is_inside(next) || lawn.is_occupied(next) {
            return Ok(false);
        }

        lawn.free(self.position);
        self.position = next;
        lawn.occupy(next)?;
        Ok(true)
    }

    /// Apply a single command. Returns whether the mower's position changed.
    pub fn apply(&mut self, command: Command, lawn: &mut Lawn) -> Result<bool> {
        match command {
            Command::Left => {
                self.turn_left();
                Ok(false)
            }
            Command::Right => {
                self.turn_right();
                Ok(false)
            }
            Command::Forward => self.move_forward(lawn),
        }
    }

    pub fn snapshot(&self) -> FinalState {
        FinalState {
            x: self.position.x,
            y: self.position.y,
            orientation: self.orientation,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
