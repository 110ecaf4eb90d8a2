//! Parser for the textual simulation input.
//!
//! ```text
//! 5 5          <- far corner of the lawn
//! 1 2 N        <- mower position and heading
//! LFLFLFLFF    <- mower commands
//! 3 3 E
//! FFRFFRFRRF
//! ```
//!
//! The parser only checks the shape of the input. Lawn dimensions and mower
//! placement are validated when the lawn is built.

use crate::error::{MowError, Result};
use crate::types::{Command, Orientation, Position};
use std::path::Path;

/// One mower as described in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MowerInput {
    pub position: Position,
    pub orientation: Orientation,
    pub commands: Vec<Command>,
}

/// The parsed input: lawn far corner plus mowers in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawnInput {
    pub far_corner: Position,
    pub mowers: Vec<MowerInput>,
}

/// Read and parse an input file.
pub fn read_input(path: &Path) -> Result<LawnInput> {
    let text = std::fs::read_to_string(path)?;
    parse_input(&text)
}

pub fn parse_input(text: &str) -> Result<LawnInput> {
    let lines: Vec<&str> = text.lines().collect();

    let first = match lines.first() {
        Some(l) if !l.trim().is_empty() => *l,
        _ => return Err(MowError::EmptyInput),
    };
    let far_corner = parse_far_corner(first)?;

    let mut mowers = Vec::new();
    let mut i = 1;
    while i < lines.len() {
        // 1-based line numbers of the position line and its command line
        let pos_line = i + 1;
        let cmd_line = i + 2;

        let (position, orientation) = parse_placement(lines[i], pos_line)?;
        let Some(commands) = lines.get(i + 1) else {
            return Err(MowError::IncompleteMowerDefinition { line: cmd_line });
        };
        let commands = parse_commands(commands, cmd_line)?;

        mowers.push(MowerInput {
            position,
            orientation,
            commands,
        });
        i += 2;
    }

    Ok(LawnInput { far_corner, mowers })
}

fn parse_far_corner(line: &str) -> Result<Position> {
    let mut tokens = line.split_whitespace();
    let (Some(x), Some(y)) = (tokens.next(), tokens.next()) else {
        return Err(MowError::MissingLawnDimensions);
    };
    match (x.parse::<i32>(), y.parse::<i32>()) {
        (Ok(x), Ok(y)) => Ok(Position::new(x, y)),
        _ => Err(MowError::LawnDimensionsNotNumbers),
    }
}

fn parse_placement(line: &str, line_no: usize) -> Result<(Position, Orientation)> {
    if line.trim().is_empty() {
        return Err(MowError::IncompleteMowerDefinition { line: line_no });
    }
    let invalid = || MowError::InvalidMowerCoordinates { line: line_no };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y, o] = tokens.as_slice() else {
        return Err(invalid());
    };
    let x = x.parse::<i32>().map_err(|_| invalid())?;
    let y = y.parse::<i32>().map_err(|_| invalid())?;
    let orientation = Orientation::from_letter(o).ok_or_else(invalid)?;
    Ok((Position::new(x, y), orientation))
}

fn parse_commands(line: &str, line_no: usize) -> Result<Vec<Command>> {
    line.trim()
        .chars()
        .map(|c| {
            Command::from_char(c).ok_or(MowError::InvalidCommand {
                line: line_no,
                found: c,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
