use crate::error::{MowError, Result};
use crate::types::Position;
use std::collections::HashSet;

/// A bounded lawn tracking which cells are occupied.
///
/// Usable cells run from `(0, 0)` to `(width, height)` inclusive: the
/// dimensions name the far corner, not a cell count. The lawn only knows
/// whether a cell is taken, not by whom.
#[derive(Debug, Clone)]
pub struct Lawn {
    width: i32,
    height: i32,
    occupied: HashSet<Position>,
}

impl Lawn {
    /// Build a lawn whose far corner is `far_corner`. Both components must be
    /// strictly positive.
    pub fn new(far_corner: Position) -> Result<Self> {
        if far_corner.x <= 0 || far_corner.y <= 0 {
            return Err(MowError::InvalidLawnDimension {
                x: far_corner.x,
                y: far_corner.y,
            });
        }
        Ok(Self {
            width: far_corner.x,
            height: far_corner.y,
            occupied: HashSet::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_inside(&self, position: Position) -> bool {
        (0..=self.width).contains(&position.x) && (0..=self.height).contains(&position.y)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupied.contains(&position)
    }

    /// Claim `position`. Bounds are checked before occupancy, so an
    /// out-of-bounds position always reports `PositionOutsideLawn`.
    pub fn occupy(&mut self, position: Position) -> Result<()> {
        if !self.is_inside(position) {
            return Err(MowError::PositionOutsideLawn(position));
        }
        if !self.occupied.insert(position) {
            return Err(MowError::AlreadyOccupiedPosition(position));
        }
        Ok(())
    }

    /// Release `position`. Freeing a free cell is a no-op.
    pub fn free(&mut self, position: Position) {
        self.occupied.remove(&position);
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
