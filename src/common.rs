//! Common types for the game: tile values, directions, move outcomes and errors.

use crate::grid::GridError;

/// Value held in a single grid cell. Zero means empty; every non-zero
/// value is a power of two.
pub type Tile = u32;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Result of applying a slide to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Whether the slide changed any cell.
    pub changed: bool,
    /// Sum of the tile values produced by merges during this slide.
    pub score: u32,
    /// Largest tile produced by a merge during this slide (0 if none).
    pub highest_merge: Tile,
}

/// Errors returned by game operations.
#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    /// Underlying grid error (e.g., index out of bounds).
    Grid(GridError),
    /// Attempted to move after the game was won or lost.
    GameFinished,
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        GameError::Grid(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Grid(e) => write!(f, "Grid error: {}", e),
            GameError::GameFinished => write!(f, "Game is already finished"),
        }
    }
}
