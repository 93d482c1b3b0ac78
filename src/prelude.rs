//! Commonly used types and utilities for ease of import.

pub use crate::{Board, Direction, GameEngine, GameStatus, MoveOutcome, Tile};

#[cfg(feature = "std")]
pub use crate::{draw, init_logging, read_command, Command};
