use crate::common::Tile;

pub const GRID_SIZE: usize = 4;
pub const TARGET_TILE: Tile = 2048;
pub const STARTING_TILES: usize = 2;
pub const STARTING_TILE: Tile = 2;
/// One spawn in this many is a 4 instead of a 2.
pub const FOUR_SPAWN_ODDS: u32 = 10;
