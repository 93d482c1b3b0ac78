use crate::{
    board::Board,
    common::{Direction, GameError, MoveOutcome, Tile},
    config::{GRID_SIZE, STARTING_TILE, STARTING_TILES, TARGET_TILE},
};
use rand::Rng;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Snapshot of the overall game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub cells: [[Tile; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub target: Tile,
    pub status: GameStatus,
}

/// Core game logic holding the board, the score and the win/loss status.
pub struct GameEngine {
    board: Board,
    score: u32,
    target: Tile,
    status: GameStatus,
}

impl GameEngine {
    /// Create a new engine with an empty board and the default target tile.
    pub fn new() -> Self {
        Self::with_target(TARGET_TILE)
    }

    /// Create a new engine that is won when a merge produces `target`.
    pub fn with_target(target: Tile) -> Self {
        Self {
            board: Board::new(),
            score: 0,
            target,
            status: GameStatus::InProgress,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accumulated score: the sum of all merged tile values so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The tile value that wins the game.
    pub fn target(&self) -> Tile {
        self.target
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Begin a fresh game: clear the board, reset the score and spawn
    /// the starting tiles.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board = Board::new();
        self.score = 0;
        self.status = GameStatus::InProgress;
        for _ in 0..STARTING_TILES {
            self.board.spawn_value(rng, STARTING_TILE);
        }
    }

    /// Restart mid-game. Same as [`GameEngine::start`]; kept separate so
    /// call sites read as intent.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.start(rng);
    }

    /// Apply one move in `direction`.
    ///
    /// A slide that changes the board scores its merges and spawns one
    /// random tile; a merge reaching the target wins. A slide that
    /// changes nothing is ignored unless the board has no moves left,
    /// which loses.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        direction: Direction,
        rng: &mut R,
    ) -> Result<MoveOutcome, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameFinished);
        }
        let outcome = self.board.slide(direction);
        if outcome.changed {
            self.score += outcome.score;
            self.board.spawn_random(rng);
            if outcome.highest_merge >= self.target {
                self.status = GameStatus::Won;
            }
        } else if !self.board.has_moves() {
            self.status = GameStatus::Lost;
        }
        Ok(outcome)
    }

    /// Generate a snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            cells: *self.board.grid().rows(),
            score: self.score,
            target: self.target,
            status: self.status,
        }
    }

    /// Restore an engine from a previously captured state.
    pub fn from_state(state: GameState) -> Self {
        Self {
            board: Board::from(state.cells),
            score: state.score,
            target: state.target,
            status: state.status,
        }
    }
}
