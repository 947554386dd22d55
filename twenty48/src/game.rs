use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::{Board, Direction, GameConfig};

/// A tile that was placed on the board by [`Game::spawn_tile()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// What happened during [`Game::apply_move()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Did sliding the tiles change the board?
    pub changed: bool,
    /// The tile added after sliding, if any.
    pub spawned: Option<Spawn>,
}

/// A running game: the board, the score and a single level of undo.
///
/// The score counts the moves that changed the board.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    score: u32,
    /// The board from right before the last move.
    undo_snapshot: Option<Board>,
    rng: StdRng,
    config: GameConfig,
}

impl Game {
    /// Starts a game with two random tiles.
    ///
    /// Panics if `config.four_probability` is not between 0 and 1.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut game = Self::from_board(Board::empty(), config, seed);
        game.reset();
        game
    }

    /// Continues a game from an existing board, with a score of 0 and nothing to undo.
    pub fn from_board(board: Board, config: GameConfig, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&config.four_probability));
        Self {
            board,
            score: 0,
            undo_snapshot: None,
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn undo_snapshot(&self) -> Option<&Board> {
        self.undo_snapshot.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Clears the board, score and undo snapshot, then spawns two tiles.
    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.score = 0;
        self.undo_snapshot = None;
        self.spawn_tile();
        self.spawn_tile();
        debug!(board = %self.board, "Reset");
    }

    /// Puts a 2 or a 4 on a uniformly chosen empty cell.
    ///
    /// Does nothing if the board is full.
    pub fn spawn_tile(&mut self) -> Option<Spawn> {
        let &(row, col) = self.board.empty_cells().choose(&mut self.rng)?;
        let value = if self.rng.gen_bool(self.config.four_probability) {
            4
        } else {
            2
        };
        self.board.set(row, col, value);
        trace!(row, col, value, "Spawned tile");
        Some(Spawn { row, col, value })
    }

    /// Slides all tiles in `direction`, then spawns a new tile.
    ///
    /// The board before the move is kept for [`Self::undo()`], even if the
    /// move turns out to change nothing. When nothing changed, the score stays
    /// the same and no tile is spawned, unless
    /// [`GameConfig::spawn_on_unchanged_move`] is set.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        self.undo_snapshot = Some(self.board);
        self.board = self.board.slide(direction);

        let changed = Some(&self.board) != self.undo_snapshot.as_ref();
        let spawned = if changed || self.config.spawn_on_unchanged_move {
            self.spawn_tile()
        } else {
            None
        };
        if changed {
            self.score += 1;
        }
        debug!(%direction, changed, score = self.score, "Move");
        MoveOutcome { changed, spawned }
    }

    /// Restores the board from right before the last move.
    ///
    /// The score is not touched, and the snapshot is kept, so undoing twice is
    /// the same as undoing once. Returns `false` if there was no move to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_snapshot {
            Some(snapshot) => {
                self.board = snapshot;
                debug!(score = self.score, "Undo");
                true
            }
            None => false,
        }
    }
}
