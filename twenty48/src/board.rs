use std::str::FromStr;

use crate::{BoardFromStrErr, Direction, InvalidBoard};

pub const BOARD_SIZE: usize = 4;

/// The largest tile a board may hold.
///
/// Two tiles of this value never merge, so no move can exceed it.
pub const MAX_TILE: u32 = 1 << 30;

/// A snapshot of the grid.
///
/// Cells are addressed as `(row, col)`, with `(0, 0)` in the top left corner.
/// A value of `0` is an empty cell, every other value is a tile, i.e. a power
/// of two that is at least 2.
//
// Every constructor checks the tile invariant, and `slide()` preserves it,
// so the other methods can rely on it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[u32; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a board from a row-major grid, rejecting values that can't be tiles.
    pub fn from_rows(rows: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, InvalidBoard> {
        for (row, cells) in rows.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                check_tile(row, col, value)?;
            }
        }
        Ok(Self { cells: rows })
    }

    /// The value at the given cell, `0` if it's empty.
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        debug_assert!(check_tile(row, col, value).is_ok());
        self.cells[row][col] = value;
    }

    pub fn rows(&self) -> &[[u32; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// The coordinates of all empty cells, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value == 0 {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    pub fn count_tiles(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.count_tiles() == BOARD_SIZE * BOARD_SIZE
    }

    /// The highest tile on the board, `0` for an empty board.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Pushes every tile as far as possible in the given direction, merging
    /// equal neighbours. No new tile is inserted.
    ///
    /// Each row (for left/right) or column (for up/down) is resolved on its
    /// own, starting from the edge the tiles move towards:
    /// - empty cells are skipped over,
    /// - a tile equal to the tile ahead of it merges into it, doubling its value,
    /// - a tile that was created by a merge does not merge again in the same move,
    /// - two [`MAX_TILE`] tiles stay side by side instead of merging.
    ///
    /// ```
    /// # use twenty48::{board, Direction};
    /// let before = board!("2 2 2 2 / 2 0 0 4 / 2 4 0 0 / 0 0 0 0");
    /// let after = board!("4 4 0 0 / 2 4 0 0 / 2 4 0 0 / 0 0 0 0");
    /// assert_eq!(before.slide(Direction::Left), after);
    /// ```
    pub fn slide(&self, direction: Direction) -> Board {
        let mut result = Board::empty();
        for lane in 0..BOARD_SIZE {
            let mut line = [0; BOARD_SIZE];
            for (k, value) in line.iter_mut().enumerate() {
                let (row, col) = line_position(direction, lane, k);
                *value = self.cells[row][col];
            }
            for (k, value) in merge_line(line).into_iter().enumerate() {
                let (row, col) = line_position(direction, lane, k);
                result.cells[row][col] = value;
            }
        }
        result
    }

    /// Would moving in this direction change anything?
    pub fn can_move(&self, direction: Direction) -> bool {
        self.slide(direction) != *self
    }

    /// Is there any direction that changes the board?
    ///
    /// If not, the game is stuck.
    pub fn has_moves(&self) -> bool {
        Direction::ALL.into_iter().any(|d| self.can_move(d))
    }
}

fn check_tile(row: usize, col: usize, value: u32) -> Result<(), InvalidBoard> {
    match value {
        0 => Ok(()),
        1 => Err(InvalidBoard::TileTooSmall { row, col, value }),
        v if v > MAX_TILE => Err(InvalidBoard::TileTooLarge { row, col, value }),
        v if !v.is_power_of_two() => Err(InvalidBoard::NotAPowerOfTwo { row, col, value }),
        _ => Ok(()),
    }
}

// The cell at index `k` of a lane, counting from the edge that tiles move towards.
fn line_position(direction: Direction, lane: usize, k: usize) -> (usize, usize) {
    let from_edge = match direction.delta() {
        (-1, _) | (_, -1) => k,
        _ => BOARD_SIZE - 1 - k,
    };
    match direction.delta() {
        (0, _) => (lane, from_edge),
        _ => (from_edge, lane),
    }
}

// Compacts a line towards index 0, merging each pair of equal tiles below
// MAX_TILE at most once.
fn merge_line(line: [u32; BOARD_SIZE]) -> [u32; BOARD_SIZE] {
    let mut merged = [0; BOARD_SIZE];
    let mut len = 0;
    // Whether merged[len - 1] can still absorb an equal tile
    let mut open = false;
    for value in line.into_iter().filter(|&v| v != 0) {
        if open && value < MAX_TILE && merged[len - 1] == value {
            merged[len - 1] = value * 2;
            open = false;
        } else {
            merged[len] = value;
            len += 1;
            open = true;
        }
    }
    merged
}

impl TryFrom<[[u32; BOARD_SIZE]; BOARD_SIZE]> for Board {
    type Error = InvalidBoard;

    fn try_from(rows: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, Self::Error> {
        Board::from_rows(rows)
    }
}

impl FromStr for Board {
    type Err = BoardFromStrErr;

    /// Rows are separated by `/` or newlines, cells by whitespace.
    /// Empty cells may be written as `0` or `.`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .trim()
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .collect();
        if lines.len() != BOARD_SIZE {
            return Err(BoardFromStrErr::WrongRowCount { count: lines.len() });
        }
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in lines.into_iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != BOARD_SIZE {
                return Err(BoardFromStrErr::WrongCellCount {
                    row,
                    count: tokens.len(),
                });
            }
            for (col, token) in tokens.into_iter().enumerate() {
                rows[row][col] = match token {
                    "." => 0,
                    _ => token.parse().map_err(|_| BoardFromStrErr::InvalidCell {
                        row,
                        col,
                        text: String::from(token),
                    })?,
                };
            }
        }
        Ok(Board::from_rows(rows)?)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::visualize_board(self))
    }
}

/// Shorthand for writing out a board.
///
/// This macro is just calling the [`FromStr`] instance of [`Board`].
/// ```
/// # use twenty48::board;
/// let b = board!("2 . . 4 / . . . . / . . . . / . . 8 .");
/// assert_eq!(b.get(0, 3), 4);
/// assert_eq!(b.get(3, 2), 8);
/// ```
#[macro_export]
macro_rules! board {
    ($rs:literal) => {
        <$crate::Board as std::str::FromStr>::from_str($rs)
            .expect("Invalid board given to board! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use board;
