/// The error type for [`Board::from_rows()`](crate::Board::from_rows), i.e. for a
/// grid that contains a value no tile can have.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidBoard {
    TileTooSmall { row: usize, col: usize, value: u32 },
    TileTooLarge { row: usize, col: usize, value: u32 },
    NotAPowerOfTwo { row: usize, col: usize, value: u32 },
}

impl std::error::Error for InvalidBoard {}

impl std::fmt::Display for InvalidBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidBoard::TileTooSmall { row, col, value } => {
                write!(f, "Tile {} at ({}, {}) is smaller than 2", value, row, col)
            }
            InvalidBoard::TileTooLarge { row, col, value } => write!(
                f,
                "Tile {} at ({}, {}) is larger than {}",
                value,
                row,
                col,
                crate::MAX_TILE
            ),
            InvalidBoard::NotAPowerOfTwo { row, col, value } => {
                write!(f, "Tile {} at ({}, {}) is not a power of two", value, row, col)
            }
        }
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Board`](crate::Board).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardFromStrErr {
    WrongRowCount { count: usize },
    WrongCellCount { row: usize, count: usize },
    InvalidCell { row: usize, col: usize, text: String },
    InvalidBoard(InvalidBoard),
}

impl std::error::Error for BoardFromStrErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardFromStrErr::InvalidBoard(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for BoardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardFromStrErr::WrongRowCount { count } => {
                write!(f, "Expected {} rows, found {}", crate::BOARD_SIZE, count)
            }
            BoardFromStrErr::WrongCellCount { row, count } => write!(
                f,
                "Expected {} cells in row {}, found {}",
                crate::BOARD_SIZE,
                row,
                count
            ),
            BoardFromStrErr::InvalidCell { row, col, text } => {
                write!(f, "Cannot read '{}' at ({}, {}) as a tile", text, row, col)
            }
            BoardFromStrErr::InvalidBoard(_) => write!(f, "The grid is not a valid board"),
        }
    }
}

impl From<InvalidBoard> for BoardFromStrErr {
    fn from(err: InvalidBoard) -> Self {
        BoardFromStrErr::InvalidBoard(err)
    }
}
