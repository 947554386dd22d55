use quickcheck::Arbitrary;

use crate::{Board, Direction, BOARD_SIZE, MAX_TILE};

impl Arbitrary for Direction {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Direction::ALL).unwrap()
    }
}

impl Arbitrary for Board {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for cell in rows.iter_mut().flatten() {
            // Roughly a third of the cells stay empty, and small tiles are
            // more common than big ones, so that merges happen often.
            let exponent = u8::arbitrary(g) % 18;
            *cell = match exponent {
                0..=4 => 0,
                5..=9 => 2,
                10..=12 => 4,
                13..=15 => 1 << (exponent - 10),
                16 => MAX_TILE / 2,
                _ => MAX_TILE,
            };
        }
        Board::from_rows(rows).unwrap()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Clear one tile at a time
        let mut smaller_boards = Vec::new();
        for (row, col) in tile_positions(self) {
            let mut smaller = *self;
            smaller.set(row, col, 0);
            smaller_boards.push(smaller);
        }
        Box::new(smaller_boards.into_iter())
    }
}

fn tile_positions(board: &Board) -> Vec<(usize, usize)> {
    let mut positions = Vec::new();
    for (row, cells) in board.rows().iter().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            if value != 0 {
                positions.push((row, col));
            }
        }
    }
    positions
}
