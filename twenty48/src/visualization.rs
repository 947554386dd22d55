use crate::{Board, BOARD_SIZE};

const CELL_WIDTH: usize = 6;

/// Draws the board as a box of right-aligned numbers, leaving empty cells blank.
pub fn visualize_board(board: &Board) -> String {
    let horizontal = "─".repeat(CELL_WIDTH + 1);
    let border = |left: &str, middle: &str, right: &str| {
        let mut line = String::from(left);
        for col in 0..BOARD_SIZE {
            if col > 0 {
                line += middle;
            }
            line += &horizontal;
        }
        line += right;
        line
    };

    // Draw the top of the box
    let mut result = border("╭", "┬", "╮");
    for (row, cells) in board.rows().iter().enumerate() {
        if row > 0 {
            result += "\n";
            result += &border("├", "┼", "┤");
        }
        result += "\n│";
        for &value in cells {
            if value == 0 {
                result += &" ".repeat(CELL_WIDTH);
            } else {
                result += &format!("{:>width$}", value, width = CELL_WIDTH);
            }
            result += " │";
        }
    }
    // Draw the bottom of the box
    result += "\n";
    result += &border("╰", "┴", "╯");
    result
}
