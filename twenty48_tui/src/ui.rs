use ratatui::{prelude::*, widgets::*};
use twenty48::{text_color, tile_color, Board, Rgb, BOARD_SIZE};

use crate::app::App;

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
// A tile plus the gap to its neighbour
const CELL_WIDTH: u16 = TILE_WIDTH + 1;
const CELL_HEIGHT: u16 = TILE_HEIGHT + 1;

pub const BOARD_WIDGET_WIDTH: u16 = CELL_WIDTH * BOARD_SIZE as u16 - 1;
pub const BOARD_WIDGET_HEIGHT: u16 = CELL_HEIGHT * BOARD_SIZE as u16 - 1;

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Draws the grid as colored tiles with their value in the middle.
pub struct BoardWidget<'a> {
    pub board: &'a Board,
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, cells) in self.board.rows().iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                let tile = Rect {
                    x: area.x + col as u16 * CELL_WIDTH,
                    y: area.y + row as u16 * CELL_HEIGHT,
                    width: TILE_WIDTH,
                    height: TILE_HEIGHT,
                };
                let visible = tile.intersection(area);
                if visible.is_empty() {
                    continue;
                }
                let background = to_color(tile_color(value));
                buf.set_style(visible, Style::new().bg(background));
                // Only label tiles that fit completely
                if value == 0 || visible != tile {
                    continue;
                }
                let label = value.to_string();
                let x = tile.x + TILE_WIDTH.saturating_sub(label.len() as u16) / 2;
                buf.set_stringn(
                    x,
                    tile.y + TILE_HEIGHT / 2,
                    label,
                    TILE_WIDTH as usize,
                    Style::new()
                        .fg(to_color(text_color(value)))
                        .bg(background)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}

pub fn ui(frame: &mut Frame, app: &App) {
    let main_layout = Layout::new(
        Direction::Vertical,
        [
            Constraint::Min(0),
            Constraint::Length(BOARD_WIDGET_HEIGHT + 2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ],
    )
    .split(frame.size());

    let board_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(BOARD_WIDGET_WIDTH + 2),
            Constraint::Min(0),
        ])
        .split(main_layout[1])[1];
    let block = Block::new()
        .border_type(BorderType::Rounded)
        .borders(Borders::all())
        .title(" 2048 ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);
    frame.render_widget(
        BoardWidget {
            board: app.game.board(),
        },
        inner,
    );

    let score = Paragraph::new(format!("Score: {}", app.game.score()))
        .alignment(Alignment::Center)
        .style(Style::new().add_modifier(Modifier::BOLD));
    frame.render_widget(score, main_layout[2]);

    let status = Paragraph::new(app.status_line())
        .alignment(Alignment::Center)
        .style(Style::new().fg(Color::DarkGray));
    frame.render_widget(status, main_layout[3]);
}
