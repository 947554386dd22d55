use tracing::info;
use twenty48::{Command, Game};

/// The game plus everything the screen needs to know beyond the board.
pub struct App {
    pub game: Game,
    pub should_quit: bool,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            should_quit: false,
        }
    }

    /// Runs one command against the game.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Move(direction) => {
                self.game.apply_move(direction);
                if !self.game.board().has_moves() {
                    info!(
                        score = self.game.score(),
                        max_tile = self.game.board().max_tile(),
                        "No moves left"
                    );
                }
            }
            Command::Undo => {
                self.game.undo();
            }
            Command::Reset => {
                info!(score = self.game.score(), "Restarting");
                self.game.reset();
            }
            Command::Quit => {
                self.should_quit = true;
            }
        }
    }

    pub fn status_line(&self) -> &'static str {
        if self.game.board().has_moves() {
            crate::input::KEYS_HELP
        } else {
            "No moves left · u undo · r restart · q quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use twenty48::{board, Direction, GameConfig};

    use super::*;

    fn app_from(board: twenty48::Board) -> App {
        App::new(Game::from_board(board, GameConfig::default(), 1))
    }

    #[test]
    fn commands_reach_the_game() {
        let start = board!("2 2 . . / . . . . / . . . . / . . . .");
        let mut app = app_from(start);

        app.handle_command(Command::Move(Direction::Left));
        assert_eq!(app.game.score(), 1);
        assert_eq!(app.game.board().get(0, 0), 4);

        app.handle_command(Command::Undo);
        assert_eq!(*app.game.board(), start);
        assert_eq!(app.game.score(), 1);

        app.handle_command(Command::Reset);
        assert_eq!(app.game.score(), 0);
        assert_eq!(app.game.board().count_tiles(), 2);
        assert!(!app.should_quit);

        app.handle_command(Command::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn status_reports_stuck_board() {
        let app = app_from(board!("2 4 2 4 / 4 2 4 2 / 2 4 2 4 / 4 2 4 2"));
        assert!(app.status_line().starts_with("No moves left"));
        let app = app_from(board!("2 . . . / . . . . / . . . . / . . . ."));
        assert_eq!(app.status_line(), crate::input::KEYS_HELP);
    }
}
