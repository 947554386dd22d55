use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use twenty48::{Command, Direction};

pub const KEYS_HELP: &str = "←↑↓→/wasd/hjkl move · u undo · r restart · q quit";

/// Translates a key press into a command. Other keys, and key releases, are ignored.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }
    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Command::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            Command::Move(Direction::Right)
        }
        KeyCode::Char('u') => Command::Undo,
        KeyCode::Char('r') => Command::Reset,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_move() {
        assert_eq!(
            command_for_key(press(KeyCode::Up)),
            Some(Command::Move(Direction::Up))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Down)),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Left)),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Right)),
            Some(Command::Move(Direction::Right))
        );
    }

    #[test]
    fn letter_keys() {
        assert_eq!(
            command_for_key(press(KeyCode::Char('a'))),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('j'))),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(command_for_key(press(KeyCode::Char('u'))), Some(Command::Undo));
        assert_eq!(command_for_key(press(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(command_for_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(command_for_key(press(KeyCode::Char('x'))), None);
        assert_eq!(command_for_key(press(KeyCode::Enter)), None);
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            None
        );
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(command_for_key(release), None);
    }
}
