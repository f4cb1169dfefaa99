//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Direction;

/// What a key press means to the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Arrow key: slide the board.
    Move(Direction),
    /// Leave the game.
    Quit,
    /// Anything else. Never reaches the engine.
    Ignored,
}

/// Map a terminal key event. Key releases are ignored; held keys repeat.
#[must_use]
pub fn map_key(key: KeyEvent) -> Input {
    if key.kind == KeyEventKind::Release {
        return Input::Ignored;
    }

    match key.code {
        KeyCode::Up => Input::Move(Direction::Up),
        KeyCode::Down => Input::Move(Direction::Down),
        KeyCode::Left => Input::Move(Direction::Left),
        KeyCode::Right => Input::Move(Direction::Right),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Esc | KeyCode::Char('q') => Input::Quit,
        _ => Input::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows() {
        assert_eq!(map_key(press(KeyCode::Up)), Input::Move(Direction::Up));
        assert_eq!(map_key(press(KeyCode::Down)), Input::Move(Direction::Down));
        assert_eq!(map_key(press(KeyCode::Left)), Input::Move(Direction::Left));
        assert_eq!(map_key(press(KeyCode::Right)), Input::Move(Direction::Right));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), Input::Quit);
        assert_eq!(map_key(press(KeyCode::Char('q'))), Input::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Input::Quit
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('c'))), Input::Ignored);
        assert_eq!(map_key(press(KeyCode::Char('w'))), Input::Ignored);
        assert_eq!(map_key(press(KeyCode::Enter)), Input::Ignored);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(map_key(release), Input::Ignored);

        let repeat = KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(map_key(repeat), Input::Move(Direction::Left));
    }
}
