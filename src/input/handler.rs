use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Quit,
    /// Unbound key
    None,
}

/// Maps terminal key events onto game requests
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        if let Some(direction) = direction_for(key.code) {
            return KeyAction::Turn(direction);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Arrow keys and WASD, either case
fn direction_for(code: KeyCode) -> Option<Direction> {
    let direction = match code {
        KeyCode::Up => Direction::Up,
        KeyCode::Down => Direction::Down,
        KeyCode::Left => Direction::Left,
        KeyCode::Right => Direction::Right,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Direction::Up,
            's' => Direction::Down,
            'a' => Direction::Left,
            'd' => Direction::Right,
            _ => return None,
        },
        _ => return None,
    };
    Some(direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_movement_keys() {
        let bindings = [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Char('s'), Direction::Down),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Char('d'), Direction::Right),
        ];

        for (code, direction) in bindings {
            assert_eq!(press(code, KeyModifiers::NONE), KeyAction::Turn(direction));
        }
    }

    #[test]
    fn test_wasd_uppercase() {
        assert_eq!(
            press(KeyCode::Char('W'), KeyModifiers::SHIFT),
            KeyAction::Turn(Direction::Up)
        );
        assert_eq!(
            press(KeyCode::Char('D'), KeyModifiers::SHIFT),
            KeyAction::Turn(Direction::Right)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(press(KeyCode::Char('q'), KeyModifiers::NONE), KeyAction::Quit);
        assert_eq!(press(KeyCode::Char('Q'), KeyModifiers::SHIFT), KeyAction::Quit);
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), KeyAction::Quit);
        assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(press(KeyCode::Char('x'), KeyModifiers::NONE), KeyAction::None);
        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE), KeyAction::None);
        assert_eq!(press(KeyCode::Char('w'), KeyModifiers::CONTROL), KeyAction::None);
    }
}
