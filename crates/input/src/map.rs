//! Key mapping from terminal events to controls.

use crate::types::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a control.
///
/// Arrows steer, space fires, `q` or Ctrl-C quits. Everything else is ignored.
pub fn map_key(key: KeyEvent) -> Option<Control> {
    if should_quit(key) {
        return Some(Control::Quit);
    }
    match key.code {
        KeyCode::Up => Some(Control::Up),
        KeyCode::Down => Some(Control::Down),
        KeyCode::Left => Some(Control::Left),
        KeyCode::Right => Some(Control::Right),
        KeyCode::Char(' ') => Some(Control::Fire),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Control::Up));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Control::Down));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Control::Left));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(Control::Right)
        );
    }

    #[test]
    fn test_fire_key() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(Control::Fire)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('q'))),
            Some(Control::Quit)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Control::Quit)
        );
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('c'))), None);
    }
}
