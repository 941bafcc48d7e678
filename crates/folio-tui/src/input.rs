use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::navigator::Direction;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Previous or next section
    Navigate(Direction),
    /// Jump to a section by index
    JumpTo(usize),
    /// Scroll the active section's content by lines (positive = down)
    ScrollLines(i32),
    ScrollPageDown,
    ScrollPageUp,
    ScrollTop,
    ScrollBottom,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Sections
        (KeyCode::Left, KeyModifiers::NONE) => Action::Navigate(Direction::Backward),
        (KeyCode::Right, KeyModifiers::NONE) => Action::Navigate(Direction::Forward),
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::Navigate(Direction::Backward),
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::Navigate(Direction::Forward),
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::JumpTo(c as usize - '1' as usize)
        }

        // Content scrolling never changes section
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollLines(1),
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollLines(-1),
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollLines(1),
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollLines(-1),
        (KeyCode::PageDown, _) => Action::ScrollPageDown,
        (KeyCode::PageUp, _) => Action::ScrollPageUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollPageUp,
        (KeyCode::Home, _) => Action::ScrollTop,
        (KeyCode::End, _) => Action::ScrollBottom,
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::ScrollBottom,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_navigate() {
        assert_eq!(
            handle_key_event(key(KeyCode::Left)),
            Action::Navigate(Direction::Backward)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Right)),
            Action::Navigate(Direction::Forward)
        );
    }

    #[test]
    fn test_digits_jump() {
        assert_eq!(handle_key_event(key(KeyCode::Char('1'))), Action::JumpTo(0));
        assert_eq!(handle_key_event(key(KeyCode::Char('6'))), Action::JumpTo(5));
        assert_eq!(handle_key_event(key(KeyCode::Char('0'))), Action::None);
    }

    #[test]
    fn test_vertical_keys_only_scroll() {
        assert_eq!(handle_key_event(key(KeyCode::Down)), Action::ScrollLines(1));
        assert_eq!(handle_key_event(key(KeyCode::Char('k'))), Action::ScrollLines(-1));
        assert_eq!(handle_key_event(key(KeyCode::PageDown)), Action::ScrollPageDown);
    }

    #[test]
    fn test_quit() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }
}
