//! Key handling: maps terminal key events to UI-agnostic app inputs.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    Up,
    Down,
    Left,
    Right,
    Select,    // Enter / Space
    Back,      // Esc / M: leave the screen, abandoning a running game
    Quit,      // Q, main menu only
    Interrupt, // Ctrl-C, quits from any screen
    Other,
}

/// Map a key event. Returns `None` for key releases and repeats.
pub fn map_key(key: KeyEvent) -> Option<AppInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => AppInput::Interrupt,
            _ => AppInput::Other,
        });
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => AppInput::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => AppInput::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => AppInput::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => AppInput::Right,
        KeyCode::Enter | KeyCode::Char(' ') => AppInput::Select,
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => AppInput::Back,
        KeyCode::Char('q') | KeyCode::Char('Q') => AppInput::Quit,
        _ => AppInput::Other,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_wasd_and_arrows() {
        assert_eq!(map_key(press(KeyCode::Char('w'))), Some(AppInput::Up));
        assert_eq!(map_key(press(KeyCode::Char('A'))), Some(AppInput::Left));
        assert_eq!(map_key(press(KeyCode::Char('s'))), Some(AppInput::Down));
        assert_eq!(map_key(press(KeyCode::Char('D'))), Some(AppInput::Right));
        assert_eq!(map_key(press(KeyCode::Up)), Some(AppInput::Up));
        assert_eq!(map_key(press(KeyCode::Down)), Some(AppInput::Down));
        assert_eq!(map_key(press(KeyCode::Left)), Some(AppInput::Left));
        assert_eq!(map_key(press(KeyCode::Right)), Some(AppInput::Right));
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(map_key(press(KeyCode::Enter)), Some(AppInput::Select));
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(AppInput::Select));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(AppInput::Back));
        assert_eq!(map_key(press(KeyCode::Char('m'))), Some(AppInput::Back));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(AppInput::Quit));
    }

    #[test]
    fn test_unmapped_keys_are_other() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), Some(AppInput::Other));
        assert_eq!(map_key(press(KeyCode::Tab)), Some(AppInput::Other));
        assert_eq!(map_key(press(KeyCode::Char('7'))), Some(AppInput::Other));
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(AppInput::Interrupt));
        let key = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(AppInput::Other));
    }

    #[test]
    fn test_release_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('w'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(key), None);
    }
}
