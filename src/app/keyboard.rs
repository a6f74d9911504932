use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{Action, App};
use crate::nav::NAV_ROUTES;

impl App {
    /// Maps a key press to an [`Action`] and runs it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = key_action(key) {
            self.execute_action(action);
        }
    }
}

fn key_action(key: KeyEvent) -> Option<Action> {
    let action = match (key.code, key.modifiers) {
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), _) => Action::Quit,
        (KeyCode::Char('l'), _) => Action::ToggleLocale,
        (KeyCode::Char('m'), _) => Action::ToggleMenu,
        (KeyCode::Tab | KeyCode::Right | KeyCode::Down, _) => Action::FocusNext,
        (KeyCode::BackTab | KeyCode::Left | KeyCode::Up, _) => Action::FocusPrevious,
        (KeyCode::Enter | KeyCode::Char(' '), _) => Action::Activate,
        (KeyCode::Backspace, _) => Action::Back,
        // 1-5 jump straight to the main navigation links.
        (KeyCode::Char(digit @ '1'..='9'), _) => {
            let index = digit.to_digit(10)? as usize - 1;
            Action::FollowLink(NAV_ROUTES.get(index)?.path)
        }
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_jump_to_nav_routes() {
        assert_eq!(key_action(press(KeyCode::Char('1'))), Some(Action::FollowLink("/")));
        assert_eq!(
            key_action(press(KeyCode::Char('5'))),
            Some(Action::FollowLink("/contact"))
        );
        assert_eq!(key_action(press(KeyCode::Char('6'))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_action(key), Some(Action::Quit));
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(key_action(press(KeyCode::Char('x'))), None);
        assert_eq!(key_action(press(KeyCode::Esc)), None);
    }
}
