//! The terminal rendering root of the site.
//!
//! `App` owns the locale store, the menu state and the router, and turns
//! input events into actions on them. Rendering lives in [`crate::ui`].
//!
//! Every change to the active language, the menu or the current route goes
//! through [`App::execute_action`]. Key presses and clicks are translated into
//! actions first, so the keyboard, the mouse and the tests share one path.

/// `actions`: the `Action` enum and its dispatcher. Following a link, going
/// back, switching language, toggling the menu and moving focus all live here,
/// along with the step that collapses the menu after a completed navigation.
mod actions;
/// `init`: builds `App` from the settings and the provided `Context`, and
/// wires the store listeners that schedule redraws.
mod init;
/// `keyboard`: maps key presses to actions.
mod keyboard;
/// `mouse`: hit-tests left clicks against the targets drawn in the last frame.
mod mouse;
/// `state`: the `App` struct and the read-only views the renderer uses.
mod state;

pub use actions::Action;
pub use state::App;

use crate::event::Event;

impl App {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(_, _) => self.request_redraw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::context::Context;
    use crate::definitions::{LayoutMode, Target};
    use crate::error::AppError;
    use crate::i18n::{Locale, LocaleStore};
    use crate::nav::MenuVisibility;
    use crate::route::RouteOracle;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    fn app() -> App {
        App::new(&Settings::default(), Context::with_locale(LocaleStore::default())).unwrap()
    }

    fn mobile_app() -> App {
        let mut app = app();
        app.layout_mode = LayoutMode::Mobile;
        app
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn refuses_to_start_without_a_locale_store() {
        let result = App::new(&Settings::default(), Context::new());
        assert_eq!(result.err(), Some(AppError::LocaleStoreMissing));
    }

    #[test]
    fn starts_in_english_at_the_configured_path() {
        let settings = Settings {
            start_path: "/pricing".into(),
            ..Settings::default()
        };
        let app = App::new(&settings, Context::with_locale(LocaleStore::default())).unwrap();
        assert_eq!(app.locale.active(), Locale::English);
        assert_eq!(app.router.current_path(), "/pricing");
        assert!(app.take_redraw());
    }

    #[test]
    fn following_a_link_from_the_open_menu_collapses_it() {
        let mut app = mobile_app();
        app.execute_action(Action::ToggleMenu);
        assert_eq!(app.menu.visibility(), MenuVisibility::Expanded);

        app.execute_action(Action::FollowLink("/map"));

        assert_eq!(app.menu.visibility(), MenuVisibility::Collapsed);
        assert_eq!(app.current_path(), "/map");
        let active: Vec<_> = app.nav_entries().into_iter().filter(|e| e.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].path, "/map");
    }

    #[test]
    fn going_back_from_the_open_menu_collapses_it() {
        let mut app = mobile_app();
        app.execute_action(Action::FollowLink("/services"));
        app.execute_action(Action::ToggleMenu);
        assert_eq!(app.menu.visibility(), MenuVisibility::Expanded);

        app.handle_event(key(KeyCode::Backspace));

        assert_eq!(app.current_path(), "/");
        assert_eq!(app.menu.visibility(), MenuVisibility::Collapsed);
    }

    #[test]
    fn refused_back_leaves_the_menu_open() {
        let mut app = mobile_app();
        app.execute_action(Action::ToggleMenu);

        app.execute_action(Action::Back);

        assert_eq!(app.menu.visibility(), MenuVisibility::Expanded);
    }

    #[test]
    fn switching_language_keeps_the_menu_open() {
        let mut app = mobile_app();
        app.execute_action(Action::ToggleMenu);
        app.handle_event(key(KeyCode::Char('l')));

        assert_eq!(app.locale.active(), Locale::Finnish);
        assert_eq!(app.menu.visibility(), MenuVisibility::Expanded);
        assert_eq!(app.nav_entries()[0].label, "Etusivu");
    }

    #[test]
    fn menu_toggle_is_ignored_on_desktop() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('m')));
        assert_eq!(app.menu.visibility(), MenuVisibility::Collapsed);
    }

    #[test]
    fn locale_change_schedules_a_redraw() {
        let mut app = app();
        app.take_redraw();
        app.execute_action(Action::ToggleLocale);
        assert!(app.take_redraw());
        assert!(!app.take_redraw());
    }

    #[test]
    fn focus_cycles_and_activates_registered_targets() {
        let mut app = app();
        app.targets.register(Rect::new(0, 0, 4, 1), Target::Link("/services"));
        app.targets.register(Rect::new(5, 0, 4, 1), Target::LocaleSwitch);

        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.focus, Some(0));
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.focus, Some(0));
        app.handle_event(key(KeyCode::BackTab));
        assert_eq!(app.focus, Some(1));

        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.locale.active(), Locale::Finnish);

        app.handle_event(key(KeyCode::Left));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.current_path(), "/services");
        assert_eq!(app.focus, None);
    }

    #[test]
    fn backspace_returns_to_the_previous_page() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('2')));
        assert_eq!(app.current_path(), "/services");
        app.handle_event(key(KeyCode::Backspace));
        assert_eq!(app.current_path(), "/");
    }

    #[test]
    fn clicks_hit_registered_targets() {
        use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

        let mut app = mobile_app();
        app.targets.register(Rect::new(10, 0, 3, 1), Target::MenuButton);
        let click = |column| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row: 0,
                modifiers: KeyModifiers::NONE,
            })
        };

        app.handle_event(click(2));
        assert!(!app.menu.is_expanded());
        app.handle_event(click(11));
        assert!(app.menu.is_expanded());
        assert_eq!(app.focus, Some(0));
    }
}
