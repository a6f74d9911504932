use log::debug;

use super::App;
use crate::definitions::{LayoutMode, Target};
use crate::nav::MenuEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FollowLink(&'static str),
    ToggleLocale,
    ToggleMenu,
    Back,
    FocusNext,
    FocusPrevious,
    /// Activate whatever has keyboard focus.
    Activate,
    Quit,
}

impl App {
    /// The single source of truth for executing an `Action`.
    pub fn execute_action(&mut self, action: Action) {
        debug!("Executing action {:?}", action);
        match action {
            Action::FollowLink(path) => self.follow_link(path),
            Action::ToggleLocale => self.toggle_locale(),
            Action::ToggleMenu => self.toggle_menu(),
            Action::Back => self.go_back(),
            Action::FocusNext => self.move_focus(1),
            Action::FocusPrevious => self.move_focus(-1),
            Action::Activate => {
                if let Some(target) = self.focus.and_then(|idx| self.targets.get(idx)) {
                    self.activate(target);
                }
            }
            Action::Quit => self.should_quit = true,
        }
        self.settle_navigation();
    }

    /// Collapses the menu if the router reported a completed navigation since
    /// the last call.
    pub(crate) fn settle_navigation(&mut self) {
        if self.navigated.replace(false) {
            self.menu.dispatch(MenuEvent::LinkSelected);
        }
    }

    pub(crate) fn activate(&mut self, target: Target) {
        match target {
            Target::Link(path) => self.follow_link(path),
            Target::LocaleSwitch => self.toggle_locale(),
            Target::MenuButton => self.toggle_menu(),
        }
    }

    /// A link was picked. The menu collapses when the router reports the
    /// navigation.
    fn follow_link(&mut self, path: &'static str) {
        let navigation = self.router.navigate(path);
        if navigation.from != navigation.to {
            self.focus = None;
        }
    }

    fn toggle_locale(&mut self) {
        self.locale.toggle();
        self.menu.dispatch(MenuEvent::LocaleToggled);
    }

    /// The hamburger only exists in the narrow layout.
    fn toggle_menu(&mut self) {
        if self.layout_mode == LayoutMode::Mobile {
            self.menu.toggle();
        }
    }

    fn go_back(&mut self) {
        if self.router.back().is_some() {
            self.focus = None;
        }
    }

    fn move_focus(&mut self, delta: isize) {
        if self.targets.is_empty() {
            self.focus = None;
            return;
        }
        let len = self.targets.len() as isize;
        let next = match self.focus {
            Some(current) => (current.min(self.targets.len() - 1) as isize + delta).rem_euclid(len),
            None if delta >= 0 => 0,
            None => len - 1,
        };
        self.focus = Some(next as usize);
        self.request_redraw();
    }
}
