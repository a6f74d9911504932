//! The central `App` struct: every piece of state the site view renders from.

use std::cell::Cell;
use std::rc::Rc;

use crate::definitions::{LayoutMode, TargetRegistry};
use crate::i18n::LocaleStore;
use crate::nav::{self, MenuState, NavEntry};
use crate::pages::Page;
use crate::route::{RouteOracle, Router};

pub struct App {
    /// Set when the user asks to leave.
    pub should_quit: bool,
    /// Single source of truth for the active language.
    pub locale: LocaleStore,
    /// Narrow-layout menu.
    pub menu: MenuState,
    pub router: Router,

    // --- Layout, refreshed every frame ---
    pub layout_mode: LayoutMode,
    pub targets: TargetRegistry,
    /// Index into `targets`.
    pub focus: Option<usize>,
    pub(crate) mobile_breakpoint: u16,

    /// Raised by store subscriptions and input handling; cleared by the draw.
    pub(crate) redraw: Rc<Cell<bool>>,
    /// Raised by the router's listener; consumed by `settle_navigation`.
    pub(crate) navigated: Rc<Cell<bool>>,
}

impl App {
    pub fn current_path(&self) -> &str {
        self.router.current_path()
    }

    pub fn current_page(&self) -> Page {
        self.router.page()
    }

    pub fn nav_entries(&self) -> Vec<NavEntry> {
        nav::build_nav_entries(self.locale.active(), self.router.current_path())
    }

    pub fn auth_entries(&self) -> Vec<NavEntry> {
        nav::build_auth_entries(self.locale.active(), self.router.current_path())
    }

    pub fn mobile_breakpoint(&self) -> u16 {
        self.mobile_breakpoint
    }

    pub fn request_redraw(&self) {
        self.redraw.set(true);
    }

    /// Returns whether a redraw was pending and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }
}
