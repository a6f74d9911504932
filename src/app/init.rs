use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};

use super::App;
use crate::config::Settings;
use crate::context::Context;
use crate::definitions::{LayoutMode, TargetRegistry};
use crate::error::AppError;
use crate::nav::MenuState;
use crate::route::Router;

impl App {
    /// Builds the rendering root. The locale store must have been provided in
    /// `context`; a missing store is returned as an error rather than replaced
    /// with a default.
    ///
    /// The locale store, the menu and the router each get a listener that
    /// schedules a redraw. The router's listener also marks the navigation so
    /// that the menu collapses once the action that caused it has finished.
    pub fn new(settings: &Settings, mut context: Context) -> Result<Self, AppError> {
        let mut locale = context.take_locale()?;
        let mut menu = MenuState::new();
        let mut router = Router::new(settings.start_path.clone());
        let redraw = Rc::new(Cell::new(true));
        let navigated = Rc::new(Cell::new(false));

        let flag = Rc::clone(&redraw);
        locale.subscribe(move |next| {
            debug!("locale changed to {}, scheduling redraw", next);
            flag.set(true);
        });
        let flag = Rc::clone(&redraw);
        menu.subscribe(move |visibility| {
            debug!("menu is now {:?}, scheduling redraw", visibility);
            flag.set(true);
        });
        let flag = Rc::clone(&redraw);
        let pending = Rc::clone(&navigated);
        router.subscribe(move |navigation| {
            debug!("navigated {} -> {}", navigation.from, navigation.to);
            pending.set(true);
            flag.set(true);
        });

        info!(
            "site starting at {} in locale {}",
            settings.start_path,
            locale.active()
        );

        Ok(Self {
            should_quit: false,
            locale,
            menu,
            router,
            layout_mode: LayoutMode::Desktop,
            targets: TargetRegistry::default(),
            focus: None,
            mobile_breakpoint: settings.mobile_breakpoint,
            redraw,
            navigated,
        })
    }
}
