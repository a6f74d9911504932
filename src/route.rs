//! In-memory history standing in for the browser router.
//!
//! The navigation model only needs "what is the current path"; that read is
//! the [`RouteOracle`] trait. [`Router`] keeps the history stack and reports
//! each completed navigation to its caller and to its route listeners.

use log::debug;

use crate::observer::{Observers, SubscriptionId};
use crate::pages::Page;

pub trait RouteOracle {
    fn current_path(&self) -> &str;
}

/// A completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub from: String,
    pub to: String,
}

#[derive(Debug)]
pub struct Router {
    history: Vec<String>,
    listeners: Observers<Navigation>,
}

impl Router {
    pub fn new(start_path: impl Into<String>) -> Self {
        Self {
            history: vec![start_path.into()],
            listeners: Observers::new(),
        }
    }

    /// Pushes `path` unless it is already current. The navigation is reported
    /// either way, as a link click is still a completed navigation.
    pub fn navigate(&mut self, path: &str) -> Navigation {
        let from = self.current_path().to_string();
        if from != path {
            self.history.push(path.to_string());
        }
        debug!("navigate {} -> {}", from, path);
        self.completed(Navigation {
            from,
            to: path.to_string(),
        })
    }

    /// Pops one entry. The first entry is never popped, and a refused back
    /// is not reported to listeners.
    pub fn back(&mut self) -> Option<Navigation> {
        if self.history.len() < 2 {
            return None;
        }
        let from = self.history.pop()?;
        let to = self.current_path().to_string();
        debug!("back {} -> {}", from, to);
        Some(self.completed(Navigation { from, to }))
    }

    /// Listeners run after the history has been updated.
    pub fn subscribe(&mut self, callback: impl FnMut(&Navigation) + 'static) -> SubscriptionId {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn completed(&mut self, navigation: Navigation) -> Navigation {
        self.listeners.notify(&navigation);
        navigation
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn page(&self) -> Page {
        Page::from_path(self.current_path())
    }
}

impl RouteOracle for Router {
    fn current_path(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_updates_current_path() {
        let mut router = Router::new("/");
        let nav = router.navigate("/pricing");

        assert_eq!(router.current_path(), "/pricing");
        assert_eq!(nav, Navigation { from: "/".into(), to: "/pricing".into() });
        assert_eq!(router.page(), Page::Pricing);
    }

    #[test]
    fn same_path_is_not_pushed_twice() {
        let mut router = Router::new("/");
        router.navigate("/map");
        router.navigate("/map");
        assert_eq!(router.depth(), 2);
    }

    #[test]
    fn back_walks_history_but_keeps_the_first_entry() {
        let mut router = Router::new("/");
        router.navigate("/services");
        router.navigate("/contact");

        assert_eq!(router.back().map(|n| n.to), Some("/services".to_string()));
        assert_eq!(router.back().map(|n| n.to), Some("/".to_string()));
        assert_eq!(router.back(), None);
        assert_eq!(router.current_path(), "/");
    }

    #[test]
    fn listeners_hear_navigate_and_back_but_not_a_refused_back() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut router = Router::new("/");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        router.subscribe(move |nav: &Navigation| sink.borrow_mut().push(nav.to.clone()));

        router.navigate("/map");
        router.back();
        router.back();

        assert_eq!(*seen.borrow(), vec!["/map".to_string(), "/".to_string()]);
    }

    #[test]
    fn unsubscribed_listener_is_silent() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut router = Router::new("/");
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let id = router.subscribe(move |_| counter.set(counter.get() + 1));

        router.navigate("/pricing");
        assert!(router.unsubscribe(id));
        router.navigate("/contact");

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        let mut router = Router::new("/");
        router.navigate("/services/");
        assert_eq!(router.page(), Page::NotFound);
    }
}
