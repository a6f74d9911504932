use log::debug;

use crate::observer::{Observers, SubscriptionId};

/// Whether the narrow-layout link list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuVisibility {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger button.
    Toggle,
    /// A navigation link was followed from the menu.
    LinkSelected,
    /// The language switch was used. The menu stays as it is.
    LocaleToggled,
}

impl MenuVisibility {
    pub fn apply(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuVisibility::Collapsed, MenuEvent::Toggle) => MenuVisibility::Expanded,
            (MenuVisibility::Expanded, MenuEvent::Toggle) => MenuVisibility::Collapsed,
            (_, MenuEvent::LinkSelected) => MenuVisibility::Collapsed,
            (state, MenuEvent::LocaleToggled) => state,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == MenuVisibility::Expanded
    }
}

/// Owned menu state with change notification.
#[derive(Debug, Default)]
pub struct MenuState {
    visibility: MenuVisibility,
    observers: Observers<MenuVisibility>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> MenuVisibility {
        self.visibility
    }

    pub fn is_expanded(&self) -> bool {
        self.visibility.is_expanded()
    }

    /// Applies `event`; subscribers hear about it only if the state changed.
    pub fn dispatch(&mut self, event: MenuEvent) -> MenuVisibility {
        let next = self.visibility.apply(event);
        if next != self.visibility {
            debug!("menu {:?} --{:?}--> {:?}", self.visibility, event, next);
            self.visibility = next;
            self.observers.notify(&next);
        }
        next
    }

    pub fn toggle(&mut self) -> MenuVisibility {
        self.dispatch(MenuEvent::Toggle)
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&MenuVisibility) + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
