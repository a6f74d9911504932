use log::{debug, warn};

use super::{Locale, TranslationKey, catalog};
use crate::observer::{Observers, SubscriptionId};

/// Owns the active locale. Exactly one store exists per rendering root; it is
/// handed to the root through [`crate::context::Context`].
#[derive(Debug, Default)]
pub struct LocaleStore {
    active: Locale,
    observers: Observers<Locale>,
}

impl LocaleStore {
    pub fn new(initial: Locale) -> Self {
        Self {
            active: initial,
            observers: Observers::new(),
        }
    }

    pub fn active(&self) -> Locale {
        self.active
    }

    /// Switches the active locale and notifies subscribers once the switch is
    /// complete. Setting the locale that is already active is a no-op.
    /// Returns whether the locale changed.
    pub fn set_locale(&mut self, next: Locale) -> bool {
        if next == self.active {
            debug!("locale already {}, nothing to do", next);
            return false;
        }
        debug!("locale {} -> {}", self.active, next);
        self.active = next;
        self.observers.notify(&next);
        true
    }

    /// Like [`set_locale`](Self::set_locale) but takes a raw tag. Unknown tags
    /// leave the current locale in place.
    pub fn set_locale_tag(&mut self, tag: &str) -> bool {
        match tag.parse::<Locale>() {
            Ok(locale) => self.set_locale(locale),
            Err(err) => {
                warn!("ignoring locale change: {}", err);
                false
            }
        }
    }

    /// The header's language switch.
    pub fn toggle(&mut self) -> Locale {
        self.set_locale(self.active.toggle());
        self.active
    }

    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        catalog::lookup(self.active, key)
    }

    pub fn text(&self, key: TranslationKey) -> &'static str {
        catalog::text(self.active, key)
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Locale) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
