//! Provider for the state the rendering root depends on.
//!
//! A [`Context`] is assembled at startup and handed to whichever root renders
//! the site. Reaching for the locale store when none was provided is an
//! integration error and is reported as [`AppError::LocaleStoreMissing`].

use crate::error::AppError;
use crate::i18n::LocaleStore;

#[derive(Debug, Default)]
pub struct Context {
    locale: Option<LocaleStore>,
}

impl Context {
    /// An empty context. Nothing is provided yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(store: LocaleStore) -> Self {
        Self {
            locale: Some(store),
        }
    }

    pub fn provide_locale(&mut self, store: LocaleStore) {
        self.locale = Some(store);
    }

    pub fn locale(&self) -> Result<&LocaleStore, AppError> {
        self.locale.as_ref().ok_or(AppError::LocaleStoreMissing)
    }

    pub fn locale_mut(&mut self) -> Result<&mut LocaleStore, AppError> {
        self.locale.as_mut().ok_or(AppError::LocaleStoreMissing)
    }

    /// Moves the store out to its owning root.
    pub fn take_locale(&mut self) -> Result<LocaleStore, AppError> {
        self.locale.take().ok_or(AppError::LocaleStoreMissing)
    }
}
