//! Error types shared by the site core and the terminal front end.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// The rendering root asked for the locale store before one was provided.
    #[error("locale store is not initialized: provide a LocaleStore in the Context before rendering")]
    LocaleStoreMissing,

    /// A locale tag outside the supported set.
    #[error("unsupported locale: {0:?} (expected \"en\" or \"fi\")")]
    UnsupportedLocale(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_locale_names_the_tag() {
        let err = AppError::UnsupportedLocale("sv".into());
        assert!(err.to_string().contains("\"sv\""));
    }

    #[test]
    fn missing_store_is_loud() {
        assert!(AppError::LocaleStoreMissing.to_string().contains("not initialized"));
    }
}
