//! Localization for the site: the supported locales, the static translation
//! catalog and the locale store that the rendering root owns.

mod catalog;
mod store;

pub use catalog::{Catalog, CoverageReport, TranslationKey, lookup, text};
pub use store::LocaleStore;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AppError;

/// The two languages the site ships in. English is the default on every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fi")]
    Finnish,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Finnish];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Finnish => "fi",
        }
    }

    /// Upper-case tag shown on the language switch.
    pub fn badge(&self) -> &'static str {
        match self {
            Locale::English => "EN",
            Locale::Finnish => "FI",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Locale::English => Locale::Finnish,
            Locale::Finnish => Locale::English,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::English),
            "fi" => Ok(Locale::Finnish),
            _ => Err(AppError::UnsupportedLocale(s.to_string())),
        }
    }
}
