//! Navigation model: the header's link list with per-link active flags.

pub mod menu;

pub use menu::{MenuEvent, MenuState, MenuVisibility};

use serde::Serialize;

use crate::i18n::{Locale, TranslationKey, text};

/// A link target in the header: the key of its label and its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRoute {
    pub key: TranslationKey,
    pub path: &'static str,
}

/// Main navigation, in display order.
pub const NAV_ROUTES: [NavRoute; 5] = [
    NavRoute {
        key: TranslationKey::Home,
        path: "/",
    },
    NavRoute {
        key: TranslationKey::Services,
        path: "/services",
    },
    NavRoute {
        key: TranslationKey::Pricing,
        path: "/pricing",
    },
    NavRoute {
        key: TranslationKey::Map,
        path: "/map",
    },
    NavRoute {
        key: TranslationKey::Contact,
        path: "/contact",
    },
];

/// Account links shown next to the language switch.
pub const AUTH_ROUTES: [NavRoute; 2] = [
    NavRoute {
        key: TranslationKey::SignIn,
        path: "/signin",
    },
    NavRoute {
        key: TranslationKey::SignUp,
        path: "/signup",
    },
];

/// What the rendering layer gets for each link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub is_active: bool,
}

/// Exact string equality. `/services/` is not `/services`.
pub fn is_active(path: &str, current_path: &str) -> bool {
    path == current_path
}

pub fn build_nav_entries(locale: Locale, current_path: &str) -> Vec<NavEntry> {
    build_entries(&NAV_ROUTES, locale, current_path)
}

pub fn build_auth_entries(locale: Locale, current_path: &str) -> Vec<NavEntry> {
    build_entries(&AUTH_ROUTES, locale, current_path)
}

fn build_entries(routes: &[NavRoute], locale: Locale, current_path: &str) -> Vec<NavEntry> {
    routes
        .iter()
        .map(|route| NavEntry {
            label: text(locale, route.key),
            path: route.path,
            is_active: is_active(route.path, current_path),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_paths(entries: &[NavEntry]) -> Vec<&'static str> {
        entries.iter().filter(|e| e.is_active).map(|e| e.path).collect()
    }

    #[test]
    fn order_is_fixed() {
        let paths: Vec<_> = build_nav_entries(Locale::English, "/")
            .iter()
            .map(|e| e.path)
            .collect();
        assert_eq!(paths, vec!["/", "/services", "/pricing", "/map", "/contact"]);
    }

    #[test]
    fn labels_follow_locale() {
        let labels: Vec<_> = build_nav_entries(Locale::Finnish, "/")
            .iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(
            labels,
            vec!["Etusivu", "Palvelut", "Hinnoittelu", "Kartta", "Yhteystiedot"]
        );
    }

    #[test]
    fn only_the_exact_path_is_active() {
        let entries = build_nav_entries(Locale::English, "/services");
        assert_eq!(active_paths(&entries), vec!["/services"]);
    }

    #[test]
    fn trailing_slash_does_not_match() {
        let entries = build_nav_entries(Locale::English, "/services/");
        assert!(active_paths(&entries).is_empty());
    }

    #[test]
    fn root_matches_only_root() {
        assert_eq!(active_paths(&build_nav_entries(Locale::English, "/")), vec!["/"]);
        assert!(active_paths(&build_nav_entries(Locale::English, "")).is_empty());
        assert!(active_paths(&build_nav_entries(Locale::English, "/unknown")).is_empty());
    }

    #[test]
    fn auth_links_use_the_same_policy() {
        let entries = build_auth_entries(Locale::Finnish, "/signup");
        assert_eq!(active_paths(&entries), vec!["/signup"]);
        assert_eq!(entries[0].label, "Kirjaudu sisään");
        assert_eq!(entries[1].label, "Rekisteröidy");
    }

    #[test]
    fn build_is_deterministic() {
        for locale in Locale::ALL {
            for path in ["/", "/map", "/map/", "/nope"] {
                assert_eq!(build_nav_entries(locale, path), build_nav_entries(locale, path));
            }
        }
    }
}
