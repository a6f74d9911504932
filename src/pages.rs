//! Page content for each route, resolved against the active locale.

use crate::i18n::{Locale, TranslationKey, text};

pub const COMPANY_NAME: &str = "Sparkka Oy";
pub const STREET_ADDRESS: &str = "Laajavuorenkuja 1 H 128, 01620 Vantaa, Finland";
pub const PHONE_NUMBER: &str = "+358 40 123 4567";
pub const EMAIL_ADDRESS: &str = "info@sparkka.fi";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    Pricing,
    Map,
    Contact,
    SignUp,
    SignIn,
    NotFound,
}

/// One row of page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLine {
    Heading(&'static str),
    Text(&'static str),
    Item {
        title: &'static str,
        detail: &'static str,
    },
    Price {
        service: &'static str,
        description: &'static str,
        price: &'static str,
    },
    Field {
        label: &'static str,
        placeholder: &'static str,
    },
    Button(&'static str),
    Link {
        label: &'static str,
        path: &'static str,
    },
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub lines: Vec<PageLine>,
}

static SERVICE_ITEMS: [(TranslationKey, TranslationKey); 4] = [
    (TranslationKey::LaserEquipment, TranslationKey::LaserDescription),
    (TranslationKey::DermatologyEquipment, TranslationKey::DermatologyDescription),
    (TranslationKey::InstallationServices, TranslationKey::InstallationDescription),
    (TranslationKey::MaintenanceServices, TranslationKey::MaintenanceDescription),
];

static PRICE_ROWS: [(TranslationKey, TranslationKey, &str); 4] = [
    (TranslationKey::LaserEquipment, TranslationKey::LaserEquipmentPrice, "€10,000+"),
    (TranslationKey::DermatologyEquipment, TranslationKey::DermatologyPrice, "€8,000+"),
    (TranslationKey::InstallationServices, TranslationKey::InstallationPrice, "€2,000"),
    (TranslationKey::MaintenanceServices, TranslationKey::MaintenancePrice, "€1,500/year"),
];

impl Page {
    /// Exact match on the path; anything else is the not-found page.
    pub fn from_path(path: &str) -> Page {
        match path {
            "/" => Page::Home,
            "/services" => Page::Services,
            "/pricing" => Page::Pricing,
            "/map" => Page::Map,
            "/contact" => Page::Contact,
            "/signup" => Page::SignUp,
            "/signin" => Page::SignIn,
            _ => Page::NotFound,
        }
    }

    pub fn path(self) -> Option<&'static str> {
        match self {
            Page::Home => Some("/"),
            Page::Services => Some("/services"),
            Page::Pricing => Some("/pricing"),
            Page::Map => Some("/map"),
            Page::Contact => Some("/contact"),
            Page::SignUp => Some("/signup"),
            Page::SignIn => Some("/signin"),
            Page::NotFound => None,
        }
    }

    pub fn content(self, locale: Locale) -> PageContent {
        let t = |key| text(locale, key);
        let link = |key, path| PageLine::Link {
            label: text(locale, key),
            path,
        };
        let field = |label, placeholder: Option<TranslationKey>| PageLine::Field {
            label: text(locale, label),
            placeholder: placeholder.map(|key| text(locale, key)).unwrap_or(""),
        };
        let services = || {
            SERVICE_ITEMS.iter().map(move |(title, detail)| PageLine::Item {
                title: text(locale, *title),
                detail: text(locale, *detail),
            })
        };

        use TranslationKey as K;
        match self {
            Page::Home => {
                let mut lines = vec![
                    link(K::GetStarted, "/signup"),
                    link(K::LearnMore, "/services"),
                    PageLine::Blank,
                    PageLine::Heading(t(K::ServicesTitle)),
                    PageLine::Text(t(K::ServicesSubtitle)),
                ];
                lines.extend(services());
                lines.push(PageLine::Blank);
                lines.push(link(K::Contact, "/contact"));
                PageContent {
                    title: t(K::HeroTitle),
                    subtitle: t(K::HeroSubtitle),
                    lines,
                }
            }
            Page::Services => PageContent {
                title: t(K::ServicesTitle),
                subtitle: t(K::ServicesSubtitle),
                lines: services().collect(),
            },
            Page::Pricing => {
                let mut lines = vec![PageLine::Price {
                    service: t(K::Service),
                    description: t(K::Description),
                    price: t(K::Price),
                }];
                lines.extend(PRICE_ROWS.iter().map(|(service, description, price)| {
                    PageLine::Price {
                        service: text(locale, *service),
                        description: text(locale, *description),
                        price: *price,
                    }
                }));
                lines.push(PageLine::Blank);
                lines.push(link(K::Contact, "/contact"));
                PageContent {
                    title: t(K::PricingTitle),
                    subtitle: t(K::PricingSubtitle),
                    lines,
                }
            }
            Page::Map => PageContent {
                title: t(K::MapTitle),
                subtitle: t(K::MapSubtitle),
                lines: vec![
                    PageLine::Item {
                        title: t(K::Address),
                        detail: STREET_ADDRESS,
                    },
                    PageLine::Item {
                        title: t(K::Phone),
                        detail: PHONE_NUMBER,
                    },
                    PageLine::Item {
                        title: t(K::Email),
                        detail: EMAIL_ADDRESS,
                    },
                ],
            },
            Page::Contact => PageContent {
                title: t(K::ContactTitle),
                subtitle: t(K::ContactSubtitle),
                lines: vec![
                    field(K::Name, Some(K::NamePlaceholder)),
                    field(K::Email, Some(K::EmailPlaceholder)),
                    field(K::Subject, None),
                    field(K::Message, None),
                    PageLine::Button(t(K::Send)),
                    PageLine::Blank,
                    PageLine::Item {
                        title: t(K::Phone),
                        detail: PHONE_NUMBER,
                    },
                    PageLine::Item {
                        title: t(K::Email),
                        detail: EMAIL_ADDRESS,
                    },
                    PageLine::Item {
                        title: t(K::Address),
                        detail: STREET_ADDRESS,
                    },
                ],
            },
            Page::SignUp => PageContent {
                title: t(K::SignUpTitle),
                subtitle: t(K::SignUpSubtitle),
                lines: vec![
                    field(K::Name, Some(K::NamePlaceholder)),
                    field(K::Email, Some(K::EmailPlaceholder)),
                    field(K::Phone, Some(K::PhonePlaceholder)),
                    field(K::Password, Some(K::PasswordPlaceholder)),
                    field(K::ConfirmPassword, Some(K::ConfirmPasswordPlaceholder)),
                    PageLine::Button(t(K::CreateAccount)),
                    PageLine::Blank,
                    PageLine::Text(t(K::AlreadyHaveAccount)),
                    link(K::SignIn, "/signin"),
                ],
            },
            Page::SignIn => PageContent {
                title: t(K::SignInTitle),
                subtitle: t(K::SignInSubtitle),
                lines: vec![
                    field(K::Email, Some(K::EmailPlaceholder)),
                    field(K::Password, Some(K::PasswordPlaceholder)),
                    PageLine::Button(t(K::SignIn)),
                    PageLine::Blank,
                    PageLine::Text(t(K::DontHaveAccount)),
                    link(K::SignUp, "/signup"),
                ],
            },
            Page::NotFound => PageContent {
                title: t(K::NotFoundTitle),
                subtitle: t(K::NotFoundMessage),
                lines: vec![link(K::GoToHomepage, "/")],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_PAGES: [Page; 8] = [
        Page::Home,
        Page::Services,
        Page::Pricing,
        Page::Map,
        Page::Contact,
        Page::SignUp,
        Page::SignIn,
        Page::NotFound,
    ];

    #[test]
    fn paths_round_trip() {
        for page in ALL_PAGES {
            if let Some(path) = page.path() {
                assert_eq!(Page::from_path(path), page);
            }
        }
    }

    #[test]
    fn path_matching_is_exact() {
        assert_eq!(Page::from_path("/pricing/"), Page::NotFound);
        assert_eq!(Page::from_path("/Pricing"), Page::NotFound);
        assert_eq!(Page::from_path(""), Page::NotFound);
    }

    #[test]
    fn content_follows_locale() {
        assert_eq!(Page::Map.content(Locale::English).title, "Our Location");
        assert_eq!(Page::Map.content(Locale::Finnish).title, "Sijaintimme");
    }

    #[test]
    fn no_page_renders_raw_keys() {
        for locale in Locale::ALL {
            for page in ALL_PAGES {
                let content = page.content(locale);
                for key in TranslationKey::ALL {
                    assert_ne!(content.title, key.id());
                    assert_ne!(content.subtitle, key.id());
                }
                assert!(!content.lines.is_empty());
            }
        }
    }

    #[test]
    fn pricing_lists_header_and_four_rows() {
        let content = Page::Pricing.content(Locale::English);
        let prices: Vec<_> = content
            .lines
            .iter()
            .filter_map(|line| match line {
                PageLine::Price { price, .. } => Some(*price),
                _ => None,
            })
            .collect();
        assert_eq!(prices, vec!["Price", "€10,000+", "€8,000+", "€2,000", "€1,500/year"]);
    }

    #[test]
    fn page_links_point_at_known_routes() {
        for page in ALL_PAGES {
            for line in page.content(Locale::English).lines {
                if let PageLine::Link { path, .. } = line {
                    assert_ne!(Page::from_path(path), Page::NotFound, "{page:?} -> {path}");
                }
            }
        }
    }
}
