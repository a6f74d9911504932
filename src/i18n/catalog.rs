use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use log::warn;
use serde::Serialize;

use super::Locale;

macro_rules! translation_keys {
    ($($variant:ident => $id:literal),+ $(,)?) => {
        /// Every string the site renders. The string id is the key used in the
        /// per-locale tables below.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TranslationKey {
            $($variant),+
        }

        impl TranslationKey {
            pub const ALL: &'static [TranslationKey] = &[$(TranslationKey::$variant),+];

            pub fn id(self) -> &'static str {
                match self {
                    $(TranslationKey::$variant => $id),+
                }
            }

            pub fn from_id(id: &str) -> Option<Self> {
                match id {
                    $($id => Some(TranslationKey::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

translation_keys! {
    // Navigation
    Home => "home",
    Services => "services",
    Pricing => "pricing",
    Map => "map",
    Contact => "contact",
    SignUp => "signUp",
    SignIn => "signIn",
    Menu => "menu",

    // Home
    HeroTitle => "heroTitle",
    HeroSubtitle => "heroSubtitle",
    GetStarted => "getStarted",
    LearnMore => "learnMore",

    // Services
    ServicesTitle => "servicesTitle",
    ServicesSubtitle => "servicesSubtitle",
    LaserEquipment => "laserEquipment",
    LaserDescription => "laserDescription",
    DermatologyEquipment => "dermatologyEquipment",
    DermatologyDescription => "dermatologyDescription",
    InstallationServices => "installationServices",
    InstallationDescription => "installationDescription",
    MaintenanceServices => "maintenanceServices",
    MaintenanceDescription => "maintenanceDescription",

    // Pricing
    PricingTitle => "pricingTitle",
    PricingSubtitle => "pricingSubtitle",
    Service => "service",
    Description => "description",
    Price => "price",
    LaserEquipmentPrice => "laserEquipmentPrice",
    DermatologyPrice => "dermatologyPrice",
    InstallationPrice => "installationPrice",
    MaintenancePrice => "maintenancePrice",

    // Contact
    ContactTitle => "contactTitle",
    ContactSubtitle => "contactSubtitle",
    Name => "name",
    Email => "email",
    Subject => "subject",
    Message => "message",
    Send => "send",
    Phone => "phone",
    Address => "address",

    // Sign up / sign in
    SignUpTitle => "signUpTitle",
    SignUpSubtitle => "signUpSubtitle",
    Password => "password",
    ConfirmPassword => "confirmPassword",
    CreateAccount => "createAccount",
    SignInTitle => "signInTitle",
    SignInSubtitle => "signInSubtitle",
    SigningIn => "signingIn",
    SignInSuccess => "signInSuccess",
    AlreadyHaveAccount => "alreadyHaveAccount",
    DontHaveAccount => "dontHaveAccount",

    // Map
    MapTitle => "mapTitle",
    MapSubtitle => "mapSubtitle",

    // Footer
    CompanyInfo => "companyInfo",
    AllRightsReserved => "allRightsReserved",
    KeyHints => "keyHints",

    // Forms
    Required => "required",
    InvalidEmail => "invalidEmail",
    PasswordTooShort => "passwordTooShort",
    PasswordsDoNotMatch => "passwordsDoNotMatch",
    Success => "success",
    Error => "error",
    ThankYou => "thankYou",
    AccountCreated => "accountCreated",
    SignupSuccess => "signupSuccess",
    SignupError => "signupError",
    UnexpectedError => "unexpectedError",
    EmailVerificationSent => "emailVerificationSent",
    GoToHomepage => "goToHomepage",
    NamePlaceholder => "namePlaceholder",
    EmailPlaceholder => "emailPlaceholder",
    PhonePlaceholder => "phonePlaceholder",
    PasswordPlaceholder => "passwordPlaceholder",
    ConfirmPasswordPlaceholder => "confirmPasswordPlaceholder",

    // Not found
    NotFoundTitle => "notFoundTitle",
    NotFoundMessage => "notFoundMessage",
}

const ENGLISH: &[(&str, &str)] = &[
    ("home", "Home"),
    ("services", "Services"),
    ("pricing", "Pricing"),
    ("map", "Map"),
    ("contact", "Contact"),
    ("signUp", "Sign Up"),
    ("signIn", "Sign in"),
    ("menu", "Menu"),
    ("heroTitle", "Advanced Medical Technology for Beauty and Aesthetics"),
    (
        "heroSubtitle",
        "Specializing in importing, selling, installing, and servicing LASER and dermatology equipment for professional beauty treatments.",
    ),
    ("getStarted", "Get Started"),
    ("learnMore", "Learn More"),
    ("servicesTitle", "Our Services"),
    (
        "servicesSubtitle",
        "Comprehensive medical technology solutions for aesthetic professionals",
    ),
    ("laserEquipment", "LASER Equipment"),
    ("laserDescription", "High-quality laser systems for various aesthetic treatments"),
    ("dermatologyEquipment", "Dermatology Equipment"),
    ("dermatologyDescription", "Professional dermatology devices for skin treatments"),
    ("installationServices", "Installation Services"),
    ("installationDescription", "Expert installation and setup of medical equipment"),
    ("maintenanceServices", "Maintenance Services"),
    ("maintenanceDescription", "Ongoing maintenance and support for your equipment"),
    ("pricingTitle", "Pricing"),
    ("pricingSubtitle", "Transparent pricing for our services and equipment"),
    ("service", "Service"),
    ("description", "Description"),
    ("price", "Price"),
    ("laserEquipmentPrice", "Professional LASER systems starting from"),
    ("dermatologyPrice", "Advanced dermatology systems"),
    ("installationPrice", "Professional installation and setup"),
    ("maintenancePrice", "Annual maintenance contract"),
    ("contactTitle", "Contact Us"),
    ("contactSubtitle", "Get in touch with our team"),
    ("name", "Name"),
    ("email", "Email"),
    ("subject", "Subject"),
    ("message", "Message"),
    ("send", "Send Message"),
    ("phone", "Phone"),
    ("address", "Address"),
    ("signUpTitle", "Create Account"),
    ("signUpSubtitle", "Join our platform to access exclusive services"),
    ("password", "Password"),
    ("confirmPassword", "Confirm Password"),
    ("createAccount", "Create Account"),
    ("signInTitle", "Sign In"),
    ("signInSubtitle", "Welcome back to your account"),
    ("signingIn", "Signing in..."),
    ("signInSuccess", "Signed in successfully!"),
    ("alreadyHaveAccount", "Already have an account?"),
    ("dontHaveAccount", "Don't have an account?"),
    ("mapTitle", "Our Location"),
    ("mapSubtitle", "Visit us at our headquarters in Vantaa, Finland"),
    (
        "companyInfo",
        "Sparkka Oy - Your trusted partner in medical aesthetic technology",
    ),
    ("allRightsReserved", "All rights reserved"),
    (
        "keyHints",
        "Tab: move  Enter: open  1-5: jump  l: language  m: menu  Backspace: back  q: quit",
    ),
    ("required", "This field is required"),
    ("invalidEmail", "Invalid email address"),
    ("passwordTooShort", "Password must be at least 8 characters"),
    ("passwordsDoNotMatch", "Passwords do not match"),
    ("success", "Success!"),
    ("error", "Error occurred. Please try again."),
    ("thankYou", "Thank you for your message!"),
    ("accountCreated", "Account created successfully!"),
    ("signupSuccess", "Signup successful! Check your email for verification."),
    ("signupError", "Signup failed. Please try again."),
    ("unexpectedError", "An unexpected error occurred. Please try again."),
    (
        "emailVerificationSent",
        "Please check your email for verification instructions.",
    ),
    ("goToHomepage", "Go to Homepage"),
    ("namePlaceholder", "Your full name"),
    ("emailPlaceholder", "your.email@example.com"),
    ("phonePlaceholder", "+358 40 123 4567"),
    ("passwordPlaceholder", "Minimum 8 characters"),
    ("confirmPasswordPlaceholder", "Confirm your password"),
    ("notFoundTitle", "Page not found"),
    ("notFoundMessage", "The page you are looking for does not exist."),
];

const FINNISH: &[(&str, &str)] = &[
    ("home", "Etusivu"),
    ("services", "Palvelut"),
    ("pricing", "Hinnoittelu"),
    ("map", "Kartta"),
    ("contact", "Yhteystiedot"),
    ("signUp", "Rekisteröidy"),
    ("signIn", "Kirjaudu sisään"),
    ("menu", "Valikko"),
    (
        "heroTitle",
        "Edistynyt lääketieteellinen teknologia kauneuteen ja estetiikkaan",
    ),
    (
        "heroSubtitle",
        "Erikoistumme LASER- ja dermatologiavälineiden maahantuontiin, myyntiin, asennukseen ja huoltoon ammattimaisiin kauneudenhoitoihin.",
    ),
    ("getStarted", "Aloita"),
    ("learnMore", "Lue lisää"),
    ("servicesTitle", "Palvelumme"),
    (
        "servicesSubtitle",
        "Kattavat lääketieteelliset teknologiaratkaisut estetiikan ammattilaisille",
    ),
    ("laserEquipment", "LASER-laitteet"),
    (
        "laserDescription",
        "Korkealaatuiset laserjärjestelmät erilaisiin esteettisiin hoitoihin",
    ),
    ("dermatologyEquipment", "Dermatologialaitteet"),
    ("dermatologyDescription", "Ammattimaiset dermatologialaitteet ihonhoitoihin"),
    ("installationServices", "Asennuspalvelut"),
    (
        "installationDescription",
        "Asiantunteva asennus ja lääketieteellisten laitteiden käyttöönotto",
    ),
    ("maintenanceServices", "Huoltopalvelut"),
    ("maintenanceDescription", "Jatkuva huolto ja tuki laitteillesi"),
    ("pricingTitle", "Hinnoittelu"),
    ("pricingSubtitle", "Läpinäkyvä hinnoittelu palveluille ja laitteille"),
    ("service", "Palvelu"),
    ("description", "Kuvaus"),
    ("price", "Hinta"),
    ("laserEquipmentPrice", "Ammattimaiset LASER-järjestelmät alkaen"),
    ("dermatologyPrice", "Edistyneet dermatologiajärjestelmät"),
    ("installationPrice", "Ammattimainen asennus ja käyttöönotto"),
    ("maintenancePrice", "Vuosittainen huoltosopimus"),
    ("contactTitle", "Ota yhteyttä"),
    ("contactSubtitle", "Ota yhteyttä tiimimme kanssa"),
    ("name", "Nimi"),
    ("email", "Sähköposti"),
    ("subject", "Aihe"),
    ("message", "Viesti"),
    ("send", "Lähetä viesti"),
    ("phone", "Puhelin"),
    ("address", "Osoite"),
    ("signUpTitle", "Luo tili"),
    ("signUpSubtitle", "Liity alustaamme päästäksesi eksklusiivisiin palveluihin"),
    ("password", "Salasana"),
    ("confirmPassword", "Vahvista salasana"),
    ("createAccount", "Luo tili"),
    ("signInTitle", "Kirjaudu sisään"),
    ("signInSubtitle", "Tervetuloa takaisin tilillesi"),
    ("signingIn", "Kirjaudutaan..."),
    ("signInSuccess", "Kirjautuminen onnistui!"),
    ("alreadyHaveAccount", "Onko sinulla jo tili?"),
    ("dontHaveAccount", "Eikö sinulla ole tiliä?"),
    ("mapTitle", "Sijaintimme"),
    ("mapSubtitle", "Vieraile päätoimistossamme Vantaalla, Suomessa"),
    (
        "companyInfo",
        "Sparkka Oy - Luotettava kumppanisi lääketieteellisessä estetiikkateknologiassa",
    ),
    ("allRightsReserved", "Kaikki oikeudet pidätetään"),
    (
        "keyHints",
        "Tab: siirry  Enter: avaa  1-5: hyppää  l: kieli  m: valikko  Backspace: takaisin  q: lopeta",
    ),
    ("required", "Tämä kenttä on pakollinen"),
    ("invalidEmail", "Virheellinen sähköpostiosoite"),
    ("passwordTooShort", "Salasanan tulee olla vähintään 8 merkkiä"),
    ("passwordsDoNotMatch", "Salasanat eivät täsmää"),
    ("success", "Onnistui!"),
    ("error", "Virhe tapahtui. Yritä uudelleen."),
    ("thankYou", "Kiitos viestistäsi!"),
    ("accountCreated", "Tili luotu onnistuneesti!"),
    (
        "signupSuccess",
        "Rekisteröityminen onnistui! Tarkista sähköpostisi vahvistusta varten.",
    ),
    ("signupError", "Rekisteröityminen epäonnistui. Yritä uudelleen."),
    ("unexpectedError", "Odottamaton virhe tapahtui. Yritä uudelleen."),
    (
        "emailVerificationSent",
        "Tarkista sähköpostisi vahvistusohjeiden saamiseksi.",
    ),
    ("goToHomepage", "Siirry etusivulle"),
    ("namePlaceholder", "Koko nimesi"),
    ("emailPlaceholder", "sinun.sahkoposti@esimerkki.com"),
    ("phonePlaceholder", "+358 40 123 4567"),
    ("passwordPlaceholder", "Vähintään 8 merkkiä"),
    ("confirmPasswordPlaceholder", "Vahvista salasanasi"),
    ("notFoundTitle", "Sivua ei löytynyt"),
    ("notFoundMessage", "Etsimääsi sivua ei ole olemassa."),
];

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Immutable (locale, key) -> text mapping.
#[derive(Debug)]
pub struct Catalog {
    english: HashMap<&'static str, &'static str>,
    finnish: HashMap<&'static str, &'static str>,
}

/// Keys present in one locale's table but not the other, plus typed keys
/// that neither table defines.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub missing_in_en: Vec<&'static str>,
    pub missing_in_fi: Vec<&'static str>,
    pub undefined_keys: Vec<&'static str>,
}

impl CoverageReport {
    pub fn is_symmetric(&self) -> bool {
        self.missing_in_en.is_empty()
            && self.missing_in_fi.is_empty()
            && self.undefined_keys.is_empty()
    }
}

impl Catalog {
    pub fn from_tables(
        english: &[(&'static str, &'static str)],
        finnish: &[(&'static str, &'static str)],
    ) -> Self {
        Self {
            english: english.iter().copied().collect(),
            finnish: finnish.iter().copied().collect(),
        }
    }

    /// The catalog the site ships with, built on first use.
    pub fn global() -> &'static Catalog {
        CATALOG.get_or_init(|| Catalog::from_tables(ENGLISH, FINNISH))
    }

    fn table(&self, locale: Locale) -> &HashMap<&'static str, &'static str> {
        match locale {
            Locale::English => &self.english,
            Locale::Finnish => &self.finnish,
        }
    }

    pub fn get(&self, locale: Locale, key: &str) -> Option<&'static str> {
        self.table(locale).get(key).copied()
    }

    /// Never fails: an unknown key comes back unchanged.
    pub fn lookup<'a>(&self, locale: Locale, key: &'a str) -> &'a str {
        match self.get(locale, key) {
            Some(text) => text,
            None => {
                warn!("missing translation for key {:?} in locale {}", key, locale);
                key
            }
        }
    }

    /// Keys defined for `from` that `to` lacks, sorted.
    pub fn missing_keys(&self, from: Locale, to: Locale) -> Vec<&'static str> {
        let target = self.table(to);
        let missing: BTreeSet<&'static str> = self
            .table(from)
            .keys()
            .copied()
            .filter(|key| !target.contains_key(key))
            .collect();
        missing.into_iter().collect()
    }

    pub fn coverage(&self) -> CoverageReport {
        let undefined_keys = TranslationKey::ALL
            .iter()
            .map(|key| key.id())
            .filter(|id| Locale::ALL.iter().any(|locale| self.get(*locale, id).is_none()))
            .collect();
        CoverageReport {
            missing_in_en: self.missing_keys(Locale::Finnish, Locale::English),
            missing_in_fi: self.missing_keys(Locale::English, Locale::Finnish),
            undefined_keys,
        }
    }
}

/// String-keyed lookup against the shipped catalog.
pub fn lookup(locale: Locale, key: &str) -> &str {
    Catalog::global().lookup(locale, key)
}

pub fn text(locale: Locale, key: TranslationKey) -> &'static str {
    Catalog::global().lookup(locale, key.id())
}
