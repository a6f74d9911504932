//! Localization and navigation state for the Sparkka Oy site, with a terminal
//! front end that renders the header, pages and footer.

pub mod app;
pub mod config;
pub mod context;
pub mod definitions;
pub mod error;
pub mod event;
pub mod i18n;
pub mod logging;
pub mod nav;
pub mod observer;
pub mod pages;
pub mod route;
pub mod tui;
pub mod ui;
