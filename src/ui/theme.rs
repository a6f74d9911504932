use ratatui::style::Color;

pub const BG_PRIMARY: Color = Color::Rgb(255, 255, 255);
pub const FG_PRIMARY: Color = Color::Rgb(17, 24, 39);
pub const FG_DIM: Color = Color::Rgb(75, 85, 99);

pub const HEADER_BG: Color = Color::Rgb(255, 255, 255);
pub const HEADER_BORDER: Color = Color::Rgb(229, 231, 235);
pub const BRAND_BADGE_BG: Color = Color::Rgb(37, 99, 235);
pub const BRAND_BADGE_FG: Color = Color::Rgb(255, 255, 255);

pub const LINK_TEXT: Color = Color::Rgb(55, 65, 81);
pub const LINK_ACTIVE_TEXT: Color = Color::Rgb(37, 99, 235);
pub const LINK_ACTIVE_BG: Color = Color::Rgb(239, 246, 255);

pub const BUTTON_BG: Color = Color::Rgb(37, 99, 235);
pub const BUTTON_FG: Color = Color::Rgb(255, 255, 255);

pub const FOOTER_BG: Color = Color::Rgb(17, 24, 39);
pub const FOOTER_FG: Color = Color::Rgb(209, 213, 219);
pub const PRICE_FG: Color = Color::Rgb(37, 99, 235);
