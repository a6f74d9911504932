use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::definitions::{LayoutMode, Target};
use crate::i18n::TranslationKey;
use crate::nav::NavEntry;
use crate::pages::{COMPANY_NAME, PageLine};

mod theme;
use theme::*;

fn cell_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}

/// The single-row strip of `area` starting at column `x` on row `y`.
fn strip(area: Rect, x: u16, y: u16) -> Rect {
    Rect {
        x,
        y,
        width: area.right().saturating_sub(x),
        height: 1,
    }
}

/// Greedy word wrap measured in terminal cells.
fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        let current_width = UnicodeWidthStr::width(current.as_str());
        if !current.is_empty() && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn link_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(LINK_ACTIVE_TEXT)
            .bg(LINK_ACTIVE_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(LINK_TEXT).bg(HEADER_BG)
    }
}

pub fn render(f: &mut Frame<'_>, app: &mut App) {
    let size = f.size();
    app.layout_mode = LayoutMode::for_width(size.width, app.mobile_breakpoint());
    app.targets.clear();

    let base = Block::default().style(Style::default().bg(BG_PRIMARY));
    f.render_widget(base, size);

    let nav = app.nav_entries();
    let auth = app.auth_entries();
    let header_height = match app.layout_mode {
        LayoutMode::Desktop => 2,
        LayoutMode::Mobile if app.menu.is_expanded() => 3 + nav.len() as u16,
        LayoutMode::Mobile => 2,
    };

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(size);
    let header_area = vertical[0];
    let page_area = vertical[1];
    let footer_area = vertical[2];

    match app.layout_mode {
        LayoutMode::Desktop => render_desktop_header(f, app, header_area, &nav, &auth),
        LayoutMode::Mobile => render_mobile_header(f, app, header_area, &nav, &auth),
    }
    render_page(f, app, page_area);
    render_footer(f, app, footer_area);

    if app.focus.is_some_and(|idx| idx >= app.targets.len()) {
        app.focus = None;
    }
}

/// Draws `text` at the start of `area` and registers it as `target`.
/// Returns the width used.
fn draw_target(f: &mut Frame<'_>, app: &mut App, area: Rect, text: &str, style: Style, target: Target) -> u16 {
    let Some(rect) = text_rect(f, area, text) else {
        return 0;
    };
    let style = if app.focus == Some(app.targets.len()) {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };
    f.render_widget(Paragraph::new(text).style(style), rect);
    app.targets.register(rect, target);
    rect.width
}

fn draw_text(f: &mut Frame<'_>, area: Rect, text: &str, style: Style) -> u16 {
    let Some(rect) = text_rect(f, area, text) else {
        return 0;
    };
    f.render_widget(Paragraph::new(text).style(style), rect);
    rect.width
}

/// The one-row rect `text` occupies at the start of `area`, clipped to the
/// frame. `None` when nothing of it is visible.
fn text_rect(f: &Frame<'_>, area: Rect, text: &str) -> Option<Rect> {
    let wanted = Rect {
        width: cell_width(text).min(area.width),
        height: area.height.min(1),
        ..area
    };
    let rect = wanted.intersection(f.size());
    (rect.width > 0 && rect.height > 0).then_some(rect)
}

/// Logo badge plus company name; the name links home.
fn draw_brand(f: &mut Frame<'_>, app: &mut App, area: Rect, y: u16) -> u16 {
    let badge = Style::default()
        .fg(BRAND_BADGE_FG)
        .bg(BRAND_BADGE_BG)
        .add_modifier(Modifier::BOLD);
    let mut x = area.x.saturating_add(1);
    x += draw_text(f, strip(area, x, y), " S ", badge);
    x += 1;
    let name_style = Style::default()
        .fg(FG_PRIMARY)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD);
    x += draw_target(f, app, strip(area, x, y), COMPANY_NAME, name_style, Target::Link("/"));
    x
}

fn header_block() -> Block<'static> {
    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(HEADER_BORDER))
        .style(Style::default().bg(HEADER_BG))
}

fn locale_label(app: &App) -> String {
    format!("[{}]", app.locale.active().badge())
}

fn auth_style(path: &str, active: bool) -> Style {
    if path == "/signup" {
        Style::default()
            .fg(BUTTON_FG)
            .bg(BUTTON_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        link_style(active)
    }
}

fn render_desktop_header(
    f: &mut Frame<'_>,
    app: &mut App,
    area: Rect,
    nav: &[NavEntry],
    auth: &[NavEntry],
) {
    f.render_widget(header_block(), area);
    let y = area.y;
    let mut x = draw_brand(f, app, area, y).saturating_add(3);

    for entry in nav {
        let label = format!(" {} ", entry.label);
        x += draw_target(
            f,
            app,
            strip(area, x, y),
            &label,
            link_style(entry.is_active),
            Target::Link(entry.path),
        );
        x = x.saturating_add(1);
    }

    // Language switch and account links are right-aligned.
    let locale = locale_label(app);
    let auth_labels: Vec<String> = auth.iter().map(|e| format!(" {} ", e.label)).collect();
    let group_width = cell_width(&locale)
        + auth_labels.iter().map(|l| cell_width(l) + 1).sum::<u16>();
    let mut right_x = area
        .right()
        .saturating_sub(group_width + 1)
        .max(x.saturating_add(1));

    right_x += draw_target(
        f,
        app,
        strip(area, right_x, y),
        &locale,
        link_style(false),
        Target::LocaleSwitch,
    );
    for (entry, label) in auth.iter().zip(&auth_labels) {
        right_x = right_x.saturating_add(1);
        right_x += draw_target(
            f,
            app,
            strip(area, right_x, y),
            label,
            auth_style(entry.path, entry.is_active),
            Target::Link(entry.path),
        );
    }
}

fn render_mobile_header(
    f: &mut Frame<'_>,
    app: &mut App,
    area: Rect,
    nav: &[NavEntry],
    auth: &[NavEntry],
) {
    f.render_widget(header_block(), area);
    let y = area.y;
    draw_brand(f, app, area, y);

    let expanded = app.menu.is_expanded();
    let button = format!(
        "{} {}",
        app.locale.text(TranslationKey::Menu),
        if expanded { "[×]" } else { "[≡]" }
    );
    let button_x = area.right().saturating_sub(cell_width(&button) + 1);
    draw_target(
        f,
        app,
        strip(area, button_x, y),
        &button,
        link_style(false),
        Target::MenuButton,
    );

    if !expanded {
        return;
    }

    let left = area.x.saturating_add(1);
    let mut row = y.saturating_add(1);
    for entry in nav {
        if row >= area.bottom() {
            return;
        }
        let label = format!(" {} ", entry.label);
        draw_target(
            f,
            app,
            strip(area, left, row),
            &label,
            link_style(entry.is_active),
            Target::Link(entry.path),
        );
        row = row.saturating_add(1);
    }

    if row >= area.bottom() {
        return;
    }
    let locale = locale_label(app);
    let mut x = left;
    x += draw_target(f, app, strip(area, x, row), &locale, link_style(false), Target::LocaleSwitch);
    for entry in auth {
        x = x.saturating_add(1);
        let label = format!(" {} ", entry.label);
        x += draw_target(
            f,
            app,
            strip(area, x, row),
            &label,
            auth_style(entry.path, entry.is_active),
            Target::Link(entry.path),
        );
    }
}

/// Draws wrapped text from row `y` and returns the next free row.
fn draw_wrapped(f: &mut Frame<'_>, area: Rect, mut y: u16, text: &str, style: Style) -> u16 {
    for line in wrap_text(text, area.width) {
        if y >= area.bottom() {
            break;
        }
        draw_text(f, strip(area, area.x, y), &line, style);
        y += 1;
    }
    y
}

fn render_page(f: &mut Frame<'_>, app: &mut App, area: Rect) {
    let content = app.current_page().content(app.locale.active());
    let inner = Rect {
        x: area.x.saturating_add(2),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(1),
    };
    let heading = Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(FG_PRIMARY);
    let dim = Style::default().fg(FG_DIM);

    let mut y = draw_wrapped(f, inner, inner.y, content.title, heading);
    y = draw_wrapped(f, inner, y, content.subtitle, dim);
    y = y.saturating_add(1);

    for line in content.lines {
        if y >= inner.bottom() {
            break;
        }
        match line {
            PageLine::Heading(text) => y = draw_wrapped(f, inner, y, text, heading),
            PageLine::Text(text) => y = draw_wrapped(f, inner, y, text, dim),
            PageLine::Item { title, detail } => {
                draw_text(f, strip(inner, inner.x, y), &format!("• {title}"), heading);
                let indented = Rect {
                    x: inner.x.saturating_add(2),
                    width: inner.width.saturating_sub(2),
                    ..inner
                };
                y = draw_wrapped(f, indented, y + 1, detail, body);
            }
            PageLine::Price {
                service,
                description,
                price,
            } => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(30),
                        Constraint::Percentage(50),
                        Constraint::Percentage(20),
                    ])
                    .split(strip(inner, inner.x, y));
                draw_text(f, columns[0], service, heading);
                draw_text(f, columns[1], description, body);
                draw_text(f, columns[2], price, Style::default().fg(PRICE_FG).add_modifier(Modifier::BOLD));
                y += 1;
            }
            PageLine::Field { label, placeholder } => {
                let mut x = inner.x;
                x += draw_text(f, strip(inner, x, y), &format!("{label}: "), heading);
                draw_text(f, strip(inner, x, y), &format!("[ {placeholder} ]"), dim);
                y += 1;
            }
            PageLine::Button(label) => {
                let style = Style::default().fg(BUTTON_FG).bg(BUTTON_BG);
                draw_text(f, strip(inner, inner.x, y), &format!(" {label} "), style);
                y += 1;
            }
            PageLine::Link { label, path } => {
                let text = format!("→ {label}");
                let active = path == app.current_path();
                draw_target(f, app, strip(inner, inner.x, y), &text, link_style(active), Target::Link(path));
                y += 1;
            }
            PageLine::Blank => y += 1,
        }
    }
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let style = Style::default().fg(FOOTER_FG).bg(FOOTER_BG);
    let company = format!(
        "{} · © {} {}",
        app.locale.text(TranslationKey::CompanyInfo),
        COMPANY_NAME,
        app.locale.text(TranslationKey::AllRightsReserved)
    );
    let lines = vec![
        Line::from(company),
        Line::from(app.locale.text(TranslationKey::KeyHints)),
    ];
    f.render_widget(Paragraph::new(lines).style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Action;
    use crate::config::Settings;
    use crate::context::Context;
    use crate::i18n::LocaleStore;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn app() -> App {
        App::new(&Settings::default(), Context::with_locale(LocaleStore::default())).unwrap()
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width).map(|x| buffer.get(x, y).symbol()).collect()
    }

    fn screen(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| row(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn link_targets(app: &App) -> Vec<&'static str> {
        app.targets
            .targets()
            .filter_map(|t| match t {
                Target::Link(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("  ", 10), Vec::<String>::new());
        assert_eq!(wrap_text("unbreakable", 4), vec!["unbreakable"]);
    }

    #[test]
    fn wide_terminal_shows_inline_navigation() {
        let mut app = app();
        let buffer = draw(&mut app, 140, 30);
        let header = row(&buffer, 0);

        assert_eq!(app.layout_mode, LayoutMode::Desktop);
        for label in ["Home", "Services", "Pricing", "Map", "Contact", "[EN]", "Sign in", "Sign Up"] {
            assert!(header.contains(label), "missing {label} in {header:?}");
        }
        assert!(!app.targets.targets().any(|t| t == Target::MenuButton));
    }

    #[test]
    fn active_link_is_highlighted() {
        let mut app = app();
        app.execute_action(Action::FollowLink("/services"));
        let buffer = draw(&mut app, 140, 30);
        let header = row(&buffer, 0);

        let services_x = header.find(" Services ").unwrap() as u16 + 1;
        let pricing_x = header.find(" Pricing ").unwrap() as u16 + 1;
        assert_eq!(buffer.get(services_x, 0).bg, LINK_ACTIVE_BG);
        assert_ne!(buffer.get(pricing_x, 0).bg, LINK_ACTIVE_BG);
    }

    #[test]
    fn narrow_terminal_collapses_navigation() {
        let mut app = app();
        let buffer = draw(&mut app, 60, 30);

        assert_eq!(app.layout_mode, LayoutMode::Mobile);
        assert!(!screen(&buffer).contains("Pricing"));
        assert!(app.targets.targets().any(|t| t == Target::MenuButton));
        assert!(!link_targets(&app).contains(&"/pricing"));
    }

    #[test]
    fn expanded_menu_lists_every_link() {
        let mut app = app();
        draw(&mut app, 60, 30);
        app.execute_action(Action::ToggleMenu);
        let buffer = draw(&mut app, 60, 30);

        assert!(screen(&buffer).contains("Pricing"));
        let links = link_targets(&app);
        for path in ["/", "/services", "/pricing", "/map", "/contact", "/signin", "/signup"] {
            assert!(links.contains(&path), "missing {path}");
        }
    }

    #[test]
    fn menu_button_is_labelled_in_the_active_language() {
        let mut app = app();
        let buffer = draw(&mut app, 60, 30);
        assert!(row(&buffer, 0).contains("Menu [≡]"));

        app.execute_action(Action::ToggleLocale);
        let buffer = draw(&mut app, 60, 30);
        assert!(row(&buffer, 0).contains("Valikko [≡]"));
    }

    #[test]
    fn expanded_menu_fits_a_short_terminal() {
        let mut app = app();
        draw(&mut app, 60, 6);
        app.execute_action(Action::ToggleMenu);
        assert!(app.menu.is_expanded());

        let buffer = draw(&mut app, 60, 6);

        assert!(row(&buffer, 1).contains("Home"));
        let frame = Rect::new(0, 0, 60, 6);
        for index in 0..app.targets.len() {
            let area = app.targets.area(index).unwrap();
            assert_eq!(area.intersection(frame), area);
        }
    }

    #[test]
    fn single_row_terminal_does_not_panic() {
        let mut app = app();
        draw(&mut app, 140, 1);
        app.execute_action(Action::FollowLink("/pricing"));
        draw(&mut app, 140, 1);
        draw(&mut app, 40, 1);
    }

    #[test]
    fn finnish_labels_after_switch() {
        let mut app = app();
        app.execute_action(Action::ToggleLocale);
        let buffer = draw(&mut app, 140, 30);
        let header = row(&buffer, 0);

        assert!(header.contains("Etusivu"));
        assert!(header.contains("[FI]"));
        assert!(!header.contains("Home"));
    }

    #[test]
    fn unknown_route_renders_not_found_page() {
        let mut app = app();
        app.execute_action(Action::FollowLink("/services/"));
        let buffer = draw(&mut app, 140, 30);

        assert!(screen(&buffer).contains("Page not found"));
        let header_active = app.nav_entries().iter().any(|e| e.is_active);
        assert!(!header_active);
    }

    #[test]
    fn stale_focus_is_dropped() {
        let mut app = app();
        app.focus = Some(500);
        draw(&mut app, 140, 30);
        assert_eq!(app.focus, None);
    }
}
