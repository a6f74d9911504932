use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures_util::StreamExt;
use log::info;
use serde_json::json;

use sparkka_site::app::App;
use sparkka_site::config::Settings;
use sparkka_site::context::Context;
use sparkka_site::event::Event;
use sparkka_site::i18n::{Catalog, Locale, LocaleStore};
use sparkka_site::pages::Page;
use sparkka_site::tui::{self, Tui};
use sparkka_site::{logging, nav, ui};

#[derive(Debug, Parser)]
#[command(name = "sparkka-site", version, about = "Sparkka Oy site in the terminal")]
struct Cli {
    /// Settings file (defaults to ./sparkka.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Browse the site interactively (default)
    Tui,
    /// Print the navigation entries for a locale and path as JSON
    Nav {
        #[arg(long, default_value = "en")]
        locale: String,
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Report translation keys missing from either locale
    Catalog {
        /// Exit with a failure status when the locales differ
        #[arg(long)]
        check: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let settings = Settings::load(cli.config.as_deref())?;
            run_tui(&settings).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Nav { locale, path } => {
            logging::init_stderr_logging();
            print_nav(&locale, &path)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Catalog { check } => {
            logging::init_stderr_logging();
            let report = Catalog::global().coverage();
            println!("{}", serde_json::to_string_pretty(&report)?);
            if check && !report.is_symmetric() {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_nav(locale: &str, path: &str) -> Result<()> {
    let locale: Locale = locale.parse()?;
    let context = Context::with_locale(LocaleStore::new(locale));
    let store = context.locale()?;
    let output = json!({
        "locale": store.active(),
        "path": path,
        "page": format!("{:?}", Page::from_path(path)),
        "nav": nav::build_nav_entries(store.active(), path),
        "auth": nav::build_auth_entries(store.active(), path),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run_tui(settings: &Settings) -> Result<()> {
    logging::init_file_logging(settings)?;
    info!("Starting sparkka-site");

    let context = Context::with_locale(LocaleStore::default());
    let mut app = App::new(settings, context)?;

    tui::install_panic_hook();
    let mut terminal = tui::init().context("failed to set up the terminal")?;
    let result = event_loop(&mut terminal, &mut app).await;
    tui::restore().context("failed to restore the terminal")?;
    result
}

async fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut stream = EventStream::new();

    while !app.should_quit {
        if app.take_redraw() {
            terminal.draw(|frame| ui::render(frame, app))?;
        }

        let event = match stream.next().await {
            Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
            Some(Ok(CrosstermEvent::Mouse(mouse))) => Event::Mouse(mouse),
            Some(Ok(CrosstermEvent::Resize(columns, rows))) => Event::Resize(columns, rows),
            // Focus and paste events are not used.
            Some(Ok(_)) => continue,
            Some(Err(err)) => return Err(err).context("terminal event stream failed"),
            None => break,
        };
        app.handle_event(event);
    }

    info!("Exiting sparkka-site");
    Ok(())
}
