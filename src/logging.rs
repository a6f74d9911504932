//! Logger setup. The interactive view owns the terminal, so it logs to a file
//! through log4rs; the one-shot subcommands log to stderr through env_logger.

use anyhow::{Context, Result};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::Settings;

const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";

pub fn init_file_logging(settings: &Settings) -> Result<()> {
    if let Some(path) = &settings.log_config {
        return log4rs::init_file(path, Default::default())
            .with_context(|| format!("failed to load log config: {}", path.display()));
    }

    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(&settings.log_file)
        .with_context(|| format!("failed to open log file: {}", settings.log_file.display()))?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(settings.log_level_filter()))
        .context("invalid logger configuration")?;
    log4rs::init_config(config).context("logger already initialized")?;
    Ok(())
}

/// `RUST_LOG` wins; otherwise only warnings are shown.
pub fn init_stderr_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .try_init();
}
