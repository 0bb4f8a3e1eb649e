use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::{LoggingConfig, resolve};

const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";

/// Installs the global logger.
///
/// A log4rs YAML file wins when configured and present; otherwise everything
/// at `level` and above goes to `file`. The terminal belongs to the UI, so
/// nothing is written to stdout or stderr.
pub fn init(settings: &LoggingConfig, workspace_root: &Path) -> Result<()> {
    if let Some(path) = &settings.config {
        let path = resolve(workspace_root, path);
        if path.exists() {
            log4rs::init_file(&path, Default::default())
                .with_context(|| format!("failed to load log4rs config {}", path.display()))?;
            return Ok(());
        }
    }

    let level = LevelFilter::from_str(&settings.level).unwrap_or(LevelFilter::Info);
    let file = resolve(workspace_root, &settings.file);
    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(&file)
        .with_context(|| format!("failed to open log file {}", file.display()))?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(level))
        .context("invalid logging configuration")?;
    log4rs::init_config(config).context("a logger is already installed")?;
    Ok(())
}
