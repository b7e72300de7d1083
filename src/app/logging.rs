//! logging stuff
use {
    crate::config::options::{LoggingConfig, LoggingFormat},
    color_eyre::Result,
    tracing::{debug, level_filters::LevelFilter, subscriber},
    tracing_subscriber::FmtSubscriber,
};

/// turn a level name into a filter, unknown names only let errors through
pub fn string_to_level_filter(lvl: &str) -> LevelFilter {
    match lvl.to_lowercase().as_str() {
        "d" | "debug" | "dbg" => LevelFilter::DEBUG,
        "t" | "trace" | "trc" => LevelFilter::TRACE,
        "e" | "error" | "err" => LevelFilter::ERROR,
        "i" | "info" | "inf" => LevelFilter::INFO,
        "w" | "warn" | "wrn" => LevelFilter::WARN,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::ERROR,
    }
}

/// setup logging
///
/// logs go to stderr so stdout only carries the tool's own output
///
/// # Errors
///
/// returns an error if a global subscriber is already installed
pub fn setup(cfg: &LoggingConfig, verbose: bool) -> Result<()> {
    if !cfg.enable.unwrap_or(true) {
        return Ok(());
    }

    let max_level = if verbose {
        LevelFilter::DEBUG
    } else {
        string_to_level_filter(cfg.level.as_deref().unwrap_or("warn"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_max_level(max_level)
        .with_ansi(cfg.ansi.unwrap_or(true))
        .with_line_number(cfg.line_numbers.unwrap_or(false))
        .with_target(cfg.event_targets.unwrap_or(false));

    match cfg.format.unwrap_or_default() {
        LoggingFormat::Pretty => {
            subscriber::set_global_default(subscriber.pretty().finish())?;
        }
        LoggingFormat::Compact => {
            subscriber::set_global_default(subscriber.compact().finish())?;
        }
    }

    debug!("Logging setup successfully");
    Ok(())
}
