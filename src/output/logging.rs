// src/output/logging.rs
use crate::core::prelude::*;
use env_logger::{Builder, Env, Target};
use log::{Level, LevelFilter};
use std::fs::OpenOptions;
use std::path::Path;

const RUST_LOG: &str = "RUST_LOG";

/// Routes the `log` facade into `log_path`; the terminal belongs to the UI.
///
/// Installed before the config is read, at `info`. [`apply_level`] narrows or
/// widens it afterwards unless `RUST_LOG` is set.
pub fn init(log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    // the builder filter stays open, `log::max_level` does the gating
    Builder::from_env(Env::default().filter_or(RUST_LOG, "trace"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            writeln!(
                buf,
                "{}",
                format_line(
                    &timestamp.to_string(),
                    record.level(),
                    record.target(),
                    &record.args().to_string()
                )
            )
        })
        .try_init()
        .map_err(|e| AppError::Config(format!("Logger: {}", e)))?;

    if std::env::var_os(RUST_LOG).is_none() {
        log::set_max_level(LevelFilter::Info);
    }
    Ok(())
}

/// Applies the configured `log_level`; `RUST_LOG` wins when present.
pub fn apply_level(level: &str) {
    if std::env::var_os(RUST_LOG).is_some() {
        return;
    }
    let filter = parse_level(level);
    log::set_max_level(filter);
    log::debug!("Log level set to {}", filter);
}

fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or_else(|_| {
        log::warn!("Unknown log level '{}', using info", level);
        LevelFilter::Info
    })
}

fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] {:<5} {}: {}", timestamp, level, target, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
    }

    #[test]
    fn test_format_line() {
        let line = format_line(
            "2026-10-19 12:00:00",
            Level::Info,
            "console_output::ui::screen",
            "started",
        );
        assert_eq!(
            line,
            "[2026-10-19 12:00:00] INFO  console_output::ui::screen: started"
        );
    }
}
