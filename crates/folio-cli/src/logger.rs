use crate::error::{CliError, Result as CliErrorResult};

use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{Record, debug};

/// Initialize logger with fern
///
/// Output goes to stderr so command output on stdout stays parseable.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(
    log_level: folio_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliErrorResult<()> {
    let level_filter = log_level.0;

    let output: Output = match log_file {
        Some(ref path) => open_log_file(path)?.into(),
        None => std::io::stderr().into(),
    };
    let colors = (colored && log_file.is_none()).then(level_colors);

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| match colors {
            Some(ref colors) => write_line(out, message, record, colors.color(record.level())),
            None => write_line(out, message, record, record.level()),
        })
        .chain(output)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => debug!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => debug!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

/// Open `path` for appending, creating its directory first.
pub(crate) fn open_log_file(path: &Path) -> CliErrorResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::logger(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            CliError::logger(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ))
        })
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// `[<time> - <LEVEL>] <message> [<file>:<line>]`
fn write_line<L: fmt::Display>(
    out: FormatCallback<'_>,
    message: &fmt::Arguments<'_>,
    record: &Record<'_>,
    level: L,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
