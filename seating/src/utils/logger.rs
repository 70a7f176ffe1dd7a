//! Logging Infrastructure
//!
//! The planner writes its JSON report to stdout when `SEATING_OUTPUT` is
//! unset, so callers can pipe it straight into the application. Console logs
//! therefore go to stderr and never mix with the report. With `LOG_DIR`
//! pointing at an existing directory, logs go to daily rolling files
//! (`seating-planner.YYYY-MM-DD`) instead, without ANSI colors.

use std::path::Path;

use tracing::Level;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(parse_level(log_level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(dir) = log_dir.map(Path::new)
        && dir.is_dir()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "seating-planner");
        subscriber.with_ansi(false).with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}

/// `LOG_LEVEL` value to a max level, `info` when unset or unknown
fn parse_level(log_level: Option<&str>) -> Level {
    log_level
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_level(Some(" WARN ")), Level::WARN);
        assert_eq!(parse_level(Some("chatty")), Level::INFO);
        assert_eq!(parse_level(None), Level::INFO);
    }
}
