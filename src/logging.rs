/// Structured logging for the InfraScope service
///
/// Provides context-rich logging with feed/area identifiers, timestamps,
/// and severity levels. Supports both console output and file-based
/// logging. Only the provider and binary log; the scoring core is pure.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;

use crate::error::ProviderError;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Data Source Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Jma,
    Synthetic,
    System,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Jma => write!(f, "JMA"),
            DataSource::Synthetic => write!(f, "MOCK"),
            DataSource::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureType {
    /// Expected failure - the source simply has no feed for this collection
    Expected,
    /// Unexpected failure - service degradation or a feed format change
    Unexpected,
    /// Unknown - cannot determine if this is expected or not
    Unknown,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
            FailureType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Classify a feed failure by error kind.
pub fn classify_feed_failure(err: &ProviderError) -> FailureType {
    match err {
        ProviderError::Unsupported(_) => FailureType::Expected,
        ProviderError::Status(code) if *code >= 500 => FailureType::Unexpected,
        ProviderError::Parse(_) | ProviderError::Malformed(_) => FailureType::Unexpected,
        ProviderError::Status(_) => FailureType::Unknown,
        // Transport failures are usually the network, not the feed
        ProviderError::Http(_) => FailureType::Unknown,
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        if let Ok(mut slot) = LOGGER.lock() {
            *slot = Some(logger);
        }
    }

    fn format_entry(level: LogLevel, source: DataSource, area: Option<&str>, message: &str) -> String {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let area_part = area.map(|s| format!(" [{}]", s)).unwrap_or_default();
        format!("{} {} {}{}: {}", timestamp, level, source, area_part, message)
    }

    /// Console rendering of an entry. All levels are written to stderr;
    /// stdout belongs to command output.
    fn console_line(&self, level: LogLevel, source: DataSource, area: Option<&str>, message: &str) -> String {
        if self.console_timestamps {
            return Self::format_entry(level, source, area, message);
        }
        let area_part = area.map(|s| format!(" [{}]", s)).unwrap_or_default();
        match level {
            LogLevel::Error => format!("   ✗ {}{}: {}", source, area_part, message),
            LogLevel::Warning => format!("   ⚠ {}{}: {}", source, area_part, message),
            LogLevel::Info => format!("   {}", message),
            LogLevel::Debug => format!("   [DEBUG] {}", message),
        }
    }

    fn log(&self, level: LogLevel, source: DataSource, area: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        eprintln!("{}", self.console_line(level, source, area, message));

        if let Some(ref path) = self.log_file {
            let log_entry = Self::format_entry(level, source, area, message);
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

fn emit(level: LogLevel, source: DataSource, area: Option<&str>, message: &str) {
    if let Ok(guard) = LOGGER.lock() {
        if let Some(logger) = guard.as_ref() {
            logger.log(level, source, area, message);
        }
    }
}

pub fn info(source: DataSource, area: Option<&str>, message: &str) {
    emit(LogLevel::Info, source, area, message);
}

pub fn warn(source: DataSource, area: Option<&str>, message: &str) {
    emit(LogLevel::Warning, source, area, message);
}

pub fn error(source: DataSource, area: Option<&str>, message: &str) {
    emit(LogLevel::Error, source, area, message);
}

pub fn debug(source: DataSource, area: Option<&str>, message: &str) {
    emit(LogLevel::Debug, source, area, message);
}

// ---------------------------------------------------------------------------
// Structured Failure Logging
// ---------------------------------------------------------------------------

/// Log a feed failure with automatic classification. `collection` names
/// what was being fetched ("rivers", "landslides", ...).
pub fn log_feed_failure(source: DataSource, collection: &str, err: &ProviderError) {
    let failure_type = classify_feed_failure(err);
    let message = format!("fetch failed [{}]: {}", failure_type, err);

    match failure_type {
        FailureType::Expected => debug(source, Some(collection), &message),
        FailureType::Unexpected => error(source, Some(collection), &message),
        FailureType::Unknown => warn(source, Some(collection), &message),
    }
}

/// Log the size of one refresh cycle.
pub fn log_snapshot_summary(rivers: usize, roads: usize, landslides: usize) {
    let message = format!(
        "Snapshot ready: {} river stations, {} road entries, {} landslide areas",
        rivers, roads, landslides
    );

    if rivers + roads + landslides == 0 {
        warn(DataSource::System, None, &message);
    } else {
        info(DataSource::System, None, &message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!(" debug ".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_failure_classification() {
        assert_eq!(
            classify_feed_failure(&ProviderError::Unsupported("roads")),
            FailureType::Expected
        );
        assert_eq!(classify_feed_failure(&ProviderError::Status(503)), FailureType::Unexpected);
        assert_eq!(classify_feed_failure(&ProviderError::Status(404)), FailureType::Unknown);
        assert_eq!(
            classify_feed_failure(&ProviderError::Malformed("not an object".into())),
            FailureType::Unexpected
        );
    }

    #[test]
    fn test_entry_format_includes_area() {
        let entry = Logger::format_entry(LogLevel::Warning, DataSource::Jma, Some("rivers"), "timeout");
        assert!(entry.ends_with("WARN JMA [rivers]: timeout"), "got {}", entry);
    }

    #[test]
    fn test_console_line_formats() {
        let plain = Logger { min_level: LogLevel::Debug, log_file: None, console_timestamps: false };
        assert_eq!(plain.console_line(LogLevel::Info, DataSource::System, None, "ready"), "   ready");
        assert_eq!(
            plain.console_line(LogLevel::Warning, DataSource::Jma, Some("rivers"), "timeout"),
            "   ⚠ JMA [rivers]: timeout"
        );

        let stamped = Logger { console_timestamps: true, ..plain };
        let line = stamped.console_line(LogLevel::Info, DataSource::System, None, "ready");
        assert!(line.ends_with("INFO SYS: ready"), "got {}", line);
    }
}
