// src/util/log.rs

//! Logger Utility - file-based, per-level logging so the terminal UI stays clean
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::{LazyLock, OnceLock};
use chrono::Local;

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Directory chosen by the binary before the first log line is written
static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Global logger instance
pub static LOGGER: LazyLock<Logger> = LazyLock::new(|| {
    let dir = resolve_log_dir();
    Logger::new(&dir).unwrap_or_else(|e| {
        eprintln!("Logging disabled, cannot open {}: {}", dir.display(), e);
        Logger::disabled(dir)
    })
});

/// Pin the log directory. Only the first call has any effect, and only if no
/// line has been logged yet. Also settles the `DEBUG` switch.
pub fn init_log_dir(dir: impl Into<PathBuf>) {
    let _ = LOG_DIR.set(dir.into());
    debug_enabled();
}

/// `DEBUG=true` in the environment, read once on first use
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("DEBUG").unwrap_or_default() == "true")
}

fn resolve_log_dir() -> PathBuf {
    if let Some(dir) = LOG_DIR.get() {
        return dir.clone();
    }
    std::env::var("FIELD_BUILDER_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./logs"))
}

/// Log severity levels
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn filename(&self) -> &str {
        match self {
            LogLevel::Error => "error.log",
            LogLevel::Warn => "warn.log",
            LogLevel::Info => "info.log",
            LogLevel::Debug => "debug.log",
        }
    }
}

/// Logger that writes to separate files by severity
pub struct Logger {
    log_dir: PathBuf,
    error_file: Option<Mutex<File>>,
    warn_file: Option<Mutex<File>>,
    info_file: Option<Mutex<File>>,
    debug_file: Option<Mutex<File>>,
}

impl Logger {
    /// Create a new logger writing into `log_dir`
    pub fn new(log_dir: &Path) -> std::io::Result<Self> {
        debug_enabled();

        create_dir_all(log_dir)?;

        // Truncate: every run starts with fresh files
        let open = |level: LogLevel| -> std::io::Result<Option<Mutex<File>>> {
            Ok(Some(Mutex::new(File::create(log_dir.join(level.filename()))?)))
        };

        Ok(Self {
            log_dir: log_dir.to_path_buf(),
            error_file: open(LogLevel::Error)?,
            warn_file: open(LogLevel::Warn)?,
            info_file: open(LogLevel::Info)?,
            debug_file: open(LogLevel::Debug)?,
        })
    }

    /// A logger that drops everything
    pub fn disabled(log_dir: PathBuf) -> Self {
        Self {
            log_dir,
            error_file: None,
            warn_file: None,
            info_file: None,
            debug_file: None,
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    fn write_log(&self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let formatted = format!("[{}] [{}] {}\n", timestamp, level.as_str(), message);

        let file = match level {
            LogLevel::Error => &self.error_file,
            LogLevel::Warn => &self.warn_file,
            LogLevel::Info => &self.info_file,
            LogLevel::Debug => &self.debug_file,
        };

        if let Some(Ok(mut file)) = file.as_ref().map(|f| f.lock()) {
            let _ = file.write_all(formatted.as_bytes());
            let _ = file.flush();
        }
    }

    pub fn error(&self, message: &str) {
        self.write_log(LogLevel::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.write_log(LogLevel::Warn, message);
    }

    pub fn info(&self, message: &str) {
        self.write_log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.write_log(LogLevel::Debug, message);
    }
}

/// Convenience macro for error logging with formatting
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        ::tracing::error!("{}", message);
        $crate::util::log::LOGGER.error(&message);
    }};
}

/// Convenience macro for warning logging with formatting
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        ::tracing::warn!("{}", message);
        $crate::util::log::LOGGER.warn(&message);
    }};
}

/// Convenience macro for info logging with formatting
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        ::tracing::info!("{}", message);
        $crate::util::log::LOGGER.info(&message);
    }};
}

/// Convenience macro for debug logging with formatting
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if $crate::util::log::debug_enabled() {
            let message = format!($($arg)*);
            ::tracing::debug!("{}", message);
            $crate::util::log::LOGGER.debug(&message);
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_logger_creation() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let logger = Logger::new(temp_dir.path()).expect("Failed to create logger");

        logger.error("Test error");
        logger.warn("Test warning");
        logger.info("Test info");
        logger.debug("Test debug");

        assert!(temp_dir.path().join("error.log").exists());
        assert!(temp_dir.path().join("warn.log").exists());
        assert!(temp_dir.path().join("info.log").exists());
        assert!(temp_dir.path().join("debug.log").exists());

        let info = fs::read_to_string(temp_dir.path().join("info.log")).unwrap();
        assert!(info.contains("[INFO] Test info"));
    }

    #[test]
    fn test_debug_switch_is_settled_before_any_logger() {
        let enabled = debug_enabled();
        assert_eq!(DEBUG_ENABLED.get(), Some(&enabled));
        assert_eq!(debug_enabled(), enabled);
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let logger = Logger::disabled(temp_dir.path().join("never"));
        logger.error("dropped");
        assert!(!logger.log_dir().exists());
    }
}
