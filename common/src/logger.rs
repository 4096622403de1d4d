use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
        }
    }
}

pub struct Logger {
    prefix: Option<String>,
    min_level: LogLevel,
}

impl Logger {
    fn new(prefix: Option<String>, min_level: LogLevel) -> Self {
        Self { prefix, min_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let line = self.format_line(level, message);
        match level {
            LogLevel::Warn => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}] {}", timestamp, prefix, level.label(), message),
            None => format!("[{}][{}] {}", timestamp, level.label(), message),
        }
    }
}

pub fn init_logger(prefix: Option<String>, min_level: LogLevel) {
    LOGGER.get_or_init(|| Logger::new(prefix, min_level));
}

pub fn log_at(level: LogLevel, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, message);
    } else if level >= LogLevel::Info {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

pub fn log(message: &str) {
    log_at(LogLevel::Info, message);
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::log_at($crate::logger::LogLevel::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log_at($crate::logger::LogLevel::Warn, &format!($($arg)*))
    };
}
