pub const DEFAULT_LOGGER_ENV: &str = "RUST_LOG";

/// Console (stderr) log line pattern, with explicit UTC time zone denoted by the suffix Z
pub const LOG_LINE_PATTERN_COLORED: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)}Z [{h({({l}):5.5})}] {m}{n}";

pub const CONSOLE_APPENDER: &str = "stderr";
