//! Console logging for the command-line front end.

mod consts;
mod logger;

use consts::*;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use logger::Builder;

/// Install a stderr logger filtered by `RUST_LOG` and then by `filters`.
///
/// `filters` is either a plain level (`info`) or a comma separated list such as
/// `warn,olympus_bip32=trace`. Standard output stays reserved for command results.
pub fn init_logger(filters: &str) {
    let loggers = Builder::new().parse_env(DEFAULT_LOGGER_ENV).parse_expression(filters).build();

    let stderr = ConsoleAppender::builder().target(Target::Stderr).encoder(Box::new(PatternEncoder::new(LOG_LINE_PATTERN_COLORED))).build();

    let config = Config::builder()
        .appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(stderr)))
        .loggers(loggers.items())
        .build(Root::builder().appender(CONSOLE_APPENDER).build(loggers.root_level()));

    match config {
        Ok(config) => {
            // a second initialization keeps the first logger
            let _ = log4rs::init_config(config);
        }
        Err(err) => eprintln!("Logger configuration error: {err}"),
    }
}
