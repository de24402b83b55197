//! log4rs setup.
//!
//! Everything goes to stderr so stdout only ever carries the rendered prefixes.

use crate::config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Map the `-v` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn build_config(level: LevelFilter) -> Result<Config, String> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(config::LOG_PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| format!("Error building log config: {e}"))
}

/// Install the stderr logger.
pub fn init(verbosity: u8) -> Result<(), String> {
    let config = build_config(level_for(verbosity))?;
    log4rs::init_config(config).map_err(|e| format!("Error initializing log4rs: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Trace);
        assert_eq!(level_for(200), LevelFilter::Trace);
    }

    #[test]
    fn test_build_config() {
        let config = build_config(LevelFilter::Info).expect("Error building config");
        assert_eq!(config.root().level(), LevelFilter::Info);
        assert_eq!(config.appenders().len(), 1);
    }
}
