//! Logger setup
//!
//! Diagnostics go through the `log` facade to stderr via `env_logger`.
//! `RUST_LOG` overrides the level chosen on the command line.

use log::LevelFilter;

/// Level for a `-v` count: 0 warn, 1 info, 2 debug, 3+ trace
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
