// Conditional logging macros - only active in debug builds

use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::io;
use std::path::Path;

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// Where log records go once the logger is installed.
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    /// The TUI owns the terminal, so without a log file nothing is written.
    Discard,
}

/// Install `env_logger`. `RUST_LOG` picks the level (default `warn`).
pub fn init(target: LogTarget<'_>) -> io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => {
            let file = File::create(path)?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        LogTarget::Discard => {
            builder.target(Target::Pipe(Box::new(io::sink())));
        }
    }
    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        assert!(init(LogTarget::Discard).is_ok());
        assert!(init(LogTarget::Stderr).is_ok());
        debug_log!("logger installed: {}", true);
        info_log!("logger installed");
    }

    #[test]
    fn test_init_with_unwritable_file_fails() {
        let result = init(LogTarget::File(Path::new("/definitely/not/here/game.log")));
        assert!(result.is_err());
    }
}
