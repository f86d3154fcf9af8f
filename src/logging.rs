//! Logging setup.
//!
//! The TUI owns the terminal, so interactive runs log to a file (or
//! nowhere); the print and check modes log to stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Discard,
}

/// Maps `-v`/`-q` flags to a level: INFO by default, DEBUG with `-v`,
/// TRACE with `-vv`, WARN with `-q`.
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        Level::WARN
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn env_filter(level: Level) -> EnvFilter {
    let directive = format!("regdash={level}");
    match directive.parse() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Installs the global subscriber.
pub fn init_logging(target: LogTarget<'_>, verbose: u8, quiet: bool) -> io::Result<()> {
    let filter = env_filter(level_for(verbose, quiet));

    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init()
        }
        LogTarget::Discard => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .init(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_flags() {
        assert_eq!(level_for(0, false), Level::INFO);
        assert_eq!(level_for(1, false), Level::DEBUG);
        assert_eq!(level_for(3, false), Level::TRACE);
        assert_eq!(level_for(2, true), Level::WARN);
    }
}
