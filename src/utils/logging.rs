//! Diagnostic logging using the `tracing` ecosystem.
//!
//! User-facing status goes through [`styling`](super::styling) on stdout;
//! tracing events go to stderr and are silent unless asked for.
//!
//! ```text
//! RUST_LOG set  -> used verbatim
//! -q            -> off
//! (default)     -> warn
//! -v            -> info
//! -vv           -> debug
//! -vvv          -> trace
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// Map CLI verbosity flags to an `EnvFilter` directive.
pub fn filter_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "off";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, quiet)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(filter_directive(0, false), "warn");
        assert_eq!(filter_directive(1, false), "info");
        assert_eq!(filter_directive(2, false), "debug");
        assert_eq!(filter_directive(7, false), "trace");
    }

    #[test]
    fn test_quiet_wins_over_verbose() {
        assert_eq!(filter_directive(3, true), "off");
    }
}
