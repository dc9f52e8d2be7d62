//! Logging setup for the CLI
//!
//! Installs a `tracing-subscriber` fmt layer on stderr. The `RUST_LOG`
//! environment variable, when set, wins over the verbosity flags.

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Map the `-v` count to a default filter directive
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the logging system from CLI verbosity
pub fn init_logging(verbosity: u8, quiet: bool) -> Result<()> {
    let directive = if quiet { "error" } else { default_directive(verbosity) };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .try_init()
        .map_err(|e| Error::other(format!("failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_scales_with_verbosity() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(5), "trace");
    }
}
