//! Logging setup for the Genesis CLI.
//!
//! Logs go to stderr so `genesis print` can stream JSON on stdout.
//!
//! The level is picked in this order:
//! 1. `--verbose`: DEBUG for genesis crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`: custom filter
//! 4. default: INFO for genesis crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "genesis=debug,genesis_config=debug,genesis_cli=debug";
const QUIET_FILTER: &str = "genesis=error,genesis_config=error,genesis_cli=error";
const DEFAULT_FILTER: &str = "genesis=info,genesis_config=info,genesis_cli=info";

/// Filter for the given flags.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}

/// Whether stderr should get ANSI colors.
///
/// `NO_COLOR` disables and `FORCE_COLOR` enables regardless of the terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_enables_debug() {
        let filter = filter_for(true, false).to_string();
        assert!(filter.contains("genesis_config=debug"));
    }

    #[test]
    fn quiet_limits_to_errors() {
        let filter = filter_for(false, true).to_string();
        assert!(filter.contains("genesis_cli=error"));
    }
}
