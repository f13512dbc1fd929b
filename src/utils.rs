use anyhow::{Context, Result};
use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// level; without it, `--verbose` selects info and errors are shown otherwise.
/// Fails if a subscriber is already installed.
pub fn setup_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let timer = LocalTime::new(format_description!("[hour]:[minute]:[second]"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_subscriber_install_is_an_error() {
        // Sequential on purpose: the subscriber slot is process-global.
        assert!(setup_logging(false).is_ok());
        assert!(setup_logging(true).is_err());
    }
}
