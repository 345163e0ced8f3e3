//! Log output for slowOS applications.
//!
//! The filter comes from the directive the app passes in, never from the
//! environment, so a launched app always logs the same way.

use tracing_subscriber::EnvFilter;

/// Filter used when the app's own directive fails to parse.
const FALLBACK_DIRECTIVE: &str = "info";

/// Install a formatted stderr subscriber filtered by `directive`
/// (e.g. `"slowcalc=info"`).
///
/// Safe to call more than once: later calls leave the first subscriber in place.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("[slowos] bad log directive {directive:?}: {err}");
        EnvFilter::new(FALLBACK_DIRECTIVE)
    });

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_err()
    {
        tracing::debug!("log subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init("slowcore=debug");
        init("slowcore=debug");
        tracing::info!("still logging");
    }

    #[test]
    fn test_odd_directive_does_not_panic() {
        init("=[not a directive");
    }
}
