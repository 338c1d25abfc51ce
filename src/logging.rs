//! Logging initialization for the stepwalker binary.
//!
//! Logs always go to stderr so they never interleave with the walk on stdout.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when neither `RUST_LOG` nor `--verbose` is given
pub const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter directive: `RUST_LOG` wins, then `--verbose`, then the default.
pub fn filter_directive(env: Option<String>, verbose: bool) -> String {
    match env {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ if verbose => "debug".to_string(),
        _ => DEFAULT_LEVEL.to_string(),
    }
}

/// Install the global subscriber. Call once, at startup.
pub fn init_logging(verbose: bool) {
    let directive = filter_directive(std::env::var("RUST_LOG").ok(), verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
