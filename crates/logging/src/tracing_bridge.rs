//! crates/logging/src/tracing_bridge.rs
//! Subscriber installation for binaries.
//!
//! Events are formatted by `tracing_subscriber::fmt` and written to standard
//! error so that standard output stays reserved for decoded values. The filter
//! comes from `RUST_LOG` when it is set and otherwise from the
//! [`VerbosityConfig`] directive.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2))?;
//! logging::trace_acl!(count = 3, "acl: header decoded");
//! ```

use std::io;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use super::VerbosityConfig;

/// Install the global subscriber, honouring `RUST_LOG` over `config`.
///
/// Returns an error if a global subscriber was already installed; callers that
/// may initialise more than once (tests, embedded use) can ignore it.
pub fn init_tracing(config: VerbosityConfig) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directive()));
    init_tracing_with_filter(config, filter)
}

/// Install the global subscriber with an explicit filter.
///
/// `config` only affects the formatter: source locations are included from
/// trace verbosity on.
pub fn init_tracing_with_filter<F>(config: VerbosityConfig, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer(config))
        .try_init()
}

fn stderr_layer<S>(config: VerbosityConfig) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let detailed = config.enables(super::LogLevel::Trace);
    tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(detailed)
        .with_line_number(detailed)
}
