//! Telemetry helpers for applications embedding `radar-rs`.
//!
//! The geometry core never logs. Scene building in `api` emits `tracing`
//! events (`debug!` on rebuild, `trace!` on cache hits, `warn!` for series
//! values on unknown axes), and hosts either call one of these helpers or
//! install their own subscriber.

/// Filter used when `RUST_LOG` is unset: other crates at `warn`, chart
/// events at `info`.
pub const DEFAULT_TRACING_FILTER: &str = "warn,radar_rs=info";

/// Installs a compact global subscriber with `default_filter` as the
/// fallback for `RUST_LOG`.
///
/// Returns `false` when the `telemetry` feature is disabled, the filter does
/// not parse, or a global subscriber is already installed.
#[must_use]
pub fn init_tracing(default_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match EnvFilter::try_new(default_filter) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_filter;
        false
    }
}

#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_TRACING_FILTER)
}
