//! Telemetry helpers for applications embedding `trend-chart`.
//!
//! Tracing setup is explicit and opt-in. Hosts can call one of the helpers
//! below or install their own `tracing` subscriber; navigation transitions
//! are emitted at `trace`, data and resize events at `debug`, and absorbed
//! invalid input at `warn`.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER_DIRECTIVE: &str = "trend_chart=info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER_DIRECTIVE)
}

/// Like [`init_default_tracing`] with a custom fallback filter directive,
/// e.g. `"trend_chart=trace"` to follow every pan and zoom step.
#[must_use]
pub fn init_tracing_with_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive)),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
