//! Telemetry helpers for applications embedding `plot-rs`.
//!
//! The library only emits `tracing` events (layout passes, save dispatch,
//! skipped padding passes). Installing a subscriber is left to the host:
//! call `init_default_tracing` or wire your own `tracing` subscriber.

/// Initializes a compact, env-filtered `tracing` subscriber when the
/// `telemetry` feature is enabled.
///
/// The filter comes from `RUST_LOG` and falls back to `warn`, which keeps
/// skipped padding passes visible without per-draw noise.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
