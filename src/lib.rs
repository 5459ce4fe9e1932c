/// pellcalc: Pell Grant estimator engine.
///
/// Re-exports the calculation engine from `pellcalc-core`. The host layer
/// (form, sliders, rendering) lives outside this workspace and talks to the
/// engine through [`Engine`].
pub use pellcalc_core::*;

/// Set up `tracing` output for the binaries.
///
/// Honors `RUST_LOG`; defaults to `warn`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
