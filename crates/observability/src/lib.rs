//! Logging setup shared by binaries and tests.

/// Install the process-wide subscriber with the default filter (`info`).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}

/// Subscriber configuration (filter, output format).
pub mod tracing;
