use configgen_core::Timestamp;

/// Port for time abstraction
///
/// The pipeline reads the clock exactly once per invocation:
/// - Real system time for the CLI
/// - Fixed time for reproducible output and deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
