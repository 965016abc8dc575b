//! Configgen Clock Infrastructure
//!
//! The generator reads the time once per invocation: for the header
//! timestamp, the default output name and the fallback seed.
//!
//! - [`SystemClock`]: wall-clock time for real runs
//! - [`FixedClock`]: frozen time for reproducible output and tests
//!
//! ```ignore
//! use configgen_clock::{Clock, FixedClock};
//!
//! let clock = FixedClock::from_rfc3339("2024-03-01T09:30:00Z")?;
//! assert_eq!(clock.now(), clock.now());
//! ```

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use configgen_ports::Clock;
