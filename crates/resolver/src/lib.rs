//! Configgen Resolver
//!
//! Turns raw generator input into one immutable [`ResolvedConfig`] and checks
//! it against the business rules before anything touches the output path.
//!
//! ## Precedence
//!
//! ```text
//!   explicit caller value ──┐
//!   template value ─────────┼──► first present wins ──► × agents scale ──► ResolvedConfig
//!   built-in default ───────┘        (per field)         (counts only)
//! ```
//!
//! ## Validation
//!
//! [`validate`] is a pure function of the resolved config. Hard failures come
//! back as `Err`; soft conditions are collected as warnings in the
//! [`ValidationReport`] and generation proceeds.

pub mod resolve;
pub mod validate;

pub use resolve::{explicit_input, resolve, resolve_at};
pub use validate::{ValidationReport, ValidationWarning, check_modes, validate};

// Re-export for convenience
pub use configgen_core::ResolvedConfig;
