//! Configgen Templates
//!
//! A closed set of named research presets. Each template pins some agent
//! counts and market parameters; the resolver falls back to built-in
//! defaults for anything a template leaves unset.
//!
//! ```rust,ignore
//! use configgen_templates::{describe, lookup};
//!
//! let rmsc03 = lookup("rmsc03")?;
//! assert_eq!(rmsc03.total_agents(), 5127);
//! println!("{}", describe("rmsc03")?);
//! ```

mod describe;
mod registry;

pub use describe::{describe, overview};
pub use registry::{TEMPLATES, list, lookup, names};
