//! Configgen Runner - one generation run end to end
//!
//! ```text
//!   GeneratorInput
//!        │
//!        ▼
//!   ┌──────────┐   ┌──────────┐   ┌─────────────┐   ┌──────────────┐
//!   │ resolve  │──►│ validate │──►│ mode checks │──►│ OutputTarget │
//!   └──────────┘   └──────────┘   └─────────────┘   └──────┬───────┘
//!                                                          │
//!                         ┌────────────────────────────────┘
//!                         ▼
//!   ┌─────────────────────────────────┐   ┌──────────────────┐
//!   │ Imports → Bootstrap → Oracle →  │──►│   ArtifactSink   │
//!   │ Agents → Kernel → [RL layer]    │   │ reset + append   │
//!   └─────────────────────────────────┘   └──────────────────┘
//! ```
//!
//! Validate-only and batch modes stop before the output path is touched.

pub mod naming;
pub mod pipeline;
pub mod target;

pub use naming::{default_config_name, sanitize_filename};
pub use pipeline::{Outcome, Pipeline};
pub use target::{OutputRequest, OutputTarget};
