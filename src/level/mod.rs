//! Severity levels and level resolution.
//!
//! # Data Flow
//! ```text
//! explicit spec / env var / DEFAULT_LOG_LEVEL
//!     → resolver.rs (uppercase, table lookup, fallback chain)
//!     → severity.rs (Severity)
//!     → Logger::set_level
//! ```
//!
//! # Design Decisions
//! - Level names resolve through a static table, not reflection
//! - Unknown names degrade to a known-good level, never to an error

pub mod resolver;
pub mod severity;

pub use resolver::{EnvSource, LevelResolver, ProcessEnv, SYSTEM_LOG_LEVEL};
pub use severity::{Severity, UnknownSeverity};
