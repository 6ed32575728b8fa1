//! Logger registry.
//!
//! # Data Flow
//! ```text
//! get_logger(name, options)
//!     → manager.rs (look up or create, initialize root sinks once)
//!     → level::LevelResolver (spec → severity, fallback chain)
//!     → logger.rs (configured handle)
//!
//! logger.info(msg)
//!     → record.rs (Record)
//!     → sinks of the logger and every ancestor
//! ```
//!
//! # Design Decisions
//! - The registry is an explicit object, not process-global state
//! - A logger's parent is its nearest existing ancestor; creating a closer
//!   ancestor later re-parents existing descendants
//! - First-time root initialization is serialized, so it is idempotent even
//!   under concurrent first use

pub mod logger;
pub mod manager;
pub mod options;
pub mod record;

pub use logger::Logger;
pub use manager::{LoggerRegistry, RegistryBuilder};
pub use options::LoggerOptions;
pub use record::Record;
