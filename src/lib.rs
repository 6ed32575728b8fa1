//! Hierarchical logger configuration library.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller ──get_logger(name, options)──▶ ┌──────────────────┐
//!                                         │  LoggerRegistry  │──▶ level::LevelResolver
//!                                         └────────┬─────────┘
//!                                                  │ first use: initialize root
//!                                                  ▼
//!                                  ┌──────────────────────────────┐
//!                                  │ root logger                  │
//!                                  │  ├─ ConsoleSink  ─┐          │
//!                                  │  └─ RotatingFile ─┴▶ format  │──▶ naming::NameMode
//!                                  └──────────────────────────────┘
//! ```
//!
//! Records emitted on any logger propagate up the dotted hierarchy to the
//! sinks attached on the way. `tracing` events can be routed into the same
//! hierarchy with [`layer::RegistryLayer`].

pub mod config;
pub mod error;
pub mod format;
pub mod layer;
pub mod level;
pub mod naming;
pub mod registry;
pub mod sink;

pub use config::LoggingConfig;
pub use error::{Error, Result};
pub use format::Formatter;
pub use level::{LevelResolver, Severity};
pub use naming::{CodeUnit, NameMode};
pub use registry::{Logger, LoggerOptions, LoggerRegistry, Record};
