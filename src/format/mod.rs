//! Line formatting.
//!
//! # Data Flow
//! ```text
//! Record
//!     → formatter.rs (pick the severity's template, render the display name)
//!     → template.rs (substitute {name}, then asctime/levelname/message)
//!     → line written by a sink
//! ```

pub mod formatter;
pub mod template;

pub use formatter::{ansi, color_for, Formatter};
pub use template::{FormatTemplate, LineFormat, ASCTIME_FORMAT, LINE_FORMAT};
