//! Logger naming.
//!
//! # Responsibilities
//! - Derive a dotted name for the calling code unit (logger key)
//! - Render dotted names for display according to a [`NameMode`]
//!
//! # Design Decisions
//! - The caller states its identity at the call site; no stack walking
//! - Name derivation never fails; it degrades to a partial name

pub mod mode;
pub mod module;

pub use mode::{NameMode, UnknownNameMode};
pub use module::{module_name, CodeUnit, ENTRY_POINT};

/// Dotted name of the calling module, optionally prefixed.
///
/// ```
/// let name = logtemplate::module_name!("svc");
/// assert!(name.starts_with("svc."));
/// ```
#[macro_export]
macro_rules! module_name {
    () => {
        $crate::module_name!("")
    };
    ($prefix:expr) => {
        $crate::naming::module_name(
            $prefix,
            &$crate::naming::CodeUnit::at(module_path!(), file!(), env!("CARGO_PKG_NAME")),
        )
    };
}
