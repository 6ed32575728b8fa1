//! Dotted names for code units.
//!
//! A code unit is described explicitly by the caller, usually through the
//! [`module_name!`](crate::module_name) macro, which captures `module_path!()`,
//! `file!()` and the package name at the call site.

/// Unit name assigned to a binary crate root compiled from `main.rs`.
pub const ENTRY_POINT: &str = "<entry>";

/// File stems that stand for their package rather than a module of their own.
pub const PACKAGE_STEMS: [&str; 2] = ["mod", "main"];

const SOURCE_EXT: &str = ".rs";

/// Identity of the code unit a logger is requested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeUnit<'a> {
    /// Module path (`crate::a::b`), or [`ENTRY_POINT`].
    pub name: Option<&'a str>,
    /// Enclosing package.
    pub package: Option<&'a str>,
    /// Source file path.
    pub file: Option<&'a str>,
}

impl<'a> CodeUnit<'a> {
    /// Describe the unit at a source location.
    ///
    /// A single-segment module path whose file stem is `main` is the entry point.
    pub fn at(module_path: &'a str, file: &'a str, package: &'a str) -> Self {
        let is_entry = !module_path.contains("::") && file_stem(file) == "main";
        Self {
            name: Some(if is_entry { ENTRY_POINT } else { module_path }),
            package: Some(package),
            file: Some(file),
        }
    }

    pub fn is_entry_point(&self) -> bool {
        self.name == Some(ENTRY_POINT)
    }
}

/// Dotted name for `unit`, optionally prefixed. Never fails: missing pieces
/// degrade to the best partial name.
pub fn module_name(prefix: &str, unit: &CodeUnit<'_>) -> String {
    let Some(name) = unit.name else {
        return prefix.to_string();
    };

    if name != ENTRY_POINT {
        return dotted(&[prefix, name]);
    }
    entry_point_name(prefix, unit)
}

fn entry_point_name(prefix: &str, unit: &CodeUnit<'_>) -> String {
    let package = unit.package.map(normalize_package).unwrap_or_default();

    let Some(file) = unit.file else {
        return package;
    };

    let stem = file_stem(file);
    // Either sentinel stem stands for the package itself.
    if PACKAGE_STEMS.contains(&stem) {
        return package;
    }

    dotted(&[prefix, &package, stem])
}

/// Join non-empty parts, normalize separators to dots, strip edge dots.
fn dotted(parts: &[&str]) -> String {
    let joined = parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");
    joined
        .replace("::", ".")
        .replace(['/', '\\'], ".")
        .trim_matches(|c| c == '.' || c == '/')
        .to_string()
}

fn file_stem(file: &str) -> &str {
    let base = file.rsplit(['/', '\\']).next().unwrap_or(file);
    base.strip_suffix(SOURCE_EXT).unwrap_or(base)
}

fn normalize_package(package: &str) -> String {
    package.replace('-', "_")
}
