//! Display-name abbreviation policy.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a dotted logger name is rendered in a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameMode {
    /// Last segment only: `alpha.beta.gamma` → `gamma`.
    #[default]
    Leaf,
    /// The whole dotted path.
    Full,
    /// Every segment but the last cut to its first character: `a.b.gamma`.
    Short,
}

impl NameMode {
    pub fn render<'a>(self, name: &'a str) -> Cow<'a, str> {
        match self {
            NameMode::Leaf => Cow::Borrowed(name.rsplit('.').next().unwrap_or(name)),
            NameMode::Full => Cow::Borrowed(name),
            NameMode::Short => {
                let Some((parents, leaf)) = name.rsplit_once('.') else {
                    return Cow::Borrowed(name);
                };
                let mut out = String::with_capacity(name.len());
                for segment in parents.split('.') {
                    if let Some(first) = segment.chars().next() {
                        out.push(first);
                    }
                    out.push('.');
                }
                out.push_str(leaf);
                Cow::Owned(out)
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NameMode::Leaf => "leaf",
            NameMode::Full => "full",
            NameMode::Short => "short",
        }
    }
}

impl fmt::Display for NameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`NameMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNameMode(pub String);

impl fmt::Display for UnknownNameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown name mode \"{}\" (expected leaf, full or short)", self.0)
    }
}

impl std::error::Error for UnknownNameMode {}

impl FromStr for NameMode {
    type Err = UnknownNameMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leaf" => Ok(NameMode::Leaf),
            "full" => Ok(NameMode::Full),
            "short" => Ok(NameMode::Short),
            _ => Err(UnknownNameMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_modes() {
        assert_eq!(NameMode::Short.render("alpha.beta.gamma"), "a.b.gamma");
        assert_eq!(NameMode::Leaf.render("alpha.beta.gamma"), "gamma");
        assert_eq!(NameMode::Full.render("alpha.beta.gamma"), "alpha.beta.gamma");
    }

    #[test]
    fn test_render_single_segment() {
        for mode in [NameMode::Leaf, NameMode::Full, NameMode::Short] {
            assert_eq!(mode.render("app"), "app");
            assert_eq!(mode.render(""), "");
        }
    }

    #[test]
    fn test_short_keeps_empty_segments() {
        assert_eq!(NameMode::Short.render("a..c"), "a..c");
        assert_eq!(NameMode::Short.render("überall.x.y"), "ü.x.y");
    }

    #[test]
    fn test_parse() {
        assert_eq!("SHORT".parse::<NameMode>(), Ok(NameMode::Short));
        assert_eq!("leaf".parse::<NameMode>(), Ok(NameMode::Leaf));
        assert!("file".parse::<NameMode>().is_err());
        assert_eq!(NameMode::default(), NameMode::Leaf);
    }
}
