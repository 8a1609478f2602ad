//! Config field path used to point diagnostics at a declaration.

use owo_colors::Style;
use std::fmt;

use crate::logger::paint;

/// Dotted path to a config field, e.g. `theme.locales."/en/".navbar[0].link`.
///
/// Locale and sidebar keys are arbitrary strings, so paths are built at
/// runtime with the `key` / `index` / `field` builders.
///
/// # Example
///
/// ```ignore
/// let path = FieldPath::new("theme.locales").key("/en/").field("navbar").index(0);
/// assert_eq!(path.as_str(), r#"theme.locales."/en/".navbar[0]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    /// Append a plain field name (`.name`).
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            return Self(name.to_string());
        }
        Self(format!("{}.{name}", self.0))
    }

    /// Append a quoted map key (`."key"`).
    pub fn key(&self, key: &str) -> Self {
        Self(format!("{}.\"{key}\"", self.0))
    }

    /// Append a sequence index (`[i]`).
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = format!("`{}`", self.0);
        write!(f, "{}", paint(path, Style::new().bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let path = FieldPath::new("theme.locales")
            .key("/en/")
            .field("navbar")
            .index(0)
            .field("link");
        assert_eq!(path.as_str(), r#"theme.locales."/en/".navbar[0].link"#);
    }

    #[test]
    fn test_field_on_empty_root() {
        assert_eq!(FieldPath::new("").field("base").as_str(), "base");
    }
}
