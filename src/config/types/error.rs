//! Configuration error types.

use super::FieldPath;
use crate::logger::paint;
use owo_colors::Style;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config file parsing error")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format `{0}` (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("base `{base}` must start and end with `/`")]
    InvalidBase { base: String },

    #[error("locale key `{key}` is declared more than once")]
    DuplicateLocaleKey { field: FieldPath, key: String },

    #[error(
        "locale keys differ between `locales` and `theme.locales` (only in locales: {}; only in theme.locales: {})",
        list_or_none(.only_in_site),
        list_or_none(.only_in_theme)
    )]
    MismatchedLocaleKeys {
        only_in_site: Vec<String>,
        only_in_theme: Vec<String>,
    },

    #[error("sidebar key `{key}` is declared more than once in locale `{locale}`")]
    DuplicateSidebarKey { locale: String, key: String },

    #[error("link `{link}` does not belong to locale `{locale}`")]
    CrossLocaleLink {
        locale: String,
        field: FieldPath,
        link: String,
    },

    #[error("navbar entry `{text}` has neither a link nor children")]
    EmptyNavbarEntry { field: FieldPath, text: String },

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(Report),
}

impl ConfigError {
    /// Config field the error points at, if it is a validation error.
    pub fn field(&self) -> Option<FieldPath> {
        match self {
            Self::InvalidBase { .. } => Some(FieldPath::new("base")),
            Self::DuplicateLocaleKey { field, .. }
            | Self::CrossLocaleLink { field, .. }
            | Self::EmptyNavbarEntry { field, .. } => Some(field.clone()),
            Self::MismatchedLocaleKeys { .. } => Some(FieldPath::new("theme.locales")),
            Self::DuplicateSidebarKey { locale, key } => Some(
                FieldPath::new("theme.locales")
                    .key(locale)
                    .field("sidebar")
                    .key(key),
            ),
            _ => None,
        }
    }

    /// Validation step that produces this error; lower runs first.
    fn step(&self) -> u8 {
        match self {
            Self::InvalidBase { .. } => 1,
            Self::DuplicateLocaleKey { .. } => 2,
            Self::MismatchedLocaleKeys { .. } => 3,
            Self::DuplicateSidebarKey { .. } => 4,
            Self::CrossLocaleLink { .. } | Self::EmptyNavbarEntry { .. } => 5,
            _ => 0,
        }
    }

    /// Fix hint shown under the message.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::InvalidBase { base } => match base.trim_matches('/') {
                "" => Some("use `/`".into()),
                trimmed => Some(format!("use `/{trimmed}/`")),
            },
            Self::MismatchedLocaleKeys { .. } => {
                Some("every `[locales]` key needs a `[theme.locales]` entry and vice versa".into())
            }
            Self::DuplicateSidebarKey { .. } | Self::DuplicateLocaleKey { .. } => {
                Some("keys are compared with leading and trailing `/` added".into())
            }
            Self::CrossLocaleLink { locale, .. } => Some(format!("links must start with `{locale}`")),
            _ => None,
        }
    }
}

fn list_or_none(keys: &[String]) -> String {
    if keys.is_empty() {
        "none".to_string()
    } else {
        keys.join(", ")
    }
}

// ============================================================================
// Report
// ============================================================================

/// All problems found in one config, collected instead of stopping at the first.
#[derive(Debug, Default)]
pub struct Report {
    errors: Vec<ConfigError>,
    /// Non-fatal findings (collected for batch display).
    warnings: Vec<(FieldPath, String)>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, error: ConfigError) {
        self.errors.push(error);
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        let count = self.warnings.len();
        crate::log!("warning"; "{} warning{}:", count, crate::logger::plural_s(count));
        for (field, message) in &self.warnings {
            eprintln!("- [{}] {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ConfigError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// Error from the earliest validation step, declaration order within a step.
    pub fn into_first_error(self) -> Option<ConfigError> {
        self.errors.into_iter().min_by_key(ConfigError::step)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn write_error(f: &mut fmt::Formatter<'_>, err: &ConfigError) -> fmt::Result {
    if let Some(field) = err.field() {
        let dim = Style::new().dimmed();
        writeln!(
            f,
            "{}{}{}",
            paint("[", dim),
            paint(field.as_str(), Style::new().cyan()),
            paint("]", dim)
        )?;
    }
    write!(f, "{} {}", paint("→", Style::new().red()), err)?;
    if let Some(hint) = err.hint() {
        write!(f, "\n  {} {}", paint("hint:", Style::new().yellow()), hint)?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let red_bold = Style::new().red().bold();
        writeln!(f, "{}\n", paint("config validation failed:", red_bold))?;
        for (i, err) in self.errors.iter().enumerate() {
            write_error(f, err)?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                paint("found", Style::new().dimmed()),
                paint(self.errors.len(), red_bold),
                paint("errors", Style::new().dimmed())
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for Report {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("docs.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("docs.toml"));

        let mismatch = ConfigError::MismatchedLocaleKeys {
            only_in_site: vec!["/ja/".into()],
            only_in_theme: vec![],
        };
        let display = format!("{mismatch}");
        assert!(display.contains("only in locales: /ja/"));
        assert!(display.contains("only in theme.locales: none"));
    }

    #[test]
    fn test_duplicate_sidebar_field_path() {
        let err = ConfigError::DuplicateSidebarKey {
            locale: "/".into(),
            key: "/zh/guide/".into(),
        };
        assert_eq!(
            err.field().unwrap().as_str(),
            r#"theme.locales."/".sidebar."/zh/guide/""#
        );
    }

    #[test]
    fn test_invalid_base_hint() {
        let err = ConfigError::InvalidBase { base: "docs".into() };
        assert_eq!(err.hint().as_deref(), Some("use `/docs/`"));
        let err = ConfigError::InvalidBase { base: String::new() };
        assert_eq!(err.hint().as_deref(), Some("use `/`"));
    }

    #[test]
    fn test_report_counts_and_first_error() {
        let mut report = Report::new();
        assert!(!report.has_errors());
        report.error(ConfigError::CrossLocaleLink {
            locale: "/".into(),
            field: FieldPath::new("theme.navbar").index(0),
            link: "/en/".into(),
        });
        report.error(ConfigError::InvalidBase { base: "x".into() });
        report.warn(FieldPath::new("locales"), "lang differs");

        assert_eq!(report.error_count(), 2);
        assert_eq!(report.warnings().len(), 1);
        owo_colors::set_override(false);
        let display = format!("{report}");
        assert!(!display.contains('\u{1b}'));
        assert!(display.contains("config validation failed"));
        assert!(display.contains("errors"));
        assert!(matches!(
            report.into_first_error(),
            Some(ConfigError::InvalidBase { .. })
        ));
    }
}
