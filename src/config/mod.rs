//! Raw documentation-site declarations from `docs.toml` (or `docs.json`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Declaration sections
//! │   ├── head       # head = [[tag, { attrs }]]
//! │   ├── locale     # [locales]
//! │   └── theme      # [theme], navbar, sidebar
//! ├── types/         # Utility types
//! │   ├── entries    # Ordered map keeping repeated keys
//! │   ├── error      # ConfigError, Report
//! │   └── field      # FieldPath
//! └── mod.rs         # DocsConfig (this file)
//! ```
//!
//! Nothing here is validated. [`crate::site::SiteConfig::resolve`] turns a
//! `DocsConfig` into the checked, queryable form.

pub mod section;
pub mod types;
mod util;

pub use util::{find_config_file, is_external_link, normalize_prefix};

pub use section::{
    HeadTag, LocaleDecl, NavbarEntry, SidebarDecl, SidebarItem, SidebarSection, ThemeLocaleDecl,
    ThemeSection,
};
pub use types::{ConfigError, Entries, FieldPath, Report};

use crate::log;
use serde::Deserialize;
use std::{fs, path::Path};

/// Declaration file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    /// JSON keeps repeated object keys visible to the resolver.
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") | None => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(other) => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

// ============================================================================
// root declaration
// ============================================================================

/// Root structure of the declaration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Deploy base path, e.g. `/` or `/toollib/`.
    pub base: String,

    /// Site-level language, inherited by locales without their own.
    pub lang: String,

    pub title: String,

    pub description: String,

    /// Extra `<head>` tags.
    pub head: Vec<HeadTag>,

    /// Locale metadata keyed by path prefix.
    pub locales: Entries<LocaleDecl>,

    pub theme: ThemeSection,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base: "/".to_string(),
            lang: "en-US".to_string(),
            title: String::new(),
            description: String::new(),
            head: Vec::new(),
            locales: Entries::default(),
            theme: ThemeSection::default(),
        }
    }
}

impl DocsConfig {
    /// Parse declarations from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load declarations from a file, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let format = ConfigFormat::from_path(path)?;
        let (config, ignored) = Self::parse_with_ignored(&content, format)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        crate::debug!("config"; "loaded {} ({} locales)", path.display(), config.locales.len());
        Ok(config)
    }

    /// Parse content, collecting any unknown fields.
    pub fn parse_with_ignored(
        content: &str,
        format: ConfigFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let callback = |path: serde_ignored::Path| ignored.push(path.to_string());

        let config: Self = match format {
            ConfigFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, callback)?
            }
            ConfigFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let config: Self = serde_ignored::deserialize(&mut deserializer, callback)?;
                deserializer.end()?;
                config
            }
        };
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }
}

// ============================================================================
// tests
// ============================================================================
