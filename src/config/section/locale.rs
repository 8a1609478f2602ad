//! `[locales]` section: site metadata per locale.
//!
//! # Example
//!
//! ```toml
//! [locales."/"]
//! lang = "zh-CN"
//! title = "toollib"
//! description = "描述"
//!
//! [locales."/en/"]
//! lang = "en-US"
//! ```

use serde::Deserialize;

/// Metadata for one locale. Omitted fields inherit the site-level value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocaleDecl {
    /// Language tag, e.g. `zh-CN`.
    pub lang: Option<String>,
    /// Display title.
    pub title: Option<String>,
    pub description: Option<String>,
}
