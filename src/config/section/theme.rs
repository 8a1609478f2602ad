//! `[theme]` section: logo, navbar and sidebar trees.
//!
//! `navbar` and `sidebar` at the top of `[theme]` are defaults for every
//! locale that does not declare its own.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! logo = "/favicon.ico"
//!
//! [theme.locales."/en/"]
//! select_language_name = "English"
//! navbar = [{ text = "guide", link = "/en/guide/introduce" }]
//!
//! [[theme.locales."/en/".sidebar."/en/guide/"]]
//! text = "guide"
//! children = [
//!     { text = "introduce", link = "/en/guide/introduce" },
//!     { text = "install", link = "/en/guide/install" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::types::Entries;

/// Sidebar trees keyed by the path prefix they apply under.
pub type SidebarDecl = Entries<Vec<SidebarSection>>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    /// Logo path shown in the navbar.
    pub logo: Option<String>,

    /// Default navbar for locales without one.
    pub navbar: Vec<NavbarEntry>,

    /// Default sidebar for locales without one.
    pub sidebar: SidebarDecl,

    /// Per-locale theme settings, keyed by locale prefix.
    pub locales: Entries<ThemeLocaleDecl>,
}

/// Theme settings for one locale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeLocaleDecl {
    pub lang: Option<String>,

    /// Label shown in the language picker.
    #[serde(alias = "selectLanguageName")]
    pub select_language_name: Option<String>,

    pub navbar: Option<Vec<NavbarEntry>>,

    pub sidebar: Option<SidebarDecl>,
}

/// Top navigation entry. Either a link, a dropdown of children, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarEntry {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavbarEntry>,
}

/// Sidebar group with a heading and leaf items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default)]
    pub collapsible: bool,

    #[serde(default)]
    pub children: Vec<SidebarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    pub text: String,
    pub link: String,
}
