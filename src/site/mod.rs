//! Resolved, immutable site configuration.
//!
//! [`SiteConfig::resolve`] validates a [`DocsConfig`] and flattens it:
//!
//! ```text
//! locales:  "/"     -> Locale { lang: zh-CN, navbar, .. }
//!           "/en/"  -> Locale { lang: en-US, navbar, .. }
//! sidebars: ("/",    "/zh/guide/") -> [SidebarSection]
//!           ("/en/", "/en/guide/") -> [SidebarSection]
//! ```
//!
//! Lookups are longest-prefix matches over those tables. They never fail:
//! an unmatched locale falls back to `/`, an unmatched sidebar is empty.
//! When no `/` locale is declared, the fallback is built from the site
//! defaults and does not appear in [`SiteConfig::locales`].

mod resolve;
mod route;

pub use route::{RoutePath, longest_match, prefix_matches};

use serde::Serialize;

use crate::config::{ConfigError, DocsConfig, HeadTag, NavbarEntry, Report, SidebarSection};

/// Prefix of the root locale.
pub const ROOT_PREFIX: &str = "/";

/// One language variant of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locale {
    /// Normalized path prefix (`/`, `/en/`).
    pub prefix: String,
    pub lang: String,
    pub title: String,
    pub description: String,
    /// Language picker label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_language_name: Option<String>,
    pub navbar: Vec<NavbarEntry>,
}

impl Locale {
    pub fn is_root(&self) -> bool {
        self.prefix == ROOT_PREFIX
    }
}

/// Sidebar tree row, keyed by (locale prefix, section prefix).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarRoute {
    pub locale: String,
    pub prefix: String,
    pub sections: Vec<SidebarSection>,
}

/// Validated site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    base: String,
    head: Vec<HeadTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<String>,
    locales: Vec<Locale>,
    sidebars: Vec<SidebarRoute>,
    #[serde(skip)]
    root: RootLocale,
}

/// Where the `/` fallback comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RootLocale {
    /// Index of the declared `/` locale in `locales`.
    Declared(usize),
    /// Built from site defaults; kept out of `locales` and `sidebars`.
    Synthesized(Box<SynthesizedRoot>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SynthesizedRoot {
    locale: Locale,
    sidebars: Vec<SidebarRoute>,
}

/// Locale and sidebar selected for one request path.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Route<'a> {
    pub locale: &'a Locale,
    pub sidebar: &'a [SidebarSection],
}

impl SiteConfig {
    /// Validate declarations and build the lookup tables.
    ///
    /// Stops at the first problem; use [`SiteConfig::check`] to see all of them.
    pub fn resolve(raw: &DocsConfig) -> Result<Self, ConfigError> {
        let (site, report) = resolve::Resolver::new(raw).run();
        match report.into_first_error() {
            Some(err) => Err(err),
            None => Ok(site),
        }
    }

    /// Run every validation and return all errors and warnings.
    pub fn check(raw: &DocsConfig) -> Report {
        resolve::Resolver::new(raw).run().1
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn head(&self) -> &[HeadTag] {
        &self.head
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    /// Declared locales in declaration order.
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn sidebars(&self) -> &[SidebarRoute] {
        &self.sidebars
    }

    /// The `/` locale, declared or synthesized from site defaults.
    pub fn root_locale(&self) -> &Locale {
        match &self.root {
            RootLocale::Declared(index) => &self.locales[*index],
            RootLocale::Synthesized(root) => &root.locale,
        }
    }

    /// Whether `/` was declared rather than synthesized.
    pub fn has_declared_root(&self) -> bool {
        matches!(self.root, RootLocale::Declared(_))
    }

    fn sidebar_rows(&self) -> impl Iterator<Item = &SidebarRoute> {
        let synthesized = match &self.root {
            RootLocale::Declared(_) => &[][..],
            RootLocale::Synthesized(root) => root.sidebars.as_slice(),
        };
        self.sidebars.iter().chain(synthesized)
    }

    /// Locale by exact prefix (normalized, so `/en` finds `/en/`).
    pub fn locale(&self, prefix: &str) -> Option<&Locale> {
        let prefix = crate::config::normalize_prefix(prefix);
        self.locales.iter().find(|l| l.prefix == prefix)
    }

    /// Locale whose prefix is the longest match for `path`, else the root.
    pub fn lookup_locale(&self, path: &str) -> &Locale {
        longest_match(self.locales.iter().map(|l| (l.prefix.as_str(), l)), path)
            .unwrap_or_else(|| self.root_locale())
    }

    /// Sidebar of `locale` whose key is the longest match for `path`.
    ///
    /// Returns an empty slice when no key matches.
    pub fn lookup_sidebar(&self, locale: &str, path: &str) -> &[SidebarSection] {
        let locale = crate::config::normalize_prefix(locale);
        let rows = self
            .sidebar_rows()
            .filter(|row| row.locale == locale)
            .map(|row| (row.prefix.as_str(), row.sections.as_slice()));
        longest_match(rows, path).unwrap_or(&[])
    }

    /// Resolve both locale and sidebar for a request path.
    pub fn route(&self, path: &RoutePath) -> Route<'_> {
        let locale = self.lookup_locale(path.as_str());
        Route {
            locale,
            sidebar: self.lookup_sidebar(&locale.prefix, path.as_str()),
        }
    }
}
