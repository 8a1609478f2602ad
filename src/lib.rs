//! Locale, navbar and sidebar resolution for the toollib documentation site.
//!
//! ```ignore
//! let raw = DocsConfig::from_path(Path::new("docs.toml"))?;
//! let site = SiteConfig::resolve(&raw)?;
//!
//! let route = site.route(&RoutePath::from_browser("/en/guide/introduce"));
//! assert_eq!(route.locale.prefix, "/en/");
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod site;

pub use config::{ConfigError, DocsConfig};
pub use site::{Locale, Route, RoutePath, SiteConfig};
