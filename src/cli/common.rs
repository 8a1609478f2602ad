//! Common utilities shared across CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::Cli;
use crate::config::{ConfigError, DocsConfig, find_config_file};
use crate::site::SiteConfig;

/// Locate the config file named by `--config`, searching upward from cwd.
pub fn config_path(cli: &Cli) -> Result<PathBuf> {
    match find_config_file(&cli.config) {
        Some(path) => Ok(path),
        None => bail!("config file '{}' not found", cli.config.display()),
    }
}

/// Load and resolve the `--config` file.
pub fn load_site(cli: &Cli) -> Result<SiteConfig> {
    let path = config_path(cli)?;
    load_site_from(&path)
}

/// Load and resolve one config file, showing every problem on failure.
pub fn load_site_from(path: &Path) -> Result<SiteConfig> {
    let raw = DocsConfig::from_path(path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let report = SiteConfig::check(&raw);
    if report.has_errors() {
        bail!(ConfigError::Diagnostics(report));
    }
    report.print_warnings();

    let site = SiteConfig::resolve(&raw)?;
    crate::debug!("config"; "resolved {} locales, {} sidebars",
        site.locales().len(), site.sidebars().len());
    Ok(site)
}
