//! Config validation command.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use rayon::prelude::*;

use super::{Cli, common::config_path};
use crate::config::{ConfigError, DocsConfig, Report};
use crate::logger::plural_s;
use crate::site::SiteConfig;
use crate::log;

/// Outcome of checking one file.
struct Checked {
    path: PathBuf,
    result: Result<Report, ConfigError>,
}

impl Checked {
    fn failed(&self, deny_warnings: bool) -> bool {
        match &self.result {
            Ok(report) => report.has_errors() || (deny_warnings && !report.warnings().is_empty()),
            Err(_) => true,
        }
    }
}

/// Validate each config file and print grouped diagnostics.
pub fn check_configs(cli: &Cli, paths: &[PathBuf], deny_warnings: bool) -> Result<()> {
    let paths = if paths.is_empty() {
        vec![config_path(cli)?]
    } else {
        paths.to_vec()
    };

    log!("check"; "checking {} config file{}", paths.len(), plural_s(paths.len()));

    // Files are independent; results keep input order.
    let results: Vec<Checked> = paths
        .par_iter()
        .map(|path| Checked {
            path: path.clone(),
            result: check_file(path),
        })
        .collect();

    for checked in &results {
        print_result(checked);
    }

    let failed = results.iter().filter(|c| c.failed(deny_warnings)).count();
    if failed > 0 {
        bail!(
            "{} of {} config file{} failed validation",
            failed,
            results.len(),
            plural_s(results.len())
        );
    }
    Ok(())
}

fn check_file(path: &Path) -> Result<Report, ConfigError> {
    let raw = DocsConfig::from_path(path)?;
    Ok(SiteConfig::check(&raw))
}

fn print_result(checked: &Checked) {
    let name = checked.path.display();
    match &checked.result {
        Err(err) => log!("error"; "{}: {}", name, err),
        Ok(report) if report.has_errors() => {
            log!("error"; "{}", name);
            eprintln!("{report}");
            report.print_warnings();
        }
        Ok(report) => {
            let warnings = report.warnings().len();
            if warnings == 0 {
                log!("ok"; "{}", name);
            } else {
                log!("ok"; "{} ({} warning{})", name, warnings, plural_s(warnings));
                report.print_warnings();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(content: &str) -> Checked {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.toml");
        std::fs::write(&path, content).unwrap();
        Checked {
            result: check_file(&path),
            path,
        }
    }

    #[test]
    fn test_clean_config_passes() {
        let c = checked("[locales.\"/\"]\n[theme.locales.\"/\"]\n");
        assert!(!c.failed(false));
        assert!(!c.failed(true));
    }

    #[test]
    fn test_errors_fail() {
        let c = checked("[locales.\"/en/\"]\n");
        assert!(c.failed(false));
    }

    #[test]
    fn test_deny_warnings() {
        // Empty sidebar section is only a warning.
        let c = checked("[[theme.sidebar.\"/guide/\"]]\ntext = \"guide\"\n");
        assert!(!c.failed(false));
        assert!(c.failed(true));
    }

    #[test]
    fn test_parse_error_fails() {
        let c = checked("[locales\n");
        assert!(matches!(c.result, Err(ConfigError::Toml(_))));
        assert!(c.failed(false));
    }
}
