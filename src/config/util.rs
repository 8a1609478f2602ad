//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Normalize a locale or sidebar key to directory form (`/x/`).
///
/// # Examples
/// ```ignore
/// normalize_prefix("/en")        -> "/en/"
/// normalize_prefix("zh/guide/")  -> "/zh/guide/"
/// normalize_prefix("")           -> "/"
/// ```
pub fn normalize_prefix(key: &str) -> String {
    let trimmed = key.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

/// Check if a link points off-site (has a URL scheme).
///
/// Uses `url` crate parsing: site paths like `/en/guide/` have no scheme and
/// fail to parse as absolute URLs.
pub fn is_external_link(link: &str) -> bool {
    url::Url::parse(link).is_ok()
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/toollib/docs/guide/  ← cwd
/// /home/user/toollib/docs.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix("/"), "/");
        assert_eq!(normalize_prefix(""), "/");
        assert_eq!(normalize_prefix("/en"), "/en/");
        assert_eq!(normalize_prefix("/en/"), "/en/");
        assert_eq!(normalize_prefix("zh/guide"), "/zh/guide/");
        assert_eq!(normalize_prefix(" /zh/guide/ "), "/zh/guide/");
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://github.com/x/toollib"));
        assert!(is_external_link("mailto:dev@example.com"));
        assert!(!is_external_link("/en/guide/introduce"));
        assert!(!is_external_link("guide/install"));
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/guide");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("docs.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("docs.toml")).unwrap();
        assert_eq!(found, dir.path().join("docs.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_file_from(dir.path(), Path::new("no-such-config.toml")).is_none());
    }
}
