//! Request paths and longest-prefix matching.

use std::sync::Arc;

use serde::{Serialize, Serializer};

/// Decoded request path used for locale and sidebar lookups.
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - No query string or fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(Arc<str>);

impl RoutePath {
    /// Create from a browser URL path (decode percent-encoding, strip query and fragment).
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;

        let trimmed = encoded.trim();
        let path = trimmed.split(['?', '#']).next().unwrap_or(trimmed);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());

        if decoded.starts_with('/') {
            Self(Arc::from(decoded))
        } else {
            Self(Arc::from(format!("/{decoded}")))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RoutePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoutePath {
    fn from(s: &str) -> Self {
        Self::from_browser(s)
    }
}

/// Check whether a directory-form `prefix` (`/en/`) covers `path`.
///
/// `/en/` covers `/en/`, `/en/guide/x` and the bare `/en`, but not `/english`.
#[inline]
pub fn prefix_matches(prefix: &str, path: &str) -> bool {
    path.starts_with(prefix) || path == prefix.trim_end_matches('/')
}

/// Pick the candidate whose prefix is the longest one covering `path`.
pub fn longest_match<'a, T>(
    candidates: impl IntoIterator<Item = (&'a str, T)>,
    path: &str,
) -> Option<T> {
    candidates
        .into_iter()
        .filter(|(prefix, _)| prefix_matches(prefix, path))
        .fold(None::<(usize, T)>, |best, (prefix, item)| match best {
            Some((len, _)) if len >= prefix.len() => best,
            _ => Some((prefix.len(), item)),
        })
        .map(|(_, item)| item)
}
