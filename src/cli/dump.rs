//! Resolved configuration dump.

use anyhow::Result;

use crate::site::SiteConfig;

/// Print the resolved configuration as JSON.
pub fn run_dump(site: &SiteConfig, pretty: bool) -> Result<()> {
    println!("{}", to_json(site, pretty)?);
    Ok(())
}

fn to_json(site: &SiteConfig, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(site)
    } else {
        serde_json::to_string(site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocsConfig;

    #[test]
    fn test_dump_keeps_declaration_order() {
        let raw = DocsConfig::from_str(include_str!("../../docs.toml")).unwrap();
        let site = SiteConfig::resolve(&raw).unwrap();
        let json = to_json(&site, false).unwrap();

        let base = json.find("\"base\"").unwrap();
        let locales = json.find("\"locales\"").unwrap();
        let sidebars = json.find("\"sidebars\"").unwrap();
        assert!(base < locales && locales < sidebars);

        let zh = json.find("\"/zh/guide/\"").unwrap();
        let en = json.find("\"/en/guide/\"").unwrap();
        assert!(zh < en);
    }

    #[test]
    fn test_pretty_is_multiline() {
        let raw = DocsConfig::from_str("").unwrap();
        let site = SiteConfig::resolve(&raw).unwrap();
        assert!(to_json(&site, true).unwrap().contains('\n'));
        assert!(!to_json(&site, false).unwrap().contains('\n'));
    }
}
