//! Request path lookup command.

use anyhow::Result;
use serde::Serialize;

use super::LocateArgs;
use crate::config::SidebarSection;
use crate::log;
use crate::site::{Route, RoutePath, SiteConfig};

/// JSON row for one located path.
#[derive(Debug, Serialize)]
struct Located<'a> {
    path: &'a RoutePath,
    locale: &'a str,
    lang: &'a str,
    sidebar: &'a [SidebarSection],
}

impl<'a> Located<'a> {
    fn new(path: &'a RoutePath, route: Route<'a>) -> Self {
        Self {
            path,
            locale: &route.locale.prefix,
            lang: &route.locale.lang,
            sidebar: route.sidebar,
        }
    }
}

/// Print the locale and sidebar serving each request path.
pub fn run_locate(args: &LocateArgs, site: &SiteConfig) -> Result<()> {
    let paths: Vec<RoutePath> = args.paths.iter().map(|p| RoutePath::from_browser(p)).collect();

    if args.json {
        let rows: Vec<Located> = paths
            .iter()
            .map(|path| Located::new(path, site.route(path)))
            .collect();
        let json = if args.pretty {
            serde_json::to_string_pretty(&rows)?
        } else {
            serde_json::to_string(&rows)?
        };
        println!("{json}");
        return Ok(());
    }

    for path in &paths {
        println!("{}", describe(path, site.route(path)));
    }
    log!("locate"; "resolved {} path{}", paths.len(), crate::logger::plural_s(paths.len()));
    Ok(())
}

/// Human-readable summary of one route.
fn describe(path: &RoutePath, route: Route<'_>) -> String {
    let locale = route.locale;
    let mut out = format!(
        "{path}\n  locale   {} ({}) {}",
        locale.prefix, locale.lang, locale.title
    );
    if route.sidebar.is_empty() {
        out.push_str("\n  sidebar  none");
    }
    for section in route.sidebar {
        let items: Vec<&str> = section.children.iter().map(|i| i.text.as_str()).collect();
        out.push_str(&format!("\n  sidebar  {}: {}", section.text, items.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocsConfig;

    fn site() -> SiteConfig {
        let raw = DocsConfig::from_str(include_str!("../../docs.toml")).unwrap();
        SiteConfig::resolve(&raw).unwrap()
    }

    #[test]
    fn test_describe_with_sidebar() {
        let site = site();
        let path = RoutePath::from_browser("/en/guide/install");
        let text = describe(&path, site.route(&path));
        assert_eq!(
            text,
            "/en/guide/install\n  locale   /en/ (en-US) toollib\n  sidebar  guide: introduce, install, usage"
        );
    }

    #[test]
    fn test_describe_without_sidebar() {
        let site = site();
        let path = RoutePath::from_browser("/zh/about");
        let text = describe(&path, site.route(&path));
        assert!(text.contains("locale   / (zh-CN)"));
        assert!(text.ends_with("sidebar  none"));
    }

    #[test]
    fn test_located_json() {
        let site = site();
        let path = RoutePath::from_browser("/zh/guide/%E5%AE%89%E8%A3%85");
        let json = serde_json::to_value(Located::new(&path, site.route(&path))).unwrap();
        assert_eq!(json["path"], "/zh/guide/安装");
        assert_eq!(json["locale"], "/");
        assert_eq!(json["sidebar"][0]["children"][1]["text"], "安装");
    }
}
