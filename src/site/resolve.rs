//! Declaration validation and flattening.
//!
//! Validation steps (`SiteConfig::resolve` reports the earliest failing one):
//!
//! | Step | Check                                   | Error                  |
//! |------|-----------------------------------------|------------------------|
//! | 1    | `base` is `/` or `/x/`                  | `InvalidBase`          |
//! | 2    | locale keys unique after normalizing    | `DuplicateLocaleKey`   |
//! | 3    | `locales` and `theme.locales` agree     | `MismatchedLocaleKeys` |
//! | 4    | sidebar keys unique within a locale     | `DuplicateSidebarKey`  |
//! | 5    | navbar/sidebar links stay in locale     | `CrossLocaleLink`      |

use rustc_hash::FxHashSet;

use super::{
    Locale, ROOT_PREFIX, RootLocale, SidebarRoute, SiteConfig, SynthesizedRoot, longest_match,
    prefix_matches,
};
use crate::config::{
    ConfigError, DocsConfig, Entries, FieldPath, LocaleDecl, NavbarEntry, Report, SidebarDecl,
    SidebarSection, ThemeLocaleDecl, is_external_link, normalize_prefix,
};

/// Single pass over the declarations, collecting problems into a [`Report`].
pub(super) struct Resolver<'a> {
    raw: &'a DocsConfig,
    report: Report,
    /// Every known locale prefix, for ownership checks.
    prefixes: Vec<String>,
}

impl<'a> Resolver<'a> {
    pub fn new(raw: &'a DocsConfig) -> Self {
        Self {
            raw,
            report: Report::new(),
            prefixes: Vec::new(),
        }
    }

    /// Build the site and the report. The site is only meaningful when the
    /// report has no errors.
    pub fn run(mut self) -> (SiteConfig, Report) {
        let raw = self.raw;
        self.check_base();

        let site_locales = self.dedup_locales(FieldPath::new("locales"), &raw.locales);
        let theme_locales =
            self.dedup_locales(FieldPath::new("theme.locales"), &raw.theme.locales);
        self.check_key_sets(&site_locales, &theme_locales);

        // Site order first, then theme-only keys so their links are still checked.
        let mut keys: Vec<&str> = site_locales.iter().map(|(k, _)| k.as_str()).collect();
        for (key, _) in &theme_locales {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
        // An undeclared `/` still owns every path no other locale claims.
        let declared_root = keys.contains(&ROOT_PREFIX);
        self.prefixes = keys.iter().map(|k| k.to_string()).collect();
        if !declared_root {
            self.prefixes.insert(0, ROOT_PREFIX.to_string());
        }

        let mut locales = Vec::with_capacity(keys.len());
        let mut sidebars = Vec::new();
        for key in &keys {
            let site = site_locales.iter().find(|(k, _)| k == key).map(|(_, d)| *d);
            let theme = theme_locales.iter().find(|(k, _)| k == key);
            let (locale, rows) = self.build_locale(key, site, theme.map(|(_, d)| *d));
            locales.push(locale);
            sidebars.extend(rows);
        }

        let root = match locales.iter().position(|l: &Locale| l.is_root()) {
            Some(index) => RootLocale::Declared(index),
            None => {
                crate::debug!("resolve"; "no root locale declared, using site defaults");
                let (locale, rows) = self.build_locale(ROOT_PREFIX, None, None);
                RootLocale::Synthesized(Box::new(SynthesizedRoot {
                    locale,
                    sidebars: rows,
                }))
            }
        };

        let site = SiteConfig {
            base: raw.base.clone(),
            head: raw.head.clone(),
            logo: raw.theme.logo.clone(),
            locales,
            sidebars,
            root,
        };
        (site, self.report)
    }

    fn check_base(&mut self) {
        let base = &self.raw.base;
        if !base.starts_with('/') || !base.ends_with('/') {
            self.report.error(ConfigError::InvalidBase { base: base.clone() });
        }
    }

    /// Normalize keys, report repeats, keep the first occurrence.
    fn dedup_locales<T>(
        &mut self,
        field: FieldPath,
        entries: &'a Entries<T>,
    ) -> Vec<(String, &'a T)> {
        let mut seen = FxHashSet::default();
        let mut out = Vec::with_capacity(entries.len());
        for (key, decl) in entries.iter() {
            let prefix = normalize_prefix(key);
            if seen.insert(prefix.clone()) {
                out.push((prefix, decl));
            } else {
                self.report.error(ConfigError::DuplicateLocaleKey {
                    field: field.key(key),
                    key: prefix,
                });
            }
        }
        out
    }

    fn check_key_sets(
        &mut self,
        site: &[(String, &LocaleDecl)],
        theme: &[(String, &ThemeLocaleDecl)],
    ) {
        let site_keys: FxHashSet<&str> = site.iter().map(|(k, _)| k.as_str()).collect();
        let theme_keys: FxHashSet<&str> = theme.iter().map(|(k, _)| k.as_str()).collect();

        // Keep declaration order in the message.
        let only_in_site: Vec<String> = site
            .iter()
            .filter(|(k, _)| !theme_keys.contains(k.as_str()))
            .map(|(k, _)| k.clone())
            .collect();
        let only_in_theme: Vec<String> = theme
            .iter()
            .filter(|(k, _)| !site_keys.contains(k.as_str()))
            .map(|(k, _)| k.clone())
            .collect();

        if !only_in_site.is_empty() || !only_in_theme.is_empty() {
            self.report.error(ConfigError::MismatchedLocaleKeys {
                only_in_site,
                only_in_theme,
            });
        }
    }

    fn build_locale(
        &mut self,
        prefix: &str,
        site: Option<&LocaleDecl>,
        theme: Option<&ThemeLocaleDecl>,
    ) -> (Locale, Vec<SidebarRoute>) {
        let raw = self.raw;
        let theme_field = FieldPath::new("theme.locales").key(prefix);

        let site_lang = site.and_then(|d| d.lang.as_deref());
        let theme_lang = theme.and_then(|d| d.lang.as_deref());
        if let (Some(a), Some(b)) = (site_lang, theme_lang)
            && a != b
        {
            self.report.warn(
                theme_field.field("lang"),
                format!("lang `{b}` differs from `locales.\"{prefix}\".lang` (`{a}`)"),
            );
        }

        let (navbar, navbar_field) = match theme.and_then(|d| d.navbar.as_ref()) {
            Some(navbar) => (navbar, theme_field.field("navbar")),
            None => (&raw.theme.navbar, FieldPath::new("theme.navbar")),
        };
        self.check_navbar(prefix, &navbar_field, navbar);

        let (sidebar, sidebar_field) = match theme.and_then(|d| d.sidebar.as_ref()) {
            Some(sidebar) => (sidebar, theme_field.field("sidebar")),
            None => (&raw.theme.sidebar, FieldPath::new("theme.sidebar")),
        };
        let rows = self.build_sidebar(prefix, &sidebar_field, sidebar);

        let locale = Locale {
            prefix: prefix.to_string(),
            lang: site_lang.or(theme_lang).unwrap_or(&raw.lang).to_string(),
            title: site
                .and_then(|d| d.title.clone())
                .unwrap_or_else(|| raw.title.clone()),
            description: site
                .and_then(|d| d.description.clone())
                .unwrap_or_else(|| raw.description.clone()),
            select_language_name: theme.and_then(|d| d.select_language_name.clone()),
            navbar: navbar.clone(),
        };
        (locale, rows)
    }

    fn check_navbar(&mut self, locale: &str, field: &FieldPath, entries: &[NavbarEntry]) {
        for (i, entry) in entries.iter().enumerate() {
            let entry_field = field.index(i);
            match &entry.link {
                Some(link) => self.check_link(locale, entry_field.field("link"), link),
                None if entry.children.is_empty() => {
                    self.report.error(ConfigError::EmptyNavbarEntry {
                        field: entry_field.clone(),
                        text: entry.text.clone(),
                    });
                }
                None => {}
            }
            self.check_navbar(locale, &entry_field.field("children"), &entry.children);
        }
    }

    fn build_sidebar(
        &mut self,
        locale: &str,
        field: &FieldPath,
        sidebar: &SidebarDecl,
    ) -> Vec<SidebarRoute> {
        let mut seen = FxHashSet::default();
        let mut rows = Vec::with_capacity(sidebar.len());

        for (key, sections) in sidebar.iter() {
            let prefix = normalize_prefix(key);
            let key_field = field.key(key);

            if !seen.insert(prefix.clone()) {
                self.report.error(ConfigError::DuplicateSidebarKey {
                    locale: locale.to_string(),
                    key: prefix,
                });
                continue;
            }

            if let Some(owner) = owner_of(&self.prefixes, &prefix)
                && owner != locale
            {
                self.report.warn(
                    key_field.clone(),
                    format!("sidebar key falls under locale `{owner}` and is never shown"),
                );
            }

            self.check_sections(locale, &key_field, sections);
            rows.push(SidebarRoute {
                locale: locale.to_string(),
                prefix,
                sections: sections.clone(),
            });
        }
        rows
    }

    fn check_sections(&mut self, locale: &str, field: &FieldPath, sections: &[SidebarSection]) {
        for (i, section) in sections.iter().enumerate() {
            let section_field = field.index(i);
            if let Some(link) = &section.link {
                self.check_link(locale, section_field.field("link"), link);
            }
            if section.children.is_empty() {
                self.report.warn(
                    section_field.clone(),
                    format!("section `{}` has no items", section.text),
                );
            }
            for (j, item) in section.children.iter().enumerate() {
                let item_field = section_field.field("children").index(j).field("link");
                self.check_link(locale, item_field, &item.link);
            }
        }
    }

    /// A site link must be covered by `locale` and by no longer locale prefix.
    fn check_link(&mut self, locale: &str, field: FieldPath, link: &str) {
        if is_external_link(link) {
            return;
        }
        let owned =
            prefix_matches(locale, link) && owner_of(&self.prefixes, link) == Some(locale);
        if !owned {
            self.report.error(ConfigError::CrossLocaleLink {
                locale: locale.to_string(),
                field,
                link: link.to_string(),
            });
        }
    }
}

/// Locale prefix that serves `path`.
fn owner_of<'p>(prefixes: &'p [String], path: &str) -> Option<&'p str> {
    longest_match(prefixes.iter().map(|p| (p.as_str(), p.as_str())), path)
}
