//! Configuration section definitions.
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `head`      | `<head>` tags (`["link", { rel = "icon" }]`)     |
//! | `[locales]` | Per-locale lang, title and description          |
//! | `[theme]`   | Logo, navbar and sidebar trees per locale       |

mod head;
mod locale;
mod theme;

pub use head::HeadTag;
pub use locale::LocaleDecl;
pub use theme::{
    NavbarEntry, SidebarDecl, SidebarItem, SidebarSection, ThemeLocaleDecl, ThemeSection,
};
