//! `head` tag declarations.
//!
//! # Example
//!
//! ```toml
//! head = [["link", { rel = "icon", href = "/favicon.ico" }]]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::types::Entries;

/// One tag injected into `<head>`: tag name plus attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag(pub String, pub Entries<String>);

impl HeadTag {
    pub fn tag(&self) -> &str {
        &self.0
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.1
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        head: Vec<HeadTag>,
    }

    #[test]
    fn test_parse_tuple_form() {
        let wrapper: Wrapper =
            toml::from_str(r#"head = [["link", { rel = "icon", href = "/favicon.ico" }]]"#)
                .unwrap();
        let tag = &wrapper.head[0];
        assert_eq!(tag.tag(), "link");
        assert_eq!(tag.attr("rel"), Some("icon"));
        assert_eq!(tag.attr("href"), Some("/favicon.ico"));
        assert_eq!(tag.attr("type"), None);
    }

    #[test]
    fn test_serialize_as_pair() {
        let wrapper: Wrapper = serde_json::from_str(
            r##"{"head": [["meta", {"name": "theme-color", "content": "#fff"}]]}"##,
        )
        .unwrap();
        let json = serde_json::to_string(&wrapper.head[0]).unwrap();
        assert_eq!(json, r##"["meta",{"name":"theme-color","content":"#fff"}]"##);
    }
}
