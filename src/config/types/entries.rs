//! Ordered map that keeps repeated keys.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Map entries in declaration order.
///
/// Unlike `HashMap`/`BTreeMap`, a key that appears twice is kept twice, so
/// the resolver can report it instead of silently keeping the last value.
/// Order matters too: it is the rendered order of locales and sidebars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entries<T>(pub Vec<(String, T)>);

impl<T> Entries<T> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> FromIterator<(String, T)> for Entries<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de, T> Deserialize<'de> for Entries<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for EntriesVisitor<T>
        where
            T: Deserialize<'de>,
        {
            type Value = Entries<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table keyed by path prefix")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    entries.push((key, value));
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

impl<T: Serialize> Serialize for Entries<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_toml_order() {
        let entries: Entries<u32> = toml::from_str("b = 1\na = 2\nc = 3").unwrap();
        assert_eq!(entries.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
    }

    #[test]
    fn test_keeps_repeated_json_keys() {
        let entries: Entries<u32> = serde_json::from_str(r#"{"/a/": 1, "/a/": 2}"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.0[1], ("/a/".to_string(), 2));
    }

    #[test]
    fn test_serializes_in_order() {
        let entries: Entries<&str> = [("rel".to_string(), "icon"), ("href".to_string(), "/a")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&entries).unwrap();
        assert_eq!(json, r#"{"rel":"icon","href":"/a"}"#);
    }

    #[test]
    fn test_rejects_non_map() {
        let result: Result<Entries<u32>, _> = serde_json::from_str("[1, 2]");
        assert!(result.is_err());
    }
}
