//! Ordered token maps with unique keys.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::{Serialize, Serializer};

/// An ordered map from token name to value.
///
/// Declaration order is preserved so generated output follows the order of
/// the configuration source. Deserialization rejects duplicate keys: two
/// tokens of the same name in one table is a configuration error, never a
/// silent "last one wins".
///
/// Keys may be written as numbers in YAML (`50: '#f8fafc'`, `2.5: ...`);
/// they are stored as their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMap<V>(IndexMap<String, V>);

impl<V> TokenMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Inserts a token, refusing to overwrite an existing name.
    ///
    /// Returns the rejected value back on collision.
    pub fn try_insert(&mut self, name: impl Into<String>, value: V) -> Result<(), V> {
        let name = name.into();
        if self.0.contains_key(&name) {
            return Err(value);
        }
        self.0.insert(name, value);
        Ok(())
    }

    /// Inserts or replaces a token, keeping the original position on replace.
    pub fn upsert(&mut self, name: impl Into<String>, value: V) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, V> {
        self.0.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, V> {
        self.0.keys()
    }
}

impl<V> Default for TokenMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a TokenMap<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = indexmap::map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<V> IntoIterator for TokenMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: Serialize> Serialize for TokenMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// A token name as written in a configuration source.
struct TokenKey(String);

impl<'de> Deserialize<'de> for TokenKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = TokenKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a token name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TokenKey, E> {
                Ok(TokenKey(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<TokenKey, E> {
                Ok(TokenKey(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TokenKey, E> {
                Ok(TokenKey(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TokenKey, E> {
                Ok(TokenKey(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<TokenKey, E> {
                Ok(TokenKey(v.to_string()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for TokenMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for MapVisitor<V> {
            type Value = TokenMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of token names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = TokenMap::new();
                while let Some((TokenKey(name), value)) = access.next_entry::<TokenKey, V>()? {
                    if map.contains(&name) {
                        return Err(de::Error::custom(format!(
                            "duplicate token name `{}`",
                            name
                        )));
                    }
                    map.upsert(name, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_insert_rejects_duplicates() {
        let mut map = TokenMap::new();
        assert!(map.try_insert("glow", "a").is_ok());
        assert_eq!(map.try_insert("glow", "b"), Err("b"));
        assert_eq!(map.get("glow"), Some(&"a"));
    }

    #[test]
    fn test_upsert_keeps_position() {
        let mut map = TokenMap::new();
        map.upsert("a", 1);
        map.upsert("b", 2);
        map.upsert("a", 3);
        let entries: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(entries, vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_deserialize_numeric_keys() {
        let map: TokenMap<String> = serde_yaml::from_str("50: '#f8fafc'\n2.5: '0.625rem'\n").unwrap();
        assert_eq!(map.get("50").map(String::as_str), Some("#f8fafc"));
        assert_eq!(map.get("2.5").map(String::as_str), Some("0.625rem"));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_json_keys() {
        let err = serde_json::from_str::<TokenMap<String>>(r#"{"xs": "1px", "xs": "2px"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate token name `xs`"));
    }

    #[test]
    fn test_deserialize_preserves_order() {
        let map: TokenMap<String> =
            serde_json::from_str(r#"{"z": "1", "a": "2", "m": "3"}"#).unwrap();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
