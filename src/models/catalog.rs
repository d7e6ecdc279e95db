use std::collections::HashMap;
use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use super::item::Item;

/// 目錄（單一語言）
///
/// A read-only mapping from item key to [`Item`] for one language.
/// Iteration order is the order keys appeared in the source file, which is
/// also the display order of the item list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, Item)>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, keeping first-seen position when the key repeats.
    pub fn insert(&mut self, key: impl Into<String>, item: Item) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = item,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, item));
            }
        }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Item> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// First key in file order, if any. Used for startup auto-selection.
    pub fn first_key(&self) -> Option<&str> {
        self.entries.first().map(|(k, _)| k.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of item keys to items")
            }

            // Hand-rolled so entries keep the order they have in the file;
            // a derived HashMap would scramble the display order.
            fn visit_map<A>(self, mut map: A) -> Result<Catalog, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut catalog = Catalog::new();
                while let Some((key, item)) = map.next_entry::<String, Item>()? {
                    catalog.insert(key, item);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preserves_file_order() {
        let catalog: Catalog = serde_json::from_str(
            r#"{
                "zebra": {"name": "斑馬"},
                "apple": {"name": "蘋果"},
                "mango": {"name": "芒果"}
            }"#,
        )
        .unwrap();

        let keys: Vec<&str> = catalog.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
        assert_eq!(catalog.first_key(), Some("zebra"));
    }

    #[test]
    fn test_get_and_absent() {
        let mut catalog = Catalog::new();
        catalog.insert("sword", Item::named("劍"));

        assert_eq!(catalog.get("sword").unwrap().name, "劍");
        assert!(catalog.get("shield").is_none());
        assert!(!catalog.contains_key("shield"));
    }

    #[test]
    fn test_duplicate_key_keeps_position() {
        let mut catalog = Catalog::new();
        catalog.insert("a", Item::named("first"));
        catalog.insert("b", Item::named("middle"));
        catalog.insert("a", Item::named("second"));

        let keys: Vec<&str> = catalog.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(catalog.get("a").unwrap().name, "second");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_empty_object_parses_empty() {
        let catalog: Catalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.first_key(), None);
    }
}
