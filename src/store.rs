//! Store layer - loads the per-language catalogs and UI string tables.
//!
//! Data lives under `<data dir>/language/<lang>/` as `items_<lang>.json`
//! and `ui_<lang>.json`. Loads are read-once: a store is an immutable
//! snapshot after construction. Every failure degrades to an empty
//! resource with a warning; the view must stay interactive on partial
//! data.

use std::path::{Path, PathBuf};
use std::thread;

use thiserror::Error;

use crate::i18n::{Language, UiStrings};
use crate::limits;
use crate::models::{Catalog, Item};

/// A catalog or UI string file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("too many items in {}: {count} (max: {})", .path.display(), limits::MAX_ITEMS)]
    TooLarge { path: PathBuf, count: usize },
}

/// Path of one language's item catalog under `data_dir`.
pub fn catalog_path(data_dir: &Path, lang: Language) -> PathBuf {
    data_dir
        .join("language")
        .join(lang.as_str())
        .join(format!("items_{}.json", lang.as_str()))
}

/// Path of one language's UI string table under `data_dir`.
pub fn ui_strings_path(data_dir: &Path, lang: Language) -> PathBuf {
    data_dir
        .join("language")
        .join(lang.as_str())
        .join(format!("ui_{}.json", lang.as_str()))
}

/// Read and parse a single catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog: Catalog = serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if catalog.len() > limits::MAX_ITEMS {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            count: catalog.len(),
        });
    }

    Ok(catalog)
}

/// Read and parse one language's UI string table.
pub fn load_ui_strings(data_dir: &Path, lang: Language) -> Result<UiStrings, LoadError> {
    let path = ui_strings_path(data_dir, lang);
    let content = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    UiStrings::from_json_str(&content).map_err(|source| LoadError::Parse { path, source })
}

/// Like [`load_ui_strings`] but degrades to an empty table with a warning.
/// Every label lookup then misses and the caller renders nothing for it.
pub fn load_ui_strings_or_empty(data_dir: &Path, lang: Language) -> UiStrings {
    match load_ui_strings(data_dir, lang) {
        Ok(strings) => strings,
        Err(err) => {
            eprintln!("Warning: UI strings unavailable for '{}': {}", lang.as_str(), err);
            UiStrings::empty()
        }
    }
}

/// Both languages' item catalogs, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalogs: [Catalog; 2],
}

impl CatalogStore {
    /// Build a store from already-parsed catalogs (tests, mainly).
    pub fn from_catalogs(zh: Catalog, en: Catalog) -> Self {
        Self { catalogs: [zh, en] }
    }

    /// Load both language catalogs from `data_dir`, one thread each, and
    /// wait for both. A failed side comes back as an empty catalog and its
    /// error is returned alongside the store; the other side is unaffected.
    pub fn load_pair(data_dir: &Path) -> (Self, Vec<LoadError>) {
        let handles = Language::ALL.map(|lang| {
            let path = catalog_path(data_dir, lang);
            thread::spawn(move || load_catalog(&path))
        });

        let mut store = Self::default();
        let mut errors = Vec::new();
        for (lang, handle) in Language::ALL.into_iter().zip(handles) {
            match handle.join() {
                Ok(Ok(catalog)) => store.catalogs[lang.index()] = catalog,
                Ok(Err(err)) => {
                    eprintln!("Warning: catalog unavailable for '{}': {}", lang.as_str(), err);
                    errors.push(err);
                }
                Err(_) => {
                    // Loader thread panicked; treat like any other failed load.
                    eprintln!("Warning: catalog loader for '{}' panicked", lang.as_str());
                }
            }
        }
        (store, errors)
    }

    #[inline]
    pub fn catalog(&self, lang: Language) -> &Catalog {
        &self.catalogs[lang.index()]
    }

    /// Permissive lookup: absent language data or an unknown key both
    /// resolve to `None`, never an error.
    #[inline]
    pub fn get(&self, lang: Language, key: &str) -> Option<&Item> {
        self.catalog(lang).get(key)
    }

    /// True when neither language loaded anything; the shell shows its
    /// load-failure notice in this state.
    pub fn is_empty(&self) -> bool {
        self.catalogs.iter().all(|c| c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_data_file(dir: &Path, lang: Language, file: &str, content: &str) {
        let lang_dir = dir.join("language").join(lang.as_str());
        fs::create_dir_all(&lang_dir).unwrap();
        fs::write(lang_dir.join(file), content).unwrap();
    }

    #[test]
    fn test_load_pair_reads_both_languages() {
        let dir = tempfile::tempdir().unwrap();
        write_data_file(
            dir.path(),
            Language::Zh,
            "items_zh.json",
            r#"{"sword": {"name": "劍"}}"#,
        );
        write_data_file(
            dir.path(),
            Language::En,
            "items_en.json",
            r#"{"sword": {"name": "Sword"}}"#,
        );

        let (store, errors) = CatalogStore::load_pair(dir.path());
        assert!(errors.is_empty());
        assert_eq!(store.get(Language::Zh, "sword").unwrap().name, "劍");
        assert_eq!(store.get(Language::En, "sword").unwrap().name, "Sword");
    }

    #[test]
    fn test_load_pair_degrades_missing_side_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        write_data_file(
            dir.path(),
            Language::Zh,
            "items_zh.json",
            r#"{"sword": {"name": "劍"}}"#,
        );
        // no en file at all

        let (store, errors) = CatalogStore::load_pair(dir.path());
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LoadError::Io { .. }));
        assert!(!store.catalog(Language::Zh).is_empty());
        assert!(store.catalog(Language::En).is_empty());
        assert!(store.get(Language::En, "sword").is_none());
    }

    #[test]
    fn test_malformed_catalog_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_data_file(dir.path(), Language::Zh, "items_zh.json", "{not json");

        let err = load_catalog(&catalog_path(dir.path(), Language::Zh)).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_both_sides_failed_leaves_store_empty() {
        let dir = tempfile::tempdir().unwrap();
        let (store, errors) = CatalogStore::load_pair(dir.path());
        assert_eq!(errors.len(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_ui_strings_load_and_degrade() {
        let dir = tempfile::tempdir().unwrap();
        write_data_file(
            dir.path(),
            Language::Zh,
            "ui_zh.json",
            r#"{"pageTitle": "藏品目錄"}"#,
        );

        let strings = load_ui_strings(dir.path(), Language::Zh).unwrap();
        assert_eq!(strings.get("pageTitle"), Some("藏品目錄"));

        // missing file degrades to the empty table
        let strings = load_ui_strings_or_empty(dir.path(), Language::En);
        assert!(strings.is_empty());
    }
}
