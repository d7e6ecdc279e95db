//! Session state and the selection controller.
//!
//! The controller is the single writer over `(active language, selected
//! key, search term)`. Every user interaction funnels through one of its
//! transition methods, and each transition resolves a complete
//! [`DisplayPayload`] for the render layer. No transition can fail:
//! missing or asymmetric data between the two language catalogs always
//! degrades to empty or sentinel values so interaction is never blocked.

use crate::filter;
use crate::i18n::Language;
use crate::models::Item;
use crate::store::CatalogStore;

/// Shown as the translated name when the opposite language has no entry
/// for the selected key.
pub const TRANSLATION_NOT_FOUND: &str = "Translation not found";

/// Per-view mutable state. Created once at startup, mutated only by the
/// [`SelectionController`], discarded with the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub active_language: Language,
    /// Weak reference into the catalogs: may name a key absent from the
    /// active language's catalog, or from both.
    pub selected_key: Option<String>,
    pub search_term: String,
}

impl SessionState {
    pub fn new(default_language: Language) -> Self {
        Self {
            active_language: default_language,
            selected_key: None,
            search_term: String::new(),
        }
    }
}

/// Resolved display fields for the current selection, borrowed from the
/// catalog snapshots. Handed to the render layer after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPayload<'a> {
    /// Active language's name for the key; `None` when that catalog lacks
    /// the entry. Never falls back to the other language.
    pub primary_name: Option<&'a str>,
    /// The *opposite* language's name for the same key, the language-toggle
    /// affordance. [`TRANSLATION_NOT_FOUND`] when absent.
    pub translated_name: &'a str,
    /// Active language's description; same strictness as `primary_name`.
    pub description: Option<&'a str>,
    /// From the active language's entry when it exists (even if empty
    /// there), otherwise from the opposite entry, otherwise empty.
    pub categories: &'a [String],
    /// Same sourcing rule as `categories`.
    pub images: &'a [String],
}

impl DisplayPayload<'_> {
    /// The all-degraded payload: no selection, or a key absent from both
    /// catalogs.
    pub fn empty() -> Self {
        DisplayPayload {
            primary_name: None,
            translated_name: TRANSLATION_NOT_FOUND,
            description: None,
            categories: &[],
            images: &[],
        }
    }
}

/// State machine over selection and language, owning the immutable catalog
/// snapshots and the session state.
#[derive(Debug)]
pub struct SelectionController {
    catalogs: CatalogStore,
    session: SessionState,
}

impl SelectionController {
    pub fn new(catalogs: CatalogStore, default_language: Language) -> Self {
        Self {
            catalogs,
            session: SessionState::new(default_language),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn catalogs(&self) -> &CatalogStore {
        &self.catalogs
    }

    #[inline]
    pub fn active_language(&self) -> Language {
        self.session.active_language
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.session.selected_key.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.session.search_term
    }

    /// Select an item. Any key is accepted, known or not; an unknown key
    /// just resolves to the empty payload (permissive by design of the
    /// lookup layer).
    pub fn select_item(&mut self, key: impl Into<String>) -> DisplayPayload<'_> {
        self.session.selected_key = Some(key.into());
        self.payload()
    }

    /// Select the first item of the active language's catalog, in file
    /// order. Startup behavior; `None` when that catalog is empty.
    pub fn select_first(&mut self) -> Option<DisplayPayload<'_>> {
        let first = self
            .catalogs
            .catalog(self.session.active_language)
            .first_key()?
            .to_owned();
        Some(self.select_item(first))
    }

    /// Switch the active language. The selection, if any, is kept as-is and
    /// re-resolved under the new language.
    pub fn set_language(&mut self, lang: Language) -> DisplayPayload<'_> {
        self.session.active_language = lang;
        self.payload()
    }

    /// Name-click toggle: flip to the opposite language, but only when that
    /// language's catalog actually has the selected key; otherwise ignore
    /// the click. Funnels through [`set_language`](Self::set_language) like
    /// the selector widget does.
    pub fn toggle_language(&mut self) -> Option<DisplayPayload<'_>> {
        let key = self.session.selected_key.clone()?;
        let next = self.session.active_language.opposite();
        if !self.catalogs.catalog(next).contains_key(&key) {
            eprintln!(
                "Warning: item '{}' not found in '{}' data, toggle ignored",
                key,
                next.as_str()
            );
            return None;
        }
        Some(self.set_language(next))
    }

    /// Update the search term. Affects only the visible list; the selection
    /// stays even when filtered out of view.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.session.search_term = term.into();
    }

    /// The filtered item list for the active language under the current
    /// search term, in catalog order.
    pub fn visible_items(&self) -> Vec<(&str, &Item)> {
        filter::filter(
            self.catalogs.catalog(self.session.active_language),
            &self.session.search_term,
        )
    }

    /// Resolve the display payload for the current state.
    ///
    /// Primary name and description come strictly from the active
    /// language; the translated name strictly from the opposite one.
    /// Categories and images prefer the active entry but fall back to the
    /// opposite entry when the active catalog lacks the key entirely.
    pub fn payload(&self) -> DisplayPayload<'_> {
        let Some(key) = self.session.selected_key.as_deref() else {
            return DisplayPayload::empty();
        };
        let lang = self.session.active_language;
        let active = self.catalogs.get(lang, key);
        let opposite = self.catalogs.get(lang.opposite(), key);
        // entry-level fallback: an active entry with empty fields wins over
        // a populated opposite entry
        let shared = active.or(opposite);

        DisplayPayload {
            primary_name: active.map(|item| item.name.as_str()),
            translated_name: opposite
                .map(|item| item.name.as_str())
                .unwrap_or(TRANSLATION_NOT_FOUND),
            description: active.map(|item| item.description.as_str()),
            categories: shared.map(|item| item.categories.as_slice()).unwrap_or(&[]),
            images: shared.map(|item| item.images.as_slice()).unwrap_or(&[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, Item};
    use pretty_assertions::assert_eq;

    fn sword_item(name: &str, description: &str, categories: &[&str], images: &[&str]) -> Item {
        Item {
            name: name.to_string(),
            description: description.to_string(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sword_store() -> CatalogStore {
        let mut zh = Catalog::new();
        zh.insert("sword", sword_item("劍", "d1", &["weapon"], &["a.png"]));
        let mut en = Catalog::new();
        en.insert("sword", sword_item("Sword", "d2", &["Weapon"], &[]));
        CatalogStore::from_catalogs(zh, en)
    }

    #[test]
    fn test_select_resolves_both_languages() {
        let mut ctl = SelectionController::new(sword_store(), Language::Zh);
        let payload = ctl.select_item("sword");

        assert_eq!(payload.primary_name, Some("劍"));
        assert_eq!(payload.translated_name, "Sword");
        assert_eq!(payload.description, Some("d1"));
        assert_eq!(payload.categories, ["weapon".to_string()]);
        assert_eq!(payload.images, ["a.png".to_string()]);
    }

    #[test]
    fn test_language_switch_swaps_sides_without_image_fallback() {
        let mut ctl = SelectionController::new(sword_store(), Language::Zh);
        ctl.select_item("sword");
        let payload = ctl.set_language(Language::En);

        assert_eq!(payload.primary_name, Some("Sword"));
        assert_eq!(payload.translated_name, "劍");
        assert_eq!(payload.description, Some("d2"));
        // en entry exists with no images: stays empty, never borrows zh's
        assert_eq!(payload.images, Vec::<String>::new());
        assert_eq!(payload.categories, ["Weapon".to_string()]);
    }

    #[test]
    fn test_language_switch_keeps_selection() {
        let mut ctl = SelectionController::new(sword_store(), Language::Zh);
        ctl.select_item("sword");
        ctl.set_language(Language::En);
        assert_eq!(ctl.selected_key(), Some("sword"));
        ctl.set_language(Language::Zh);
        assert_eq!(ctl.selected_key(), Some("sword"));
    }

    #[test]
    fn test_key_missing_from_opposite_yields_sentinel() {
        let mut zh = Catalog::new();
        zh.insert("jade", sword_item("玉", "only zh", &["stone"], &["jade.png"]));
        let store = CatalogStore::from_catalogs(zh, Catalog::new());

        let mut ctl = SelectionController::new(store, Language::Zh);
        let payload = ctl.select_item("jade");
        assert_eq!(payload.primary_name, Some("玉"));
        assert_eq!(payload.translated_name, TRANSLATION_NOT_FOUND);
    }

    #[test]
    fn test_key_missing_from_active_falls_back_for_tags_and_images() {
        let mut zh = Catalog::new();
        zh.insert("jade", sword_item("玉", "only zh", &["stone"], &["jade.png"]));
        let store = CatalogStore::from_catalogs(zh, Catalog::new());

        let mut ctl = SelectionController::new(store, Language::Zh);
        ctl.select_item("jade");
        let payload = ctl.set_language(Language::En);

        // primary fields never cross languages
        assert_eq!(payload.primary_name, None);
        assert_eq!(payload.description, None);
        // the opposite (zh) entry still supplies the toggle name, tags, and
        // gallery
        assert_eq!(payload.translated_name, "玉");
        assert_eq!(payload.categories, ["stone".to_string()]);
        assert_eq!(payload.images, ["jade.png".to_string()]);
    }

    #[test]
    fn test_unknown_key_is_accepted_and_empty() {
        let mut ctl = SelectionController::new(sword_store(), Language::Zh);
        let payload = ctl.select_item("unknown-key");

        assert_eq!(payload, DisplayPayload::empty());
        assert_eq!(ctl.selected_key(), Some("unknown-key"));
    }

    #[test]
    fn test_no_selection_payload_is_empty() {
        let ctl = SelectionController::new(sword_store(), Language::Zh);
        assert_eq!(ctl.payload(), DisplayPayload::empty());
    }

    #[test]
    fn test_search_does_not_touch_selection() {
        let mut ctl = SelectionController::new(sword_store(), Language::Zh);
        ctl.select_item("sword");
        ctl.set_search_term("查無此物");

        assert!(ctl.visible_items().is_empty());
        // filtered out of view, still selected
        assert_eq!(ctl.selected_key(), Some("sword"));
        assert_eq!(ctl.payload().primary_name, Some("劍"));
    }

    #[test]
    fn test_visible_items_follow_active_language() {
        let mut ctl = SelectionController::new(sword_store(), Language::Zh);
        ctl.set_search_term("weapon");
        assert_eq!(ctl.visible_items().len(), 1);

        ctl.set_language(Language::En);
        let visible = ctl.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].1.name, "Sword");
    }

    #[test]
    fn test_toggle_language_round_trip() {
        let mut ctl = SelectionController::new(sword_store(), Language::Zh);
        ctl.select_item("sword");

        let payload = ctl.toggle_language().unwrap();
        assert_eq!(payload.primary_name, Some("Sword"));
        assert_eq!(ctl.active_language(), Language::En);

        ctl.toggle_language().unwrap();
        assert_eq!(ctl.active_language(), Language::Zh);
    }

    #[test]
    fn test_toggle_refused_when_opposite_lacks_key() {
        let mut zh = Catalog::new();
        zh.insert("jade", sword_item("玉", "", &[], &[]));
        let store = CatalogStore::from_catalogs(zh, Catalog::new());

        let mut ctl = SelectionController::new(store, Language::Zh);
        ctl.select_item("jade");

        assert!(ctl.toggle_language().is_none());
        assert_eq!(ctl.active_language(), Language::Zh);
        assert_eq!(ctl.selected_key(), Some("jade"));
    }

    #[test]
    fn test_toggle_without_selection_is_noop() {
        let mut ctl = SelectionController::new(sword_store(), Language::Zh);
        assert!(ctl.toggle_language().is_none());
        assert_eq!(ctl.active_language(), Language::Zh);
    }

    #[test]
    fn test_select_first_uses_file_order() {
        let mut zh = Catalog::new();
        zh.insert("second-by-name", sword_item("乙", "", &[], &[]));
        zh.insert("first-by-name", sword_item("甲", "", &[], &[]));
        let store = CatalogStore::from_catalogs(zh, Catalog::new());

        let mut ctl = SelectionController::new(store, Language::Zh);
        let payload = ctl.select_first().unwrap();
        assert_eq!(payload.primary_name, Some("乙"));
        assert_eq!(ctl.selected_key(), Some("second-by-name"));
    }

    #[test]
    fn test_select_first_on_empty_catalog() {
        let mut ctl = SelectionController::new(CatalogStore::default(), Language::Zh);
        assert!(ctl.select_first().is_none());
        assert_eq!(ctl.selected_key(), None);
    }
}
