//! i18n module - internationalization support
//!
//! Unlike menu chrome that can be baked into the binary, this catalog's UI
//! strings ship next to the item data, so the table is loaded from a flat
//! JSON object per language. A lookup that misses simply renders nothing;
//! nothing in here can fail hard.

use std::collections::HashMap;

use serde::Deserialize;

/// Supported catalog languages. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// 中文（預設）
    #[default]
    Zh,
    En,
}

impl Language {
    /// Both languages, in data-file order.
    pub const ALL: [Language; 2] = [Language::Zh, Language::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "en" => Language::En,
            _ => Language::Zh,
        }
    }

    /// The other language. The translated-name affordance always shows this
    /// side's name for the selected item.
    pub fn opposite(&self) -> Self {
        match self {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        }
    }

    /// Position in [`Language::ALL`], for per-language storage.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Language::Zh => 0,
            Language::En => 1,
        }
    }
}

/// UI label strings for one language, keyed by label id
/// (`pageTitle`, `searchPlaceholder`, `noResults`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct UiStrings {
    labels: HashMap<String, String>,
}

impl UiStrings {
    /// An empty table. Every lookup misses, so every label renders blank;
    /// this is the degraded state after a failed load.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up a label id. `None` means "render nothing for this label".
    pub fn get(&self, label_id: &str) -> Option<&str> {
        self.labels.get(label_id).map(String::as_str)
    }

    /// Like [`get`](Self::get) but blank on a miss, for call sites that
    /// always paint something.
    pub fn get_or_blank(&self, label_id: &str) -> &str {
        self.get(label_id).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
