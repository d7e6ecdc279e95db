use serde::Deserialize;

/// 目錄項目（單一語言版本）
///
/// One language's record for a catalog entry. The same item key maps to one
/// of these in each language's catalog; the two records only correspond by
/// convention, never by construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    /// Display name in this catalog's language
    pub name: String,

    /// Long-form description shown in the info panel
    #[serde(default)]
    pub description: String,

    /// Category tags, in file order. May be empty or missing in the source.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Gallery image paths, in file order. May be empty or missing.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Item {
    /// Create an item with just a name, everything else empty.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            categories: Vec::new(),
            images: Vec::new(),
        }
    }
}
