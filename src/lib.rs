pub mod filter;
pub mod i18n;
pub mod models;
pub mod session;
pub mod store;

/// Shared constants for resource limits
pub mod limits {
    /// Maximum number of items accepted from a single catalog file
    pub const MAX_ITEMS: usize = 10_000;
}

// Re-export commonly used types
pub use filter::filter;
pub use i18n::{Language, UiStrings};
pub use models::{Catalog, Item};
pub use session::{DisplayPayload, SelectionController, SessionState, TRANSLATION_NOT_FOUND};
pub use store::{
    load_catalog, load_ui_strings, load_ui_strings_or_empty, CatalogStore, LoadError,
};
