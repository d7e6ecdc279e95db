//! Filter engine - derives the visible item list from one catalog and a
//! search term. Pure: no state, no mutation, stable order.

use crate::models::{Catalog, Item};

/// Entries of `catalog` whose name or any category contains `term`,
/// case-insensitively, in catalog (file) order. An empty term matches
/// everything. An empty result means the caller should show its
/// "no results" indicator instead of a blank list.
pub fn filter<'a>(catalog: &'a Catalog, term: &str) -> Vec<(&'a str, &'a Item)> {
    let needle = term.to_lowercase();
    catalog
        .iter()
        .filter(|(_, item)| matches(item, &needle))
        .collect()
}

fn matches(item: &Item, lowercase_needle: &str) -> bool {
    item.name.to_lowercase().contains(lowercase_needle)
        || item
            .categories
            .iter()
            .any(|cat| cat.to_lowercase().contains(lowercase_needle))
}
