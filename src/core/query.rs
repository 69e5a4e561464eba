//! Query engine: `(Catalog, ViewState) -> ordered list of items`.
//!
//! Pure and deterministic. Filtering happens first, then a stable sort, so
//! ties keep catalog order.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::catalog::{Catalog, Item};
use super::view_state::{SortMode, ViewState};

/// Filter and sort the catalog for the given view state.
pub fn derive<'a>(catalog: &'a Catalog, state: &ViewState) -> Vec<&'a Item> {
    let needle = state.query.to_lowercase();
    let mut list: Vec<&Item> = catalog
        .iter()
        .filter(|item| matches_with(item, &state.category, &needle))
        .collect();
    sort_items(&mut list, state.sort_mode);
    list
}

/// Whether `item` passes both the category and the text filter.
pub fn matches(item: &Item, state: &ViewState) -> bool {
    matches_with(item, &state.category, &state.query.to_lowercase())
}

fn matches_with(item: &Item, category: &str, needle: &str) -> bool {
    let category_ok = category.is_empty() || item.category.as_str() == category;
    let query_ok = needle.is_empty() || item.name.to_lowercase().contains(needle);
    category_ok && query_ok
}

/// Stable in-place sort by `mode`.
pub fn sort_items(list: &mut [&Item], mode: SortMode) {
    match mode {
        SortMode::PriceAsc => list.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceDesc => list.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::NameAsc => list.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortMode::Popularity => list.sort_by(|a, b| b.rank().cmp(&a.rank())),
    }
}

/// Collation used by the name sort: accent- and case-insensitive first,
/// raw code point order as the tiebreak.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
