use std::collections::BTreeSet;

use crate::models::{ALL_CATEGORIES, Entry};

/// Sorted, de-duplicated subcategories present in `category`.
///
/// The "all" sentinel has no subcategory facet and yields an empty list.
#[must_use]
pub fn subcategories(corpus: &[Entry], category: &str) -> Vec<String> {
    if category.trim().eq_ignore_ascii_case(ALL_CATEGORIES) {
        return Vec::new();
    }

    corpus
        .iter()
        .filter(|entry| entry.category == category)
        .filter_map(|entry| entry.subcategory.as_deref())
        .filter(|subcategory| !subcategory.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

#[must_use]
pub fn categories(corpus: &[Entry]) -> Vec<String> {
    corpus
        .iter()
        .map(|entry| entry.category.as_str())
        .filter(|category| !category.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}
