use crate::models::{Entry, SearchFilter};

pub(super) fn entry_matches_filter(entry: &Entry, filter: &SearchFilter) -> bool {
    if !filter.is_all_categories() && entry.category != filter.category {
        return false;
    }

    if let Some(required) = filter.subcategory_constraint()
        && entry.subcategory.as_deref() != Some(required)
    {
        return false;
    }

    true
}

pub(super) fn apply_filter<'a>(corpus: &'a [Entry], filter: &SearchFilter) -> Vec<&'a Entry> {
    corpus
        .iter()
        .filter(|entry| entry_matches_filter(entry, filter))
        .collect()
}
