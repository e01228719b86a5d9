use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::models::{EntrySource, EntryView, SortCriterion};

/// Orders already-filtered views for display. All criteria are stable.
#[must_use]
pub fn sort_views(mut views: Vec<EntryView>, criterion: SortCriterion) -> Vec<EntryView> {
    match criterion {
        SortCriterion::Relevance => {}
        SortCriterion::Title => views.sort_by_cached_key(|view| title_key(&view.entry.title)),
        SortCriterion::FavoriteFirst => views.sort_by_key(|view| !view.favorite),
        SortCriterion::Recency => views.sort_by(recency_ordering),
        SortCriterion::Level => views.sort_by_key(|view| {
            view.entry.level.map_or(u8::MAX, |level| level.rank())
        }),
    }
    views
}

/// Collation key for titles: accents and case are ignored first, so "Éclair"
/// lands between "apple" and "Zeta". Ties fall back to the case-folded title
/// with accents, then to the raw title, keeping the order total.
fn title_key(title: &str) -> (String, String, String) {
    let folded = title.to_lowercase();
    let base = folded
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>();
    (base, folded, title.to_string())
}

fn recency_ordering(a: &EntryView, b: &EntryView) -> Ordering {
    let group = |view: &EntryView| u8::from(view.entry.source != EntrySource::User);
    group(a)
        .cmp(&group(b))
        .then_with(|| match (a.entry.created_at, b.entry.created_at) {
            (Some(a_at), Some(b_at)) => b_at.cmp(&a_at),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}
