use crate::models::Entry;

const TITLE_EXACT: u32 = 100;
const TITLE_PREFIX: u32 = 80;
const TITLE_CONTAINS: u32 = 60;
const TERM_IN_TITLE: u32 = 20;
const TERM_IN_BODY: u32 = 15;
const TERM_IN_SUBCATEGORY: u32 = 25;
const TERM_EQUALS_TAG: u32 = 30;
const TERM_IN_TAG: u32 = 15;
const TERM_IN_NOTES: u32 = 10;
const SHORT_BODY_BONUS: u32 = 5;
const SHORT_BODY_CHARS: usize = 50;

/// A query normalized for literal scoring: lower-cased, trimmed, split on
/// runs of whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralQuery {
    pub full: String,
    pub terms: Vec<String>,
}

impl LiteralQuery {
    /// Returns `None` for empty or all-whitespace input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let full = raw.trim().to_lowercase();
        if full.is_empty() {
            return None;
        }
        let terms = full.split_whitespace().map(ToString::to_string).collect();
        Some(Self { full, terms })
    }
}

/// Relevance of `entry` for an already lower-cased query.
///
/// Weights are additive. The three title tiers (exact, prefix, substring of
/// the full query) are mutually exclusive; every per-term rule applies
/// independently for each term. Bodies shorter than 50 characters always earn
/// a small flat bonus. A result of 0 means "no match".
#[must_use]
pub fn score(entry: &Entry, query_terms: &[String], full_query: &str) -> u32 {
    let title = entry.title.to_lowercase();
    let body = entry.body.to_lowercase();
    let subcategory = entry.subcategory_or_empty().to_lowercase();
    let notes = entry.notes_or_empty().to_lowercase();
    let tags = entry
        .tags
        .iter()
        .map(|tag| tag.to_lowercase())
        .collect::<Vec<_>>();

    let mut total = if title == full_query {
        TITLE_EXACT
    } else if title.starts_with(full_query) {
        TITLE_PREFIX
    } else if title.contains(full_query) {
        TITLE_CONTAINS
    } else {
        0
    };

    for term in query_terms.iter().filter(|term| !term.is_empty()) {
        let term = term.as_str();
        if title.contains(term) {
            total += TERM_IN_TITLE;
        }
        if body.contains(term) {
            total += TERM_IN_BODY;
        }
        if subcategory.contains(term) {
            total += TERM_IN_SUBCATEGORY;
        }
        if tags.iter().any(|tag| tag == term) {
            total += TERM_EQUALS_TAG;
        }
        if tags.iter().any(|tag| tag.contains(term)) {
            total += TERM_IN_TAG;
        }
        if notes.contains(term) {
            total += TERM_IN_NOTES;
        }
    }

    // Flat: a short body scores even when nothing else matched.
    if entry.body.chars().count() < SHORT_BODY_CHARS {
        total += SHORT_BODY_BONUS;
    }

    total
}

#[must_use]
pub fn score_literal(entry: &Entry, query: &LiteralQuery) -> u32 {
    score(entry, &query.terms, &query.full)
}
