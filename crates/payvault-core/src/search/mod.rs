//! Stateless search core: category filtering, relevance ranking, and the
//! presentation helpers layered on top of a ranked result.
//!
//! Every function here is a pure function of its arguments. The corpus is
//! borrowed, never mutated or cached.

use crate::error::{Result, VaultError};
use crate::models::{Entry, MatchMode, SearchFilter};

mod facets;
mod filter;
mod highlight;
mod matcher;
mod score;
mod sort;

pub use facets::{categories, subcategories};
pub use highlight::{escape_html, highlight};
pub use score::{LiteralQuery, score, score_literal};
pub use sort::sort_views;

/// Filters `corpus` by category/subcategory and ranks what remains for `query`.
///
/// An empty or all-whitespace query skips ranking and returns the filtered
/// entries in corpus order. In [`MatchMode::Literal`] entries scoring 0 are
/// dropped and the rest are ordered by descending score, ties in corpus
/// order. In [`MatchMode::Regex`] the raw query is compiled once and used as
/// a per-field predicate; results keep corpus order and a pattern that does
/// not compile matches nothing.
#[must_use]
pub fn search<'a>(
    corpus: &'a [Entry],
    query: &str,
    filter: &SearchFilter,
    mode: MatchMode,
) -> Vec<&'a Entry> {
    let candidates = filter::apply_filter(corpus, filter);
    if query.trim().is_empty() {
        return candidates;
    }
    matcher::strategy_for(mode, query).rank(candidates)
}

/// Checks whether `query` compiles as a regex-mode pattern.
///
/// [`search`] never fails on a bad pattern; callers that want to tell the
/// user why a regex search came back empty ask here.
pub fn validate_pattern(query: &str) -> Result<()> {
    matcher::compile_pattern(query)
        .map(|_| ())
        .map_err(|err| VaultError::InvalidPattern(err.to_string()))
}
