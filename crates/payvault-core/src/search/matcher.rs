use regex::{Regex, RegexBuilder};

use crate::models::{Entry, MatchMode};

use super::score::{LiteralQuery, score_literal};

/// Turns filtered candidates into the ordered result set for one match mode.
pub(super) trait RankingStrategy {
    fn rank<'a>(&self, candidates: Vec<&'a Entry>) -> Vec<&'a Entry>;
}

pub(super) fn strategy_for(mode: MatchMode, raw_query: &str) -> Box<dyn RankingStrategy> {
    match mode {
        MatchMode::Literal => Box::new(WeightedLiteral::new(raw_query)),
        MatchMode::Regex => Box::new(RegexPredicate::new(raw_query)),
    }
}

/// Additive field-weighted scoring; ties keep corpus order.
#[derive(Debug)]
pub(super) struct WeightedLiteral {
    query: Option<LiteralQuery>,
}

impl WeightedLiteral {
    pub(super) fn new(raw_query: &str) -> Self {
        Self {
            query: LiteralQuery::parse(raw_query),
        }
    }
}

impl RankingStrategy for WeightedLiteral {
    fn rank<'a>(&self, candidates: Vec<&'a Entry>) -> Vec<&'a Entry> {
        let Some(query) = &self.query else {
            return candidates;
        };

        let mut scored = candidates
            .into_iter()
            .map(|entry| (score_literal(entry, query), entry))
            .filter(|(score, _)| *score > 0)
            .collect::<Vec<_>>();
        // `sort_by` is stable: equal scores stay in corpus order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, entry)| entry).collect()
    }
}

/// Boolean per-field regular-expression predicate; no graduated weights.
#[derive(Debug)]
pub(super) struct RegexPredicate {
    pattern: Option<Regex>,
}

impl RegexPredicate {
    pub(super) fn new(raw_query: &str) -> Self {
        let pattern = match compile_pattern(raw_query) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                tracing::debug!(query = raw_query, error = %err, "regex query does not compile");
                None
            }
        };
        Self { pattern }
    }
}

impl RankingStrategy for RegexPredicate {
    fn rank<'a>(&self, candidates: Vec<&'a Entry>) -> Vec<&'a Entry> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };

        candidates
            .into_iter()
            .filter(|entry| entry_matches_pattern(entry, pattern))
            .collect()
    }
}

pub(super) fn compile_pattern(raw_query: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(raw_query).case_insensitive(true).build()
}

fn entry_matches_pattern(entry: &Entry, pattern: &Regex) -> bool {
    pattern.is_match(&entry.title)
        || pattern.is_match(&entry.body)
        || entry.tags.iter().any(|tag| pattern.is_match(tag))
        || pattern.is_match(entry.subcategory_or_empty())
}
