use std::io::{self, Write};

use anyhow::Result;
use payvault_core::PayVault;
use payvault_core::models::{
    ALL_CATEGORIES, EntryView, MatchMode, SearchFilter, SearchRequest, SortCriterion,
};
use payvault_core::search::{highlight, validate_pattern};
use serde::Serialize;

use crate::cli::{ListArgs, SearchArgs};

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub(super) fn build_search_request(vault: &PayVault, args: SearchArgs) -> Result<SearchRequest> {
    let preferences = vault.preferences()?;
    let mode = resolve_match_mode(args.regex, args.literal, preferences.match_mode);
    if mode == MatchMode::Regex
        && let Err(err) = validate_pattern(&args.query)
    {
        tracing::warn!(error = %err, "regex query does not compile; nothing will match");
    }
    Ok(SearchRequest {
        query: args.query,
        filter: build_filter(args.category, args.subcategory),
        mode,
        sort: args.sort.unwrap_or(preferences.sort),
        limit: args.limit,
    })
}

pub(super) fn build_list_request(vault: &PayVault, args: ListArgs) -> Result<SearchRequest> {
    let preferences = vault.preferences()?;
    Ok(SearchRequest {
        filter: build_filter(args.category, args.subcategory),
        sort: args.sort.unwrap_or(sort_for_listing(preferences.sort)),
        ..SearchRequest::default()
    })
}

pub(super) fn resolve_match_mode(regex: bool, literal: bool, preferred: MatchMode) -> MatchMode {
    if regex {
        MatchMode::Regex
    } else if literal {
        MatchMode::Literal
    } else {
        preferred
    }
}

pub(super) fn build_filter(category: Option<String>, subcategory: Option<String>) -> SearchFilter {
    let filter = SearchFilter::category(category.unwrap_or_else(|| ALL_CATEGORIES.to_string()));
    match subcategory {
        Some(subcategory) => filter.with_subcategory(subcategory),
        None => filter,
    }
}

// Without a query there is no relevance order to keep.
pub(super) fn sort_for_listing(preferred: SortCriterion) -> SortCriterion {
    match preferred {
        SortCriterion::Relevance => SortCriterion::Title,
        other => other,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct HighlightedView<'a> {
    #[serde(flatten)]
    pub(super) view: &'a EntryView,
    pub(super) title_html: String,
    pub(super) payload_html: String,
}

pub(super) fn highlighted_views<'a>(views: &'a [EntryView], query: &str) -> Vec<HighlightedView<'a>> {
    views
        .iter()
        .map(|view| HighlightedView {
            view,
            title_html: highlight(&view.entry.title, query),
            payload_html: highlight(&view.entry.body, query),
        })
        .collect()
}
