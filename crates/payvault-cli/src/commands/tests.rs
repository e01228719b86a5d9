use payvault_core::PayVault;
use payvault_core::config::AppConfig;
use payvault_core::models::{
    MatchMode, NewEntry, PreferencesPatch, SearchRequest, SortCriterion,
};
use tempfile::tempdir;

use crate::cli::SearchArgs;

use super::support::{
    build_filter, build_search_request, highlighted_views, resolve_match_mode, sort_for_listing,
};

fn search_args(query: &str) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        category: None,
        subcategory: None,
        regex: false,
        literal: false,
        sort: None,
        limit: None,
        highlight: false,
    }
}

#[test]
fn explicit_mode_flags_override_preferences() {
    assert_eq!(
        resolve_match_mode(true, false, MatchMode::Literal),
        MatchMode::Regex
    );
    assert_eq!(
        resolve_match_mode(false, true, MatchMode::Regex),
        MatchMode::Literal
    );
    assert_eq!(
        resolve_match_mode(false, false, MatchMode::Regex),
        MatchMode::Regex
    );
}

#[test]
fn missing_category_means_all() {
    let filter = build_filter(None, None);
    assert!(filter.is_all_categories());
    let filter = build_filter(Some("XSS".to_string()), Some("DOM".to_string()));
    assert_eq!(filter.category, "XSS");
    assert_eq!(filter.subcategory_constraint(), Some("DOM"));
}

#[test]
fn listing_replaces_relevance_with_title_order() {
    assert_eq!(sort_for_listing(SortCriterion::Relevance), SortCriterion::Title);
    assert_eq!(sort_for_listing(SortCriterion::Recency), SortCriterion::Recency);
}

#[test]
fn search_request_falls_back_to_stored_preferences() {
    let temp = tempdir().expect("tempdir");
    let vault = PayVault::with_config(temp.path(), AppConfig::default()).expect("vault");
    vault
        .set_preferences(PreferencesPatch {
            match_mode: Some(MatchMode::Regex),
            sort: Some(SortCriterion::Level),
            ..PreferencesPatch::default()
        })
        .expect("prefs");

    let request = build_search_request(&vault, search_args("^alert")).expect("request");
    assert_eq!(request.mode, MatchMode::Regex);
    assert_eq!(request.sort, SortCriterion::Level);
    assert!(request.filter.is_all_categories());

    let request = build_search_request(
        &vault,
        SearchArgs {
            literal: true,
            sort: Some(SortCriterion::Title),
            limit: Some(3),
            ..search_args("alert")
        },
    )
    .expect("request");
    assert_eq!(request.mode, MatchMode::Literal);
    assert_eq!(request.sort, SortCriterion::Title);
    assert_eq!(request.limit, Some(3));
}

#[test]
fn highlighted_output_keeps_entry_fields_and_marks_terms() {
    let temp = tempdir().expect("tempdir");
    let vault = PayVault::with_config(temp.path(), AppConfig::default()).expect("vault");
    vault
        .add_entry(NewEntry {
            title: "Alert box".to_string(),
            body: "<script>alert(1)</script>".to_string(),
            category: "XSS".to_string(),
            ..NewEntry::default()
        })
        .expect("add");

    let views = vault.search(&SearchRequest::new("alert")).expect("search");
    let value = serde_json::to_value(highlighted_views(&views, "alert")).expect("serialize");
    let first = &value[0];
    assert_eq!(first["title"], "Alert box");
    assert_eq!(first["favorite"], false);
    assert_eq!(first["titleHtml"], "<mark>Alert</mark> box");
    assert_eq!(
        first["payloadHtml"],
        "&lt;script&gt;<mark>alert</mark>(1)&lt;/script&gt;"
    );
}
