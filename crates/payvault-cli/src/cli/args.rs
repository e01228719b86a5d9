use std::path::PathBuf;

use clap::Args;
use payvault_core::models::{Level, SortCriterion};

use super::parsers::{parse_level, parse_min_one_usize, parse_sort};

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Fetch even when the stored version matches the remote one.
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(allow_hyphen_values = true)]
    pub query: String,
    /// Category to search in; `all` (the default) searches everything.
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub subcategory: Option<String>,
    /// Treat the query as a case-insensitive regular expression.
    #[arg(long, default_value_t = false)]
    pub regex: bool,
    /// Force literal matching even when preferences default to regex.
    #[arg(long, default_value_t = false, conflicts_with = "regex")]
    pub literal: bool,
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortCriterion>,
    #[arg(long, value_parser = parse_min_one_usize)]
    pub limit: Option<usize>,
    /// Add HTML-escaped title/payload fields with matches wrapped in `<mark>`.
    #[arg(long, default_value_t = false)]
    pub highlight: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub subcategory: Option<String>,
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortCriterion>,
}

#[derive(Debug, Args)]
pub struct IdArg {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, allow_hyphen_values = true)]
    pub payload: String,
    #[arg(long)]
    pub category: String,
    /// Defaults to `Custom`.
    #[arg(long)]
    pub subcategory: Option<String>,
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long, value_parser = parse_level)]
    pub level: Option<Level>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub payload: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Pass an empty string to clear.
    #[arg(long)]
    pub subcategory: Option<String>,
    /// Replaces the whole tag list.
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
    #[arg(long, default_value_t = false, conflicts_with = "tags")]
    pub clear_tags: bool,
    /// Pass an empty string to clear.
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long, value_parser = parse_level)]
    pub level: Option<Level>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Write the document to a file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct SubcategoriesArgs {
    pub category: String,
}
