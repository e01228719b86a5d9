use clap::{Args, Subcommand};
use payvault_core::models::{MatchMode, SortCriterion};

use super::parsers::{parse_font_size, parse_match_mode, parse_sort};

#[derive(Debug, Args)]
pub struct PrefsArgs {
    #[command(subcommand)]
    pub command: PrefsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PrefsCommand {
    Show,
    Set {
        #[arg(long, value_parser = parse_match_mode)]
        match_mode: Option<MatchMode>,
        #[arg(long, value_parser = parse_sort)]
        sort: Option<SortCriterion>,
        #[arg(long)]
        theme: Option<String>,
        #[arg(long, value_parser = parse_font_size)]
        font_size: Option<u16>,
    },
}
