use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;
mod note;
mod parsers;
mod prefs;

#[cfg(test)]
mod tests;

pub use args::{
    AddArgs, EditArgs, ExportArgs, IdArg, ImportArgs, ListArgs, SearchArgs, SubcategoriesArgs,
    SyncArgs,
};
pub use note::{NoteArgs, NoteCommand};
pub use prefs::{PrefsArgs, PrefsCommand};

#[derive(Debug, Parser)]
#[command(name = "payvault")]
#[command(about = "Offline payload catalog with ranked search", version)]
pub struct Cli {
    #[arg(long, global = true, default_value = ".payvault")]
    pub root: PathBuf,

    /// Log debug output to stderr (`PAYVAULT_LOG` overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the vault root and the embedded catalog directory.
    Init,
    Status,
    /// Refresh the remote catalog cache.
    Sync(SyncArgs),
    Search(SearchArgs),
    /// List entries without a query.
    Ls(ListArgs),
    Show(IdArg),
    Add(AddArgs),
    Edit(EditArgs),
    Rm(IdArg),
    /// Toggle the favorite flag of an entry.
    Fav(IdArg),
    Favs,
    Export(ExportArgs),
    Import(ImportArgs),
    Categories,
    Subcategories(SubcategoriesArgs),
    Note(NoteArgs),
    Prefs(PrefsArgs),
}
