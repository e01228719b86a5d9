use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use payvault_core::PayVault;
use payvault_core::models::{EntryPatch, NewEntry};

use crate::cli::Commands;

mod handlers;
mod support;

use self::handlers::{handle_note, handle_prefs};
use self::support::{build_list_request, build_search_request, highlighted_views, print_json};

pub(crate) fn run_from_root(root: &Path, command: Commands) -> Result<()> {
    let vault = PayVault::new(root)
        .with_context(|| format!("failed to open vault at {}", root.display()))?;
    run(&vault, command)
}

fn run(vault: &PayVault, command: Commands) -> Result<()> {
    match command {
        Commands::Init => {
            vault.initialize()?;
            print_json(&serde_json::json!({
                "status": "ok",
                "root": vault.root().display().to_string(),
                "embeddedDir": vault.embedded_dir().display().to_string(),
            }))?;
        }
        Commands::Status => {
            print_json(&vault.status()?)?;
        }
        Commands::Sync(args) => {
            let report = vault.sync(args.force)?;
            print_json(&report)?;
        }
        Commands::Search(args) => {
            let highlight = args.highlight;
            let request = build_search_request(vault, args)?;
            let views = vault.search(&request)?;
            if highlight {
                print_json(&highlighted_views(&views, &request.query))?;
            } else {
                print_json(&views)?;
            }
        }
        Commands::Ls(args) => {
            let request = build_list_request(vault, args)?;
            print_json(&vault.search(&request)?)?;
        }
        Commands::Show(args) => {
            print_json(&vault.get_entry(&args.id)?)?;
        }
        Commands::Add(args) => {
            let entry = vault.add_entry(NewEntry {
                title: args.title,
                body: args.payload,
                category: args.category,
                subcategory: args.subcategory,
                tags: args.tags,
                notes: args.notes,
                level: args.level,
            })?;
            print_json(&entry)?;
        }
        Commands::Edit(args) => {
            let tags = if args.clear_tags {
                Some(Vec::new())
            } else if args.tags.is_empty() {
                None
            } else {
                Some(args.tags)
            };
            let entry = vault.update_entry(
                &args.id,
                EntryPatch {
                    title: args.title,
                    body: args.payload,
                    category: args.category,
                    subcategory: args.subcategory,
                    tags,
                    notes: args.notes,
                    level: args.level,
                },
            )?;
            print_json(&entry)?;
        }
        Commands::Rm(args) => {
            vault.delete_entry(&args.id)?;
            print_json(&serde_json::json!({
                "status": "ok",
                "id": args.id,
            }))?;
        }
        Commands::Fav(args) => {
            let favorite = vault.toggle_favorite(&args.id)?;
            print_json(&serde_json::json!({
                "id": args.id,
                "favorite": favorite,
            }))?;
        }
        Commands::Favs => {
            print_json(&vault.favorites()?)?;
        }
        Commands::Export(args) => {
            let document = vault.export_user_entries()?;
            match args.out {
                Some(path) => {
                    let raw = serde_json::to_string_pretty(&document)?;
                    fs::write(&path, raw)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    print_json(&serde_json::json!({
                        "status": "ok",
                        "path": path.display().to_string(),
                        "count": document.count,
                    }))?;
                }
                None => print_json(&document)?,
            }
        }
        Commands::Import(args) => {
            let raw = fs::read_to_string(&args.file)
                .with_context(|| format!("failed to read {}", args.file.display()))?;
            let imported = vault.import_user_entries(&raw)?;
            print_json(&serde_json::json!({
                "status": "ok",
                "imported": imported,
            }))?;
        }
        Commands::Categories => {
            print_json(&vault.categories()?)?;
        }
        Commands::Subcategories(args) => {
            print_json(&vault.subcategories(&args.category)?)?;
        }
        Commands::Note(args) => handle_note(vault, args.command)?,
        Commands::Prefs(args) => handle_prefs(vault, args.command)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests;
