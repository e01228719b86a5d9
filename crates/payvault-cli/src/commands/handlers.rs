use anyhow::Result;
use payvault_core::PayVault;
use payvault_core::models::{NewNote, NotePatch, PreferencesPatch};

use crate::cli::{NoteCommand, PrefsCommand};

use super::print_json;

pub(super) fn handle_note(vault: &PayVault, command: NoteCommand) -> Result<()> {
    match command {
        NoteCommand::Add { title, body, entry } => {
            let note = vault.add_note(NewNote {
                entry_id: entry,
                title,
                body,
            })?;
            print_json(&note)?;
        }
        NoteCommand::Ls { entry } => {
            print_json(&vault.notes(entry.as_deref())?)?;
        }
        NoteCommand::Edit { id, title, body } => {
            let note = vault.update_note(&id, NotePatch { title, body })?;
            print_json(&note)?;
        }
        NoteCommand::Rm { id } => {
            vault.delete_note(&id)?;
            print_json(&serde_json::json!({
                "status": "ok",
                "id": id,
            }))?;
        }
    }
    Ok(())
}

pub(super) fn handle_prefs(vault: &PayVault, command: PrefsCommand) -> Result<()> {
    match command {
        PrefsCommand::Show => {
            print_json(&vault.preferences()?)?;
        }
        PrefsCommand::Set {
            match_mode,
            sort,
            theme,
            font_size,
        } => {
            let preferences = vault.set_preferences(PreferencesPatch {
                match_mode,
                sort,
                theme,
                font_size,
            })?;
            print_json(&preferences)?;
        }
    }
    Ok(())
}
