use std::path::Path;
use std::process::Command;

use lumina_core::models::NotePatch;

use crate::commands::common::{
    default_editor, format_note_lines, note_to_list_item, open_store, resolve_note,
    resolve_note_content, resolve_space, title_from_content, NoteListItem,
};
use crate::error::CliError;

pub fn run_new(
    content_parts: &[String],
    space: Option<&str>,
    title: Option<&str>,
    data_dir: &Path,
) -> Result<(), CliError> {
    let content = resolve_note_content(content_parts)?;

    let mut store = open_store(data_dir)?;
    let space_id = space.map(|query| resolve_space(&store, query)).transpose()?;

    let title = title.map_or_else(|| title_from_content(&content), ToString::to_string);
    let id = store.create_note(space_id);
    store.update_note(id, NotePatch::new().title(title).content(content))?;

    println!("{id}");
    Ok(())
}

pub fn run_list(
    limit: usize,
    space: Option<&str>,
    tag: Option<&str>,
    starred: bool,
    as_json: bool,
    data_dir: &Path,
) -> Result<(), CliError> {
    let store = open_store(data_dir)?;
    let space_id = space.map(|query| resolve_space(&store, query)).transpose()?;

    let notes: Vec<_> = store
        .notes()
        .iter()
        .filter(|note| space_id.is_none() || note.space_id == space_id)
        .filter(|note| {
            tag.map_or(true, |tag| note.tags.iter().any(|existing| existing == tag))
        })
        .filter(|note| !starred || note.starred)
        .take(limit)
        .collect();

    if as_json {
        let json_items = notes
            .iter()
            .map(|note| note_to_list_item(note))
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        for line in format_note_lines(&notes) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn run_show(id_query: &str, data_dir: &Path) -> Result<(), CliError> {
    let store = open_store(data_dir)?;
    let id = resolve_note(&store, id_query)?;
    let note = store
        .get_note(id)
        .ok_or_else(|| CliError::NoteNotFound(id_query.to_string()))?;

    println!("{}", note.title);
    if !note.tags.is_empty() {
        println!("#{}", note.tags.join(" #"));
    }
    println!();
    println!("{}", note.content);
    Ok(())
}

pub fn run_edit(id_query: &str, data_dir: &Path) -> Result<(), CliError> {
    let mut store = open_store(data_dir)?;
    let id = resolve_note(&store, id_query)?;
    let content = store
        .get_note(id)
        .map(|note| note.content.clone())
        .ok_or_else(|| CliError::NoteNotFound(id_query.to_string()))?;

    let scratch_path = std::env::temp_dir().join(format!("lumina-edit-{id}.md"));
    std::fs::write(&scratch_path, &content)?;

    let editor = default_editor();
    let status = Command::new(&editor).arg(&scratch_path).status()?;
    if !status.success() {
        return Err(CliError::EditorFailed(format!("{editor} exited with {status}")));
    }

    let edited = std::fs::read_to_string(&scratch_path)?;
    let _ = std::fs::remove_file(&scratch_path);

    let edited = edited.trim_end();
    if edited == content {
        println!("No changes");
        return Ok(());
    }

    store.update_note(id, NotePatch::new().content(edited))?;
    println!("Updated {id}");
    Ok(())
}

pub fn run_delete(id_query: &str, data_dir: &Path) -> Result<(), CliError> {
    let mut store = open_store(data_dir)?;
    let id = resolve_note(&store, id_query)?;
    store.delete_note(id)?;
    println!("Deleted {id}");
    Ok(())
}

pub fn run_star(id_query: &str, data_dir: &Path) -> Result<(), CliError> {
    let mut store = open_store(data_dir)?;
    let id = resolve_note(&store, id_query)?;
    let starred = store.toggle_star(id)?;
    println!("{} {id}", if starred { "Starred" } else { "Unstarred" });
    Ok(())
}
