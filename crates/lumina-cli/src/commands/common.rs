use std::io::{self, IsTerminal, Read};
use std::path::Path;

use chrono::{TimeZone, Utc};
use serde::Serialize;

use lumina_core::models::Note;
use lumina_core::storage::FileStorage;
use lumina_core::{NoteId, SpaceId, Store};

use crate::error::CliError;

/// Open the store over the file-backed storage in `data_dir`
pub fn open_store(data_dir: &Path) -> Result<Store, CliError> {
    let storage = FileStorage::new(data_dir)?;
    Ok(Store::open(Box::new(storage))?)
}

/// Resolve a note from a full ID or a unique ID prefix
pub fn resolve_note(store: &Store, query: &str) -> Result<NoteId, CliError> {
    if let Ok(id) = query.parse::<NoteId>() {
        if store.get_note(id).is_some() {
            return Ok(id);
        }
    }

    let matches: Vec<NoteId> = store
        .notes()
        .iter()
        .filter(|note| note.id.as_str().starts_with(query))
        .map(|note| note.id)
        .collect();

    match matches.len() {
        0 => Err(CliError::NoteNotFound(query.to_string())),
        1 => Ok(matches[0]),
        _ => Err(CliError::AmbiguousId(ambiguous_message(
            query,
            matches.iter().map(ToString::to_string),
        ))),
    }
}

/// Resolve a space from a full ID or a unique ID prefix
pub fn resolve_space(store: &Store, query: &str) -> Result<SpaceId, CliError> {
    if let Ok(id) = query.parse::<SpaceId>() {
        if store.get_space(id).is_some() {
            return Ok(id);
        }
    }

    let matches: Vec<SpaceId> = store
        .spaces()
        .iter()
        .filter(|space| space.id.as_str().starts_with(query))
        .map(|space| space.id)
        .collect();

    match matches.len() {
        0 => Err(CliError::SpaceNotFound(query.to_string())),
        1 => Ok(matches[0]),
        _ => Err(CliError::AmbiguousId(ambiguous_message(
            query,
            matches.iter().map(ToString::to_string),
        ))),
    }
}

fn ambiguous_message(query: &str, matches: impl Iterator<Item = String>) -> String {
    let options = matches
        .take(3)
        .map(|id| short_id(&id))
        .collect::<Vec<_>>()
        .join(", ");
    format!("ID prefix '{query}' is ambiguous; matches: {options}")
}

/// Shortened ID for list output
pub fn short_id(id: &str) -> String {
    id.chars().take(13).collect()
}

/// Resolve note content from CLI args, falling back to piped stdin
pub fn resolve_note_content(parts: &[String]) -> Result<String, CliError> {
    let joined = parts.join(" ");
    let content = if joined.trim().is_empty() && !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        joined
    };

    let content = content.trim();
    if content.is_empty() {
        return Err(CliError::EmptyContent);
    }
    Ok(content.to_string())
}

/// Derive a display title from content: the first non-empty line, truncated
pub fn title_from_content(content: &str) -> String {
    let first_line: String = content
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("")
        .trim()
        .chars()
        .take(60)
        .collect();

    if first_line.is_empty() {
        "New note".to_string()
    } else {
        first_line
    }
}

/// Human-readable age of a timestamp
pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let elapsed_ms = now_ms.saturating_sub(timestamp_ms);
    let minutes = elapsed_ms / 60_000;
    let hours = elapsed_ms / 3_600_000;
    let days = elapsed_ms / 86_400_000;

    if minutes < 1 {
        "just now".to_string()
    } else if hours < 1 {
        format!("{minutes}m ago")
    } else if days < 1 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        Utc.timestamp_millis_opt(timestamp_ms)
            .single()
            .map_or_else(|| "unknown".to_string(), |at| at.format("%Y-%m-%d").to_string())
    }
}

/// JSON row for `--json` list output
#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub tags: Vec<String>,
    pub starred: bool,
    pub space_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.to_string(),
        title: note.title.clone(),
        preview: note.preview.clone(),
        tags: note.tags.clone(),
        starred: note.starred,
        space_id: note.space_id.map(|id| id.to_string()),
        created_at: note.created_at,
        updated_at: note.updated_at,
    }
}

/// One-line-per-note rendering for list output
pub fn format_note_lines(notes: &[&Note]) -> Vec<String> {
    let now_ms = Utc::now().timestamp_millis();
    notes
        .iter()
        .map(|note| {
            let star = if note.starred { " *" } else { "" };
            let relative_time = format_relative_time(note.updated_at, now_ms);
            let tags = if note.tags.is_empty() {
                String::new()
            } else {
                format!("  #{}", note.tags.join(" #"))
            };

            format!(
                "{}  {}{star}  ({relative_time}){tags}",
                short_id(&note.id.as_str()),
                note.title
            )
        })
        .collect()
}

/// Editor command for `edit`, from `$EDITOR` with a portable fallback
pub fn default_editor() -> String {
    std::env::var("EDITOR")
        .ok()
        .filter(|editor| !editor.trim().is_empty())
        .unwrap_or_else(|| "vi".to_string())
}
