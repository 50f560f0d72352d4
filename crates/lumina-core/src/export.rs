//! Dataset export and import shared by CLI and app shells.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::models::{Note, Space};
use crate::Result;

/// Schema version stamped into JSON exports
const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Export output format shared by all clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportSnapshot<'a> {
    version: u32,
    export_date: String,
    notes: &'a [Note],
    spaces: &'a [Space],
}

/// A validated import payload.
///
/// Both collections must be present as arrays; everything else in the
/// document (`version`, `export_date`, unknown fields) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportData {
    pub notes: Vec<Note>,
    pub spaces: Vec<Space>,
}

/// Render the full dataset as pretty-printed JSON.
pub fn render_snapshot(notes: &[Note], spaces: &[Space]) -> Result<String> {
    let snapshot = ExportSnapshot {
        version: EXPORT_SCHEMA_VERSION,
        export_date: chrono::Utc::now().to_rfc3339(),
        notes,
        spaces,
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Parse and validate an import document.
///
/// Rejects any document without top-level `notes` and `spaces` arrays,
/// without applying anything.
pub fn parse_import(json: &str) -> Result<ImportData> {
    Ok(serde_json::from_str(json)?)
}

/// Render notes in Markdown with frontmatter blocks.
#[must_use]
pub fn render_markdown_export(notes: &[Note]) -> String {
    let mut output = String::new();

    for (index, note) in notes.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let _ = writeln!(output, "---");
        let _ = writeln!(output, "id: {}", note.id);
        let _ = writeln!(output, "title: {}", note.title);
        if let Some(space_id) = note.space_id {
            let _ = writeln!(output, "space: {space_id}");
        }
        let _ = writeln!(output, "created_at: {}", note.created_at);
        let _ = writeln!(output, "updated_at: {}", note.updated_at);
        let _ = writeln!(output, "tags:");
        for tag in &note.tags {
            let _ = writeln!(output, "  - {tag}");
        }
        let _ = writeln!(output, "---");
        let _ = writeln!(output);
        output.push_str(&note.content);
        output.push('\n');
    }

    output
}

/// Render the dataset in the selected export format.
pub fn render_export(notes: &[Note], spaces: &[Space], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => render_snapshot(notes, spaces),
        ExportFormat::Markdown => Ok(render_markdown_export(notes)),
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("lumina-export-{timestamp_ms}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotePatch, SpaceId};

    fn tagged_note(content: &str, tags: &[&str]) -> Note {
        let mut note = Note::new(None);
        note.apply(
            NotePatch::new()
                .content(content)
                .tags(tags.iter().map(ToString::to_string).collect()),
        );
        note
    }

    #[test]
    fn render_snapshot_contains_both_collections() {
        let notes = vec![tagged_note("Hello export", &["demo"])];
        let spaces = vec![Space::new("Work", "blue", "briefcase", 0)];

        let json = render_snapshot(&notes, &spaces).unwrap();
        assert!(json.contains("\"notes\""));
        assert!(json.contains("\"spaces\""));
        assert!(json.contains("\"export_date\""));
        assert!(json.contains("Hello export"));
    }

    #[test]
    fn parse_import_round_trips_snapshot() {
        let notes = vec![tagged_note("Round trip", &["a", "b"])];
        let spaces = vec![Space::new("Personal", "green", "home", 1)];

        let json = render_snapshot(&notes, &spaces).unwrap();
        let imported = parse_import(&json).unwrap();
        assert_eq!(imported.notes, notes);
        assert_eq!(imported.spaces, spaces);
    }

    #[test]
    fn parse_import_rejects_missing_spaces() {
        let error = parse_import(r#"{"notes": []}"#).unwrap_err();
        assert!(error.to_string().contains("spaces"));
    }

    #[test]
    fn parse_import_rejects_non_array_notes() {
        assert!(parse_import(r#"{"notes": {}, "spaces": []}"#).is_err());
    }

    #[test]
    fn parse_import_rejects_invalid_json() {
        assert!(parse_import("not json at all").is_err());
    }

    #[test]
    fn parse_import_ignores_extra_fields() {
        let imported =
            parse_import(r#"{"version": 9, "exported_by": "x", "notes": [], "spaces": []}"#)
                .unwrap();
        assert!(imported.notes.is_empty());
        assert!(imported.spaces.is_empty());
    }

    #[test]
    fn render_markdown_export_includes_frontmatter_and_content() {
        let space_id = SpaceId::new();
        let mut note = tagged_note("Hello markdown", &["tag"]);
        note.apply(NotePatch::new().title("Greeting").space_id(Some(space_id)));

        let output = render_markdown_export(&[note]);
        assert!(output.starts_with("---\n"));
        assert!(output.contains("title: Greeting"));
        assert!(output.contains(&format!("space: {space_id}")));
        assert!(output.contains("  - tag"));
        assert!(output.ends_with("Hello markdown\n"));
    }

    #[test]
    fn suggested_export_file_name_uses_extension() {
        assert_eq!(
            suggested_export_file_name(ExportFormat::Json, 123),
            "lumina-export-123.json"
        );
        assert_eq!(
            suggested_export_file_name(ExportFormat::Markdown, 123),
            "lumina-export-123.md"
        );
    }
}
