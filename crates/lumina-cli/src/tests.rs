use pretty_assertions::assert_eq;

use lumina_core::export::ExportFormat;
use lumina_core::models::NotePatch;
use lumina_core::Store;

use crate::cli::CompletionShell;
use crate::commands::common::{
    format_note_lines, format_relative_time, note_to_list_item, open_store, resolve_note,
    resolve_space, short_id, title_from_content,
};
use crate::commands::completions::run_completions;
use crate::commands::config::apply_setting;
use crate::commands::data::{run_export, run_import, run_init};
use crate::error::CliError;

#[test]
fn title_from_content_takes_first_non_empty_line() {
    assert_eq!(title_from_content("Hello world\nmore text"), "Hello world");
    assert_eq!(title_from_content("\n\n  Second line first\n"), "Second line first");
}

#[test]
fn title_from_content_truncates_long_lines() {
    let long_line = "x".repeat(120);
    assert_eq!(title_from_content(&long_line).chars().count(), 60);
}

#[test]
fn title_from_content_falls_back_for_empty_input() {
    assert_eq!(title_from_content("   \n  "), "New note");
}

#[test]
fn format_relative_time_units() {
    let now = 10_000_000_000;
    assert_eq!(format_relative_time(now - 30_000, now), "just now");
    assert_eq!(format_relative_time(now - 120_000, now), "2m ago");
    assert_eq!(format_relative_time(now - 2 * 60 * 60_000, now), "2h ago");
    assert_eq!(format_relative_time(now - 3 * 86_400_000, now), "3d ago");
    assert_eq!(format_relative_time(0, 30 * 86_400_000), "1970-01-01");
}

#[test]
fn short_id_keeps_a_prefix() {
    assert_eq!(short_id("0192e6a0-1111-7000-8000-000000000000"), "0192e6a0-1111");
}

#[test]
fn resolve_note_accepts_full_id_and_unique_prefix() {
    let mut store = Store::in_memory();
    let id = store.create_note(None);

    assert_eq!(resolve_note(&store, &id.as_str()).unwrap(), id);

    let prefix: String = id.as_str().chars().take(20).collect();
    assert_eq!(resolve_note(&store, &prefix).unwrap(), id);
}

#[test]
fn resolve_note_rejects_unknown_and_ambiguous_queries() {
    let mut store = Store::in_memory();
    store.create_note(None);
    store.create_note(None);

    assert!(matches!(
        resolve_note(&store, "zzz"),
        Err(CliError::NoteNotFound(_))
    ));
    // Every ID matches the empty prefix.
    assert!(matches!(resolve_note(&store, ""), Err(CliError::AmbiguousId(_))));
}

#[test]
fn resolve_space_accepts_unique_prefix() {
    let mut store = Store::in_memory();
    let id = store.create_space("Work", "blue", "briefcase");

    let prefix: String = id.as_str().chars().take(20).collect();
    assert_eq!(resolve_space(&store, &prefix).unwrap(), id);
    assert!(matches!(
        resolve_space(&store, "zzz"),
        Err(CliError::SpaceNotFound(_))
    ));
}

#[test]
fn note_lines_include_title_star_and_tags() {
    let mut store = Store::in_memory();
    let id = store.create_note(None);
    store
        .update_note(id, NotePatch::new().title("Launch plan").content("soon"))
        .unwrap();
    store.set_note_tags(id, vec!["work".into()]).unwrap();
    store.toggle_star(id).unwrap();

    let notes: Vec<_> = store.notes().iter().collect();
    let lines = format_note_lines(&notes);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Launch plan"));
    assert!(lines[0].contains(" *"));
    assert!(lines[0].contains("#work"));
}

#[test]
fn note_list_item_carries_the_full_record() {
    let mut store = Store::in_memory();
    let space = store.create_space("Work", "blue", "briefcase");
    let id = store.create_note(Some(space));
    store
        .update_note(id, NotePatch::new().title("Launch").content("soon"))
        .unwrap();

    let item = note_to_list_item(store.get_note(id).unwrap());
    assert_eq!(item.id, id.to_string());
    assert_eq!(item.title, "Launch");
    assert_eq!(item.preview, "soon...");
    assert_eq!(item.space_id.as_deref(), Some(space.to_string().as_str()));
}

#[test]
fn completions_write_to_a_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("lumina.bash");

    run_completions(CompletionShell::Bash, Some(&path)).unwrap();

    let script = std::fs::read_to_string(&path).unwrap();
    assert!(script.contains("lumina"));
}

#[test]
fn export_then_import_round_trips_through_files() {
    let tmp = tempfile::tempdir().unwrap();
    let source_dir = tmp.path().join("source");
    let target_dir = tmp.path().join("target");
    let export_path = tmp.path().join("export.json");

    {
        let mut store = open_store(&source_dir).unwrap();
        let space = store.create_space("Work", "blue", "briefcase");
        let id = store.create_note(Some(space));
        store
            .update_note(id, NotePatch::new().title("Kept").content("Body"))
            .unwrap();
    }

    run_export(ExportFormat::Json, Some(&export_path), &source_dir).unwrap();
    run_import(&export_path, &target_dir).unwrap();

    let source = open_store(&source_dir).unwrap();
    let target = open_store(&target_dir).unwrap();
    assert_eq!(source.notes(), target.notes());
    assert_eq!(source.spaces(), target.spaces());
}

#[test]
fn import_rejects_invalid_payloads() {
    let tmp = tempfile::tempdir().unwrap();
    let data_dir = tmp.path().join("data");
    let bad_file = tmp.path().join("bad.json");
    std::fs::write(&bad_file, r#"{"notes": []}"#).unwrap();

    assert!(matches!(
        run_import(&bad_file, &data_dir),
        Err(CliError::ImportRejected)
    ));

    let store = open_store(&data_dir).unwrap();
    assert!(store.notes().is_empty());
}

#[test]
fn markdown_export_writes_frontmatter() {
    let tmp = tempfile::tempdir().unwrap();
    let data_dir = tmp.path().join("data");
    let export_path = tmp.path().join("notes.md");

    {
        let mut store = open_store(&data_dir).unwrap();
        let id = store.create_note(None);
        store
            .update_note(id, NotePatch::new().title("Doc").content("Body text"))
            .unwrap();
    }

    run_export(ExportFormat::Markdown, Some(&export_path), &data_dir).unwrap();
    let rendered = std::fs::read_to_string(&export_path).unwrap();
    assert!(rendered.starts_with("---\n"));
    assert!(rendered.contains("title: Doc"));
    assert!(rendered.contains("Body text"));
}

#[test]
fn apply_setting_updates_known_keys() {
    use lumina_core::models::{Settings, ThemeMode};

    let mut settings = Settings::default();
    apply_setting(&mut settings, "theme", "dark").unwrap();
    apply_setting(&mut settings, "auto-save", "off").unwrap();

    assert_eq!(settings.theme, ThemeMode::Dark);
    assert!(!settings.auto_save);
}

#[test]
fn apply_setting_rejects_unknown_keys_and_values() {
    use lumina_core::models::Settings;

    let mut settings = Settings::default();
    assert!(matches!(
        apply_setting(&mut settings, "theme", "solarized"),
        Err(CliError::Config(_))
    ));
    assert!(matches!(
        apply_setting(&mut settings, "made-up", "true"),
        Err(CliError::Config(_))
    ));
    assert_eq!(settings, Settings::default());
}

#[test]
fn init_with_sample_seeds_an_empty_store_once() {
    let tmp = tempfile::tempdir().unwrap();
    let data_dir = tmp.path().join("data");

    run_init(true, &data_dir).unwrap();
    let store = open_store(&data_dir).unwrap();
    assert_eq!(store.notes().len(), 3);
    assert_eq!(store.spaces().len(), 2);

    // Re-running must not duplicate the dataset.
    run_init(true, &data_dir).unwrap();
    let store = open_store(&data_dir).unwrap();
    assert_eq!(store.notes().len(), 3);
}
