use std::path::Path;

use serde::Serialize;

use crate::commands::common::{open_store, resolve_space, short_id};
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct SpaceListItem {
    id: String,
    name: String,
    color: String,
    icon: String,
    sort_order: Option<u32>,
    note_count: usize,
}

pub fn run_space_new(name: &str, color: &str, icon: &str, data_dir: &Path) -> Result<(), CliError> {
    let mut store = open_store(data_dir)?;
    let id = store.create_space(name, color, icon);
    println!("{id}");
    Ok(())
}

pub fn run_space_list(as_json: bool, data_dir: &Path) -> Result<(), CliError> {
    let store = open_store(data_dir)?;

    if as_json {
        let items: Vec<SpaceListItem> = store
            .spaces()
            .iter()
            .map(|space| SpaceListItem {
                id: space.id.to_string(),
                name: space.name.clone(),
                color: space.color.clone(),
                icon: space.icon.clone(),
                sort_order: space.sort_order,
                note_count: store.notes_by_space(space.id).len(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for space in store.spaces() {
            let note_count = store.notes_by_space(space.id).len();
            println!(
                "{}  {}  ({note_count} notes, {})",
                short_id(&space.id.as_str()),
                space.name,
                space.color
            );
        }
    }

    Ok(())
}

pub fn run_space_rm(id_query: &str, data_dir: &Path) -> Result<(), CliError> {
    let mut store = open_store(data_dir)?;
    let id = resolve_space(&store, id_query)?;
    let detached = store.notes_by_space(id).len();
    store.delete_space(id)?;
    println!("Deleted space {id} ({detached} notes detached)");
    Ok(())
}
