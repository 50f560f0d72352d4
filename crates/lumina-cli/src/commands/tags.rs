use std::path::Path;

use crate::commands::common::{open_store, resolve_note};
use crate::error::CliError;

pub fn run_tag_add(id_query: &str, tag: &str, data_dir: &Path) -> Result<(), CliError> {
    let mut store = open_store(data_dir)?;
    let id = resolve_note(&store, id_query)?;

    // Tag helpers operate on the active note.
    store.set_active_note(Some(id));
    store.add_tag(tag);

    println!("Tagged {id} with #{tag}");
    Ok(())
}

pub fn run_tag_rm(id_query: &str, tag: &str, data_dir: &Path) -> Result<(), CliError> {
    let mut store = open_store(data_dir)?;
    let id = resolve_note(&store, id_query)?;

    store.set_active_note(Some(id));
    store.remove_tag(tag);

    println!("Removed #{tag} from {id}");
    Ok(())
}

pub fn run_tags(data_dir: &Path) -> Result<(), CliError> {
    let store = open_store(data_dir)?;

    for tag in store.all_tags() {
        let count = store
            .notes()
            .iter()
            .filter(|note| note.tags.iter().any(|existing| existing == &tag))
            .count();
        println!("#{tag}  ({count})");
    }

    Ok(())
}
