use std::path::{Path, PathBuf};

use chrono::Utc;

use lumina_core::export::{render_export, suggested_export_file_name, ExportFormat};

use crate::commands::common::open_store;
use crate::error::CliError;

pub fn run_export(
    format: ExportFormat,
    output: Option<&Path>,
    data_dir: &Path,
) -> Result<(), CliError> {
    let store = open_store(data_dir)?;
    let rendered = render_export(store.notes(), store.spaces(), format)?;

    let path = output.map_or_else(
        || PathBuf::from(suggested_export_file_name(format, Utc::now().timestamp_millis())),
        Path::to_path_buf,
    );
    std::fs::write(&path, rendered)?;

    println!("Exported {} notes to {}", store.notes().len(), path.display());
    Ok(())
}

pub fn run_import(file: &Path, data_dir: &Path) -> Result<(), CliError> {
    let payload = std::fs::read_to_string(file)?;

    let mut store = open_store(data_dir)?;
    if !store.import_data(&payload) {
        return Err(CliError::ImportRejected);
    }

    println!(
        "Imported {} notes and {} spaces",
        store.notes().len(),
        store.spaces().len()
    );
    Ok(())
}

pub fn run_init(sample: bool, data_dir: &Path) -> Result<(), CliError> {
    let mut store = open_store(data_dir)?;

    if sample {
        if store.notes().is_empty() && store.spaces().is_empty() {
            store.seed_sample_data();
            println!(
                "Initialized {} with {} sample notes",
                data_dir.display(),
                store.notes().len()
            );
        } else {
            println!("Store is not empty; skipping sample data");
        }
    } else {
        println!("Initialized {}", data_dir.display());
    }

    Ok(())
}
