//! Lumina CLI - notes, spaces, and assistant insights from the terminal
//!
//! Quick capture with minimal friction: `lumina "my note here"`.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands, ConfigCommands, SpaceCommands, TagCommands};
use crate::commands::assist::{run_assist, run_insights};
use crate::commands::completions::run_completions;
use crate::commands::config::{run_config_set, run_config_show};
use crate::commands::data::{run_export, run_import, run_init};
use crate::commands::notes::{run_delete, run_edit, run_list, run_new, run_show, run_star};
use crate::commands::search::run_search;
use crate::commands::spaces::{run_space_list, run_space_new, run_space_rm};
use crate::commands::tags::{run_tag_add, run_tag_rm, run_tags};
use crate::error::CliError;

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lumina=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir);

    match cli.command {
        Some(Commands::New {
            content,
            space,
            title,
        }) => run_new(&content, space.as_deref(), title.as_deref(), &data_dir)?,
        Some(Commands::List {
            limit,
            space,
            tag,
            starred,
            json,
        }) => run_list(
            limit,
            space.as_deref(),
            tag.as_deref(),
            starred,
            json,
            &data_dir,
        )?,
        Some(Commands::Show { id }) => run_show(&id, &data_dir)?,
        Some(Commands::Edit { id }) => run_edit(&id, &data_dir)?,
        Some(Commands::Delete { id }) => run_delete(&id, &data_dir)?,
        Some(Commands::Star { id }) => run_star(&id, &data_dir)?,
        Some(Commands::Search {
            query,
            starred,
            tag,
            json,
        }) => run_search(&query, starred, tag, json, &data_dir)?,
        Some(Commands::Tag(TagCommands::Add { id, tag })) => run_tag_add(&id, &tag, &data_dir)?,
        Some(Commands::Tag(TagCommands::Rm { id, tag })) => run_tag_rm(&id, &tag, &data_dir)?,
        Some(Commands::Tags) => run_tags(&data_dir)?,
        Some(Commands::Space(SpaceCommands::New { name, color, icon })) => {
            run_space_new(&name, &color, &icon, &data_dir)?;
        }
        Some(Commands::Space(SpaceCommands::List { json })) => run_space_list(json, &data_dir)?,
        Some(Commands::Space(SpaceCommands::Rm { id })) => run_space_rm(&id, &data_dir)?,
        Some(Commands::Export { format, output }) => {
            run_export(format.into(), output.as_deref(), &data_dir)?;
        }
        Some(Commands::Import { file }) => run_import(&file, &data_dir)?,
        Some(Commands::Assist { id, kind, prompt }) => {
            run_assist(&id, kind.into(), prompt.as_deref(), &data_dir).await?;
        }
        Some(Commands::Insights { id }) => run_insights(&id, &data_dir).await?,
        Some(Commands::Config(ConfigCommands::Show)) => run_config_show(&data_dir)?,
        Some(Commands::Config(ConfigCommands::Set { key, value })) => {
            run_config_set(&key, &value, &data_dir)?;
        }
        Some(Commands::Init { sample }) => run_init(sample, &data_dir)?,
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            // Quick capture mode: lumina "my note"
            if cli.note.is_empty() {
                Cli::command().print_help().map_err(CliError::Io)?;
                println!();
            } else {
                run_new(&cli.note, None, None, &data_dir)?;
            }
        }
    }

    Ok(())
}

fn resolve_data_dir(overridden: Option<PathBuf>) -> PathBuf {
    overridden.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lumina")
    })
}
