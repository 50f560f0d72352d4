use std::path::Path;

use lumina_core::assistant::{Assistant, GenerateKind, ScriptedAssistant};

use crate::commands::common::{open_store, resolve_note};
use crate::error::CliError;

pub async fn run_assist(
    id_query: &str,
    kind: GenerateKind,
    prompt: Option<&str>,
    data_dir: &Path,
) -> Result<(), CliError> {
    let store = open_store(data_dir)?;
    let id = resolve_note(&store, id_query)?;
    let content = store
        .get_note(id)
        .map(|note| note.content.clone())
        .ok_or_else(|| CliError::NoteNotFound(id_query.to_string()))?;

    let assistant = ScriptedAssistant::new();
    let generated = assistant.generate(kind, &content, prompt).await?;
    println!("{generated}");
    Ok(())
}

pub async fn run_insights(id_query: &str, data_dir: &Path) -> Result<(), CliError> {
    let store = open_store(data_dir)?;
    let id = resolve_note(&store, id_query)?;
    let note = store
        .get_note(id)
        .ok_or_else(|| CliError::NoteNotFound(id_query.to_string()))?;

    let assistant = ScriptedAssistant::new();

    // The three fetches are independent; issue them concurrently and let
    // each section degrade on its own failure.
    let (suggestions, topics, resources) = tokio::join!(
        assistant.suggestions(&note.content),
        assistant.topics(&note.content),
        assistant.resources(&note.content),
    );

    println!("Insights for: {}", note.title);

    println!("\nSuggestions:");
    match suggestions {
        Ok(suggestions) => {
            for suggestion in suggestions {
                println!("  - {suggestion}");
            }
        }
        Err(error) => {
            tracing::warn!("suggestions unavailable: {error}");
            println!("  (unavailable)");
        }
    }

    println!("\nTopics:");
    match topics {
        Ok(topics) => {
            for topic in topics {
                println!("  {}  {}%", topic.name, topic.percentage);
            }
        }
        Err(error) => {
            tracing::warn!("topics unavailable: {error}");
            println!("  (unavailable)");
        }
    }

    println!("\nResources:");
    match resources {
        Ok(resources) => {
            for resource in resources {
                println!("  {}  ({:.1})", resource.title, resource.relevance);
            }
        }
        Err(error) => {
            tracing::warn!("resources unavailable: {error}");
            println!("  (unavailable)");
        }
    }

    Ok(())
}
