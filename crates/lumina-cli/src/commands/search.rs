use std::path::Path;

use serde::Serialize;

use lumina_core::search::{search, MatchKind, SearchFilter};

use crate::commands::common::{open_store, short_id};
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct SearchResultItem {
    id: String,
    title: String,
    relevance: f32,
    match_kind: &'static str,
    context: String,
}

const fn match_kind_label(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Title => "title",
        MatchKind::Tag => "tag",
        MatchKind::Content => "content",
    }
}

pub fn run_search(
    query: &str,
    starred: bool,
    tags: Vec<String>,
    as_json: bool,
    data_dir: &Path,
) -> Result<(), CliError> {
    let store = open_store(data_dir)?;
    let filter = SearchFilter {
        starred_only: starred,
        tags,
    };
    let hits = search(store.notes(), query, &filter);

    if as_json {
        let items: Vec<SearchResultItem> = hits
            .iter()
            .map(|hit| SearchResultItem {
                id: hit.note_id.to_string(),
                title: hit.title.clone(),
                relevance: hit.relevance,
                match_kind: match_kind_label(hit.kind),
                context: hit.context.clone(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for hit in &hits {
            println!(
                "{}  {}  [{}] {}",
                short_id(&hit.note_id.as_str()),
                hit.title,
                match_kind_label(hit.kind),
                hit.context
            );
        }
    }

    Ok(())
}
