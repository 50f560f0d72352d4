//! Keyword search over the note collection.
//!
//! Matches are tiered: a title hit outranks a tag hit, which outranks a
//! content hit. Content hits carry a context window around the first match
//! so lists can show where the query landed.

use std::cmp::Ordering;

use crate::models::{Note, NoteId};

const TITLE_RELEVANCE: f32 = 0.9;
const TAG_RELEVANCE: f32 = 0.8;
const CONTENT_RELEVANCE: f32 = 0.7;

/// Characters of context kept on each side of a content match
const CONTEXT_WINDOW: usize = 40;

/// Pre-filters applied before matching
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Only consider starred notes
    pub starred_only: bool,
    /// Only consider notes carrying at least one of these tags (exact match)
    pub tags: Vec<String>,
}

/// Which part of the note matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Title,
    Tag,
    Content,
}

/// A scored search match
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub note_id: NoteId,
    pub title: String,
    pub relevance: f32,
    pub kind: MatchKind,
    /// Matched text: the title, the matching tags, or a content window
    pub context: String,
}

/// Search notes for a query, best matches first.
///
/// An empty or whitespace-only query yields no results.
#[must_use]
pub fn search(notes: &[Note], query: &str, filter: &SearchFilter) -> Vec<SearchHit> {
    let needle: Vec<char> = query.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = notes
        .iter()
        .filter(|note| passes_filter(note, filter))
        .filter_map(|note| score(note, &needle))
        .collect();

    // Stable sort keeps collection order within a tier.
    hits.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal)
    });
    hits
}

fn passes_filter(note: &Note, filter: &SearchFilter) -> bool {
    if filter.starred_only && !note.starred {
        return false;
    }
    if !filter.tags.is_empty() && !filter.tags.iter().any(|tag| note.tags.contains(tag)) {
        return false;
    }
    true
}

fn score(note: &Note, needle: &[char]) -> Option<SearchHit> {
    if contains_ignore_case(&note.title, needle) {
        return Some(SearchHit {
            note_id: note.id,
            title: note.title.clone(),
            relevance: TITLE_RELEVANCE,
            kind: MatchKind::Title,
            context: note.title.clone(),
        });
    }

    let matching_tags: Vec<&str> = note
        .tags
        .iter()
        .filter(|tag| contains_ignore_case(tag, needle))
        .map(String::as_str)
        .collect();
    if !matching_tags.is_empty() {
        return Some(SearchHit {
            note_id: note.id,
            title: note.title.clone(),
            relevance: TAG_RELEVANCE,
            kind: MatchKind::Tag,
            context: matching_tags.join(", "),
        });
    }

    let content: Vec<char> = note.content.chars().collect();
    find_ignore_case(&content, needle).map(|start| SearchHit {
        note_id: note.id,
        title: note.title.clone(),
        relevance: CONTENT_RELEVANCE,
        kind: MatchKind::Content,
        context: context_window(&content, start, needle.len()),
    })
}

fn contains_ignore_case(text: &str, needle: &[char]) -> bool {
    let chars: Vec<char> = text.chars().collect();
    find_ignore_case(&chars, needle).is_some()
}

/// Find the first case-insensitive occurrence of `needle` (already
/// lowercased) in `haystack`, as a char offset.
fn find_ignore_case(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&start| {
        needle
            .iter()
            .enumerate()
            .all(|(offset, expected)| haystack[start + offset].to_lowercase().eq(expected.to_lowercase()))
    })
}

fn context_window(content: &[char], start: usize, match_len: usize) -> String {
    let from = start.saturating_sub(CONTEXT_WINDOW);
    let to = (start + match_len + CONTEXT_WINDOW).min(content.len());

    let mut context = String::new();
    if from > 0 {
        context.push_str("...");
    }
    context.extend(&content[from..to]);
    if to < content.len() {
        context.push_str("...");
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotePatch;

    fn note(title: &str, content: &str, tags: &[&str], starred: bool) -> Note {
        let mut note = Note::new(None);
        note.apply(
            NotePatch::new()
                .title(title)
                .content(content)
                .tags(tags.iter().map(ToString::to_string).collect())
                .starred(starred),
        );
        note
    }

    #[test]
    fn empty_query_yields_nothing() {
        let notes = vec![note("Anything", "content", &[], false)];
        assert!(search(&notes, "", &SearchFilter::default()).is_empty());
        assert!(search(&notes, "   ", &SearchFilter::default()).is_empty());
    }

    #[test]
    fn title_matches_outrank_content_matches() {
        let notes = vec![
            note("Weekly review", "nothing relevant", &[], false),
            note("Scratch", "review the launch checklist", &[], false),
        ];

        let hits = search(&notes, "review", &SearchFilter::default());
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].kind, MatchKind::Title);
        assert_eq!(hits[1].kind, MatchKind::Content);
        assert!(hits[0].relevance > hits[1].relevance);
    }

    #[test]
    fn tag_matches_rank_between_title_and_content() {
        let notes = vec![note("Scratch", "nothing", &["review"], false)];
        let hits = search(&notes, "review", &SearchFilter::default());

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, MatchKind::Tag);
        assert_eq!(hits[0].context, "review");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let notes = vec![note("Launch Plan", "", &[], false)];
        let hits = search(&notes, "LAUNCH", &SearchFilter::default());
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn starred_filter_excludes_unstarred_notes() {
        let notes = vec![
            note("Starred launch", "", &[], true),
            note("Plain launch", "", &[], false),
        ];

        let filter = SearchFilter {
            starred_only: true,
            tags: Vec::new(),
        };
        let hits = search(&notes, "launch", &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Starred launch");
    }

    #[test]
    fn tag_filter_requires_exact_tag_membership() {
        let notes = vec![
            note("One", "launch notes", &["work"], false),
            note("Two", "launch notes", &["home"], false),
        ];

        let filter = SearchFilter {
            starred_only: false,
            tags: vec!["work".to_string()],
        };
        let hits = search(&notes, "launch", &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "One");
    }

    #[test]
    fn content_context_is_windowed_with_ellipses() {
        let padding = "x".repeat(120);
        let content = format!("{padding} needle {padding}");
        let notes = vec![note("Long", &content, &[], false)];

        let hits = search(&notes, "needle", &SearchFilter::default());
        assert_eq!(hits.len(), 1);
        let context = &hits[0].context;
        assert!(context.contains("needle"));
        assert!(context.starts_with("..."));
        assert!(context.ends_with("..."));
        // window + match + window + ellipses stays bounded
        assert!(context.chars().count() <= CONTEXT_WINDOW * 2 + 6 + 6);
    }

    #[test]
    fn short_content_is_not_wrapped_in_ellipses() {
        let notes = vec![note("Short", "find the needle here", &[], false)];
        let hits = search(&notes, "needle", &SearchFilter::default());
        assert_eq!(hits[0].context, "find the needle here");
    }
}
