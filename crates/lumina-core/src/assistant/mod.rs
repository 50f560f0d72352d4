//! Assistant service boundary.
//!
//! Insight and generation requests go through the [`Assistant`] trait so the
//! rest of the system never knows which backend answers them. Calls are
//! async and may be issued concurrently; callers are expected to degrade
//! per-request on failure rather than propagate it into the note view.

mod scripted;

pub use scripted::ScriptedAssistant;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from assistant requests.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// No backend is configured or reachable
    #[error("Assistant is not available: {0}")]
    Unavailable(String),

    /// The request itself was malformed
    #[error("Invalid assistant request: {0}")]
    InvalidRequest(&'static str),

    /// The backend answered with an error
    #[error("Assistant backend error: {0}")]
    Backend(String),
}

pub type AssistantResult<T> = Result<T, AssistantError>;

/// Content generation modes offered to the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateKind {
    Summarize,
    Expand,
    Structure,
    ActionItems,
    Code,
    Highlight,
    Custom,
}

/// Weighted topic extracted from note content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    /// Share of the note attributed to this topic, 0-100
    pub percentage: u8,
    /// Accent color label for presentation
    pub color: String,
}

/// Suggested external reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    /// Relevance score in `0.0..=1.0`
    pub relevance: f32,
}

/// An assistant backend.
///
/// `generate` answers with rendered Markdown; the remaining methods return
/// structured insight lists for the assistant panel.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Generate content for the given mode. `prompt` is only consulted for
    /// [`GenerateKind::Custom`].
    async fn generate(
        &self,
        kind: GenerateKind,
        content: &str,
        prompt: Option<&str>,
    ) -> AssistantResult<String>;

    /// Follow-up suggestions for the given note content
    async fn suggestions(&self, content: &str) -> AssistantResult<Vec<String>>;

    /// Topic breakdown of the given note content
    async fn topics(&self, content: &str) -> AssistantResult<Vec<Topic>>;

    /// Reading recommendations for the given note content
    async fn resources(&self, content: &str) -> AssistantResult<Vec<Resource>>;
}
