//! Scripted assistant: canned responses behind simulated latency.
//!
//! Stands in for a real backend during development and tests. Responses are
//! selected by substring themes in the note content; latency per call type
//! matches what a hosted backend would exhibit.

use std::time::Duration;

use async_trait::async_trait;

use super::{Assistant, AssistantResult, GenerateKind, Resource, Topic};

const SUGGESTIONS_DELAY: Duration = Duration::from_millis(500);
const TOPICS_DELAY: Duration = Duration::from_millis(700);
const RESOURCES_DELAY: Duration = Duration::from_millis(600);
const GENERATE_DELAY: Duration = Duration::from_millis(1500);

/// Content theme recognized by the response tables
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Theme {
    Design,
    Project,
    Innovation,
    General,
}

fn theme_of(content: &str) -> Theme {
    let content = content.to_lowercase();
    if content.contains("product") || content.contains("design") {
        Theme::Design
    } else if content.contains("project") || content.contains("meeting") {
        Theme::Project
    } else if content.contains("innovation") || content.contains("first principles") {
        Theme::Innovation
    } else {
        Theme::General
    }
}

/// Static-table assistant with simulated latency
#[derive(Debug, Clone, Copy)]
pub struct ScriptedAssistant {
    latency_enabled: bool,
}

impl ScriptedAssistant {
    /// Scripted assistant with realistic per-call latency
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency_enabled: true,
        }
    }

    /// Scripted assistant that answers immediately (for tests)
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            latency_enabled: false,
        }
    }

    async fn simulate(&self, delay: Duration) {
        if self.latency_enabled {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for ScriptedAssistant {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Assistant for ScriptedAssistant {
    async fn generate(
        &self,
        kind: GenerateKind,
        _content: &str,
        prompt: Option<&str>,
    ) -> AssistantResult<String> {
        self.simulate(GENERATE_DELAY).await;

        let result = match kind {
            GenerateKind::Summarize => "## Summary\n\n\
                This note covers three working principles:\n\n\
                1. **Keep the user in charge**: understand real needs, reduce cognitive load\n\
                2. **Progressive enhancement**: the core experience works without assistance\n\
                3. **Continuous learning**: adapt from interaction and close the feedback loop\n"
                .to_string(),
            GenerateKind::Expand => "# Expanded draft\n\n\
                ## Keep the user in charge\n\n\
                Understand real needs through research rather than assumption, keep\n\
                interactions direct, and make every suggestion explainable and overridable.\n\n\
                ## Progressive enhancement\n\n\
                Core features must remain usable with assistance turned off; suggestions\n\
                augment the experience instead of replacing it.\n\n\
                ## Continuous learning\n\n\
                Collect feedback from actual use and fold it back into the product.\n"
                .to_string(),
            GenerateKind::Structure => "# Outline\n\n\
                ## 1. Keep the user in charge\n   - 1.1 Understand real needs\n   - 1.2 Reduce cognitive load\n   - 1.3 Offer control and transparency\n\n\
                ## 2. Progressive enhancement\n   - 2.1 Core independence\n   - 2.2 Augment, never replace\n\n\
                ## 3. Continuous learning\n   - 3.1 Feedback collection\n   - 3.2 Personalization\n"
                .to_string(),
            GenerateKind::ActionItems => "# Action items\n\n\
                ## Now\n- [ ] Run user interviews on current pain points\n- [ ] Audit which features depend on assistance\n\n\
                ## This week\n- [ ] Draft the fallback behavior for each assisted flow\n- [ ] Add a feedback entry point to the panel\n\n\
                ## Later\n- [ ] Set up an evaluation loop for suggestion quality\n"
                .to_string(),
            GenerateKind::Code => "```rust\n\
                /// A feature that keeps working when assistance is unavailable.\n\
                trait AssistedFeature {\n    fn run_core(&self) -> Outcome;\n    fn run_assisted(&self) -> Outcome {\n        self.try_assist().unwrap_or_else(|_| self.run_core())\n    }\n    fn try_assist(&self) -> Result<Outcome, AssistError>;\n}\n\
                ```\n"
                .to_string(),
            GenerateKind::Highlight => "# Key points\n\n\
                - ==Understand real needs instead of assuming them==\n\
                - Reduce cognitive load, favor direct manipulation\n\
                - ==Core features must work with assistance disabled==\n\
                - ==Close the feedback loop to keep improving==\n"
                .to_string(),
            GenerateKind::Custom => {
                if prompt.is_some_and(|prompt| prompt.to_lowercase().contains("speech")) {
                    "# Putting people first\n\n\
                     Assistance should solve real problems, not showcase technology. Keep\n\
                     the core experience independent, make suggestions transparent, and\n\
                     let every user choose how much help they want.\n"
                        .to_string()
                } else {
                    "Unrecognized custom prompt".to_string()
                }
            }
        };

        Ok(result)
    }

    async fn suggestions(&self, content: &str) -> AssistantResult<Vec<String>> {
        self.simulate(SUGGESTIONS_DELAY).await;

        let suggestions = match theme_of(content) {
            Theme::Design => vec![
                "Expand the user-control section with concrete practices".to_string(),
                "Add an ethics paragraph for assisted features".to_string(),
                "Link related case studies".to_string(),
            ],
            Theme::Project => vec![
                "Create a timeline view of the milestones".to_string(),
                "Extract action items from the meeting notes".to_string(),
                "Set reminders for the key deadlines".to_string(),
            ],
            Theme::Innovation => vec![
                "Add worked examples of first-principles reasoning".to_string(),
                "Contrast lateral thinking with analogy".to_string(),
                "Link methodology resources".to_string(),
            ],
            Theme::General => vec![
                "Analyze the note content".to_string(),
                "Surface related resources".to_string(),
                "Suggest topics to expand".to_string(),
            ],
        };

        Ok(suggestions)
    }

    async fn topics(&self, content: &str) -> AssistantResult<Vec<Topic>> {
        self.simulate(TOPICS_DELAY).await;

        let table: &[(&str, u8, &str)] = match theme_of(content) {
            Theme::Design => &[
                ("User experience", 70, "purple"),
                ("Ethics", 45, "blue"),
                ("Product design", 85, "green"),
            ],
            Theme::Project => &[
                ("Project management", 80, "blue"),
                ("Collaboration", 65, "green"),
                ("Product development", 55, "purple"),
            ],
            Theme::Innovation => &[
                ("Innovation methods", 90, "yellow"),
                ("Mental models", 75, "red"),
                ("Problem solving", 60, "blue"),
            ],
            Theme::General => &[
                ("Topic 1", 50, "blue"),
                ("Topic 2", 30, "green"),
                ("Topic 3", 20, "purple"),
            ],
        };

        Ok(table
            .iter()
            .map(|&(name, percentage, color)| Topic {
                name: name.to_string(),
                percentage,
                color: color.to_string(),
            })
            .collect())
    }

    async fn resources(&self, content: &str) -> AssistantResult<Vec<Resource>> {
        self.simulate(RESOURCES_DELAY).await;

        let table: &[(&str, f32)] = match theme_of(content) {
            Theme::Design => &[
                ("A field guide to user-centered assistant design", 0.9),
                ("Ethics whitepaper for assisted products", 0.8),
            ],
            Theme::Project => &[
                ("Agile project management in practice", 0.9),
                ("Tools for effective team collaboration", 0.7),
            ],
            Theme::Innovation => &[
                ("Breaking patterns: innovation methods", 0.9),
                ("Thinking from first principles", 0.8),
            ],
            Theme::General => &[("Related resource 1", 0.7), ("Related resource 2", 0.6)],
        };

        Ok(table
            .iter()
            .map(|&(title, relevance)| Resource {
                title: title.to_string(),
                url: "#".to_string(),
                relevance,
            })
            .collect())
    }
}
