//! Task selection — decides which optional pipeline steps apply to a run.
//!
//! The governing policy lives behind the `TaskClassifier` trait:
//! `LlmTaskClassifier` (default) delegates the decision to the model, the
//! way the rest of the pipeline delegates generation; `RuleTaskClassifier`
//! applies fixed rules over the profile for offline runs and tests.
//!
//! Whatever a classifier returns, `TaskSet` re-adds the mandatory tasks, so
//! a confused model can never drop content formatting, site generation or
//! code review from a run.

use std::collections::BTreeSet;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::HomepageError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, ANALYSIS_MODEL};
use crate::models::profile::{LanguagePreference, StylePreference, UserProfile};
use crate::triage::prompts::{TRIAGE_PROMPT_TEMPLATE, TRIAGE_SYSTEM};

pub mod prompts;

// ────────────────────────────────────────────────────────────────────────────
// Task identifiers
// ────────────────────────────────────────────────────────────────────────────

/// One step of the generation pipeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    ContentFormat,
    WebCodegen,
    TextPolish,
    UiBeautify,
    SeoOptimize,
    CodeReview,
    Deploy,
}

impl TaskKind {
    /// The three steps every run performs.
    pub const MANDATORY: [TaskKind; 3] = [
        TaskKind::ContentFormat,
        TaskKind::WebCodegen,
        TaskKind::CodeReview,
    ];

    pub fn is_mandatory(self) -> bool {
        Self::MANDATORY.contains(&self)
    }

    /// Stable identifier, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskKind::ContentFormat => "content-format",
            TaskKind::WebCodegen => "web-codegen",
            TaskKind::TextPolish => "text-polish",
            TaskKind::UiBeautify => "ui-beautify",
            TaskKind::SeoOptimize => "seo-optimize",
            TaskKind::CodeReview => "code-review",
            TaskKind::Deploy => "deploy",
        }
    }

    /// Human-readable progress label.
    pub fn title(self) -> &'static str {
        match self {
            TaskKind::ContentFormat => "Formatting academic content",
            TaskKind::WebCodegen => "Generating site code",
            TaskKind::TextPolish => "Polishing text",
            TaskKind::UiBeautify => "Beautifying UI",
            TaskKind::SeoOptimize => "Optimizing SEO",
            TaskKind::CodeReview => "Reviewing code",
            TaskKind::Deploy => "Deploying site",
        }
    }
}

/// The set of steps selected for a run. Created once per run; the
/// constructor guarantees the mandatory steps are always members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSet(BTreeSet<TaskKind>);

impl TaskSet {
    /// Builds a set from whatever the classifier selected, re-adding the
    /// mandatory steps and collapsing duplicates.
    pub fn from_classified<I: IntoIterator<Item = TaskKind>>(selected: I) -> Self {
        let mut tasks: BTreeSet<TaskKind> = selected.into_iter().collect();
        tasks.extend(TaskKind::MANDATORY);
        TaskSet(tasks)
    }

    /// The mandatory steps and nothing else.
    pub fn mandatory_only() -> Self {
        Self::from_classified([])
    }

    pub fn contains(&self, task: TaskKind) -> bool {
        self.0.contains(&task)
    }

    /// A copy with the deploy step forced in (the `--deploy` flag).
    pub fn with_deploy(&self) -> Self {
        let mut tasks = self.0.clone();
        tasks.insert(TaskKind::Deploy);
        TaskSet(tasks)
    }

    pub fn iter(&self) -> impl Iterator<Item = TaskKind> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TaskSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|t| t.as_str()).collect();
        write!(f, "{}", names.join(", "))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Classifier trait and implementations
// ────────────────────────────────────────────────────────────────────────────

/// The task classifier seam. Implement this to swap the selection policy
/// without touching the sequencer or the caller.
#[async_trait]
pub trait TaskClassifier: Send + Sync {
    async fn classify(&self, profile: &UserProfile) -> Result<TaskSet, HomepageError>;
}

/// Shape the classification model must return.
#[derive(Debug, Deserialize)]
struct TriageOutcome {
    tasks: Vec<TaskKind>,
}

/// Default classifier: hands the serialized profile to the model and trusts
/// its task list (mandatory steps are re-added regardless).
pub struct LlmTaskClassifier {
    llm: LlmClient,
}

impl LlmTaskClassifier {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TaskClassifier for LlmTaskClassifier {
    async fn classify(&self, profile: &UserProfile) -> Result<TaskSet, HomepageError> {
        let profile_json = serde_json::to_string_pretty(profile).map_err(|e| {
            HomepageError::Classification(format!("Failed to serialize profile: {e}"))
        })?;
        let prompt = TRIAGE_PROMPT_TEMPLATE.replace("{profile_json}", &profile_json);
        let system = format!("{TRIAGE_SYSTEM} {JSON_ONLY_SYSTEM}");

        let outcome: TriageOutcome = self
            .llm
            .call_json(ANALYSIS_MODEL, &prompt, &system)
            .await
            .map_err(|e| HomepageError::Classification(format!("Triage call failed: {e}")))?;

        Ok(TaskSet::from_classified(outcome.tasks))
    }
}

/// Deterministic classifier for offline runs and tests.
///
/// Rules:
/// - text-polish when the bio is non-empty or the language preference is
///   foreign/bilingual
/// - ui-beautify when the style preference is modern or traditional
/// - seo-optimize when the profile has publications or projects
/// - deploy is never selected here (the `--deploy` flag forces it)
pub struct RuleTaskClassifier;

#[async_trait]
impl TaskClassifier for RuleTaskClassifier {
    async fn classify(&self, profile: &UserProfile) -> Result<TaskSet, HomepageError> {
        let mut selected = Vec::new();

        if !profile.bio.trim().is_empty()
            || profile.language_preference != LanguagePreference::Native
        {
            selected.push(TaskKind::TextPolish);
        }
        if profile.style_preference != StylePreference::Minimal {
            selected.push(TaskKind::UiBeautify);
        }
        if !profile.publications.is_empty() || !profile.projects.is_empty() {
            selected.push(TaskKind::SeoOptimize);
        }

        Ok(TaskSet::from_classified(selected))
    }
}
