//! Site generation — produces the initial HTML document from the profile,
//! the formatted content and the selected task set.
//!
//! The model occasionally returns prose instead of a document; generation
//! validates the reply and retries before giving up.

use async_trait::async_trait;
use tracing::warn;

use crate::errors::HomepageError;
use crate::llm_client::{LlmClient, GENERATION_MODEL};
use crate::models::content::AcademicContent;
use crate::models::profile::UserProfile;
use crate::site::prompts::{SITE_GENERATION_PROMPT_TEMPLATE, SITE_GENERATION_SYSTEM};
use crate::triage::TaskSet;

pub mod prompts;

/// Max retries when the model's reply does not look like an HTML document.
const MAX_GENERATION_RETRIES: u32 = 2;

/// The site-generation seam; tests substitute deterministic fakes.
#[async_trait]
pub trait SiteGenerator: Send + Sync {
    async fn generate(
        &self,
        profile: &UserProfile,
        content: &AcademicContent,
        tasks: &TaskSet,
    ) -> Result<String, HomepageError>;
}

/// LLM-backed generator used in production.
pub struct LlmSiteGenerator {
    llm: LlmClient,
}

impl LlmSiteGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SiteGenerator for LlmSiteGenerator {
    async fn generate(
        &self,
        profile: &UserProfile,
        content: &AcademicContent,
        tasks: &TaskSet,
    ) -> Result<String, HomepageError> {
        let prompt = build_generation_prompt(profile, content, tasks)
            .map_err(|e| HomepageError::Generation(format!("Failed to build prompt: {e}")))?;

        for attempt in 0..=MAX_GENERATION_RETRIES {
            let document = self
                .llm
                .call_document(GENERATION_MODEL, &prompt, SITE_GENERATION_SYSTEM)
                .await
                .map_err(|e| {
                    HomepageError::Generation(format!("Site generation call failed: {e}"))
                })?;

            if looks_like_html(&document) {
                return Ok(document);
            }

            warn!(
                "Site generation attempt {}/{} did not return an HTML document — retrying",
                attempt + 1,
                MAX_GENERATION_RETRIES + 1
            );
        }

        Err(HomepageError::Generation(format!(
            "Site generation failed after {} attempts: the model never returned \
             a complete HTML document",
            MAX_GENERATION_RETRIES + 1
        )))
    }
}

fn build_generation_prompt(
    profile: &UserProfile,
    content: &AcademicContent,
    tasks: &TaskSet,
) -> Result<String, serde_json::Error> {
    let profile_json = serde_json::to_string_pretty(profile)?;
    let content_json = serde_json::to_string_pretty(content)?;
    let task_names: Vec<&str> = tasks.iter().map(|t| t.as_str()).collect();
    let tasks_json = serde_json::to_string(&task_names)?;

    Ok(SITE_GENERATION_PROMPT_TEMPLATE
        .replace("{profile_json}", &profile_json)
        .replace("{content_json}", &content_json)
        .replace("{tasks_json}", &tasks_json))
}

/// Cheap sanity check that a stage reply is a whole HTML document.
pub(crate) fn looks_like_html(document: &str) -> bool {
    let trimmed = document.trim_start();
    let lowered = trimmed.get(..15).unwrap_or(trimmed).to_ascii_lowercase();
    lowered.starts_with("<!doctype") || lowered.starts_with("<html")
}
