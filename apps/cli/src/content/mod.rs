//! Content formatting — the first pipeline step. Turns the raw profile into
//! the structured `AcademicContent` record that site generation consumes.

use async_trait::async_trait;

use crate::content::prompts::{CONTENT_FORMAT_PROMPT_TEMPLATE, CONTENT_FORMAT_SYSTEM};
use crate::errors::HomepageError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, GENERATION_MODEL};
use crate::models::content::AcademicContent;
use crate::models::profile::UserProfile;

pub mod prompts;

/// The content-formatting seam; tests substitute deterministic fakes.
#[async_trait]
pub trait ContentFormatter: Send + Sync {
    async fn format(&self, profile: &UserProfile) -> Result<AcademicContent, HomepageError>;
}

/// LLM-backed formatter used in production.
pub struct LlmContentFormatter {
    llm: LlmClient,
}

impl LlmContentFormatter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ContentFormatter for LlmContentFormatter {
    async fn format(&self, profile: &UserProfile) -> Result<AcademicContent, HomepageError> {
        let prompt = build_format_prompt(profile)
            .map_err(|e| HomepageError::Generation(format!("Failed to build prompt: {e}")))?;
        let system = format!("{CONTENT_FORMAT_SYSTEM} {JSON_ONLY_SYSTEM}");

        self.llm
            .call_json::<AcademicContent>(GENERATION_MODEL, &prompt, &system)
            .await
            .map_err(|e| HomepageError::Generation(format!("Content formatting failed: {e}")))
    }
}

fn build_format_prompt(profile: &UserProfile) -> Result<String, serde_json::Error> {
    let profile_json = serde_json::to_string_pretty(profile)?;
    Ok(CONTENT_FORMAT_PROMPT_TEMPLATE.replace("{profile_json}", &profile_json))
}
