//! Whole-document stages. Polish, beautify, SEO and review all share one
//! shape (take the document, return a full replacement), so the sequencer
//! treats them uniformly through the `DocumentStage` trait.

use async_trait::async_trait;
use tracing::warn;

use crate::errors::HomepageError;
use crate::llm_client::prompts::FULL_REPLACEMENT_INSTRUCTION;
use crate::llm_client::{LlmClient, ANALYSIS_MODEL, GENERATION_MODEL};
use crate::pipeline::prompts::{
    CODE_REVIEW_PROMPT_TEMPLATE, CODE_REVIEW_SYSTEM, SEO_OPTIMIZE_PROMPT_TEMPLATE,
    SEO_OPTIMIZE_SYSTEM, TEXT_POLISH_PROMPT_TEMPLATE, TEXT_POLISH_SYSTEM,
    UI_BEAUTIFY_PROMPT_TEMPLATE, UI_BEAUTIFY_SYSTEM,
};
use crate::pipeline::StageContext;
use crate::site::looks_like_html;
use crate::triage::TaskKind;

/// One document-transformation step: `(document, context) -> document`.
/// Implementations must not observe or mutate anything beyond their inputs.
#[async_trait]
pub trait DocumentStage: Send + Sync {
    fn kind(&self) -> TaskKind;

    async fn transform(
        &self,
        document: String,
        cx: &StageContext<'_>,
    ) -> Result<String, HomepageError>;
}

/// Runs one rewrite call and checks the reply is still a whole document,
/// retrying once when it is not. Transport-level retries already happened
/// inside the client by the time this sees an answer.
async fn rewrite_document(
    llm: &LlmClient,
    model: &str,
    prompt: &str,
    system: &str,
    label: &str,
) -> Result<String, HomepageError> {
    for attempt in 0..2 {
        let rewritten = llm
            .call_document(model, prompt, system)
            .await
            .map_err(|e| HomepageError::Generation(format!("{label} call failed: {e}")))?;

        if looks_like_html(&rewritten) {
            return Ok(rewritten);
        }
        warn!("{label} attempt {} returned a non-document reply — retrying", attempt + 1);
    }

    Err(HomepageError::Generation(format!(
        "{label} failed: the model never returned a complete HTML document"
    )))
}

/// Interpolates a rewrite template. The document is substituted last so that
/// placeholder-looking text inside the document itself is never expanded.
fn fill_template(template: &str, params: &[(&str, &str)], document: &str) -> String {
    let mut prompt = template.replace(
        "{full_replacement_instruction}",
        FULL_REPLACEMENT_INSTRUCTION,
    );
    for (placeholder, value) in params {
        prompt = prompt.replace(placeholder, value);
    }
    prompt.replace("{document}", document)
}

// ────────────────────────────────────────────────────────────────────────────
// Text polish
// ────────────────────────────────────────────────────────────────────────────

/// Rewrites the page prose, guided by the user's language preference.
pub struct TextPolishStage {
    llm: LlmClient,
}

impl TextPolishStage {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl DocumentStage for TextPolishStage {
    fn kind(&self) -> TaskKind {
        TaskKind::TextPolish
    }

    async fn transform(
        &self,
        document: String,
        cx: &StageContext<'_>,
    ) -> Result<String, HomepageError> {
        let prompt = fill_template(
            TEXT_POLISH_PROMPT_TEMPLATE,
            &[("{language_preference}", cx.profile.language_preference.as_str())],
            &document,
        );
        rewrite_document(
            &self.llm,
            GENERATION_MODEL,
            &prompt,
            TEXT_POLISH_SYSTEM,
            "Text polishing",
        )
        .await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// UI beautify
// ────────────────────────────────────────────────────────────────────────────

/// Restyles the page, guided by the user's style preference.
pub struct UiBeautifyStage {
    llm: LlmClient,
}

impl UiBeautifyStage {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl DocumentStage for UiBeautifyStage {
    fn kind(&self) -> TaskKind {
        TaskKind::UiBeautify
    }

    async fn transform(
        &self,
        document: String,
        cx: &StageContext<'_>,
    ) -> Result<String, HomepageError> {
        let prompt = fill_template(
            UI_BEAUTIFY_PROMPT_TEMPLATE,
            &[("{style_preference}", cx.profile.style_preference.as_str())],
            &document,
        );
        rewrite_document(
            &self.llm,
            GENERATION_MODEL,
            &prompt,
            UI_BEAUTIFY_SYSTEM,
            "UI beautification",
        )
        .await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SEO optimize
// ────────────────────────────────────────────────────────────────────────────

/// Adds metadata, structured data and heading hygiene for search engines.
pub struct SeoOptimizeStage {
    llm: LlmClient,
}

impl SeoOptimizeStage {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl DocumentStage for SeoOptimizeStage {
    fn kind(&self) -> TaskKind {
        TaskKind::SeoOptimize
    }

    async fn transform(
        &self,
        document: String,
        cx: &StageContext<'_>,
    ) -> Result<String, HomepageError> {
        let profile_json = serde_json::to_string_pretty(cx.profile)
            .map_err(|e| HomepageError::Generation(format!("Serialize profile: {e}")))?;
        let prompt = fill_template(
            SEO_OPTIMIZE_PROMPT_TEMPLATE,
            &[("{profile_json}", profile_json.as_str())],
            &document,
        );
        rewrite_document(
            &self.llm,
            GENERATION_MODEL,
            &prompt,
            SEO_OPTIMIZE_SYSTEM,
            "SEO optimization",
        )
        .await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Code review
// ────────────────────────────────────────────────────────────────────────────

/// The last transformation before persistence: fixes markup, style and
/// script problems while preserving appearance and behavior.
pub struct CodeReviewStage {
    llm: LlmClient,
}

impl CodeReviewStage {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl DocumentStage for CodeReviewStage {
    fn kind(&self) -> TaskKind {
        TaskKind::CodeReview
    }

    async fn transform(
        &self,
        document: String,
        _cx: &StageContext<'_>,
    ) -> Result<String, HomepageError> {
        let prompt = fill_template(CODE_REVIEW_PROMPT_TEMPLATE, &[], &document);
        rewrite_document(
            &self.llm,
            ANALYSIS_MODEL,
            &prompt,
            CODE_REVIEW_SYSTEM,
            "Code review",
        )
        .await
        .map_err(|e| match e {
            HomepageError::Generation(msg) => HomepageError::Review(msg),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_substitutes_params_then_document() {
        let template = "Style: {style_preference}\n\n{document}";
        let filled = fill_template(template, &[("{style_preference}", "modern")], "<html></html>");
        assert_eq!(filled, "Style: modern\n\n<html></html>");
    }

    #[test]
    fn test_fill_template_never_expands_placeholders_inside_document() {
        // A document that happens to contain placeholder-looking text must
        // pass through untouched.
        let template = "Lang: {language_preference}\n\n{document}";
        let document = "<html><body>{language_preference}</body></html>";
        let filled = fill_template(template, &[("{language_preference}", "native")], document);
        assert!(filled.starts_with("Lang: native"));
        assert!(filled.contains("<body>{language_preference}</body>"));
    }
}
