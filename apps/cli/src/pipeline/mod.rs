//! The pipeline sequencer.
//!
//! A single forward-only sequence: content formatting and site generation
//! always run, then the document is threaded through an ordered list of
//! whole-document stages. Optional stages are skipped when the task set
//! does not select them; code review is mandatory and always last. Each
//! stage replaces the document outright, and nothing survives between
//! stages except the string itself. Any failure aborts the run; nothing
//! downstream of a failed step is invoked.

use crate::content::ContentFormatter;
use crate::errors::HomepageError;
use crate::llm_client::LlmClient;
use crate::models::profile::UserProfile;
use crate::pipeline::stages::{
    CodeReviewStage, DocumentStage, SeoOptimizeStage, TextPolishStage, UiBeautifyStage,
};
use crate::site::SiteGenerator;
use crate::triage::{TaskKind, TaskSet};

pub mod prompts;
pub mod stages;

/// Read-only context handed to every document stage.
pub struct StageContext<'a> {
    pub profile: &'a UserProfile,
}

/// Progress callbacks, decoupled from the pipeline logic. The CLI renders
/// these as spinner lines; tests record them.
pub trait PipelineObserver: Send + Sync {
    /// Called when a step begins.
    fn stage_start(&self, label: &str);
    /// Called when a step completes.
    fn stage_done(&self, label: &str);
}

/// No-op observer for headless/test usage.
pub struct SilentObserver;

impl PipelineObserver for SilentObserver {
    fn stage_start(&self, _label: &str) {}
    fn stage_done(&self, _label: &str) {}
}

/// The document stages in their fixed run order. Review stays last: every
/// earlier entry assumes review has not happened yet, and persistence
/// assumes it has.
pub fn default_stages(llm: &LlmClient) -> Vec<Box<dyn DocumentStage>> {
    vec![
        Box::new(TextPolishStage::new(llm.clone())),
        Box::new(UiBeautifyStage::new(llm.clone())),
        Box::new(SeoOptimizeStage::new(llm.clone())),
        Box::new(CodeReviewStage::new(llm.clone())),
    ]
}

/// Runs the generation pipeline: formatter, generator, then the stage list
/// filtered by the task set.
pub struct Pipeline<'a> {
    formatter: &'a dyn ContentFormatter,
    generator: &'a dyn SiteGenerator,
    stages: Vec<Box<dyn DocumentStage>>,
    observer: &'a dyn PipelineObserver,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        formatter: &'a dyn ContentFormatter,
        generator: &'a dyn SiteGenerator,
        stages: Vec<Box<dyn DocumentStage>>,
        observer: &'a dyn PipelineObserver,
    ) -> Self {
        Self {
            formatter,
            generator,
            stages,
            observer,
        }
    }

    /// Produces the final document for this profile and task set.
    ///
    /// Steps are awaited strictly in order; the in-flight document is moved
    /// from stage to stage, never aliased.
    pub async fn run(
        &self,
        profile: &UserProfile,
        tasks: &TaskSet,
    ) -> Result<String, HomepageError> {
        self.observer.stage_start(TaskKind::ContentFormat.title());
        let content = self.formatter.format(profile).await?;
        self.observer.stage_done(TaskKind::ContentFormat.title());

        self.observer.stage_start(TaskKind::WebCodegen.title());
        let mut document = self.generator.generate(profile, &content, tasks).await?;
        self.observer.stage_done(TaskKind::WebCodegen.title());

        let cx = StageContext { profile };
        for stage in &self.stages {
            // Mandatory stages run whatever the set says; the TaskSet
            // constructor upholds the same invariant from the other side.
            if !stage.kind().is_mandatory() && !tasks.contains(stage.kind()) {
                continue;
            }
            self.observer.stage_start(stage.kind().title());
            document = stage.transform(document, &cx).await?;
            self.observer.stage_done(stage.kind().title());
        }

        Ok(document)
    }
}
