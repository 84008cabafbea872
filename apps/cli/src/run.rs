//! The run orchestrator: persist the profile, classify, run the pipeline,
//! persist the document, optionally deploy. Terminal states are
//! "succeeded" (document written) or "failed" (first error aborts the run).

use std::path::{Path, PathBuf};

use tracing::info;

use crate::deploy::Deployer;
use crate::errors::HomepageError;
use crate::models::profile::UserProfile;
use crate::output;
use crate::pipeline::{Pipeline, PipelineObserver};
use crate::triage::{TaskClassifier, TaskKind};

/// What a successful run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub html_path: PathBuf,
    /// Present only when the deploy task ran.
    pub deploy_url: Option<String>,
}

#[derive(Debug, Default)]
pub struct RunOptions {
    /// Forces the deploy task into the set regardless of classification
    /// (the `--deploy` flag).
    pub force_deploy: bool,
}

pub async fn run(
    profile: &UserProfile,
    classifier: &dyn TaskClassifier,
    pipeline: &Pipeline<'_>,
    deployer: &dyn Deployer,
    observer: &dyn PipelineObserver,
    output_dir: &Path,
    options: &RunOptions,
) -> Result<RunOutcome, HomepageError> {
    // The profile is persisted before and independent of the pipeline.
    let profile_path = output::write_profile(output_dir, profile)?;
    info!(path = %profile_path.display(), "profile persisted");

    observer.stage_start("Analyzing requirements");
    let tasks = classifier.classify(profile).await?;
    let tasks = if options.force_deploy {
        tasks.with_deploy()
    } else {
        tasks
    };
    observer.stage_done("Analyzing requirements");
    info!(task_count = tasks.len(), %tasks, "tasks selected");

    let document = pipeline.run(profile, &tasks).await?;

    let html_path = output::write_document(output_dir, &document)?;
    info!(path = %html_path.display(), "document persisted");

    // Deployment runs after persistence and never touches the document.
    let deploy_url = if tasks.contains(TaskKind::Deploy) {
        observer.stage_start(TaskKind::Deploy.title());
        let url = deployer.deploy(output_dir).await?;
        observer.stage_done(TaskKind::Deploy.title());
        Some(url)
    } else {
        None
    };

    Ok(RunOutcome {
        html_path,
        deploy_url,
    })
}
