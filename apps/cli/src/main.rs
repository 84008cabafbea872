mod config;
mod content;
mod deploy;
mod errors;
mod input;
mod llm_client;
mod models;
mod output;
mod pipeline;
mod progress;
mod run;
mod site;
mod triage;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::config::Config;
use crate::content::LlmContentFormatter;
use crate::deploy::GitHubPagesDeployer;
use crate::errors::HomepageError;
use crate::input::Prompter;
use crate::llm_client::LlmClient;
use crate::pipeline::{default_stages, Pipeline, PipelineObserver, SilentObserver};
use crate::progress::CliProgress;
use crate::run::RunOptions;
use crate::site::LlmSiteGenerator;
use crate::triage::{LlmTaskClassifier, RuleTaskClassifier, TaskClassifier};

/// laurea — generate an academic homepage through a staged LLM pipeline.
#[derive(Parser, Debug)]
#[command(name = "laurea", version, about = "Generate an academic homepage with an LLM pipeline")]
struct Cli {
    /// Output directory for user_data.json and index.html.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Path of the saved profile JSON reused between runs.
    #[arg(long, default_value = "user_data.json")]
    profile: PathBuf,

    /// Task selection policy.
    #[arg(long, value_enum, default_value = "llm")]
    classifier: ClassifierKind,

    /// Force the deploy task regardless of classification.
    #[arg(long)]
    deploy: bool,

    /// Reuse the saved profile without prompting.
    #[arg(short = 'y', long)]
    yes: bool,

    /// Suppress the progress spinner.
    #[arg(long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ClassifierKind {
    /// Delegate task selection to the model.
    Llm,
    /// Deterministic rules over the profile.
    Rules,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let output_dir = cli.output.unwrap_or_else(|| config.output_dir.clone());

    info!("Starting laurea v{}", env!("CARGO_PKG_VERSION"));

    // Collect (or reuse) the profile before any model work happens.
    let saved = input::load_saved_profile(&cli.profile);
    let profile = if cli.yes {
        saved.ok_or_else(|| {
            HomepageError::Validation(format!(
                "--yes was given but no saved profile exists at {}",
                cli.profile.display()
            ))
        })?
    } else {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
        prompter.say("Welcome! Let's build your academic homepage.")?;
        let profile = input::collect_profile(&mut prompter, saved)?;
        input::save_profile(&cli.profile, &profile)?;
        profile
    };

    let run_id = Uuid::new_v4();
    info!(%run_id, "profile ready, starting generation");

    let llm = LlmClient::new(config.anthropic_api_key.clone());
    let classifier: Box<dyn TaskClassifier> = match cli.classifier {
        ClassifierKind::Llm => Box::new(LlmTaskClassifier::new(llm.clone())),
        ClassifierKind::Rules => Box::new(RuleTaskClassifier),
    };
    let formatter = LlmContentFormatter::new(llm.clone());
    let generator = LlmSiteGenerator::new(llm.clone());
    let deployer = GitHubPagesDeployer::new(config.github_username.clone(), run_id);

    let progress = (!cli.quiet).then(CliProgress::new);
    let silent = SilentObserver;
    let observer: &dyn PipelineObserver = match &progress {
        Some(p) => p,
        None => &silent,
    };

    let pipeline = Pipeline::new(&formatter, &generator, default_stages(&llm), observer);

    let outcome = run::run(
        &profile,
        classifier.as_ref(),
        &pipeline,
        &deployer,
        observer,
        &output_dir,
        &RunOptions {
            force_deploy: cli.deploy,
        },
    )
    .await?;

    if let Some(p) = &progress {
        p.finish("Homepage generation complete");
    }
    println!("\nHomepage written to {}", outcome.html_path.display());
    if let Some(url) = outcome.deploy_url {
        println!("Deployed at {url}");
    }

    Ok(())
}
