use thiserror::Error;

/// Application-level error type with one variant per failure kind the run
/// can hit, so callers can tell a classification failure from a generation
/// failure from a deploy failure.
///
/// Policy per kind:
/// - `Classification`, `Generation`, `Review`: fail fast; the run aborts
///   before any downstream collaborator is invoked. Transient LLM transport
///   failures are retried inside `LlmClient` before they surface here.
/// - `Deploy`: reported after `index.html` is on disk; the document stays.
#[derive(Debug, Error)]
pub enum HomepageError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Task classification failed: {0}")]
    Classification(String),

    #[error("Content generation failed: {0}")]
    Generation(String),

    #[error("Code review failed: {0}")]
    Review(String),

    #[error("Deployment failed: {0}")]
    Deploy(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
