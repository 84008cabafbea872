//! Deployment — publishes the output directory and returns the site URL.
//!
//! Runs only after `index.html` is on disk, takes the output directory as
//! its whole input, and never touches the document.

use std::path::Path;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::errors::HomepageError;

const REPO_NAME: &str = "academic-homepage";
const REPO_DESCRIPTION: &str = "Academic Homepage";

/// The deployment seam; tests substitute recording fakes.
#[async_trait]
pub trait Deployer: Send + Sync {
    /// Publishes the given directory and returns the public URL.
    async fn deploy(&self, output_dir: &Path) -> Result<String, HomepageError>;
}

/// GitHub Pages deployer.
///
/// The GitHub operations below are placeholders that return canned values.
/// TODO: replace them with real calls through the GitHub REST API (create
/// repo, push a tree to main, enable Pages on main/root) once a token
/// strategy is decided.
pub struct GitHubPagesDeployer {
    username: String,
    run_id: Uuid,
}

impl GitHubPagesDeployer {
    pub fn new(username: String, run_id: Uuid) -> Self {
        Self { username, run_id }
    }

    fn create_repo(&self, repo_name: &str, _description: &str) -> String {
        format!("https://github.com/{}/{}", self.username, repo_name)
    }

    fn push_directory(&self, _repo_url: &str, _local_dir: &Path) -> bool {
        true
    }

    fn enable_pages(&self, repo_url: &str) -> String {
        let repo_name = repo_url.rsplit('/').next().unwrap_or(REPO_NAME);
        format!("https://{}.github.io/{}", self.username, repo_name)
    }
}

#[async_trait]
impl Deployer for GitHubPagesDeployer {
    async fn deploy(&self, output_dir: &Path) -> Result<String, HomepageError> {
        if !output_dir.join("index.html").is_file() {
            return Err(HomepageError::Deploy(format!(
                "Nothing to deploy: {} has no index.html",
                output_dir.display()
            )));
        }

        info!(run_id = %self.run_id, dir = %output_dir.display(), "deploying output directory");

        let repo_url = self.create_repo(REPO_NAME, REPO_DESCRIPTION);
        if !self.push_directory(&repo_url, output_dir) {
            return Err(HomepageError::Deploy(format!(
                "Push to {repo_url} failed"
            )));
        }
        let pages_url = self.enable_pages(&repo_url);

        info!(%pages_url, "deployment complete");
        Ok(pages_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployer() -> GitHubPagesDeployer {
        GitHubPagesDeployer::new("adalovelace".to_string(), Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_deploy_returns_pages_url_for_populated_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<!DOCTYPE html>").unwrap();

        let url = deployer().deploy(dir.path()).await.unwrap();
        assert_eq!(url, "https://adalovelace.github.io/academic-homepage");
    }

    #[tokio::test]
    async fn test_deploy_fails_when_index_is_missing() {
        let dir = tempfile::tempdir().unwrap();

        let result = deployer().deploy(dir.path()).await;
        assert!(matches!(result, Err(HomepageError::Deploy(_))));
    }

    #[tokio::test]
    async fn test_deploy_does_not_modify_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let html = "<!DOCTYPE html><html><body>final</body></html>";
        let path = dir.path().join("index.html");
        std::fs::write(&path, html).unwrap();

        deployer().deploy(dir.path()).await.unwrap();

        let after = std::fs::read_to_string(&path).unwrap();
        assert_eq!(after, html);
    }
}
