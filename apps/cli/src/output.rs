//! Output directory management: the persisted profile and the final
//! document both land here.

use std::path::{Path, PathBuf};

use crate::errors::HomepageError;
use crate::models::profile::UserProfile;

pub const PROFILE_FILE: &str = "user_data.json";
pub const DOCUMENT_FILE: &str = "index.html";

/// Writes the profile JSON into the output directory, creating the
/// directory if needed. Runs before the pipeline and independent of it.
pub fn write_profile(output_dir: &Path, profile: &UserProfile) -> Result<PathBuf, HomepageError> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(PROFILE_FILE);
    let json = serde_json::to_string_pretty(profile)
        .map_err(|e| HomepageError::Internal(anyhow::anyhow!("serialize profile: {e}")))?;
    std::fs::write(&path, json)?;
    Ok(path)
}

/// Writes the final document into the output directory.
pub fn write_document(output_dir: &Path, document: &str) -> Result<PathBuf, HomepageError> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(DOCUMENT_FILE);
    std::fs::write(&path, document)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{LanguagePreference, StylePreference};

    fn profile() -> UserProfile {
        UserProfile {
            name: "Ada".to_string(),
            title: String::new(),
            affiliation: String::new(),
            email: String::new(),
            research_interests: vec![],
            education: vec![],
            publications: vec![],
            projects: vec![],
            bio: String::new(),
            style_preference: StylePreference::Minimal,
            language_preference: LanguagePreference::Native,
        }
    }

    #[test]
    fn test_write_profile_creates_dir_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out");

        let path = write_profile(&nested, &profile()).unwrap();
        assert_eq!(path, nested.join(PROFILE_FILE));

        let loaded: UserProfile =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.name, "Ada");
    }

    #[test]
    fn test_write_document_persists_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let html = "<!DOCTYPE html><html><body>x</body></html>";

        let path = write_document(dir.path(), html).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), html);
    }
}
