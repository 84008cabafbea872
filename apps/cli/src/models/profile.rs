//! The user's academic profile: constructed once from console input,
//! persisted verbatim as JSON, never mutated afterwards except by the user
//! re-entering values on a later run.

use serde::{Deserialize, Serialize};

/// Visual style the generated homepage should follow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreference {
    #[default]
    Minimal,
    Modern,
    Traditional,
}

/// Language the generated homepage should be written in, relative to the
/// user's own language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePreference {
    #[default]
    Native,
    Foreign,
    Bilingual,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub title: String,
    pub affiliation: String,
    pub email: String,
    pub research_interests: Vec<String>,
    pub education: Vec<Education>,
    pub publications: Vec<Publication>,
    pub projects: Vec<Project>,
    pub bio: String,
    #[serde(default)]
    pub style_preference: StylePreference,
    #[serde(default)]
    pub language_preference: LanguagePreference,
}

impl StylePreference {
    /// Stable identifier, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            StylePreference::Minimal => "minimal",
            StylePreference::Modern => "modern",
            StylePreference::Traditional => "traditional",
        }
    }

    /// Parses a console answer, falling back to the current value on blank
    /// input and erroring on anything unrecognized.
    pub fn parse(input: &str, current: StylePreference) -> Result<StylePreference, String> {
        match input.trim().to_lowercase().as_str() {
            "" => Ok(current),
            "minimal" => Ok(StylePreference::Minimal),
            "modern" => Ok(StylePreference::Modern),
            "traditional" => Ok(StylePreference::Traditional),
            other => Err(format!(
                "Unknown style '{other}' (expected minimal, modern or traditional)"
            )),
        }
    }
}

impl LanguagePreference {
    /// Stable identifier, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            LanguagePreference::Native => "native",
            LanguagePreference::Foreign => "foreign",
            LanguagePreference::Bilingual => "bilingual",
        }
    }

    pub fn parse(input: &str, current: LanguagePreference) -> Result<LanguagePreference, String> {
        match input.trim().to_lowercase().as_str() {
            "" => Ok(current),
            "native" => Ok(LanguagePreference::Native),
            "foreign" => Ok(LanguagePreference::Foreign),
            "bilingual" => Ok(LanguagePreference::Bilingual),
            other => Err(format!(
                "Unknown language '{other}' (expected native, foreign or bilingual)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Ada Lovelace".to_string(),
            title: "Professor".to_string(),
            affiliation: "Analytical Engine Institute".to_string(),
            email: "ada@example.edu".to_string(),
            research_interests: vec!["computation".to_string(), "mathematics".to_string()],
            education: vec![Education {
                degree: "PhD".to_string(),
                institution: "University of London".to_string(),
                year: "1840".to_string(),
            }],
            publications: vec![Publication {
                title: "Notes on the Analytical Engine".to_string(),
                authors: vec!["A. Lovelace".to_string()],
                venue: "Scientific Memoirs".to_string(),
                year: "1843".to_string(),
                url: None,
            }],
            projects: vec![],
            bio: "First programmer.".to_string(),
            style_preference: StylePreference::Minimal,
            language_preference: LanguagePreference::Native,
        }
    }

    #[test]
    fn test_profile_round_trips_through_json() {
        let profile = sample_profile();
        let json = serde_json::to_string_pretty(&profile).unwrap();
        let recovered: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.name, profile.name);
        assert_eq!(recovered.research_interests, profile.research_interests);
        assert_eq!(recovered.publications.len(), 1);
        assert_eq!(recovered.style_preference, StylePreference::Minimal);
        assert_eq!(recovered.language_preference, LanguagePreference::Native);
    }

    #[test]
    fn test_preferences_serialize_lowercase() {
        let json = serde_json::to_string(&StylePreference::Modern).unwrap();
        assert_eq!(json, r#""modern""#);
        let json = serde_json::to_string(&LanguagePreference::Bilingual).unwrap();
        assert_eq!(json, r#""bilingual""#);
    }

    #[test]
    fn test_as_str_matches_serde_representation() {
        for style in [
            StylePreference::Minimal,
            StylePreference::Modern,
            StylePreference::Traditional,
        ] {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json.trim_matches('"'), style.as_str());
        }
        for language in [
            LanguagePreference::Native,
            LanguagePreference::Foreign,
            LanguagePreference::Bilingual,
        ] {
            let json = serde_json::to_string(&language).unwrap();
            assert_eq!(json.trim_matches('"'), language.as_str());
        }
    }

    #[test]
    fn test_unknown_preference_is_rejected() {
        let result: Result<StylePreference, _> = serde_json::from_str(r#""brutalist""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_preferences_default() {
        // Profiles saved before the preference fields existed still load.
        let json = r#"{
            "name": "Ada", "title": "", "affiliation": "", "email": "",
            "research_interests": [], "education": [], "publications": [],
            "projects": [], "bio": ""
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.style_preference, StylePreference::Minimal);
        assert_eq!(profile.language_preference, LanguagePreference::Native);
    }

    #[test]
    fn test_publication_url_omitted_when_absent() {
        let publication = Publication {
            title: "T".to_string(),
            authors: vec![],
            venue: "V".to_string(),
            year: "2024".to_string(),
            url: None,
        };
        let json = serde_json::to_string(&publication).unwrap();
        assert!(!json.contains("url"));
    }

    #[test]
    fn test_style_parse_blank_keeps_current() {
        let parsed = StylePreference::parse("  ", StylePreference::Traditional).unwrap();
        assert_eq!(parsed, StylePreference::Traditional);
    }

    #[test]
    fn test_language_parse_rejects_unknown() {
        assert!(LanguagePreference::parse("klingon", LanguagePreference::Native).is_err());
    }
}
