//! Structured academic content produced by the content-formatting step and
//! consumed by site generation. The formatting model fills in what the raw
//! profile leaves out (citation strings, abstracts, technology lists); the
//! strict serde shapes below are the contract it must satisfy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedPublication {
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedProject {
    pub name: String,
    pub description: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedEducation {
    pub degree: String,
    pub institution: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Full output of the content-formatting step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicContent {
    /// One to two sentences.
    pub bio_short: String,
    /// One to two paragraphs.
    pub bio_long: String,
    /// Research interests woven into a coherent description.
    pub research_interests_desc: String,
    pub publications_formatted: Vec<FormattedPublication>,
    pub projects_formatted: Vec<FormattedProject>,
    pub education_formatted: Vec<FormattedEducation>,
    pub skills: Vec<String>,
    /// Keyword list for the SEO stage.
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_academic_content_deserializes_from_model_output() {
        let json = r#"{
            "bio_short": "Researcher in distributed systems.",
            "bio_long": "A longer biography spanning a paragraph.",
            "research_interests_desc": "Works on consensus and storage.",
            "publications_formatted": [
                {
                    "title": "Raft Revisited",
                    "authors": ["J. Doe"],
                    "venue": "SOSP",
                    "year": "2023",
                    "citation": "Doe, J. (2023). Raft Revisited. SOSP.",
                    "keywords": ["consensus"]
                }
            ],
            "projects_formatted": [],
            "education_formatted": [
                {"degree": "PhD", "institution": "MIT", "year": "2019"}
            ],
            "skills": ["Rust", "distributed systems"],
            "keywords": ["consensus", "raft"]
        }"#;

        let content: AcademicContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.publications_formatted.len(), 1);
        assert_eq!(
            content.publications_formatted[0].keywords,
            vec!["consensus"]
        );
        assert!(content.publications_formatted[0].abstract_text.is_none());
        assert_eq!(content.education_formatted[0].description, None);
        assert_eq!(content.skills.len(), 2);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        // bio_short is mandatory; the formatter must always produce it.
        let json = r#"{
            "bio_long": "x", "research_interests_desc": "x",
            "publications_formatted": [], "projects_formatted": [],
            "education_formatted": [], "skills": [], "keywords": []
        }"#;
        let result: Result<AcademicContent, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_optional_lists_are_omitted_on_serialize() {
        let publication = FormattedPublication {
            title: "T".to_string(),
            authors: vec![],
            venue: "V".to_string(),
            year: "2024".to_string(),
            url: None,
            citation: None,
            abstract_text: None,
            keywords: vec![],
        };
        let json = serde_json::to_string(&publication).unwrap();
        assert!(!json.contains("keywords"));
        assert!(!json.contains("citation"));
    }
}
