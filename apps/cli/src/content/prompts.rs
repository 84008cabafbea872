// LLM prompt constants for content formatting.

/// Role half of the content-formatting system prompt; the formatter appends
/// the shared JSON-only fragment at call time.
pub const CONTENT_FORMAT_SYSTEM: &str =
    "You are an academic content editor preparing material for a personal \
    homepage. You organize and enrich the user's raw academic information. \
    Do NOT invent publications, degrees or projects the user did not list.";

/// Content-formatting prompt template. Replace `{profile_json}`.
pub const CONTENT_FORMAT_PROMPT_TEMPLATE: &str = r#"Organize the following academic profile for display on a personal homepage.

Produce:
1. A short biography (1-2 sentences) and a long biography (1-2 paragraphs).
2. A coherent prose description of the research interests.
3. The publication list with missing presentation details filled in
   (citation string; abstract and keywords only when they can be stated
   faithfully from the given title and venue).
4. The project list with technologies and outcomes where the description
   supports them.
5. The education list with a one-line description per entry.
6. A skills list extracted from the profile.
7. A keyword list suitable for search-engine metadata.

Keep the content professional, accurate and concise. Preserve the order of
every list the user provided.

Return a JSON object with this EXACT schema:
{
  "bio_short": "...",
  "bio_long": "...",
  "research_interests_desc": "...",
  "publications_formatted": [
    {"title": "...", "authors": ["..."], "venue": "...", "year": "...",
     "url": null, "citation": "...", "abstract_text": null, "keywords": []}
  ],
  "projects_formatted": [
    {"name": "...", "description": "...", "year": "...", "url": null,
     "technologies": [], "outcomes": null}
  ],
  "education_formatted": [
    {"degree": "...", "institution": "...", "year": "...", "description": "..."}
  ],
  "skills": ["..."],
  "keywords": ["..."]
}

USER PROFILE:
{profile_json}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_template_has_profile_placeholder() {
        assert!(CONTENT_FORMAT_PROMPT_TEMPLATE.contains("{profile_json}"));
    }
}
