// LLM prompt constants for site generation.

/// System prompt for site generation — the whole reply is the document.
pub const SITE_GENERATION_SYSTEM: &str =
    "You are an expert web developer generating a complete academic homepage. \
    Your ENTIRE response must be one complete HTML document, \
    starting with <!DOCTYPE html> and ending with </html>. \
    Do NOT use markdown code fences. \
    Do NOT include any commentary before or after the document.";

/// Site-generation prompt template.
/// Replace: {profile_json}, {content_json}, {tasks_json}
pub const SITE_GENERATION_PROMPT_TEMPLATE: &str = r#"Generate a complete academic homepage as a single HTML file.

You receive:
1. The user's raw profile.
2. The formatted academic content prepared for display.
3. The list of pipeline tasks selected for this run.

The page must contain, in order:
1. A top navigation bar.
2. A personal header (name, title, affiliation, contact).
3. The biography.
4. Research interests.
5. The publication list.
6. Projects.
7. Education.
8. A footer with copyright.

Requirements:
1. One self-contained file: HTML structure, inline CSS, and any JavaScript.
2. Responsive across screen sizes.
3. Clean, professional, academic design that honors the user's
   style_preference; write the text in the language implied by
   language_preference.
4. Modern HTML5 and CSS3; no external dependencies (no frameworks, no CDNs).
5. Small JavaScript touches for usability are welcome but optional.

USER PROFILE:
{profile_json}

FORMATTED CONTENT:
{content_json}

SELECTED TASKS:
{tasks_json}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_template_has_all_placeholders() {
        for placeholder in ["{profile_json}", "{content_json}", "{tasks_json}"] {
            assert!(SITE_GENERATION_PROMPT_TEMPLATE.contains(placeholder));
        }
    }
}
