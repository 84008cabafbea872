// LLM prompt constants for task classification.

/// Role half of the triage system prompt; the classifier appends the
/// shared JSON-only fragment at call time.
pub const TRIAGE_SYSTEM: &str =
    "You are the triage step of an academic homepage generation system. \
    You analyze a user's profile and decide which pipeline tasks to run.";

/// Triage prompt template. Replace `{profile_json}` before sending.
pub const TRIAGE_PROMPT_TEMPLATE: &str = r#"Decide which tasks the homepage pipeline should run for this user.

Available tasks:
- "content-format": organize the academic content (ALWAYS required)
- "web-codegen": generate the HTML/CSS/JS (ALWAYS required)
- "text-polish": rewrite the page text for fluency, guided by the user's language preference
- "ui-beautify": restyle the page appearance, guided by the user's style preference
- "seo-optimize": improve search-engine visibility
- "code-review": check code quality and safety (ALWAYS required)
- "deploy": publish the site to GitHub Pages

Selection guidance:
- content-format, web-codegen and code-review are mandatory — include them.
- Include text-polish when the profile carries prose worth improving or a
  non-native language preference.
- Include ui-beautify when the user's style preference suggests the page
  should be restyled beyond the generated baseline.
- Include seo-optimize when the profile has publications or projects that
  benefit from being discoverable.
- Include deploy only when the profile clearly indicates the user wants the
  site published.

Return a JSON object with this EXACT schema:
{
  "tasks": ["content-format", "web-codegen", "code-review"]
}

USER PROFILE:
{profile_json}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triage_template_has_profile_placeholder() {
        assert!(TRIAGE_PROMPT_TEMPLATE.contains("{profile_json}"));
    }

    #[test]
    fn test_triage_template_names_every_task() {
        for name in [
            "content-format",
            "web-codegen",
            "text-polish",
            "ui-beautify",
            "seo-optimize",
            "code-review",
            "deploy",
        ] {
            assert!(
                TRIAGE_PROMPT_TEMPLATE.contains(name),
                "template must describe task {name}"
            );
        }
    }
}
