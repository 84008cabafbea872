// LLM prompt constants for the whole-document rewrite stages.
//
// Every template ends with the document so the instructions stay in front
// of the model; `{document}` is interpolated last (see stages::fill_template).

/// System prompt shared shape for rewrite stages — the reply is the document.
pub const TEXT_POLISH_SYSTEM: &str =
    "You are a professional editor polishing the text of an academic homepage. \
    Your ENTIRE response must be the complete modified HTML document. \
    Do NOT use markdown code fences. \
    Do NOT include any commentary.";

/// Text-polish prompt template. Replace `{language_preference}`, `{document}`.
pub const TEXT_POLISH_PROMPT_TEMPLATE: &str = r#"Polish all user-facing text in this academic homepage.

Language preference: {language_preference}
- "native": keep the page's language and improve fluency and tone.
- "foreign": render the text in polished academic English.
- "bilingual": present headings and key content in both languages.

Rules:
1. Improve clarity, grammar and academic register.
2. Do NOT change the HTML structure, CSS or JavaScript.
3. Do NOT add or remove sections.
4. {full_replacement_instruction}

DOCUMENT:
{document}"#;

pub const UI_BEAUTIFY_SYSTEM: &str =
    "You are a web designer refining the look of an academic homepage. \
    Your ENTIRE response must be the complete modified HTML document. \
    Do NOT use markdown code fences. \
    Do NOT include any commentary.";

/// UI-beautify prompt template. Replace `{style_preference}`, `{document}`.
pub const UI_BEAUTIFY_PROMPT_TEMPLATE: &str = r#"Restyle this academic homepage according to the user's style preference.

Style preference: {style_preference}
- "minimal": generous whitespace, restrained palette, no decoration.
- "modern": contemporary typography, subtle color accents, smooth hover
  states.
- "traditional": classic serif typography, conservative layout, muted
  colors.

Rules:
1. Change CSS (and markup only where styling requires it); keep all content.
2. Keep the page responsive and dependency-free.
3. {full_replacement_instruction}

DOCUMENT:
{document}"#;

pub const SEO_OPTIMIZE_SYSTEM: &str =
    "You are an SEO specialist optimizing an academic homepage for search \
    engines. Your ENTIRE response must be the complete modified HTML document. \
    Do NOT use markdown code fences. \
    Do NOT include any commentary.";

/// SEO prompt template. Replace `{profile_json}`, `{document}`.
pub const SEO_OPTIMIZE_PROMPT_TEMPLATE: &str = r#"Improve the search-engine visibility of this academic homepage.

Apply:
1. A descriptive <title> and meta description.
2. Keyword metadata drawn from the profile below.
3. A clean heading hierarchy (one h1, ordered h2/h3).
4. alt attributes on images.
5. schema.org structured data for a scholar (Person, ScholarlyArticle where
   publications are listed).
6. Canonical link and Open Graph / Twitter Card tags.
7. Keep the visible content and styling unchanged.

{full_replacement_instruction}

USER PROFILE:
{profile_json}

DOCUMENT:
{document}"#;

pub const CODE_REVIEW_SYSTEM: &str =
    "You are a code reviewer checking an academic homepage before it ships. \
    Your ENTIRE response must be the complete corrected HTML document. \
    Do NOT use markdown code fences. \
    Do NOT include any commentary.";

/// Code-review prompt template. Replace `{document}`.
pub const CODE_REVIEW_PROMPT_TEMPLATE: &str = r#"Review this homepage's code and return a corrected version.

Check and fix:
1. HTML syntax errors and unclosed tags.
2. Invalid or non-portable CSS.
3. JavaScript errors and unsafe patterns.
4. Broken responsive behavior.
5. Accessibility problems (labels, contrast, landmarks).
6. Dead or malformed links.
7. Obvious performance waste.

Preserve the existing appearance and behavior; fix problems, do not
redesign. {full_replacement_instruction}

DOCUMENT:
{document}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rewrite_template_ends_with_document_placeholder() {
        for template in [
            TEXT_POLISH_PROMPT_TEMPLATE,
            UI_BEAUTIFY_PROMPT_TEMPLATE,
            SEO_OPTIMIZE_PROMPT_TEMPLATE,
            CODE_REVIEW_PROMPT_TEMPLATE,
        ] {
            assert!(template.trim_end().ends_with("{document}"));
        }
    }

    #[test]
    fn test_parameterized_templates_carry_their_placeholders() {
        assert!(TEXT_POLISH_PROMPT_TEMPLATE.contains("{language_preference}"));
        assert!(UI_BEAUTIFY_PROMPT_TEMPLATE.contains("{style_preference}"));
        assert!(SEO_OPTIMIZE_PROMPT_TEMPLATE.contains("{profile_json}"));
    }

    #[test]
    fn test_every_rewrite_template_demands_a_full_replacement() {
        for template in [
            TEXT_POLISH_PROMPT_TEMPLATE,
            UI_BEAUTIFY_PROMPT_TEMPLATE,
            SEO_OPTIMIZE_PROMPT_TEMPLATE,
            CODE_REVIEW_PROMPT_TEMPLATE,
        ] {
            assert!(template.contains("{full_replacement_instruction}"));
        }
    }
}
