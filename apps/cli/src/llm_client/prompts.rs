// Cross-cutting prompt fragments. Each pipeline step that talks to the LLM
// defines its own prompts.rs alongside it; this file holds what they share.

/// System prompt fragment that enforces JSON-only output. Appended to the
/// role-specific system prompt of every step that expects JSON back.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction interpolated into every whole-document rewrite prompt.
pub const FULL_REPLACEMENT_INSTRUCTION: &str = "\
    Return the COMPLETE modified document, not a diff or a fragment. \
    Everything you do not change must be reproduced verbatim.";
