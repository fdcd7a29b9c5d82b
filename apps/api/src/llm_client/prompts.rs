// Shared prompt fragments. Each service that calls the LLM keeps its own
// prompts.rs alongside it; only cross-cutting instructions live here.

/// Appended to every structured-output prompt.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
