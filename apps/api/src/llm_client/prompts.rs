// Shared prompt fragments for the text-completions API.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Marker that opens a human turn. Completions prompts must start with it.
pub const HUMAN_PROMPT: &str = "\n\nHuman:";

/// Marker that opens the assistant turn. Anything after it is a prefill.
pub const AI_PROMPT: &str = "\n\nAssistant:";

/// Instruction fragment that forbids prose around a JSON array.
pub const JSON_ARRAY_ONLY: &str = "The output MUST be a valid JSON array. \
    Do not include any other text, explanation or markdown fences outside the JSON array itself.";
