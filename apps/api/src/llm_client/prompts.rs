// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; this file holds the pieces they have in common.

/// Instruction that pins a classification answer to a bare "Yes" or "No".
pub const YES_NO_ONLY: &str = r#"Respond ONLY with "Yes" or "No"."#;

/// Posting block appended to every screening prompt.
/// Placeholders: `{title}`, `{company}`, `{location}`, `{description}`.
pub const POSTING_BLOCK: &str = "Title: {title}
Company: {company}
Location: {location}
Job Description: {description}";
