// Posting screening: relevance filtering and sponsorship labeling.
// Both passes share one yes/no classifier; only the rubric differs.
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod classifier;
pub mod prompts;
pub mod relevance;
pub mod sponsorship;
