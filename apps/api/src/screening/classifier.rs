//! Yes/no classification: one capability behind both screening passes.
//!
//! A `Rubric` turns a posting into a prompt; a `YesNoClassifier` answers it.
//! `AppState` holds an `Arc<dyn YesNoClassifier>`, `LlmClassifier` in production.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::llm_client::prompts::{POSTING_BLOCK, YES_NO_ONLY};
use crate::llm_client::LlmClient;
use crate::models::posting::Posting;
use crate::screening::prompts::{RELEVANCE_TEMPLATE, SPONSORSHIP_TEMPLATE};

/// Answers a yes/no prompt. Any failure or ambiguous answer is `false`.
#[async_trait]
pub trait YesNoClassifier: Send + Sync {
    async fn classify(&self, prompt: &str) -> bool;
}

/// A named prompt template rendered once per posting.
#[derive(Debug, Clone, Copy)]
pub struct Rubric {
    pub name: &'static str,
    template: &'static str,
}

pub static RELEVANCE: Rubric = Rubric {
    name: "relevance",
    template: RELEVANCE_TEMPLATE,
};

pub static SPONSORSHIP: Rubric = Rubric {
    name: "sponsorship",
    template: SPONSORSHIP_TEMPLATE,
};

impl Rubric {
    pub fn render(&self, posting: &Posting) -> String {
        let skeleton = self
            .template
            .replace("{yes_no}", YES_NO_ONLY)
            .replace("{posting}", POSTING_BLOCK);
        fill_placeholders(
            &skeleton,
            &[
                ("title", posting.title.as_str()),
                ("company", posting.company.as_str()),
                ("location", posting.loc.as_str()),
                ("description", posting.description.as_deref().unwrap_or("")),
            ],
        )
    }

    /// Renders the rubric for `posting` and asks `classifier`.
    pub async fn ask(&self, classifier: &dyn YesNoClassifier, posting: &Posting) -> bool {
        let answer = classifier.classify(&self.render(posting)).await;
        debug!(
            rubric = self.name,
            answer,
            "Classified {:?} at {:?}",
            posting.title,
            posting.company
        );
        answer
    }
}

/// Substitutes `{key}` placeholders in a single pass, so values that happen to
/// contain placeholder text are inserted verbatim.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let hit = values.iter().find_map(|(key, value)| {
            tail.strip_prefix('{')
                .and_then(|t| t.strip_prefix(key))
                .and_then(|t| t.strip_prefix('}'))
                .map(|after| (*value, after))
        });
        match hit {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// An answer is affirmative iff it starts with "yes", ignoring case and surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with("yes")
}

/// Classifier backed by the Gemini client.
pub struct LlmClassifier(pub LlmClient);

#[async_trait]
impl YesNoClassifier for LlmClassifier {
    async fn classify(&self, prompt: &str) -> bool {
        match self.0.call_text(prompt).await {
            Ok(answer) => is_affirmative(&answer),
            Err(e) => {
                warn!("Classification call failed, treating as \"No\": {e}");
                false
            }
        }
    }
}
