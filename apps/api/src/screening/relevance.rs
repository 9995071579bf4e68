use tracing::info;

use crate::models::posting::Posting;
use crate::screening::classifier::{YesNoClassifier, RELEVANCE};

/// Keeps the postings the classifier judges relevant, in input order.
///
/// One call at a time: each classification completes before the next is sent.
pub async fn filter_relevant(
    postings: Vec<Posting>,
    classifier: &dyn YesNoClassifier,
) -> Vec<Posting> {
    let candidates = postings.len();
    let mut relevant = Vec::with_capacity(candidates);

    for posting in postings {
        if RELEVANCE.ask(classifier, &posting).await {
            relevant.push(posting);
        }
    }

    info!("Relevance filter kept {}/{} postings", relevant.len(), candidates);
    relevant
}
