use futures::future::join_all;
use tracing::info;

use crate::models::posting::{LabeledPosting, Posting, Sponsorship};
use crate::screening::classifier::{YesNoClassifier, SPONSORSHIP};

/// Labels every posting with a sponsorship estimate.
///
/// All classifications run concurrently; output position `i` is the label for
/// input position `i`.
pub async fn label_sponsorship(
    postings: Vec<Posting>,
    classifier: &dyn YesNoClassifier,
) -> Vec<LabeledPosting> {
    let answers = join_all(
        postings
            .iter()
            .map(|posting| SPONSORSHIP.ask(classifier, posting)),
    )
    .await;

    let labeled: Vec<LabeledPosting> = postings
        .into_iter()
        .zip(answers)
        .map(|(posting, likely)| LabeledPosting {
            posting,
            sponsorship: Sponsorship::from(likely),
        })
        .collect();

    info!(
        "Sponsorship labels: {} yes / {} total",
        labeled
            .iter()
            .filter(|l| l.sponsorship == Sponsorship::Yes)
            .count(),
        labeled.len()
    );
    labeled
}
