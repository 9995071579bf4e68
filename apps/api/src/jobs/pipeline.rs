//! Search pipeline: quota → provider search → relevance filter → sponsorship labels.

use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::models::posting::LabeledPosting;
use crate::screening::relevance::filter_relevant;
use crate::screening::sponsorship::label_sponsorship;
use crate::state::AppState;

/// Runs one screened job search.
///
/// The quota is checked and recorded before any upstream call. A provider
/// failure aborts the whole search; no partial results are returned.
pub async fn run_search(
    state: &AppState,
    keyword: &str,
    location: &str,
) -> Result<Vec<LabeledPosting>, AppError> {
    state
        .quota
        .clone()
        .admit_blocking(keyword.to_string(), location.to_string(), Utc::now())
        .await?;

    let raw = state.search.search(keyword, location).await?;
    let fetched = raw.len();
    let candidates: Vec<_> = raw
        .into_iter()
        .take(state.config.max_candidates)
        .collect();
    info!(
        "Fetched {fetched} postings, screening {} for {keyword:?} in {location:?}",
        candidates.len()
    );

    let relevant = filter_relevant(candidates, state.classifier.as_ref()).await;
    Ok(label_sponsorship(relevant, state.classifier.as_ref()).await)
}
