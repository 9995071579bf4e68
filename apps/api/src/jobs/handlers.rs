//! Axum route handlers for the job search API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::jobs::pipeline::run_search;
use crate::models::posting::LabeledPosting;
use crate::quota::guard::QuotaUsage;
use crate::state::AppState;

pub const DEFAULT_KEYWORD: &str = "Data Science Intern";
pub const DEFAULT_LOCATION: &str = "New York";

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub location: Option<String>,
}

impl SearchParams {
    /// Missing or empty parameters fall back to the defaults; anything else,
    /// whitespace included, is passed through as given.
    fn keyword(&self) -> &str {
        non_empty(self.keyword.as_deref()).unwrap_or(DEFAULT_KEYWORD)
    }

    fn location(&self) -> &str {
        non_empty(self.location.as_deref()).unwrap_or(DEFAULT_LOCATION)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// GET /api/scrape?keyword=&location=
///
/// Screened search results, each labeled with a sponsorship estimate.
pub async fn handle_scrape(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<LabeledPosting>>, AppError> {
    let results = run_search(&state, params.keyword(), params.location()).await?;
    Ok(Json(results))
}

/// GET /api/quota
pub async fn handle_quota(State(state): State<AppState>) -> Result<Json<QuotaUsage>, AppError> {
    let usage = state
        .quota
        .clone()
        .usage_blocking(Utc::now().date_naive())
        .await?;
    Ok(Json(usage))
}
