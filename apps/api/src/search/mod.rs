//! Job search provider abstraction.
//!
//! `AppState` holds an `Arc<dyn JobSearchProvider>`; production uses `SerpApiClient`.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::posting::Posting;

pub mod dates;
pub mod location;
pub mod serpapi;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Fetches raw postings for a keyword/location pair. An empty result is `Ok(vec![])`.
#[async_trait]
pub trait JobSearchProvider: Send + Sync {
    async fn search(&self, keyword: &str, location: &str) -> Result<Vec<Posting>, SearchError>;
}
