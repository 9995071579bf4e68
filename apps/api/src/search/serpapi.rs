//! SerpApi Google Jobs adapter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::posting::Posting;
use crate::search::dates::days_ago;
use crate::search::location::split_location;
use crate::search::{JobSearchProvider, SearchError};

pub const SERPAPI_BASE_URL: &str = "https://serpapi.com";
const ENGINE: &str = "google_jobs";
const LANGUAGE: &str = "en";

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    jobs_results: Option<Vec<SerpJob>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SerpJob {
    title: Option<String>,
    company_name: Option<String>,
    location: Option<String>,
    description: Option<String>,
    detected_extensions: Option<DetectedExtensions>,
    related_links: Option<Vec<RelatedLink>>,
    apply_link: Option<String>,
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetectedExtensions {
    posted_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelatedLink {
    link: Option<String>,
}

impl SerpJob {
    fn into_posting(self, now: DateTime<Utc>) -> Posting {
        let loc = self.location.unwrap_or_default();
        let (city, country) = split_location(&loc);
        let posted_at = self
            .detected_extensions
            .and_then(|ext| ext.posted_at)
            .unwrap_or_default();
        let link = self
            .related_links
            .and_then(|links| links.into_iter().next())
            .and_then(|first| first.link)
            .into_iter()
            .chain(self.apply_link)
            .chain(self.link)
            .find(|l| !l.is_empty());

        Posting {
            title: self.title.unwrap_or_default(),
            company: self.company_name.unwrap_or_default(),
            city,
            country,
            loc,
            description: self
                .description
                .as_deref()
                .and_then(|d| d.lines().next())
                .filter(|first| !first.is_empty())
                .map(str::to_string),
            days_ago: Some(days_ago(&posted_at, now)),
            date_posted: Some(posted_at).filter(|p| !p.is_empty()),
            link,
        }
    }
}

/// The request URL carries `api_key`, so it must not reach error text or logs.
fn redact_url(err: reqwest::Error) -> SearchError {
    SearchError::Http(err.without_url())
}

/// Calls the SerpApi `google_jobs` engine.
#[derive(Clone)]
pub struct SerpApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SerpApiClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key,
            base_url,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search.json", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl JobSearchProvider for SerpApiClient {
    async fn search(&self, keyword: &str, location: &str) -> Result<Vec<Posting>, SearchError> {
        debug!("Querying SerpApi: q={keyword:?} location={location:?}");

        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("engine", ENGINE),
                ("q", keyword),
                ("location", location),
                ("hl", LANGUAGE),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(redact_url)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<SerpApiResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(body);
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SerpApiResponse = response.json().await.map_err(redact_url)?;
        let Some(jobs) = body.jobs_results else {
            if let Some(message) = body.error {
                warn!("SerpApi returned no jobs: {message}");
            }
            return Ok(Vec::new());
        };

        let now = Utc::now();
        let postings: Vec<Posting> = jobs.into_iter().map(|job| job.into_posting(now)).collect();
        debug!("SerpApi returned {} postings", postings.len());
        Ok(postings)
    }
}
