//! Test doubles shared across module tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::config::Config;
use crate::models::posting::Posting;
use crate::quota::guard::QuotaGuard;
use crate::quota::ledger::{InMemoryLedger, QuotaRecord};
use crate::screening::classifier::YesNoClassifier;
use crate::search::{JobSearchProvider, SearchError};
use crate::state::AppState;

pub fn posting(title: &str, company: &str) -> Posting {
    Posting {
        title: title.to_string(),
        company: company.to_string(),
        loc: "New York, NY, United States".to_string(),
        city: "New York".to_string(),
        country: "United States".to_string(),
        description: None,
        date_posted: Some("2 days ago".to_string()),
        days_ago: Some("2".to_string()),
        link: Some("https://jobs.example/apply".to_string()),
    }
}

type Script = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Classifier whose answer is computed from the prompt text.
pub struct ScriptedClassifier {
    script: Script,
    calls: AtomicUsize,
}

impl ScriptedClassifier {
    pub fn new(script: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        Self {
            script: Box::new(script),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn always(answer: bool) -> Self {
        Self::new(move |_| answer)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl YesNoClassifier for ScriptedClassifier {
    async fn classify(&self, prompt: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.script)(prompt)
    }
}

/// Search provider returning a fixed result set, or failing.
pub struct FakeSearch {
    result: Result<Vec<Posting>, u16>,
    calls: AtomicUsize,
}

impl FakeSearch {
    pub fn returning(postings: Vec<Posting>) -> Self {
        Self {
            result: Ok(postings),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            result: Err(status),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobSearchProvider for FakeSearch {
    async fn search(&self, _keyword: &str, _location: &str) -> Result<Vec<Posting>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.result {
            Ok(postings) => Ok(postings.clone()),
            Err(status) => Err(SearchError::Api {
                status: *status,
                message: "upstream unavailable".to_string(),
            }),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        serpapi_key: "serp-test".to_string(),
        serpapi_base_url: "http://127.0.0.1:9".to_string(),
        gemini_api_key: "gemini-test".to_string(),
        gemini_api_base: "http://127.0.0.1:9".to_string(),
        quota_log_path: "unused.log".into(),
        daily_search_quota: 25,
        max_candidates: 15,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

/// Ledger pre-filled with `count` searches made today.
pub fn ledger_with_today(count: usize) -> Arc<InMemoryLedger> {
    let now = Utc::now();
    let records: Vec<_> = (0..count)
        .map(|i| QuotaRecord::new(now, &format!("search {i}"), "New York"))
        .collect();
    Arc::new(InMemoryLedger::with_records(&records))
}

pub fn test_state(
    ledger: Arc<InMemoryLedger>,
    search: Arc<FakeSearch>,
    classifier: Arc<ScriptedClassifier>,
) -> AppState {
    let config = test_config();
    AppState {
        quota: Arc::new(QuotaGuard::new(ledger, config.daily_search_quota)),
        search,
        classifier,
        config,
    }
}
