use std::sync::Arc;

use crate::config::Config;
use crate::quota::guard::QuotaGuard;
use crate::screening::classifier::YesNoClassifier;
use crate::search::JobSearchProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub quota: Arc<QuotaGuard>,
    /// Pluggable search backend. Default: SerpApiClient.
    pub search: Arc<dyn JobSearchProvider>,
    /// Yes/no classifier used by both screening passes. Default: LlmClassifier.
    pub classifier: Arc<dyn YesNoClassifier>,
    pub config: Config,
}
