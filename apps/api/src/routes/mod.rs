pub mod health;

use axum::{routing::get, Router};

use crate::jobs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/scrape", get(handlers::handle_scrape))
        .route("/api/quota", get(handlers::handle_quota))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::testing::{ledger_with_today, posting, test_state, FakeSearch, ScriptedClassifier};

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let state = test_state(
            ledger_with_today(0),
            Arc::new(FakeSearch::returning(vec![])),
            Arc::new(ScriptedClassifier::always(false)),
        );
        let resp = build_router(state)
            .oneshot(get_request("/health"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_scrape_returns_labeled_postings() {
        let ledger = ledger_with_today(20);
        let search = Arc::new(FakeSearch::returning(vec![
            posting("Strategy Intern", "BCG"),
            posting("Cashier", "Corner Store"),
            posting("Quant Intern", "Jane Street"),
        ]));
        let classifier = Arc::new(ScriptedClassifier::new(|prompt| {
            if prompt.contains("sponsor work visas") {
                prompt.contains("Company: Jane Street")
            } else {
                !prompt.contains("Company: Corner Store")
            }
        }));
        let router = build_router(test_state(ledger.clone(), search, classifier));

        let resp = router
            .oneshot(get_request(
                "/api/scrape?keyword=Quant%20Intern&location=New%20York",
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["title"], "Strategy Intern");
        assert_eq!(rows[0]["sponsorship"], "No");
        assert_eq!(rows[1]["company"], "Jane Street");
        assert_eq!(rows[1]["sponsorship"], "Yes");
        assert_eq!(rows[1]["daysAgo"], "2");
        assert_eq!(ledger.record_count(), 21);
    }

    #[tokio::test]
    async fn test_scrape_without_params_uses_defaults() {
        let ledger = ledger_with_today(0);
        let state = test_state(
            ledger.clone(),
            Arc::new(FakeSearch::returning(vec![])),
            Arc::new(ScriptedClassifier::always(true)),
        );

        let resp = build_router(state)
            .oneshot(get_request("/api/scrape"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!([]));
        assert_eq!(ledger.record_count(), 1);
    }

    #[tokio::test]
    async fn test_scrape_over_quota_is_429() {
        let search = Arc::new(FakeSearch::returning(vec![posting("A", "B")]));
        let state = test_state(
            ledger_with_today(25),
            search.clone(),
            Arc::new(ScriptedClassifier::always(true)),
        );

        let resp = build_router(state)
            .oneshot(get_request("/api/scrape?keyword=x&location=y"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            body_json(resp).await,
            json!({ "error": "Daily search quota reached. Try again tomorrow." })
        );
        assert_eq!(search.calls(), 0);
    }

    #[tokio::test]
    async fn test_scrape_provider_failure_is_500() {
        let state = test_state(
            ledger_with_today(0),
            Arc::new(FakeSearch::failing(502)),
            Arc::new(ScriptedClassifier::always(true)),
        );

        let resp = build_router(state)
            .oneshot(get_request("/api/scrape?keyword=x"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(resp).await,
            json!({ "error": "Internal server error" })
        );
    }

    #[tokio::test]
    async fn test_quota_endpoint_reports_usage() {
        let state = test_state(
            ledger_with_today(4),
            Arc::new(FakeSearch::returning(vec![])),
            Arc::new(ScriptedClassifier::always(true)),
        );

        let resp = build_router(state)
            .oneshot(get_request("/api/quota"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["used"], 4);
        assert_eq!(body["limit"], 25);
        assert_eq!(body["remaining"], 21);
    }
}
