//! Test utilities for API server integration tests

use axum_test::TestServer;
use fitdash::core::http::{create_router, AppState};
use fitdash::db::{FitnessStore, InMemoryStore};
use fitdash::metrics::Metrics;
use std::sync::Arc;
use std::time::Instant;

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
    pub store: Option<Arc<InMemoryStore>>,
}

impl TestApiServer {
    /// Server backed by an empty in-memory store
    pub async fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::build(Some(store))
    }

    /// Server with no store configured
    pub async fn without_store() -> Self {
        Self::build(None)
    }

    fn build(store: Option<Arc<InMemoryStore>>) -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let state = AppState {
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
            store: store
                .clone()
                .map(|s| s as Arc<dyn FitnessStore>),
        };

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self {
            server,
            metrics,
            store,
        }
    }
}
