use axum::http::StatusCode;
use serde_json::json;
use test_utils::{app::TestApp, builder::TestBuilder, context::TestContext, factory};

use crate::server::{router, state::AppState};


/// Builds a database with the news schema and an app serving it.
///
/// The context is returned alongside the app so tests can seed data through the
/// same connection pool.
async fn setup() -> (TestContext, TestApp) {
    let test = TestBuilder::new().with_news_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    (test, TestApp::new(router::app(AppState::new(db))))
}
