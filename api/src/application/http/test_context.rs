use std::sync::Arc;

use axum_test::TestServer;
use test_context::AsyncTestContext;

use crate::{
    application::http::server::http_server::{api_router, state},
    args::Args,
};

/// A fresh app over the seeded catalog for each test.
pub struct TestApp {
    pub server: TestServer,
}

impl AsyncTestContext for TestApp {
    async fn setup() -> Self {
        let args = Arc::new(Args::default());
        let app_state = state(args).await.expect("failed to build app state");
        let server = TestServer::new(api_router(app_state)).expect("failed to start test server");

        Self { server }
    }
}
