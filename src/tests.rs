#[cfg(test)]
mod integration_tests {
    use crate::schemas::{ErrorResponse, HealthResponse};
    use crate::test_utils::test_utils::{
        setup_test_app, spawn_stub_upstream, unreachable_upstream,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::SectorPerformance;

    const SECTORS_BODY: &str = r#"[
        {"sector":"Technology","changesPercentage":"1.23%"},
        {"sector":"Energy","changesPercentage":"-0.45%"},
        {"sector":"Utilities","changesPercentage":"0.00%"}
    ]"#;

    #[tokio::test]
    async fn test_health_check() {
        let upstream = spawn_stub_upstream(StatusCode::OK, "[]").await;
        let server = TestServer::new(setup_test_app(upstream)).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_sectors_relays_upstream_payload_unchanged() {
        let upstream = spawn_stub_upstream(StatusCode::OK, SECTORS_BODY).await;
        let server = TestServer::new(setup_test_app(upstream)).unwrap();

        let response = server.get("/api/v1/sectors").await;

        response.assert_status(StatusCode::OK);
        let records: Vec<SectorPerformance> = response.json();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].sector, "Technology");
        assert_eq!(records[0].changes_percentage, "1.23%");
        assert_eq!(records[1].sector, "Energy");
        assert_eq!(records[1].changes_percentage, "-0.45%");
    }

    #[tokio::test]
    async fn test_sectors_success_advises_one_hour_revalidation() {
        let upstream = spawn_stub_upstream(StatusCode::OK, SECTORS_BODY).await;
        let server = TestServer::new(setup_test_app(upstream)).unwrap();

        let response = server.get("/api/v1/sectors").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.header("cache-control"), "public, max-age=3600");
    }

    #[tokio::test]
    async fn test_sectors_relays_upstream_rejection_status() {
        let upstream =
            spawn_stub_upstream(StatusCode::SERVICE_UNAVAILABLE, "upstream maintenance").await;
        let server = TestServer::new(setup_test_app(upstream)).unwrap();

        let response = server.get("/api/v1/sectors").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Failed to fetch from FMP");
    }

    #[tokio::test]
    async fn test_sectors_unreachable_upstream_is_500_with_message() {
        let upstream = unreachable_upstream().await;
        let server = TestServer::new(setup_test_app(upstream)).unwrap();

        let response = server.get("/api/v1/sectors").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert!(!body.error.is_empty());
    }

    #[tokio::test]
    async fn test_sectors_malformed_upstream_body_is_500() {
        let upstream = spawn_stub_upstream(StatusCode::OK, "this is not json").await;
        let server = TestServer::new(setup_test_app(upstream)).unwrap();

        let response = server.get("/api/v1/sectors").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert!(body.error.starts_with("malformed sector payload"));
    }

    #[tokio::test]
    async fn test_sectors_forwards_empty_array_as_success() {
        let upstream = spawn_stub_upstream(StatusCode::OK, "[]").await;
        let server = TestServer::new(setup_test_app(upstream)).unwrap();

        let response = server.get("/api/v1/sectors").await;

        // The proxy stays a faithful relay; the empty-payload policy
        // belongs to the view.
        response.assert_status(StatusCode::OK);
        let records: Vec<SectorPerformance> = response.json();
        assert!(records.is_empty());
    }
}
