#[cfg(test)]
mod integration_tests {
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{
        setup_test_app, setup_test_site, BACKGROUND_BYTES, BUNDLE_JS, INDEX_HTML,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use std::fs;

    #[tokio::test]
    async fn test_health_check() {
        let site = setup_test_site();
        let server = TestServer::new(setup_test_app(&site)).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.frontend, "ready");
    }

    #[tokio::test]
    async fn test_health_reports_missing_frontend() {
        let site = setup_test_site();
        fs::remove_file(site.config.index_path()).unwrap();
        let server = TestServer::new(setup_test_app(&site)).unwrap();

        let body: HealthResponse = server.get("/health").await.json();
        assert_eq!(body.frontend, "missing");
    }

    #[tokio::test]
    async fn test_root_serves_index_page() {
        let site = setup_test_site();
        let server = TestServer::new(setup_test_app(&site)).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), INDEX_HTML);
    }

    #[tokio::test]
    async fn test_bundle_is_served() {
        let site = setup_test_site();
        let server = TestServer::new(setup_test_app(&site)).unwrap();

        let response = server.get("/frontend.js").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), BUNDLE_JS);
    }

    #[tokio::test]
    async fn test_background_image_is_served() {
        let site = setup_test_site();
        let server = TestServer::new(setup_test_app(&site)).unwrap();

        let response = server.get("/bgimg/sky.png").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.as_bytes().as_ref(), BACKGROUND_BYTES);
    }

    #[tokio::test]
    async fn test_missing_background_is_not_found() {
        let site = setup_test_site();
        let server = TestServer::new(setup_test_app(&site)).unwrap();

        let response = server.get("/bgimg/missing.png").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let site = setup_test_site();
        let server = TestServer::new(setup_test_app(&site)).unwrap();

        let response = server.get("/forecast/london").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), INDEX_HTML);
    }

    #[tokio::test]
    async fn test_forecast_api_is_not_hosted_here() {
        let site = setup_test_site();
        let server = TestServer::new(setup_test_app(&site)).unwrap();

        let response = server
            .post("/api/forecast?days=7")
            .json(&serde_json::json!({"city": "London"}))
            .await;

        // Static serving only answers GET and HEAD.
        assert_ne!(response.status_code(), StatusCode::OK);
    }
}
