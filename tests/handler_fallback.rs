mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use trilium_blog::routes::router;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn make_server(trilium: &MockServer) -> TestServer {
    TestServer::new(router(common::create_test_state(trilium))).unwrap()
}

#[tokio::test]
async fn test_unknown_api_path_is_json_not_found() {
    let trilium = MockServer::start().await;
    let server = make_server(&trilium).await;

    let response = server.get("/api/nope").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "message": "Not found" })
    );
}

#[tokio::test]
async fn test_page_paths_serve_index() {
    let trilium = MockServer::start().await;
    let server = make_server(&trilium).await;

    for url in ["/", "/post/abc123", "/some/unknown/page"] {
        let response = server.get(url).await;

        response.assert_status_ok();
        assert!(response.text().contains(r#"<div id="app"></div>"#));
    }
}

#[tokio::test]
async fn test_assets_are_served() {
    let trilium = MockServer::start().await;
    let server = make_server(&trilium).await;

    let response = server.get("/assets/app.js").await;

    response.assert_status_ok();
    assert!(response.text().contains("trilium blog"));
}

#[tokio::test]
async fn test_assets_prefer_gzip_variant() {
    let trilium = MockServer::start().await;
    let server = make_server(&trilium).await;

    let response = server
        .get("/assets/app.js")
        .add_header("Accept-Encoding", "gzip")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("content-encoding"), "gzip");
}

#[tokio::test]
async fn test_health_with_reachable_trilium() {
    let trilium = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/etapi/app-info"))
        .and(header("Authorization", common::TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "appVersion": "0.63.7" })))
        .mount(&trilium)
        .await;
    let server = make_server(&trilium).await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["trilium"]["status"], "ok");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_with_unreachable_trilium() {
    let trilium = MockServer::start().await;
    let server = make_server(&trilium).await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["trilium"]["status"], "error");
}
