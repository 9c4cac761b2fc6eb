mod common;

use serde_json::json;
use std::sync::Arc;
use trilium_blog::client::{
    BlogApi, BlogInfoStore, ClientApp, ClientConfig, Document, FetchError, HeadlessDocument,
    HttpBlogApi, RouteIdentity,
};
use trilium_blog::domain::entities::BlogInfo;
use trilium_blog::routes::router;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_for(server: &MockServer) -> (BlogInfoStore, Arc<HeadlessDocument>) {
    let api = HttpBlogApi::new(&server.uri()).unwrap();
    let document = Arc::new(HeadlessDocument::new());
    (BlogInfoStore::new(Arc::new(api), document.clone()), document)
}

async fn mount_info(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/info"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_sends_cache_buster() {
    let server = MockServer::start().await;
    mount_info(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "blogName": "A", "blogTitle": "B" })),
    )
    .await;
    let (store, _) = store_for(&server);

    store.fetch_blog_info().await;
    store.fetch_blog_info().await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    let stamps: Vec<i64> = requests
        .iter()
        .map(|r| {
            let (_, t) = r.url.query_pairs().find(|(k, _)| k == "t").unwrap();
            t.parse().unwrap()
        })
        .collect();
    assert!(stamps[0] > 0);
    assert!(stamps[1] > stamps[0]);
}

#[tokio::test]
async fn test_fetch_success_sets_state_and_title() {
    let server = MockServer::start().await;
    mount_info(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({ "blogName": "Acme", "blogTitle": "Acme Blog" })),
    )
    .await;
    let (store, document) = store_for(&server);

    store.fetch_blog_info().await;

    assert_eq!(store.blog_info(), BlogInfo::new("Acme", "Acme Blog"));
    assert_eq!(document.title(), "Acme Blog");
}

#[tokio::test]
async fn test_server_error_leaves_state_unchanged() {
    let server = MockServer::start().await;
    mount_info(&server, ResponseTemplate::new(500)).await;
    let (store, document) = store_for(&server);

    store.fetch_blog_info().await;

    assert_eq!(store.blog_info(), BlogInfo::default());
    assert_eq!(document.title(), "");
}

#[tokio::test]
async fn test_malformed_body_leaves_state_unchanged() {
    let server = MockServer::start().await;
    mount_info(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "blogName": "only name" })),
    )
    .await;
    let (store, document) = store_for(&server);

    store.fetch_blog_info().await;

    assert_eq!(store.blog_info(), BlogInfo::default());
    assert_eq!(document.title(), "");
}

#[tokio::test]
async fn test_error_classes() {
    let server = MockServer::start().await;
    mount_info(&server, ResponseTemplate::new(503)).await;
    let api = HttpBlogApi::new(&server.uri()).unwrap();

    assert!(matches!(
        api.fetch_info(1).await,
        Err(FetchError::Status(503))
    ));

    let unreachable = HttpBlogApi::new("http://127.0.0.1:1").unwrap();
    assert!(matches!(
        unreachable.fetch_info(1).await,
        Err(FetchError::Transport(_))
    ));
}

#[tokio::test]
async fn test_client_boots_against_server() {
    let trilium = MockServer::start().await;
    let app = router(common::create_test_state(&trilium));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let api = HttpBlogApi::new(&format!("http://{addr}")).unwrap();
    let document: Arc<dyn Document> = Arc::new(HeadlessDocument::new());

    let client = ClientApp::boot(
        ClientConfig::default(),
        Arc::new(api),
        document.clone(),
        "/post/n1",
    )
    .await
    .unwrap();

    let route = client.current_route().unwrap();
    assert_eq!(route.identity, RouteIdentity::Article);
    assert_eq!(route.note_id(), Some("n1"));
    assert_eq!(client.store().blog_info().blog_name, "Acme");
    assert_eq!(document.title(), "Acme Blog");
}
