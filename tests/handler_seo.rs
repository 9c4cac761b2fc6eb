mod common;

use axum_test::TestServer;
use trilium_blog::routes::router;
use wiremock::MockServer;

#[tokio::test]
async fn test_sitemap_lists_published_articles() {
    let trilium = MockServer::start().await;
    common::mount_search(
        &trilium,
        vec![
            common::blog_note("n1", "First"),
            common::private_note("secret"),
            common::blog_note("n2", "Second"),
        ],
    )
    .await;
    let server = TestServer::new(router(common::create_test_state(&trilium))).unwrap();

    let response = server.get("/sitemap.xml").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/xml");

    let xml = response.text();
    assert!(xml.contains("<loc>https://blog.example.com/post/n1</loc>"));
    assert!(xml.contains("<loc>https://blog.example.com/post/n2</loc>"));
    assert!(!xml.contains("secret"));
}

#[tokio::test]
async fn test_robots_points_at_sitemap() {
    let trilium = MockServer::start().await;
    let server = TestServer::new(router(common::create_test_state(&trilium))).unwrap();

    let response = server.get("/robots.txt").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("User-agent: *"));
    assert!(body.contains("Allow: /"));
    assert!(body.contains("Sitemap: https://blog.example.com/sitemap.xml"));
}
