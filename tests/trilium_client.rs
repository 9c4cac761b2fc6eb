use serde_json::json;
use std::time::Duration;
use trilium_blog::domain::note_source::{NoteSource, SourceError};
use trilium_blog::infrastructure::trilium::TriliumClient;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "etapi-secret";

fn client(server: &MockServer) -> TriliumClient {
    TriliumClient::new(&server.uri(), TOKEN, Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn test_search_sends_token_and_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/etapi/notes"))
        .and(header("Authorization", TOKEN))
        .and(query_param("search", "#blog=true"))
        .and(query_param("orderBy", "utcDateModified"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "noteId": "n1", "title": "First", "type": "text" },
                { "noteId": "n2", "title": "Second", "type": "code" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let notes = client(&server).search_blog_notes().await.unwrap();

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].note_id, "n1");
    assert_eq!(notes[1].kind, "code");
}

#[tokio::test]
async fn test_note_and_content() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/etapi/notes/n1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "noteId": "n1",
            "title": "First",
            "type": "text",
            "dateModified": "2024-05-01 12:00:00.000+0000",
            "attributes": [{ "type": "label", "name": "blog", "value": "true" }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/etapi/notes/n1/content"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>Body</p>"))
        .mount(&server)
        .await;

    let client = client(&server);

    let note = client.note("n1").await.unwrap();
    assert!(note.is_blog_post());
    assert_eq!(note.date_modified, "2024-05-01 12:00:00.000+0000");

    let content = client.note_content("n1").await.unwrap();
    assert_eq!(content, "<p>Body</p>");
}

#[tokio::test]
async fn test_missing_note_is_status_404() {
    let server = MockServer::start().await;

    let err = client(&server).note("missing").await.unwrap_err();

    assert!(matches!(err, SourceError::Status(404)));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/etapi/attachments/att1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).attachment("att1").await.unwrap_err();

    assert!(matches!(err, SourceError::Decode(_)));
}

#[tokio::test]
async fn test_slow_server_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/etapi/notes/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let err = client(&server).note("slow").await.unwrap_err();

    assert!(matches!(err, SourceError::Transport(_)));
}

#[tokio::test]
async fn test_attachment_content_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/etapi/attachments/att1/content"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8, 1, 2, 255]))
        .mount(&server)
        .await;

    let bytes = client(&server).attachment_content("att1").await.unwrap();

    assert_eq!(bytes, vec![0u8, 1, 2, 255]);
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;
    let client = client(&server);

    assert!(!client.health_check().await);

    Mock::given(method("GET"))
        .and(path("/etapi/app-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assert!(client.health_check().await);
}
