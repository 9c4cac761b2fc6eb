#![allow(dead_code)]

use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use trilium_blog::config::Config;
use trilium_blog::infrastructure::cache::NullCache;
use trilium_blog::state::AppState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-etapi-token";

pub fn fixture_dist() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/dist")
}

pub fn test_config(trilium_url: &str) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        trilium_api_url: trilium_url.to_string(),
        trilium_token: TOKEN.to_string(),
        trilium_timeout_seconds: 5,
        articles_per_page: 2,
        blog_name: "Acme".to_string(),
        blog_title: "Acme Blog".to_string(),
        domain: "blog.example.com".to_string(),
        site_url: "https://blog.example.com".to_string(),
        image_proxy_url: None,
        redis_url: None,
        cache_ttl_seconds: 60,
        frontend_dist: fixture_dist(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
    }
}

/// State wired to a Trilium mock, with caching disabled.
pub fn create_test_state(trilium: &MockServer) -> AppState {
    let config = test_config(&trilium.uri());
    AppState::from_config(&config, Arc::new(NullCache::new())).unwrap()
}

pub fn blog_note(id: &str, title: &str) -> Value {
    json!({
        "noteId": id,
        "title": title,
        "type": "text",
        "mime": "text/html",
        "dateModified": "2024-05-01 12:00:00.000+0000",
        "utcDateModified": "2024-05-01 12:00:00.000Z",
        "attributes": [
            { "attributeId": format!("{id}-blog"), "type": "label", "name": "blog", "value": "true" }
        ]
    })
}

pub fn private_note(id: &str) -> Value {
    json!({
        "noteId": id,
        "title": "Private",
        "type": "text",
        "mime": "text/html",
        "dateModified": "2024-05-01 12:00:00.000+0000",
        "attributes": []
    })
}

pub async fn mount_search(trilium: &MockServer, notes: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/etapi/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": notes })))
        .mount(trilium)
        .await;
}

pub async fn mount_note(trilium: &MockServer, note: Value, content: &str) {
    let id = note["noteId"].as_str().unwrap().to_string();

    Mock::given(method("GET"))
        .and(path(format!("/etapi/notes/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(note))
        .mount(trilium)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/etapi/notes/{id}/content")))
        .respond_with(ResponseTemplate::new(200).set_body_string(content))
        .mount(trilium)
        .await;
}
