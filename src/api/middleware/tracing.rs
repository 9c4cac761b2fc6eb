//! Request spans for the blog server.
//!
//! Every request gets an `INFO` span carrying a `kind` field, so API calls,
//! attachment images, front-end assets, SEO documents and client-routed page
//! loads can be told apart in the logs without parsing the URI:
//!
//! ```text
//! INFO request{method=GET uri=/api/articles?page=2 kind=api}: finished processing request latency=12 ms status=200
//! INFO request{method=GET uri=/attachments/att123 kind=attachment}: finished processing request latency=3 ms status=200
//! INFO request{method=GET uri=/post/abc123 kind=page}: finished processing request latency=1 ms status=200
//! ```

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span};

/// Builds the `request` span with the method, URI and request kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            kind = request_kind(request.uri().path()),
        )
    }
}

/// Classifies a request path by the part of the server that answers it.
pub fn request_kind(path: &str) -> &'static str {
    match path {
        "/api" => "api",
        "/health" => "health",
        "/sitemap.xml" | "/robots.txt" => "seo",
        "/favicon.ico" | "/logo.png" => "asset",
        _ if path.starts_with("/api/") => "api",
        _ if path.starts_with("/attachments/") => "attachment",
        _ if path.starts_with("/assets/") => "asset",
        _ => "page",
    }
}

/// Tracing layer applied to the whole server router.
///
/// Responses are logged at `INFO` with latency in milliseconds; 5xx
/// responses are additionally reported as failures.
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    RequestSpan,
    DefaultOnRequest,
    DefaultOnResponse,
> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_kind() {
        assert_eq!(request_kind("/api/articles"), "api");
        assert_eq!(request_kind("/api"), "api");
        assert_eq!(request_kind("/attachments/att123"), "attachment");
        assert_eq!(request_kind("/assets/index-abc.js"), "asset");
        assert_eq!(request_kind("/favicon.ico"), "asset");
        assert_eq!(request_kind("/sitemap.xml"), "seo");
        assert_eq!(request_kind("/health"), "health");
        assert_eq!(request_kind("/post/abc123"), "page");
        assert_eq!(request_kind("/apiary"), "page");
    }
}
