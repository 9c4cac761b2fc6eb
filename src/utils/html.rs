//! Rewriting of note HTML before it is served to readers.

use std::borrow::Cow;
use std::sync::LazyLock;

use ammonia::Builder;
use regex::Regex;

/// Trilium's in-note image link: `api/attachments/<id>/image/<name>`.
static ATTACHMENT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/?api/attachments/([^/]+)/image/.+$").expect("static regex")
});

/// Elements dropped together with everything inside them.
const DROPPED_WITH_CONTENT: [&str; 4] = ["script", "style", "iframe", "title"];

/// Prepares note content for the public article view.
///
/// The note is parsed as an HTML fragment and re-serialized through an
/// allow-list of elements and attributes, so:
/// - `<script>`, `<style>` and `<iframe>` are removed with their content,
///   inline `on*` handlers are dropped and URLs with non-web schemes
///   (`javascript:` and friends) lose their attribute
/// - the `<html>`/`<head>`/`<body>` wrapper disappears
///
/// Surviving `src`/`href` values pointing at Trilium image links
/// (`api/attachments/<id>/image/<name>`) are redirected to the public
/// `/attachments/<id>` route, and external and attachment images go through
/// the image proxy, if one is set.
#[derive(Debug, Clone, Default)]
pub struct ContentRewriter {
    image_proxy: Option<String>,
    domain: String,
}

impl ContentRewriter {
    pub fn new(image_proxy: Option<String>, domain: impl Into<String>) -> Self {
        Self {
            image_proxy: image_proxy.map(|p| {
                if p.ends_with('/') {
                    p
                } else {
                    format!("{p}/")
                }
            }),
            domain: domain.into(),
        }
    }

    pub fn rewrite(&self, html: &str) -> String {
        let image_proxy = self.image_proxy.clone();
        let domain = self.domain.clone();

        Builder::default()
            .add_clean_content_tags(DROPPED_WITH_CONTENT)
            .attribute_filter(move |element, attribute, value| {
                rewrite_url(element, attribute, value, image_proxy.as_deref(), &domain)
            })
            .clean(html)
            .to_string()
            .trim()
            .to_string()
    }
}

fn rewrite_url<'u>(
    element: &str,
    attribute: &str,
    value: &'u str,
    image_proxy: Option<&str>,
    domain: &str,
) -> Option<Cow<'u, str>> {
    if attribute != "src" && attribute != "href" {
        return Some(Cow::Borrowed(value));
    }

    let value = match ATTACHMENT_LINK.captures(value) {
        Some(caps) => Cow::Owned(format!("/attachments/{}", &caps[1])),
        None => Cow::Borrowed(value),
    };

    let Some(proxy) = image_proxy.filter(|_| element == "img" && attribute == "src") else {
        return Some(value);
    };

    if value.starts_with("http://") || value.starts_with("https://") {
        Some(Cow::Owned(format!("{proxy}{value}")))
    } else if value.starts_with("/attachments/") {
        Some(Cow::Owned(format!("{proxy}{domain}{value}")))
    } else {
        Some(value)
    }
}
