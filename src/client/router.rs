//! Client-side view router.
//!
//! Maps URL paths to one of three page identities and hands out the view to
//! render for each. The route table is fixed:
//!
//! | Pattern            | Name       | Identity                  |
//! |--------------------|------------|---------------------------|
//! | `/`                | `HomePage` | [`RouteIdentity::Home`]     |
//! | `/post/:noteId`    | `Article`  | [`RouteIdentity::Article`]  |
//! | `/:pathMatch(.*)*` | `NotFound` | [`RouteIdentity::NotFound`] |
//!
//! Patterns are tried in declaration order; the catch-all is last, so
//! resolution never fails.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use super::loader::{LoadError, View, ViewLoader};

/// Parameter captured by the article route.
pub const NOTE_ID_PARAM: &str = "noteId";

/// Parameter captured by the catch-all route.
pub const PATH_MATCH_PARAM: &str = "pathMatch";

/// Logical page a URL resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteIdentity {
    Home,
    Article,
    NotFound,
}

impl RouteIdentity {
    /// Route name as registered in the route table.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "HomePage",
            Self::Article => "Article",
            Self::NotFound => "NotFound",
        }
    }
}

impl fmt::Display for RouteIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from reverse route lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("missing parameter `{param}` for route {route}")]
    MissingParameter {
        route: RouteIdentity,
        param: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(&'static str),
    Param(&'static str),
    CatchAll(&'static str),
}

/// One row of the route table.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    path: &'static str,
    identity: RouteIdentity,
    segments: Vec<Segment>,
}

impl RouteEntry {
    fn new(path: &'static str, identity: RouteIdentity, segments: Vec<Segment>) -> Self {
        Self {
            path,
            identity,
            segments,
        }
    }

    /// Pattern as written in the route table.
    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn name(&self) -> &'static str {
        self.identity.name()
    }

    pub fn identity(&self) -> RouteIdentity {
        self.identity
    }

    /// Matches already-split path segments, returning captured parameters.
    fn matches(&self, segments: &[&str]) -> Option<HashMap<String, String>> {
        let mut params = HashMap::new();

        for (index, pattern) in self.segments.iter().enumerate() {
            match pattern {
                Segment::CatchAll(name) => {
                    params.insert((*name).to_string(), segments[index..].join("/"));
                    return Some(params);
                }
                Segment::Static(expected) => {
                    let actual = segments.get(index)?;
                    if !actual.eq_ignore_ascii_case(expected) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let raw = segments.get(index).filter(|s| !s.is_empty())?;
                    params.insert((*name).to_string(), decode_segment(raw));
                }
            }
        }

        (segments.len() == self.segments.len()).then_some(params)
    }
}

/// Result of resolving a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The path as navigated to, including any base prefix.
    pub path: String,
    pub identity: RouteIdentity,
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    pub fn name(&self) -> &'static str {
        self.identity.name()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Captured note identifier for article routes.
    pub fn note_id(&self) -> Option<&str> {
        self.param(NOTE_ID_PARAM)
    }
}

/// A resolved navigation: the matched route and the view to render.
#[derive(Debug, Clone)]
pub struct Navigation {
    pub route: RouteMatch,
    pub view: View,
}

/// Router for the blog's three pages.
///
/// Constructed once with an optional base path (defaulting to the site
/// root) and immutable afterwards. The base path and static segments match
/// ASCII case-insensitively; captured parameters keep their case.
pub struct ViewRouter {
    base: String,
    routes: Vec<RouteEntry>,
    views: ViewLoader,
}

impl fmt::Debug for ViewRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRouter")
            .field("base", &self.base)
            .field("routes", &self.routes.iter().map(|r| r.path).collect::<Vec<_>>())
            .finish()
    }
}

impl ViewRouter {
    /// Creates a router mounted under `base` (root when `None`).
    pub fn new(base: Option<&str>, views: ViewLoader) -> Self {
        Self {
            base: normalize_base(base.unwrap_or("/")),
            routes: route_table(),
            views,
        }
    }

    /// Base path prefix, `/` for the root.
    pub fn base(&self) -> &str {
        if self.base.is_empty() { "/" } else { &self.base }
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// Resolves a URL path to a route identity. Never fails: unmatched paths
    /// resolve to [`RouteIdentity::NotFound`].
    pub fn resolve(&self, path: &str) -> RouteMatch {
        let path = strip_query_and_fragment(path);
        let full = if path.is_empty() { "/" } else { path };

        let matched = self.strip_base(full).and_then(|relative| {
            let segments = split_segments(relative);
            self.routes.iter().find_map(|route| {
                route
                    .matches(&segments)
                    .map(|params| (route.identity, params))
            })
        });

        // Paths outside the base never reach the table.
        let (identity, params) = matched.unwrap_or_else(|| {
            let mut params = HashMap::new();
            params.insert(
                PATH_MATCH_PARAM.to_string(),
                split_segments(full).join("/"),
            );
            (RouteIdentity::NotFound, params)
        });

        RouteMatch {
            path: full.to_string(),
            identity,
            params,
        }
    }

    /// Resolves a path and loads its view, fetching lazy views on first use.
    pub async fn navigate(&self, path: &str) -> Result<Navigation, LoadError> {
        let route = self.resolve(path);
        let view = self.views.load(route.identity).await?;
        tracing::debug!(path = %route.path, route = route.name(), "navigated");
        Ok(Navigation { route, view })
    }

    /// Returns true once the view for `identity` is available without a load.
    pub fn is_view_loaded(&self, identity: RouteIdentity) -> bool {
        self.views.is_loaded(identity)
    }

    /// Builds the URL path for a route, including the base prefix.
    pub fn href(
        &self,
        identity: RouteIdentity,
        params: &HashMap<String, String>,
    ) -> Result<String, RouterError> {
        let relative = match identity {
            RouteIdentity::Home => String::new(),
            RouteIdentity::Article => {
                let note_id = params.get(NOTE_ID_PARAM).filter(|id| !id.is_empty()).ok_or(
                    RouterError::MissingParameter {
                        route: identity,
                        param: NOTE_ID_PARAM,
                    },
                )?;
                format!("post/{}", urlencoding::encode(note_id))
            }
            RouteIdentity::NotFound => params
                .get(PATH_MATCH_PARAM)
                .map(|rest| rest.trim_start_matches('/').to_string())
                .unwrap_or_default(),
        };

        Ok(format!("{}/{}", self.base, relative))
    }

    /// Strips the base prefix, returning the path relative to it.
    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(path);
        }
        let prefix = path.get(..self.base.len())?;
        if !prefix.eq_ignore_ascii_case(&self.base) {
            return None;
        }
        let rest = &path[self.base.len()..];
        match rest {
            "" => Some("/"),
            _ if rest.starts_with('/') => Some(rest),
            _ => None,
        }
    }
}

fn route_table() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/", RouteIdentity::Home, vec![]),
        RouteEntry::new(
            "/post/:noteId",
            RouteIdentity::Article,
            vec![Segment::Static("post"), Segment::Param(NOTE_ID_PARAM)],
        ),
        RouteEntry::new(
            "/:pathMatch(.*)*",
            RouteIdentity::NotFound,
            vec![Segment::CatchAll(PATH_MATCH_PARAM)],
        ),
    ]
}

/// Normalizes a base path to `/prefix` form; the root becomes empty.
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn strip_query_and_fragment(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    }
}

/// Splits `/a/b` into `["a", "b"]`. The root yields no segments, and a single
/// trailing slash after a non-empty segment is ignored.
fn split_segments(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    if path.is_empty() {
        return Vec::new();
    }
    let path = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
        _ => path,
    };
    path.split('/').collect()
}

fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
