//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Example
//!
//! ```bash
//! export TRILIUM_API_URL="http://trilium:8080"
//! export TRILIUM_TOKEN="etapi-token"
//! export BLOG_NAME="Acme"
//! export BLOG_TITLE="Acme Blog"
//! export DOMAIN="blog.example.com"
//!
//! export REDIS_HOST="redis"
//! export REDIS_PORT="6379"
//! ```
//!
//! If `REDIS_URL` is not set, it is constructed from `REDIS_HOST`,
//! `REDIS_PORT`, `REDIS_PASSWORD` and `REDIS_DB`. Without either, caching is
//! disabled.
//!
//! ## Required Variables
//!
//! - `TRILIUM_API_URL` - Base URL of the Trilium server
//! - `TRILIUM_TOKEN` - ETAPI token
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `TRILIUM_TIMEOUT_SECONDS` - Upstream request timeout (default: 30)
//! - `ARTICLES_PER_PAGE` - Listing page size (default: 10)
//! - `BLOG_NAME` / `BLOG_TITLE` - Served by `/api/info` (default: empty)
//! - `DOMAIN` - Public host name (default: `localhost`)
//! - `SITE_URL` - Public base URL for the sitemap (default: `https://{DOMAIN}`)
//! - `IMAGE_PROXY_URL` - Prefix for proxied article images (default: none)
//! - `CACHE_TTL_SECONDS` - TTL of cached upstream data (default: 3600)
//! - `FRONTEND_DIST` - Built front-end directory (default: `./frontend/dist`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub trilium_api_url: String,
    pub trilium_token: String,
    /// Timeout applied to every Trilium request.
    pub trilium_timeout_seconds: u64,
    pub articles_per_page: usize,
    pub blog_name: String,
    pub blog_title: String,
    pub domain: String,
    pub site_url: String,
    /// When set, external and attachment images in articles are rewritten to
    /// `{image_proxy_url}/{image_url}`.
    pub image_proxy_url: Option<String>,
    pub redis_url: Option<String>,
    /// TTL (seconds) for cached upstream data.
    /// Has no effect when Redis is not configured.
    pub cache_ttl_seconds: u64,
    pub frontend_dist: PathBuf,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the Trilium URL or token is missing.
    pub fn from_env() -> Result<Self> {
        let trilium_api_url =
            env::var("TRILIUM_API_URL").context("TRILIUM_API_URL must be set")?;
        let trilium_token = env::var("TRILIUM_TOKEN").context("TRILIUM_TOKEN must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let trilium_timeout_seconds = parse_var("TRILIUM_TIMEOUT_SECONDS").unwrap_or(30);
        let articles_per_page = parse_var("ARTICLES_PER_PAGE").unwrap_or(10);
        let cache_ttl_seconds = parse_var("CACHE_TTL_SECONDS").unwrap_or(3600);

        let blog_name = env::var("BLOG_NAME").unwrap_or_default();
        let blog_title = env::var("BLOG_TITLE").unwrap_or_default();
        let domain = env::var("DOMAIN").unwrap_or_else(|_| "localhost".to_string());
        let site_url = env::var("SITE_URL").unwrap_or_else(|_| format!("https://{}", domain));
        let image_proxy_url = env::var("IMAGE_PROXY_URL").ok().filter(|v| !v.is_empty());

        let frontend_dist = env::var("FRONTEND_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./frontend/dist"));

        Ok(Self {
            listen_addr,
            trilium_api_url,
            trilium_token,
            trilium_timeout_seconds,
            articles_per_page,
            blog_name,
            blog_title,
            domain,
            site_url,
            image_proxy_url,
            redis_url: Self::load_redis_url(),
            cache_ttl_seconds,
            frontend_dist,
            log_level,
            log_format,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let password = env::var("REDIS_PASSWORD").ok();
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        let url = match password {
            // Empty password means no authentication
            Some(pwd) if !pwd.is_empty() => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            _ => format!("redis://{}:{}/{}", host, port, db),
        };

        Some(url)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `trilium_api_url` or `site_url` is not an absolute http(s) URL
    /// - `trilium_token` is empty
    /// - `articles_per_page` is outside 1..=100
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        validate_http_url("TRILIUM_API_URL", &self.trilium_api_url)?;
        validate_http_url("SITE_URL", &self.site_url)?;

        if self.trilium_token.is_empty() {
            anyhow::bail!("TRILIUM_TOKEN must not be empty");
        }

        if !(1..=100).contains(&self.articles_per_page) {
            anyhow::bail!(
                "ARTICLES_PER_PAGE must be between 1 and 100, got {}",
                self.articles_per_page
            );
        }

        if self.trilium_timeout_seconds == 0 {
            anyhow::bail!("TRILIUM_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                mask_connection_string(redis_url)
            );
        }

        if self.cache_ttl_seconds == 0 {
            anyhow::bail!("CACHE_TTL_SECONDS must be greater than 0");
        }

        Ok(())
    }

    pub fn trilium_timeout(&self) -> Duration {
        Duration::from_secs(self.trilium_timeout_seconds)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Trilium: {} (token: ***)", self.trilium_api_url);
        tracing::info!("  Blog: {} / {}", self.blog_name, self.blog_title);
        tracing::info!("  Site URL: {}", self.site_url);

        if let Some(ref redis_url) = self.redis_url {
            tracing::info!("  Redis: {} (enabled)", mask_connection_string(redis_url));
        } else {
            tracing::info!("  Redis: disabled");
        }

        tracing::info!("  Frontend: {}", self.frontend_dist.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{} is not a valid URL: '{}'", name, value))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{} must use http or https, got '{}'", name, value);
    }
    Ok(())
}

/// Masks sensitive information in connection strings for logging.
///
/// Replaces password with `***` in URLs like:
/// - `redis://:password@host:port/db` → `redis://:***@host:port/db`
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Replaces the port of a `host:port` listen address.
pub fn with_port(listen_addr: &str, port: u16) -> String {
    let host = listen_addr
        .rsplit_once(':')
        .map(|(host, _)| host)
        .unwrap_or("0.0.0.0");
    format!("{}:{}", host, port)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
