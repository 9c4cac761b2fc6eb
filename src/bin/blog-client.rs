//! Command-line driver for the blog client.
//!
//! Runs the client-side router and blog-info store outside a browser,
//! which is handy for checking deployments and base-path setups.
//!
//! # Usage
//!
//! ```bash
//! # Show which page a path maps to
//! cargo run --bin blog-client -- resolve /post/abc123
//!
//! # Same, for an app served under /blog
//! cargo run --bin blog-client -- resolve /blog/post/abc123 --base /blog
//!
//! # Boot the client against a running server and show the fetched info
//! cargo run --bin blog-client -- info --server http://localhost:8080
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use trilium_blog::client::{
    ClientApp, ClientConfig, Document, HeadlessDocument, HttpBlogApi, ViewLoader, ViewRouter,
};
use trilium_blog::telemetry;

/// Blog client tools.
#[derive(Parser)]
#[command(name = "blog-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path against the client route table
    Resolve {
        /// Path to resolve, e.g. `/post/abc123`
        path: String,

        /// Base path the app is served under
        #[arg(long)]
        base: Option<String>,
    },

    /// Boot the client against a server and print the blog info
    Info {
        /// Origin of the blog server
        #[arg(long, default_value = "http://localhost:8080")]
        server: String,

        /// Path to mount initially
        #[arg(long, default_value = "/")]
        path: String,

        /// Base path the app is served under
        #[arg(long)]
        base: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    telemetry::init_tracing(&telemetry::env_log_level("warn"), "text")?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { path, base } => resolve(&path, base.as_deref()),
        Commands::Info { server, path, base } => info(&server, &path, base).await?,
    }

    Ok(())
}

fn resolve(path: &str, base: Option<&str>) {
    let router = ViewRouter::new(base, ViewLoader::default());
    let route = router.resolve(path);

    println!("{} {}", "Path:".bold(), route.path);
    println!("{} {}", "Route:".bold(), route.name().green());

    if route.params.is_empty() {
        println!("{}", "No parameters".dimmed());
        return;
    }

    let mut params: Vec<_> = route.params.iter().collect();
    params.sort();
    for (name, value) in params {
        println!("  {} = {}", name.cyan(), value);
    }
}

async fn info(server: &str, path: &str, base: Option<String>) -> Result<()> {
    let api =
        HttpBlogApi::new(server).with_context(|| format!("Invalid server URL '{}'", server))?;
    let document: Arc<dyn Document> = Arc::new(HeadlessDocument::new());

    let app = ClientApp::boot(
        ClientConfig { base_path: base },
        Arc::new(api),
        document.clone(),
        path,
    )
    .await
    .context("Failed to mount the client")?;

    let info = app.store().blog_info();

    if let Some(route) = app.current_route() {
        println!("{} {}", "Route:".bold(), route.name().green());
    }

    if info.blog_name.is_empty() && info.blog_title.is_empty() {
        println!("{}", "✗ Blog info unavailable (see logs)".yellow());
    } else {
        println!("{}", "✓ Blog info fetched".green());
    }

    println!("{} {}", "Blog name:".bold(), info.blog_name);
    println!("{} {}", "Blog title:".bold(), info.blog_title);
    println!("{} {}", "Document title:".bold(), document.title());

    Ok(())
}
