use anyhow::Result;
use clap::Parser;
use trilium_blog::{config, server, telemetry};

/// Publishes Trilium notes labelled `#blog=true` as a blog.
#[derive(Parser)]
#[command(name = "trilium-blog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on; overrides the port part of `LISTEN`
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(port) = cli.port {
        config.listen_addr = config::with_port(&config.listen_addr, port);
    }

    telemetry::init_tracing(&config.log_level, &config.log_format)?;
    config.print_summary();

    server::run(config).await
}
