// src/main.rs

use anyhow::Result;
use clap::Parser;
use pantry::server::{run_server, ServerConfig};
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "pantryd")]
#[command(author, version, about = "In-memory recipe collection served over HTTP", long_about = None)]
struct Cli {
    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    run_server(ServerConfig { bind_addr: cli.bind }).await
}
