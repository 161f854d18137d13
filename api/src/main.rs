use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::http::server::http_server;
use crate::args::Args;

mod application;
mod args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Arc::new(Args::parse());

    let state = http_server::state(args.clone()).await?;
    let router = http_server::router(state)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.server.port)).await?;
    info!("Aadhar Homes API listening on port {}", args.server.port);
    axum::serve(listener, router).await?;

    Ok(())
}
