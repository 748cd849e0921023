//! slips-node: serves a generated receipts snapshot over HTTP.
//!
//! Logging is controlled with `RUST_LOG` (default `slips_node=info`).

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use slips_node::api::router;
use slips_node::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("slips_node=info,tower_http=info")),
        )
        .init();

    let config = Config::parse();
    let data = config
        .generate_data()
        .context("failed to generate mock receipts")?;
    let summary = data.summary();
    tracing::info!(
        receipts = summary.receipt_count,
        total_sales = summary.total_sales,
        seed = ?config.seed,
        "generated sales snapshot"
    );

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("slips-node listening on {addr}");

    axum::serve(listener, router(data))
        .await
        .context("server error")?;
    Ok(())
}
