//! Server binary: binds the HTTP shell to a host/port and serves forever

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use ytchannel_core::ChannelScraper;
use ytchannel_server::app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let scraper = ChannelScraper::new()?;
    let app = app(Arc::new(scraper));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
