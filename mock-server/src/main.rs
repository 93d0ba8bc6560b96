use axum::http::StatusCode;
use mock_server::{Recorder, Reply};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let status = match std::env::var("MOCK_STATUS") {
        Ok(raw) => StatusCode::from_u16(raw.parse()?)?,
        Err(_) => StatusCode::OK,
    };
    let body = std::env::var("MOCK_BODY").unwrap_or_default();

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, %status, "listening");
    mock_server::run(listener, Reply::new(status, body), Recorder::default()).await?;
    Ok(())
}
