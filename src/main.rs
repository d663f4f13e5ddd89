use std::sync::Arc;

use mail_scrub::config::ServerConfig;
use mail_scrub::routes::{AppState, routes};
use mail_scrub::sanitizer::Sanitizer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env();

    eprintln!("📧 mail-scrub v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "   Clean API: POST http://{}/clean-email",
        config.bind_addr()
    );
    eprintln!("   Health:    GET  http://{}/health\n", config.bind_addr());

    let state = AppState {
        sanitizer: Arc::new(Sanitizer::new()),
    };
    let app = routes(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "HTTP server started");
    axum::serve(listener, app).await?;

    Ok(())
}
