use event_subscriptions::config::Config;
use event_subscriptions::shell::http::router;
use event_subscriptions::shell::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let state = AppState::new();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(host = %config.host, port = config.port, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
