mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::HostConfig::from_env()?;
    match &config.backend_url {
        Some(url) => tracing::info!(%url, timeout_secs = config.proxy_timeout.as_secs(), "api proxy enabled"),
        None => tracing::warn!("GESTIONES_BACKEND_URL not set, /api proxy disabled"),
    }

    let state = state::AppState::new(&config);
    let app = routes::leptos_app(state)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, "gestiones listening");
    axum::serve(listener, app).await?;
    Ok(())
}
