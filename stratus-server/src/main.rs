use std::net::SocketAddr;
use std::sync::Arc;

use stratus::ForecastResolver;
use stratus_middleware::RateLimiter;
use stratus_nws::NwsClient;
use stratus_server::{AppState, Config, app_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();

    let client = NwsClient::new(config.nws_base_url.clone(), &config.user_agent)?;
    let state = AppState {
        resolver: Arc::new(ForecastResolver::new(
            Arc::new(client),
            config.cache,
            config.retry,
        )),
        rate_limiter: Arc::new(RateLimiter::new(config.rate_limit)),
    };
    let router = app_router(state);

    tracing::info!(addr = %config.listen_addr, "weather service listening");
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
