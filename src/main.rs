use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use persona_chat_backend::{
    api::routes::create_router,
    cache::ContentCache,
    completion::OpenAiClient,
    config::Config,
    scrape::SiteFetcher,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;

    let fetcher = Arc::new(SiteFetcher::new(config.site_url.clone()));
    let cache = Arc::new(ContentCache::new(fetcher, config.scrape_interval));
    let completion = Arc::new(OpenAiClient::new(config.openai_api_key.clone()));

    let app_state = AppState {
        config: Arc::new(config),
        cache,
        completion,
    };

    // Build the router with routes
    let app = create_router(app_state);

    // Create the listener
    let listener = TcpListener::bind(server_addr).await?;
    info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
