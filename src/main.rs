use std::sync::Arc;

use chat_relay::auth::TokenService;
use chat_relay::config::AppConfig;
use chat_relay::llm::OpenAiClient;
use chat_relay::routes::configure_routes;
use chat_relay::state::AppState;
use chat_relay::store::PgUserStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    let store = PgUserStore::new(config.store_config()?).await?;
    let tokens = TokenService::new(&config.secret_key);
    let llm = OpenAiClient::new(config.openai_api_key.clone())?
        .with_base_url(config.openai_base_url.clone());

    let state = AppState::new(Arc::new(store), tokens, Arc::new(llm));
    let routes = configure_routes(state, config.static_dir.clone());

    tracing::info!(addr = %config.bind_addr, "Starting server");
    warp::serve(routes).run(config.bind_addr).await;

    Ok(())
}
