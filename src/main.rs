mod model;
mod server;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::server::{
    bot::manager::BotManager, config::Config, error::AppError, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let storage = startup::build_storage(&config).await?;

    tracing::info!("Starting server");

    let bot = Arc::new(BotManager::new(
        storage.clone(),
        config.discord_bot_token.clone(),
    ));

    // A failed gateway connection is not fatal: the query API keeps serving
    // with the bot reported offline.
    if let Err(e) = bot.start().await {
        tracing::error!("Discord connection unavailable, serving in offline mode: {e}");
    }

    let router = server::router::router()
        .with_state(AppState::new(storage, bot.clone()))
        .layer(tower_http::cors::CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(bot))
        .await?;

    Ok(())
}

/// Waits for ctrl-c, then tears the bot down before the server exits.
///
/// Stopping the bot disarms the retention scheduler and persists the offline
/// status so a restart starts from a consistent state.
async fn shutdown_signal(bot: Arc<BotManager>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }

    tracing::info!("Shutting down");

    if let Err(e) = bot.stop().await {
        tracing::error!("Error during bot shutdown: {e}");
    }
}
