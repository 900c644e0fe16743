use std::sync::Arc;

use rankscope::config::Config;
use rankscope::error::AppError;
use rankscope::logging;
use rankscope::riot::RiotClient;
use rankscope::server::{self, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    logging::init()?;

    info!("🐙 Starting...");

    let mut riot = RiotClient::new(
        config.riot_api_key.clone(),
        config.riot_rate_limit_per_second,
    );
    if let Some(base_url) = &config.riot_api_base_url {
        info!(base_url, "🛰️ Riot API requests are redirected");
        riot = riot.with_base_url(base_url);
    }

    let app = server::router(AppState::new(Arc::new(riot)));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "🌐 Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
