//! Controle Interno Server - Main entry point

use anyhow::Result;
use controle_common::logging::{init_logging, LogConfig};
use tracing::info;

use controle_server::{
    api::{self, AppState},
    config::Config,
    db,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Environment variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("controle-server")
        .filter_directives("controle_server=debug,tower_http=debug,sqlx=warn")
        .build()
        .merge_env()?;

    init_logging(&log_config)?;

    info!("Starting Controle Interno server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool).await?;

    if config.seed.on_startup {
        db::seed::seed_if_empty(&pool).await?;
    } else {
        info!("Seeding disabled (SEED_ON_STARTUP=false)");
    }

    let served = api::serve(config, AppState { db: pool.clone() }).await;

    pool.close().await;
    info!("Database pool closed");

    served
}
