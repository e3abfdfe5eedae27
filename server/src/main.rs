//! Service entry point: configuration, connection pool, listener.

use std::sync::Arc;

use sqlx::mysql::MySqlPoolOptions;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use users_server::{Config, MySqlStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    // A connect failure here is fatal: the service has nothing to serve
    // without its store.
    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url())
        .await?;
    info!(host = %config.db_host, database = %config.db_name, "MySQL connected");

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "server running");

    users_server::run(listener, Arc::new(MySqlStore::new(pool))).await?;
    Ok(())
}
