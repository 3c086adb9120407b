//! Accounts service entry-point: loads settings, prepares the store, and
//! serves the REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use accounts::inbound::http::health::HealthState;
use accounts::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use accounts::settings::AccountsSettings;

use server::{ServerConfig, create_server};

async fn connect_store(settings: &AccountsSettings) -> Result<Option<DbPool>> {
    let Some(database_url) = settings.database_url() else {
        warn!("no database URL configured; using the in-memory store");
        return Ok(None);
    };

    if settings.run_migrations() {
        run_migrations(database_url)
            .await
            .wrap_err("apply database migrations")?;
    }

    let config = PoolConfig::new(database_url).with_max_size(settings.pool_max_size());
    let pool = DbPool::new(config)
        .await
        .wrap_err("create database pool")?;
    info!(max_size = settings.pool_max_size(), "database pool ready");
    Ok(Some(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AccountsSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(pool) = connect_store(&settings).await? {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await?;
    Ok(())
}
