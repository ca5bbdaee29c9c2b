//! Vehicle marketplace backend.
//!
//! Layered Axum application: controllers handle HTTP and access control,
//! services hold the business logic, repositories own database access, and
//! the entity crate defines the schema models. A minute cron sweep keeps
//! date-driven auction and featured ad state current.

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{config::Config, service::cache::ListingCache, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;

    startup::check_for_admin(&db, &config).await?;

    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::auction_sweep::start_scheduler(scheduler_db).await {
            error!("Auction sweep scheduler error: {}", e);
        }
    });

    let cache = ListingCache::new(config.listing_cache_ttl_secs);
    let app = router::router(AppState::new(db, cache), session_layer);

    let addr: SocketAddr = config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
