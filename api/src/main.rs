use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::info;

use hs_api::app::{create_app, AppState, Repositories};
use hs_api::config;
use hs_core::services::BookingServiceConfig;
use hs_infra::database::{
    DatabasePool, MySqlBookingRepository, MySqlBranchRepository, MySqlChainRepository,
    MySqlReviewRepository, MySqlRoomRepository, MySqlUserRepository,
};
use hs_shared::Environment;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    let environment = Environment::from_env();
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(environment.default_log_filter()),
    );

    info!("Starting Homestay API Server");

    let app_config = config::load();
    config::validate(&app_config).map_err(anyhow::Error::msg)?;

    let db = DatabasePool::new(app_config.database.clone())
        .await
        .context("failed to connect to the database")?;
    if !db.health_check().await.context("database health check failed")? {
        anyhow::bail!("database health check returned an unexpected result");
    }
    if app_config.database.run_migrations {
        db.run_migrations().await.context("failed to apply migrations")?;
    }
    info!("Database pool ready: {}", db.get_statistics());

    let pool = db.get_pool().clone();
    let repositories = Repositories {
        chains: Arc::new(MySqlChainRepository::new(pool.clone())),
        branches: Arc::new(MySqlBranchRepository::new(pool.clone())),
        rooms: Arc::new(MySqlRoomRepository::new(pool.clone())),
        bookings: Arc::new(MySqlBookingRepository::new(pool.clone())),
        reviews: Arc::new(MySqlReviewRepository::new(pool.clone())),
        users: Arc::new(MySqlUserRepository::new(pool)),
    };
    let state = web::Data::new(AppState::new(
        repositories,
        BookingServiceConfig::from(&app_config.booking),
    ));

    let bind_address = app_config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let server_config = app_config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &server_config));
    if app_config.server.workers > 0 {
        server = server.workers(app_config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    db.close().await;
    info!("Server stopped");
    Ok(())
}
