//! # Blogly Server
//!
//! Server-rendered blog where users write posts and label them with tags.

use actix_web::{App, HttpServer, web};
use blogly_infra::Database;
use migration::{Migrator, MigratorTrait};
use tracing_actix_web::TracingLogger;

mod config;
mod flash;
mod handlers;
mod middleware;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use state::AppState;
use views::Views;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(
        "Starting Blogly server on {}:{}",
        config.host,
        config.port
    );

    let db = Database::init(&config.database)
        .await
        .map_err(std::io::Error::other)?;

    if config.auto_migrate {
        Migrator::up(db.conn(), None)
            .await
            .map_err(std::io::Error::other)?;
        tracing::info!("Migrations applied");
    }

    let views = Views::load(&config.template_dir).map_err(std::io::Error::other)?;
    let state = AppState::new(db.clone(), views);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    if let Err(e) = db.close().await {
        tracing::warn!(error = %e, "Database did not close cleanly");
    }
    tracing::info!("Server stopped");

    Ok(())
}
