//! VecRoute HTTP server
//!
//! Actix-web REST API over the route inference core

mod error;
mod routes;
mod state;
mod types;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use vecroute_common::{AppConfig, Result};

pub use error::ApiError;
pub use routes::configure;
pub use state::AppState;

/// Load the dataset once and serve until the process is stopped
pub async fn start_server(config: AppConfig) -> Result<()> {
    let state = Arc::new(AppState::load(config)?);
    let bind_addr = state.config.server_bind_address();

    info!("Starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .configure(configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
