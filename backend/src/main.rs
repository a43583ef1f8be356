//! Backend entry-point: loads settings, wires the user store into the
//! GraphQL schema, and serves it over Actix.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use server::{
    ServerSettings, StartupError, build_user_service, build_validated_schema, create_server,
};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(StartupError::Settings(e.to_string())))?;

    let service = build_user_service(&settings)
        .await
        .map_err(std::io::Error::other)?;
    let schema = build_validated_schema(service).map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, schema, settings.bind_addr())
        .map_err(std::io::Error::other)?;
    server.await
}
