//! Server construction: store selection, schema validation, and the Actix
//! application.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use backend::Trace;
use backend::domain::{EntityMappingError, UserService, validate_entity_mappings};
use backend::inbound::graphql::{UserSchema, build_schema};
use backend::inbound::http;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::outbound::memory::InMemoryUserRepository;
use backend::outbound::persistence::{
    DbPool, DieselUserRepository, MigrationError, PoolConfig, PoolError, run_pending_migrations,
    user_table_columns,
};

/// Failures that stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Settings could not be loaded or parsed.
    #[error("failed to load settings: {0}")]
    Settings(String),
    /// Embedded migrations failed.
    #[error(transparent)]
    Migrations(#[from] MigrationError),
    /// The connection pool could not be built.
    #[error(transparent)]
    Pool(#[from] PoolError),
    /// The mapping tables disagree with the table or schema definitions.
    #[error(transparent)]
    EntityMapping(#[from] EntityMappingError),
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Build the user service over PostgreSQL when a database URL is set,
/// otherwise over the in-memory store.
///
/// # Errors
/// Returns [`StartupError`] when migrations fail or the pool cannot be built.
pub async fn build_user_service(settings: &ServerSettings) -> Result<UserService, StartupError> {
    let Some(url) = settings.database_url.as_deref() else {
        warn!("no database URL configured; users are kept in memory");
        return Ok(UserService::new(Arc::new(InMemoryUserRepository::new())));
    };

    if settings.run_migrations() {
        let applied = run_pending_migrations(url).await?;
        info!(applied, "database migrations applied");
    }
    let pool =
        DbPool::new(PoolConfig::new(url).with_max_size(settings.db_max_connections())).await?;
    info!("using PostgreSQL user store");
    Ok(UserService::new(Arc::new(DieselUserRepository::new(pool))))
}

/// Build the schema and check the entity mapping tables against it and the
/// Diesel table definition.
///
/// # Errors
/// Returns [`StartupError::EntityMapping`] on the first mismatch.
pub fn build_validated_schema(service: UserService) -> Result<UserSchema, StartupError> {
    let schema = build_schema(service);
    validate_entity_mappings(&user_table_columns(), &schema.sdl())?;
    Ok(schema)
}

fn build_app(
    health_state: web::Data<HealthState>,
    schema: web::Data<UserSchema>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(schema)
        .wrap(Trace)
        .configure(http::configure)
        .service(ready)
        .service(live)
}

/// Bind the HTTP server and mark `health_state` ready.
///
/// # Errors
/// Returns [`StartupError::Bind`] when the address cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    schema: UserSchema,
    bind_addr: &str,
) -> Result<Server, StartupError> {
    let server_health_state = health_state.clone();
    let schema_data = web::Data::new(schema);
    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), schema_data.clone())
    })
    .bind(bind_addr)
    .map_err(|source| StartupError::Bind {
        addr: bind_addr.to_owned(),
        source,
    })?
    .run();

    info!(bind_addr, "server listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests;
