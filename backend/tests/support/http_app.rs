//! Actix test service exposing the GraphQL routes over an in-memory store.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use backend::Trace;
use backend::domain::UserService;
use backend::inbound::graphql::build_schema;
use backend::inbound::http;
use backend::outbound::memory::InMemoryUserRepository;

/// Initialise the GraphQL HTTP surface over a fresh in-memory store.
pub async fn in_memory_app()
-> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
    test::init_service(
        App::new()
            .app_data(web::Data::new(build_schema(service)))
            .wrap(Trace)
            .configure(http::configure),
    )
    .await
}
