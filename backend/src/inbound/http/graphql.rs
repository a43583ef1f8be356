//! GraphQL endpoint.
//!
//! `POST /graphql` executes a JSON GraphQL request against the schema held
//! in app data. `GET /graphql` serves the GraphiQL explorer pointed at the
//! same path.

use actix_web::{HttpResponse, get, post, web};
use async_graphql::http::GraphiQLSource;
use tracing::debug;

use crate::inbound::graphql::UserSchema;

/// Path of the GraphQL endpoint.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Execute one GraphQL request.
///
/// Field errors are returned in the response `errors` array with status 200.
#[post("/graphql")]
pub async fn graphql(
    schema: web::Data<UserSchema>,
    request: web::Json<async_graphql::Request>,
) -> web::Json<async_graphql::Response> {
    let graphql_request = request.into_inner();
    debug!(
        operation = graphql_request.operation_name.as_deref(),
        "executing GraphQL request"
    );
    web::Json(schema.execute(graphql_request).await)
}

/// Serve the GraphiQL explorer.
#[get("/graphql")]
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Register the GraphQL routes and the JSON body configuration they rely on.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(super::error::json_error_handler))
        .service(graphql)
        .service(graphiql);
}
