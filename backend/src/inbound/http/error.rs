//! HTTP adapter mapping for domain errors.
//!
//! GraphQL failures travel inside the GraphQL response body. This mapping
//! covers the transport itself: rejected request bodies and any handler that
//! returns a domain [`Error`] directly.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(message = self.message(), "request failed");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self.redacted())
    }
}

/// Error handler for the Actix JSON extractor.
///
/// Turns a body that fails to parse as a GraphQL request into a 400 carrying
/// the domain error payload. Syntax and shape errors report where parsing
/// stopped as `details: { line, column }`.
#[must_use]
#[expect(
    clippy::needless_pass_by_value,
    reason = "signature fixed by JsonConfig::error_handler"
)]
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = req.path(), "rejected request body");
    let invalid = Error::invalid_request(err.to_string());
    if let JsonPayloadError::Deserialize(source) = &err {
        return invalid
            .with_details(json!({ "line": source.line(), "column": source.column() }))
            .into();
    }
    invalid.into()
}
