//! GraphQL error mapping for domain errors.
//!
//! Errors are returned in the `errors` array with `extensions.code` set to
//! the snake-case [`ErrorCode`](crate::domain::ErrorCode) and
//! `extensions.traceId` when a trace is in scope. Internal errors are logged
//! in full and redacted before leaving the process.

use async_graphql::ErrorExtensions;
use tracing::error;

use crate::domain::{Error, ErrorCode};

impl ErrorExtensions for Error {
    fn extend(&self) -> async_graphql::Error {
        let public = self.redacted();
        async_graphql::Error::new(public.message().to_owned()).extend_with(|_, extensions| {
            extensions.set("code", public.code().as_str().to_owned());
            if let Some(trace_id) = public.trace_id() {
                extensions.set("traceId", trace_id.to_owned());
            }
        })
    }
}

/// Convert a domain error into a resolver error, logging internal failures.
pub(crate) fn to_graphql_error(err: Error) -> async_graphql::Error {
    if err.code() == ErrorCode::InternalError {
        error!(
            message = err.message(),
            trace_id = err.trace_id().unwrap_or_default(),
            "resolver failed"
        );
    }
    err.extend()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;
    use rstest::rstest;

    fn extension(error: &async_graphql::Error, key: &str) -> Option<Value> {
        error
            .extensions
            .as_ref()
            .and_then(|extensions| extensions.get(key))
            .cloned()
    }

    #[rstest]
    fn service_unavailable_keeps_message_and_sets_code() {
        let gql = to_graphql_error(Error::service_unavailable("database offline"));
        assert_eq!(gql.message, "database offline");
        assert_eq!(
            extension(&gql, "code"),
            Some(Value::from("service_unavailable".to_owned()))
        );
    }

    #[rstest]
    fn internal_errors_are_redacted_but_keep_trace_id() {
        let gql = to_graphql_error(
            Error::internal("relation \"users\" does not exist").with_trace_id("trace-1"),
        );
        assert_eq!(gql.message, "Internal server error");
        assert_eq!(
            extension(&gql, "code"),
            Some(Value::from("internal_error".to_owned()))
        );
        assert_eq!(
            extension(&gql, "traceId"),
            Some(Value::from("trace-1".to_owned()))
        );
    }

    #[rstest]
    fn trace_id_extension_is_absent_without_trace() {
        let gql = to_graphql_error(Error::service_unavailable("down"));
        assert!(extension(&gql, "traceId").is_none());
    }
}
