//! GraphQL-specific error types.
//!
//! - [`GraphqlError::Http`]: the request failed at the HTTP level
//! - [`GraphqlError::Query`]: the server answered with an `errors` payload
//! - [`GraphqlError::MissingData`]: the response carried no `data`
//! - [`GraphqlError::Decode`]: `data` did not match the expected shape
//!
//! Mutation user errors are not GraphQL errors; they arrive inside `data`
//! and are handled by the caller.

use thiserror::Error;

use crate::clients::graphql::response::GraphqlErrorMessage;
use crate::clients::HttpError;

/// Error type for GraphQL operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response contained a non-empty `errors` array.
    #[error("GraphQL query failed: {}", join_messages(.errors))]
    Query {
        /// The errors reported by the server.
        errors: Vec<GraphqlErrorMessage>,
    },

    /// The response had no `data` field, or it was `null`.
    #[error("GraphQL response contained no data")]
    MissingData,

    /// The `data` field did not match the expected shape.
    #[error("Unexpected GraphQL response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

fn join_messages(errors: &[GraphqlErrorMessage]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_graphql_error_http_variant_wraps_http_error() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 401,
            message: r#"{"errors":"Unauthorized"}"#.to_string(),
            error_reference: None,
        });

        let graphql_error: GraphqlError = http_error.into();

        assert!(matches!(graphql_error, GraphqlError::Http(_)));
        assert!(graphql_error.to_string().contains("Unauthorized"));
    }

    #[test]
    fn test_query_error_joins_messages() {
        let error = GraphqlError::Query {
            errors: vec![
                GraphqlErrorMessage {
                    message: "Field 'foo' doesn't exist".to_string(),
                },
                GraphqlErrorMessage {
                    message: "Throttled".to_string(),
                },
            ],
        };

        assert_eq!(
            error.to_string(),
            "GraphQL query failed: Field 'foo' doesn't exist; Throttled"
        );
    }
}
