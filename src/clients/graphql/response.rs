//! Typed envelope for GraphQL responses.

use serde::Deserialize;

/// One entry of a GraphQL `errors` array.
///
/// Only the message is kept; locations and extensions are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GraphqlErrorMessage {
    /// Human-readable error message.
    pub message: String,
}

/// The `{ data, errors }` envelope every GraphQL response shares.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    /// The query result; `None` when absent or `null`.
    pub data: Option<T>,
    /// Errors reported by the server, if any.
    #[serde(default)]
    pub errors: Vec<GraphqlErrorMessage>,
}

/// The `edges { node { ... } }` wrapper used by connection fields.
#[derive(Debug, Deserialize)]
pub struct Connection<N> {
    /// The edges of this page.
    pub edges: Vec<Edge<N>>,
}

/// A single edge of a [`Connection`].
#[derive(Debug, Deserialize)]
pub struct Edge<N> {
    /// The node this edge points to.
    pub node: N,
}

impl<N> Connection<N> {
    /// Flattens the connection into its nodes, keeping response order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<N> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}
