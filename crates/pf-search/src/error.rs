//! Search error types.

use thiserror::Error;

pub type SearchResult<T> = Result<T, SearchError>;

/// Failures that stop a search partway.
///
/// "No path" is not an error; see [`crate::PathResult::found`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An edge leads to an ID with no node record.
    #[error("Edge {from} -> {id} refers to missing node {id}")]
    MissingNode { from: String, id: String },
}
