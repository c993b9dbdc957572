//!
//! Errors raised when a network or an edge list is misconfigured.
//!
//! Running out of augmenting paths is not an error, and broken flow invariants
//! are reported by [`crate::validate`] instead of being raised.
//!
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("vertex {vertex} is out of range for a network of {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("source and sink must differ (both are {0})")]
    IdenticalTerminals(usize),

    #[error("edge {from} -> {to} has a negative capacity")]
    NegativeCapacity { from: usize, to: usize },

    #[error("residual graph contains a negative cost cycle")]
    NegativeCycle,
}

/// Fail with `VertexOutOfRange` unless `vertex < vertex_count`.
pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<(), FlowError> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(FlowError::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}

/// Validate the pair of terminals of a network with `vertex_count` vertices.
pub(crate) fn check_terminals(
    vertex_count: usize,
    source: usize,
    sink: usize,
) -> Result<(), FlowError> {
    check_vertex(source, vertex_count)?;
    check_vertex(sink, vertex_count)?;
    if source == sink {
        return Err(FlowError::IdenticalTerminals(source));
    }
    Ok(())
}
