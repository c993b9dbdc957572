//! # `CostEdge`
//!
//! Edge of a min-cost-flow problem.
//!
//! `CostEdge` has
//! * `from -> to`
//! * `capacity`: upper limit of the flow `u(e)`
//! * `cost`: cost per unit flow `c(e)`
//!
use super::super::error::{check_vertex, FlowError};
use super::super::flow_edge::Cost;
use super::super::flow_rate::FlowRateLike;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CostEdge<F: FlowRateLike> {
    pub from: usize,
    pub to: usize,
    /// capacity (upper limit of flow) of the edge u(e)
    pub capacity: F,
    /// cost per unit flow
    pub cost: Cost,
}

impl<F: FlowRateLike> CostEdge<F> {
    pub fn new(from: usize, to: usize, capacity: F, cost: Cost) -> CostEdge<F> {
        CostEdge {
            from,
            to,
            capacity,
            cost,
        }
    }

    /// Check endpoints and capacity against a network of `n` vertices
    pub(crate) fn check(&self, n: usize) -> Result<(), FlowError> {
        check_vertex(self.from, n)?;
        check_vertex(self.to, n)?;
        if self.capacity < F::zero() {
            return Err(FlowError::NegativeCapacity {
                from: self.from,
                to: self.to,
            });
        }
        Ok(())
    }
}

impl<F: FlowRateLike> std::fmt::Display for CostEdge<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{} [{}] {}", self.from, self.to, self.capacity, self.cost)
    }
}
