//!
//! `FlowEdge`: an edge of the network together with the flow it carries
//!
use super::flow_rate::FlowRateLike;

/// Cost per unit flow
pub type Cost = f64;

/// Edge with its flow, as exported from a solved network.
///
/// * `from -> to`
/// * `capacity`: upper limit of the flow `u(e)`
/// * `flow`: current flow `f(e)`, `0 <= f(e) <= u(e)`
/// * `cost`: cost per unit flow, only for edges of a min-cost-flow problem
///
/// `from->to [f/u]` or `from->to [f/u] c`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlowEdge<F: FlowRateLike> {
    pub from: usize,
    pub to: usize,
    pub capacity: F,
    pub flow: F,
    pub cost: Option<Cost>,
}

impl<F: FlowRateLike> FlowEdge<F> {
    pub fn new(from: usize, to: usize, capacity: F, flow: F) -> FlowEdge<F> {
        FlowEdge {
            from,
            to,
            capacity,
            flow,
            cost: None,
        }
    }
    pub fn with_cost(from: usize, to: usize, capacity: F, flow: F, cost: Cost) -> FlowEdge<F> {
        FlowEdge {
            from,
            to,
            capacity,
            flow,
            cost: Some(cost),
        }
    }
    /// remaining forward-sendable amount
    pub fn residual(&self) -> F {
        self.capacity - self.flow
    }
    pub fn is_saturated(&self) -> bool {
        !self.residual().is_positive()
    }
}

impl<F: FlowRateLike> std::fmt::Display for FlowEdge<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{} [{}/{}]", self.from, self.to, self.flow, self.capacity)?;
        if let Some(cost) = self.cost {
            write!(f, " {}", cost)?;
        }
        Ok(())
    }
}
