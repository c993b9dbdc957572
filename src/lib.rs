//!
//! flownet computes the [maximum flow](https://en.wikipedia.org/wiki/Maximum_flow_problem)
//! and minimum cut of a capacitated network, and the
//! [minimum cost](https://en.wikipedia.org/wiki/Minimum-cost_flow_problem) maximum flow
//! of a network whose edges also have a cost per unit flow.
//!
//! ```
//! use flownet::{max_flow, FlowNetwork, MaxFlowAlgorithm};
//!
//! let mut network: FlowNetwork<i64> =
//!     FlowNetwork::from_edges(3, 0, 2, &[(0, 1, 5), (1, 2, 3)]).unwrap();
//! let result = max_flow(&mut network, MaxFlowAlgorithm::EdmondsKarp);
//! assert_eq!(result.max_flow, 3);
//! assert_eq!(result.min_cut.capacity(), 3);
//! ```
//!
pub mod error;
pub mod flow_edge;
pub mod flow_rate;
pub mod max_flow;
pub mod min_cut;
pub mod min_flow;
pub mod mocks;
pub mod network;
pub mod utils;
pub mod validate;

pub use error::FlowError;
pub use flow_edge::{Cost, FlowEdge};
pub use flow_rate::FlowRateLike;
pub use max_flow::{
    compare_algorithms, edmonds_karp, ford_fulkerson, isap, max_flow, push_relabel,
    push_relabel_with, ActiveVertexPolicy, MaxFlowAlgorithm, MaxFlowResult, PushRelabelOptions,
};
pub use min_cut::{min_cut, MinCut};
pub use min_flow::{min_cost_flow, min_cost_max_flow, AugmentingPath, CostEdge, MinCostFlowResult};
pub use network::FlowNetwork;
pub use validate::{validate_edges, validate_network, ValidationReport, Violation};
