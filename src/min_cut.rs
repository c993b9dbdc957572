//!
//! Minimum cut of a network holding a maximum flow
//!
//! The source side is everything reachable from the source by positive
//! residual arcs. Every edge leaving it is saturated, so its capacity
//! equals the value of the flow (max-flow/min-cut duality).
//!
use super::flow_edge::FlowEdge;
use super::flow_rate::FlowRateLike;
use super::network::FlowNetwork;
use petgraph::graph::NodeIndex;
use petgraph::visit::{Dfs, VisitMap};

/// Partition `(source_set, sink_set)` and the edges crossing it forwards
#[derive(Debug, Clone, PartialEq)]
pub struct MinCut<F: FlowRateLike> {
    pub source_set: Vec<usize>,
    pub sink_set: Vec<usize>,
    /// edges `u -> v` with positive capacity, `u` in source_set and `v` in sink_set
    pub cut_edges: Vec<FlowEdge<F>>,
}

impl<F: FlowRateLike> MinCut<F> {
    /// sum of capacities of the cut edges
    pub fn capacity(&self) -> F {
        self.cut_edges.iter().map(|e| e.capacity).sum()
    }
}

///
/// Extract the cut from the residual graph of the current flow
///
pub fn min_cut<F: FlowRateLike>(network: &FlowNetwork<F>) -> MinCut<F> {
    let rg = network.to_residue_graph();
    let mut dfs = Dfs::new(&rg, NodeIndex::new(network.source()));
    while let Some(_nx) = dfs.next(&rg) {}

    // node i of the residue graph is vertex i
    let reached: Vec<bool> = rg
        .node_indices()
        .map(|node| dfs.discovered.is_visited(&node))
        .collect();
    let (source_set, sink_set): (Vec<usize>, Vec<usize>) =
        (0..network.vertex_count()).partition(|&v| reached[v]);
    let cut_edges = network
        .to_edge_list()
        .into_iter()
        .filter(|e| reached[e.from] && !reached[e.to])
        .collect();

    MinCut {
        source_set,
        sink_set,
        cut_edges,
    }
}
