//! Residue graph of a min-cost-flow problem
//! - ResidueEdge
//! - ResidueGraph
//! - ResidueDirection
//!
//! Unlike the max-flow matrix, the residue graph here is an adjacency list
//! (`O(V + E)` memory). Each input edge `i` becomes two arcs:
//!
//! ```text
//! 2i    : from -> to   (capacity, +cost)  Up
//! 2i+1  : to   -> from (0,        -cost)  Down
//! ```
//!
//! so the partner of an arc is found by flipping the lowest bit of its index.
//!
use super::super::error::FlowError;
use super::super::flow_edge::Cost;
use super::super::flow_rate::FlowRateLike;
use super::base::CostEdge;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef; // for EdgeReference.id()
use std::collections::VecDeque;

/// Distances closer than this are treated as equal when relaxing
const COST_EPSILON: Cost = 0.000000001;

/// Edge attributes used in ResidueGraph
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ResidueEdge<F: FlowRateLike> {
    /// The movable amount of the flow
    pub count: F,
    /// Cost of the unit change of this flow
    pub weight: Cost,
    /// Index of the edge in the input list
    pub target: usize,
    /// +1 or -1
    pub direction: ResidueDirection,
}

impl<F: FlowRateLike> ResidueEdge<F> {
    pub fn new(count: F, weight: Cost, target: usize, direction: ResidueDirection) -> ResidueEdge<F> {
        ResidueEdge {
            count,
            weight,
            target,
            direction,
        }
    }
}

/// Residue direction enum
/// residue edge has two types
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ResidueDirection {
    /// Up edge: it can increase(+1) flow
    #[default]
    Up,
    /// Down edge: it can decrease(-1) flow
    Down,
}

impl std::fmt::Display for ResidueDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ResidueDirection::Up => write!(f, "+"),
            ResidueDirection::Down => write!(f, "-"),
        }
    }
}

/// ResidueGraph definition
pub type ResidueGraph<F> = DiGraph<(), ResidueEdge<F>>;

///
/// Convert the edge list with zero flow into ResidueGraph.
///
/// edge `i`
/// v -> w
///  e = (u, c)
///
/// into
///
/// v -> w
///  e1 = (u, +c)
/// w -> v
///  e2 = (0, -c)
pub fn edges_to_residue<F: FlowRateLike>(n: usize, edges: &[CostEdge<F>]) -> ResidueGraph<F> {
    let mut rg: ResidueGraph<F> = DiGraph::with_capacity(n, 2 * edges.len());
    for _ in 0..n {
        rg.add_node(());
    }
    for (i, e) in edges.iter().enumerate() {
        let v = NodeIndex::new(e.from);
        let w = NodeIndex::new(e.to);
        rg.add_edge(v, w, ResidueEdge::new(e.capacity, e.cost, i, ResidueDirection::Up));
        rg.add_edge(w, v, ResidueEdge::new(F::zero(), -e.cost, i, ResidueDirection::Down));
    }
    rg
}

/// The reverse arc paired with `e`
pub fn partner(e: EdgeIndex) -> EdgeIndex {
    EdgeIndex::new(e.index() ^ 1)
}

///
/// Read the flow of each of the `m` input edges off the residue graph.
///
/// The count of a Down arc is the amount that can be taken back, i.e. the
/// flow currently on its target edge.
///
pub fn residue_to_flow<F: FlowRateLike>(rg: &ResidueGraph<F>, m: usize) -> Vec<F> {
    let mut flow = vec![F::zero(); m];
    for ew in rg.edge_references() {
        let e = ew.weight();
        if e.direction == ResidueDirection::Down {
            flow[e.target] += e.count;
        }
    }
    flow
}

///
/// Cheapest path from `source` to `sink` over arcs with positive count.
///
/// Label-correcting (queue-based Bellman-Ford) search, so the negative
/// weights of Down arcs are fine. Returns the arcs of the path and its cost
/// per unit flow, or `None` if the sink is unreachable. A label path reaching
/// `n` arcs means a negative cycle, reported as `FlowError::NegativeCycle`.
///
pub fn find_cheapest_path<F: FlowRateLike>(
    rg: &ResidueGraph<F>,
    source: NodeIndex,
    sink: NodeIndex,
) -> Result<Option<(Vec<EdgeIndex>, Cost)>, FlowError> {
    let n = rg.node_count();
    let mut dist: Vec<Option<Cost>> = vec![None; n];
    let mut pred: Vec<Option<EdgeIndex>> = vec![None; n];
    let mut len = vec![0usize; n];
    let mut queued = vec![false; n];
    let mut queue = VecDeque::from([source]);

    dist[source.index()] = Some(0.0);
    queued[source.index()] = true;

    while let Some(v) = queue.pop_front() {
        queued[v.index()] = false;
        let dv = match dist[v.index()] {
            Some(d) => d,
            None => continue,
        };
        for er in rg.edges(v) {
            if !er.weight().count.is_positive() {
                continue;
            }
            let w = er.target();
            let candidate = dv + er.weight().weight;
            let improves = match dist[w.index()] {
                Some(dw) => candidate < dw - COST_EPSILON,
                None => true,
            };
            if improves {
                dist[w.index()] = Some(candidate);
                pred[w.index()] = Some(er.id());
                len[w.index()] = len[v.index()] + 1;
                if len[w.index()] >= n {
                    return Err(FlowError::NegativeCycle);
                }
                if !queued[w.index()] {
                    queued[w.index()] = true;
                    queue.push_back(w);
                }
            }
        }
    }

    let cost = match dist[sink.index()] {
        Some(cost) => cost,
        None => return Ok(None),
    };
    let mut path = Vec::new();
    let mut v = sink;
    while v != source {
        let e = match pred[v.index()] {
            Some(e) => e,
            None => return Ok(None),
        };
        path.push(e);
        v = rg.edge_endpoints(e).map(|(from, _)| from).unwrap_or(source);
    }
    path.reverse();
    Ok(Some((path, cost)))
}

/// minimum count along the arcs
pub fn bottleneck<F: FlowRateLike>(rg: &ResidueGraph<F>, edges: &[EdgeIndex]) -> F {
    edges
        .iter()
        .map(|&e| rg[e].count)
        .reduce(FlowRateLike::min_rate)
        .unwrap_or_else(F::zero)
}

///
/// Move `amount` of flow along the arcs, shifting count to each partner
///
pub fn change_flow_along_edges<F: FlowRateLike>(
    rg: &mut ResidueGraph<F>,
    edges: &[EdgeIndex],
    amount: F,
) {
    for &e in edges {
        rg[e].count -= amount;
        rg[partner(e)].count += amount;
    }
}

/// Vertices visited by a path given as arcs
pub fn edge_path_to_node_path<F: FlowRateLike>(
    rg: &ResidueGraph<F>,
    source: NodeIndex,
    edges: &[EdgeIndex],
) -> Vec<usize> {
    let mut nodes = vec![source.index()];
    nodes.extend(
        edges
            .iter()
            .filter_map(|&e| rg.edge_endpoints(e))
            .map(|(_, to)| to.index()),
    );
    nodes
}
