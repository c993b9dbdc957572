//!
//! Augmenting path algorithms
//!
//! Both repeat: find a source-to-sink path of positive residual arcs, push its
//! bottleneck along every arc, until no path is left.
//!
//! * Ford-Fulkerson finds any path with a depth-first search.
//! * Edmonds-Karp finds a path with the fewest arcs by a breadth-first search,
//!   which bounds the number of augmentations by `O(VE)`.
//!
use super::super::flow_rate::FlowRateLike;
use super::super::network::FlowNetwork;
use super::{MaxFlowAlgorithm, MaxFlowResult};
use itertools::Itertools; // for tuple_windows
use log::trace;
use std::collections::VecDeque;

///
/// Push the bottleneck residual of `path` along each of its arcs.
/// Returns the pushed amount.
///
pub(crate) fn augment_along<F: FlowRateLike>(network: &mut FlowNetwork<F>, path: &[usize]) -> F {
    let amount = path
        .iter()
        .tuple_windows()
        .map(|(&u, &v)| network.residual(u, v))
        .reduce(FlowRateLike::min_rate)
        .unwrap_or_else(F::zero);
    for (&u, &v) in path.iter().tuple_windows() {
        network.add_flow(u, v, amount);
    }
    trace!("augment {} along {:?}", amount, path);
    amount
}

///
/// Depth-first path search without recursion.
///
/// The stack is the current walk from the source, and `cursor[v]` is the
/// position in `neighbors(v)` to resume from when the walk backtracks to `v`.
///
struct DepthFirstSearch {
    visited: Vec<bool>,
    cursor: Vec<usize>,
    stack: Vec<usize>,
}

impl DepthFirstSearch {
    fn new(n: usize) -> DepthFirstSearch {
        DepthFirstSearch {
            visited: vec![false; n],
            cursor: vec![0; n],
            stack: Vec::with_capacity(n),
        }
    }

    fn find_path<F: FlowRateLike>(&mut self, network: &FlowNetwork<F>) -> Option<Vec<usize>> {
        self.visited.fill(false);
        self.cursor.fill(0);
        self.stack.clear();

        let source = network.source();
        self.visited[source] = true;
        self.stack.push(source);

        while let Some(&u) = self.stack.last() {
            if u == network.sink() {
                return Some(self.stack.clone());
            }
            let neighbors = network.neighbors(u);
            let mut next = None;
            while self.cursor[u] < neighbors.len() {
                let v = neighbors[self.cursor[u]];
                self.cursor[u] += 1;
                if !self.visited[v] && network.residual(u, v).is_positive() {
                    next = Some(v);
                    break;
                }
            }
            match next {
                Some(v) => {
                    self.visited[v] = true;
                    self.stack.push(v);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

///
/// Breadth-first search of the residual graph.
/// Returns a path with the fewest arcs from source to sink.
///
fn find_shortest_path<F: FlowRateLike>(
    network: &FlowNetwork<F>,
    parent: &mut [Option<usize>],
) -> Option<Vec<usize>> {
    let source = network.source();
    let sink = network.sink();
    parent.fill(None);

    let mut queue = VecDeque::from([source]);
    parent[source] = Some(source);
    while let Some(u) = queue.pop_front() {
        if u == sink {
            break;
        }
        for &v in network.neighbors(u) {
            if parent[v].is_none() && network.residual(u, v).is_positive() {
                parent[v] = Some(u);
                queue.push_back(v);
            }
        }
    }

    parent[sink]?;
    let mut path = vec![sink];
    let mut v = sink;
    while v != source {
        v = parent[v]?;
        path.push(v);
    }
    path.reverse();
    Some(path)
}

///
/// Maximum flow by depth-first augmenting paths.
///
/// Terminates on integer capacities, but the number of augmentations
/// depends on the capacities, not only on the size of the network.
///
pub fn ford_fulkerson<F: FlowRateLike>(network: &mut FlowNetwork<F>) -> MaxFlowResult<F> {
    network.reset_flow();
    let mut search = DepthFirstSearch::new(network.vertex_count());
    let mut iterations = 0;
    while let Some(path) = search.find_path(network) {
        augment_along(network, &path);
        iterations += 1;
    }
    MaxFlowResult::from_network(network, iterations, MaxFlowAlgorithm::FordFulkerson)
}

///
/// Maximum flow by shortest augmenting paths, `O(VE^2)`.
///
pub fn edmonds_karp<F: FlowRateLike>(network: &mut FlowNetwork<F>) -> MaxFlowResult<F> {
    network.reset_flow();
    let mut parent = vec![None; network.vertex_count()];
    let mut iterations = 0;
    while let Some(path) = find_shortest_path(network, &mut parent) {
        augment_along(network, &path);
        iterations += 1;
    }
    MaxFlowResult::from_network(network, iterations, MaxFlowAlgorithm::EdmondsKarp)
}
