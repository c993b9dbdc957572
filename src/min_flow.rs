pub mod base;
pub mod residue;

pub use base::CostEdge;

use super::error::{check_terminals, FlowError};
use super::flow_edge::{Cost, FlowEdge};
use super::flow_rate::FlowRateLike;
use itertools::Itertools;
use log::{debug, trace};
use petgraph::graph::NodeIndex;
use residue::{
    bottleneck, change_flow_along_edges, edge_path_to_node_path, edges_to_residue,
    find_cheapest_path, residue_to_flow, ResidueGraph,
};

//
// public types
//

/// One augmentation of the successive shortest paths loop
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentingPath<F: FlowRateLike> {
    /// vertices from source to sink
    pub path: Vec<usize>,
    /// amount pushed along the path
    pub flow: F,
    /// cost per unit flow of the path
    pub cost: Cost,
}

impl<F: FlowRateLike> std::fmt::Display for AugmentingPath<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} flow={} cost={}",
            self.path.iter().join("->"),
            self.flow,
            self.cost
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MinCostFlowResult<F: FlowRateLike> {
    pub max_flow: F,
    pub min_cost: Cost,
    /// each input edge, in input order, with its flow and cost
    pub flow_edges: Vec<FlowEdge<F>>,
    /// augmentations in the order they were made, cheapest first
    pub paths: Vec<AugmentingPath<F>>,
}

//
// public functions
//

///
/// Find the maximum flow of minimum cost from `source` to `sink`
///
pub fn min_cost_max_flow<F: FlowRateLike>(
    n: usize,
    edges: &[CostEdge<F>],
    source: usize,
    sink: usize,
) -> Result<MinCostFlowResult<F>, FlowError> {
    successive_shortest_paths(n, edges, source, sink, None)
}

///
/// Find the cheapest flow of value at most `limit` from `source` to `sink`.
/// The flow is smaller than `limit` only when the network cannot carry more.
///
pub fn min_cost_flow<F: FlowRateLike>(
    n: usize,
    edges: &[CostEdge<F>],
    source: usize,
    sink: usize,
    limit: F,
) -> Result<MinCostFlowResult<F>, FlowError> {
    successive_shortest_paths(n, edges, source, sink, Some(limit))
}

//
// internal functions
//

///
/// Augment along the currently cheapest residual path until the sink is
/// unreachable or `limit` is reached.
///
/// Each path is a shortest one, so no negative cycle ever appears in the
/// residue graph and the flow stays cost-optimal for its value.
///
fn successive_shortest_paths<F: FlowRateLike>(
    n: usize,
    edges: &[CostEdge<F>],
    source: usize,
    sink: usize,
    limit: Option<F>,
) -> Result<MinCostFlowResult<F>, FlowError> {
    check_terminals(n, source, sink)?;
    for e in edges {
        e.check(n)?;
    }

    let mut rg = edges_to_residue(n, edges);
    let (s, t) = (NodeIndex::new(source), NodeIndex::new(sink));
    let mut max_flow = F::zero();
    let mut min_cost: Cost = 0.0;
    let mut paths = Vec::new();

    loop {
        let remaining = match limit {
            Some(limit) => {
                let remaining = limit - max_flow;
                if !remaining.is_positive() {
                    break;
                }
                Some(remaining)
            }
            None => None,
        };
        let (path, cost) = match find_cheapest_path(&rg, s, t)? {
            Some(found) => found,
            None => break,
        };
        let mut amount = bottleneck(&rg, &path);
        if let Some(remaining) = remaining {
            amount = amount.min_rate(remaining);
        }
        change_flow_along_edges(&mut rg, &path, amount);
        max_flow += amount;
        min_cost += amount.to_f64() * cost;

        let augmenting = AugmentingPath {
            path: edge_path_to_node_path(&rg, s, &path),
            flow: amount,
            cost,
        };
        trace!("augment {}", augmenting);
        paths.push(augmenting);
    }

    debug!(
        "min-cost flow finished: n={} max_flow={} min_cost={} paths={}",
        n,
        max_flow,
        min_cost,
        paths.len()
    );
    Ok(MinCostFlowResult {
        max_flow,
        min_cost,
        flow_edges: to_flow_edges(&rg, edges),
        paths,
    })
}

fn to_flow_edges<F: FlowRateLike>(rg: &ResidueGraph<F>, edges: &[CostEdge<F>]) -> Vec<FlowEdge<F>> {
    edges
        .iter()
        .zip(residue_to_flow(rg, edges.len()))
        .map(|(e, flow)| FlowEdge::with_cost(e.from, e.to, e.capacity, flow, e.cost))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::max_flow::{edmonds_karp, MaxFlowAlgorithm};
    use super::super::mocks::*;
    use super::super::network::FlowNetwork;
    use super::super::validate::validate_edges;
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn case_c_prefers_cheap_path() {
        let edges = mock_cost_edges_c();
        let r = min_cost_max_flow(3, &edges, 0, 2).unwrap();
        assert_eq!(r.max_flow, 8);
        assert_eq!(r.min_cost, 40.0);
        assert_eq!(
            r.paths,
            vec![
                AugmentingPath {
                    path: vec![0, 1, 2],
                    flow: 5,
                    cost: 2.0
                },
                AugmentingPath {
                    path: vec![0, 2],
                    flow: 3,
                    cost: 10.0
                },
            ]
        );
        assert_eq!(r.paths[0].to_string(), "0->1->2 flow=5 cost=2");
        assert_eq!(
            r.flow_edges,
            vec![
                FlowEdge::with_cost(0, 1, 5, 5, 1.0),
                FlowEdge::with_cost(1, 2, 5, 5, 1.0),
                FlowEdge::with_cost(0, 2, 3, 3, 10.0),
            ]
        );
        assert!(validate_edges(3, 0, 2, &r.flow_edges).is_valid());
    }

    #[test]
    fn limited_flow_uses_only_cheap_path() {
        let edges = mock_cost_edges_c();
        let r = min_cost_flow(3, &edges, 0, 2, 6).unwrap();
        assert_eq!(r.max_flow, 6);
        assert_eq!(r.min_cost, 5.0 * 2.0 + 1.0 * 10.0);
        assert_eq!(r.paths.len(), 2);
        assert_eq!(r.paths[1].flow, 1);

        let r = min_cost_flow(3, &edges, 0, 2, 4).unwrap();
        assert_eq!(r.max_flow, 4);
        assert_eq!(r.min_cost, 8.0);
        assert_eq!(r.paths.len(), 1);
    }

    #[test]
    fn reverse_arc_reroutes_flow() {
        // the first (cheapest) path 0-1-2-3 must later be partly undone via 2->1
        let edges = vec![
            CostEdge::new(0, 1, 1i64, 1.0),
            CostEdge::new(0, 2, 1, 5.0),
            CostEdge::new(1, 2, 1, 1.0),
            CostEdge::new(1, 3, 1, 5.0),
            CostEdge::new(2, 3, 1, 1.0),
        ];
        let r = min_cost_max_flow(4, &edges, 0, 3).unwrap();
        assert_eq!(r.max_flow, 2);
        assert_eq!(r.min_cost, 12.0);
        assert_eq!(r.paths[0].path, vec![0, 1, 2, 3]);
        assert_eq!(r.paths[1].path, vec![0, 2, 1, 3]);
        assert_eq!(r.paths[1].cost, 9.0);
        // edge 1->2 is cancelled in the end
        assert_eq!(r.flow_edges[2].flow, 0);
        assert!(validate_edges(4, 0, 3, &r.flow_edges).is_valid());
    }

    #[test]
    fn max_flow_agrees_with_edmonds_karp() {
        let edges = mock_cost_edges_clrs();
        let r = min_cost_max_flow(6, &edges, 0, 5).unwrap();

        let triples: Vec<(usize, usize, i64)> =
            edges.iter().map(|e| (e.from, e.to, e.capacity)).collect();
        let mut g = FlowNetwork::from_edges(6, 0, 5, &triples).unwrap();
        let ek = edmonds_karp(&mut g);
        assert_eq!(ek.algorithm, MaxFlowAlgorithm::EdmondsKarp);
        assert_eq!(r.max_flow, ek.max_flow);
        assert!(validate_edges(6, 0, 5, &r.flow_edges).is_valid());
    }

    #[test]
    fn disconnected_is_empty() {
        let edges = vec![CostEdge::new(0, 1, 5i64, 1.0)];
        let r = min_cost_max_flow(3, &edges, 0, 2).unwrap();
        assert_eq!(r.max_flow, 0);
        assert_eq!(r.min_cost, 0.0);
        assert!(r.paths.is_empty());
    }

    #[test]
    fn configuration_errors() {
        let edges = vec![CostEdge::new(0, 4, 5i64, 1.0)];
        assert_eq!(
            min_cost_max_flow(3, &edges, 0, 2),
            Err(FlowError::VertexOutOfRange {
                vertex: 4,
                vertex_count: 3
            })
        );
        assert_eq!(
            min_cost_max_flow::<i64>(3, &[], 1, 1),
            Err(FlowError::IdenticalTerminals(1))
        );
    }

    fn arb_cost_network() -> impl Strategy<Value = (usize, Vec<CostEdge<i64>>)> {
        (2usize..9).prop_flat_map(|n| {
            let edge = (0..n, 0..n, 0i64..20, 0u8..10)
                .prop_map(|(from, to, capacity, cost)| CostEdge::new(from, to, capacity, cost as Cost));
            (Just(n), prop::collection::vec(edge, 0..30))
        })
    }

    /// arcs `(from, to, cost)` of the residual graph of a finished run
    fn residual_arcs(flow_edges: &[FlowEdge<i64>]) -> Vec<(usize, usize, Cost)> {
        let mut arcs = Vec::new();
        for e in flow_edges {
            let cost = e.cost.unwrap_or(0.0);
            if e.flow < e.capacity {
                arcs.push((e.from, e.to, cost));
            }
            if e.flow > 0 {
                arcs.push((e.to, e.from, -cost));
            }
        }
        arcs
    }

    /// Bellman-Ford from a virtual root connected to every vertex
    fn has_negative_cycle(n: usize, arcs: &[(usize, usize, Cost)]) -> bool {
        let mut dist = vec![0.0; n];
        for _ in 0..n {
            let mut changed = false;
            for &(u, v, cost) in arcs {
                if dist[u] + cost < dist[v] - 1e-9 {
                    dist[v] = dist[u] + cost;
                    changed = true;
                }
            }
            if !changed {
                return false;
            }
        }
        true
    }

    #[test]
    fn negative_cycle_check() {
        assert!(has_negative_cycle(2, &[(0, 1, 1.0), (1, 0, -2.0)]));
        assert!(!has_negative_cycle(2, &[(0, 1, 1.0), (1, 0, -1.0)]));
        let r = min_cost_max_flow(3, &mock_cost_edges_c(), 0, 2).unwrap();
        assert!(!has_negative_cycle(3, &residual_arcs(&r.flow_edges)));
    }

    proptest! {
        #[test]
        fn min_cost_flow_is_optimal_on_random_networks((n, edges) in arb_cost_network()) {
            let r = min_cost_max_flow(n, &edges, 0, n - 1).unwrap();

            let triples: Vec<(usize, usize, i64)> =
                edges.iter().map(|e| (e.from, e.to, e.capacity)).collect();
            let mut g = FlowNetwork::from_edges(n, 0, n - 1, &triples).unwrap();
            prop_assert_eq!(r.max_flow, edmonds_karp(&mut g).max_flow);

            let report = validate_edges(n, 0, n - 1, &r.flow_edges);
            prop_assert!(report.is_valid(), "{:?}", report.violations);

            let total: Cost = r
                .flow_edges
                .iter()
                .map(|e| e.flow as Cost * e.cost.unwrap_or(0.0))
                .sum();
            prop_assert!((r.min_cost - total).abs() < 1e-6, "{} != {}", r.min_cost, total);

            prop_assert!(!has_negative_cycle(n, &residual_arcs(&r.flow_edges)));
        }
    }
}
