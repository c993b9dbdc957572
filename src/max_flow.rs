//!
//! Maximum flow algorithms on [`FlowNetwork`].
//!
//! Every algorithm is a plain function `&mut FlowNetwork -> MaxFlowResult`.
//! It zeroes the flow, runs to completion, leaves one maximum flow in the
//! network and reports it together with the minimum cut read off the final
//! residual graph.
//!
//! * [`ford_fulkerson`]: depth-first augmenting paths
//! * [`edmonds_karp`]: breadth-first (shortest) augmenting paths, `O(VE^2)`
//! * [`push_relabel`]: preflow push with height labels
//! * [`isap`]: shortest augmenting paths on exact distance labels with gap heuristic
//!
pub mod augmenting;
pub mod isap;
pub mod push_relabel;

pub use augmenting::{edmonds_karp, ford_fulkerson};
pub use isap::{isap, IsapSearch, IsapState};
pub use push_relabel::{push_relabel, push_relabel_with, ActiveVertexPolicy, PushRelabelOptions};

use super::flow_edge::FlowEdge;
use super::flow_rate::FlowRateLike;
use super::min_cut::{min_cut, MinCut};
use super::network::FlowNetwork;
use log::{debug, warn};

/// Algorithm that produced a [`MaxFlowResult`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MaxFlowAlgorithm {
    FordFulkerson,
    EdmondsKarp,
    PushRelabel,
    Isap,
}

impl MaxFlowAlgorithm {
    pub const ALL: [MaxFlowAlgorithm; 4] = [
        MaxFlowAlgorithm::FordFulkerson,
        MaxFlowAlgorithm::EdmondsKarp,
        MaxFlowAlgorithm::PushRelabel,
        MaxFlowAlgorithm::Isap,
    ];
}

impl std::fmt::Display for MaxFlowAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MaxFlowAlgorithm::FordFulkerson => write!(f, "ford-fulkerson"),
            MaxFlowAlgorithm::EdmondsKarp => write!(f, "edmonds-karp"),
            MaxFlowAlgorithm::PushRelabel => write!(f, "push-relabel"),
            MaxFlowAlgorithm::Isap => write!(f, "isap"),
        }
    }
}

impl std::str::FromStr for MaxFlowAlgorithm {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ford-fulkerson" => Ok(MaxFlowAlgorithm::FordFulkerson),
            "edmonds-karp" => Ok(MaxFlowAlgorithm::EdmondsKarp),
            "push-relabel" => Ok(MaxFlowAlgorithm::PushRelabel),
            "isap" => Ok(MaxFlowAlgorithm::Isap),
            _ => Err(()),
        }
    }
}

/// Result of a maximum flow computation
#[derive(Debug, Clone, PartialEq)]
pub struct MaxFlowResult<F: FlowRateLike> {
    pub max_flow: F,
    pub min_cut: MinCut<F>,
    /// every edge with positive capacity and its flow
    pub flow_edges: Vec<FlowEdge<F>>,
    /// augmentations, or push/relabel operations for push-relabel
    pub iterations: usize,
    pub algorithm: MaxFlowAlgorithm,
}

impl<F: FlowRateLike> MaxFlowResult<F> {
    /// Summarize a network holding the final flow of `algorithm`
    pub(crate) fn from_network(
        network: &FlowNetwork<F>,
        iterations: usize,
        algorithm: MaxFlowAlgorithm,
    ) -> MaxFlowResult<F> {
        let max_flow = network.current_flow();
        debug!(
            "{} finished: n={} max_flow={} iterations={}",
            algorithm,
            network.vertex_count(),
            max_flow,
            iterations
        );
        let min_cut = min_cut(network);
        if let Some(e) = min_cut.cut_edges.iter().find(|e| !e.is_saturated()) {
            warn!("{}: cut edge {} is not saturated", algorithm, e);
        }
        MaxFlowResult {
            max_flow,
            min_cut,
            flow_edges: network.to_edge_list(),
            iterations,
            algorithm,
        }
    }
}

///
/// Run `algorithm` (with its default options) on the network
///
pub fn max_flow<F: FlowRateLike>(
    network: &mut FlowNetwork<F>,
    algorithm: MaxFlowAlgorithm,
) -> MaxFlowResult<F> {
    match algorithm {
        MaxFlowAlgorithm::FordFulkerson => ford_fulkerson(network),
        MaxFlowAlgorithm::EdmondsKarp => edmonds_karp(network),
        MaxFlowAlgorithm::PushRelabel => push_relabel(network),
        MaxFlowAlgorithm::Isap => isap(network),
    }
}

///
/// Run each algorithm on its own deep copy of `network`.
/// The input network is left untouched.
///
pub fn compare_algorithms<F: FlowRateLike>(
    network: &FlowNetwork<F>,
    algorithms: &[MaxFlowAlgorithm],
) -> Vec<MaxFlowResult<F>> {
    algorithms
        .iter()
        .map(|&algorithm| {
            let mut copy = network.clone();
            max_flow(&mut copy, algorithm)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::mocks::*;
    use super::super::validate::validate_network;
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn algorithm_name_roundtrip() {
        for algorithm in MaxFlowAlgorithm::ALL {
            let name = algorithm.to_string();
            assert_eq!(name.parse::<MaxFlowAlgorithm>(), Ok(algorithm));
        }
        assert_eq!("dinic".parse::<MaxFlowAlgorithm>(), Err(()));
    }

    #[test]
    fn case_a_all_algorithms() {
        let g = mock_network_a();
        for r in compare_algorithms(&g, &MaxFlowAlgorithm::ALL) {
            assert_eq!(r.max_flow, 16, "{}", r.algorithm);
            assert_eq!(r.min_cut.capacity(), 16);
            assert_eq!(r.min_cut.source_set, vec![0, 1, 2, 4]);
            assert_eq!(r.min_cut.sink_set, vec![3, 5]);
        }
        // the input network was not touched
        assert_eq!(g.current_flow(), 0);
    }

    #[test]
    fn case_b_disconnected() {
        for algorithm in MaxFlowAlgorithm::ALL {
            let mut g = mock_network_disconnected();
            let r = max_flow(&mut g, algorithm);
            assert_eq!(r.max_flow, 0);
            if algorithm != MaxFlowAlgorithm::PushRelabel {
                // push-relabel still saturates 0->1 and returns the excess
                assert_eq!(r.iterations, 0);
            }
            assert_eq!(r.min_cut.source_set, vec![0, 1]);
            assert_eq!(r.min_cut.sink_set, vec![2]);
            assert!(r.min_cut.cut_edges.is_empty());
        }
    }

    #[test]
    fn clrs_network() {
        let g = mock_network_clrs();
        for r in compare_algorithms(&g, &MaxFlowAlgorithm::ALL) {
            assert_eq!(r.max_flow, 23, "{}", r.algorithm);
            assert_eq!(r.min_cut.capacity(), 23);
            assert!(r.min_cut.cut_edges.iter().all(FlowEdge::is_saturated));
        }
    }

    #[test]
    fn antiparallel_network() {
        let g = mock_network_antiparallel();
        for algorithm in MaxFlowAlgorithm::ALL {
            let mut copy = g.clone();
            let r = max_flow(&mut copy, algorithm);
            assert_eq!(r.max_flow, 5, "{}", algorithm);
            assert!(validate_network(&copy).is_valid());
        }
    }

    #[test]
    fn float_capacities() {
        let g = mock_network_float();
        for r in compare_algorithms(&g, &MaxFlowAlgorithm::ALL) {
            assert!(r.max_flow.sim_eq(2.0), "{} {}", r.algorithm, r.max_flow);
            assert!(r.min_cut.capacity().sim_eq(r.max_flow));
        }
    }

    #[test]
    fn rerun_resets_flow() {
        let mut g = mock_network_a();
        let first = edmonds_karp(&mut g);
        let second = edmonds_karp(&mut g);
        assert_eq!(first, second);
    }

    fn arb_network() -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
        (2usize..13).prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n, 0i64..20), 0..60),
            )
        })
    }

    /// every algorithm with its defaults, then push-relabel with the FIFO policy
    fn run_all(g: &FlowNetwork<i64>) -> Vec<(MaxFlowResult<i64>, FlowNetwork<i64>)> {
        let mut runs: Vec<_> = MaxFlowAlgorithm::ALL
            .iter()
            .map(|&algorithm| {
                let mut copy = g.clone();
                (max_flow(&mut copy, algorithm), copy)
            })
            .collect();
        let mut copy = g.clone();
        let fifo = push_relabel_with(
            &mut copy,
            PushRelabelOptions {
                policy: ActiveVertexPolicy::Fifo,
            },
        );
        runs.push((fifo, copy));
        runs
    }

    proptest! {
        #[test]
        fn algorithms_agree_on_random_networks((n, edges) in arb_network()) {
            let g = FlowNetwork::from_edges(n, 0, n - 1, &edges).unwrap();
            let expected = edmonds_karp(&mut g.clone()).max_flow;
            for (r, _) in run_all(&g) {
                prop_assert_eq!(r.max_flow, expected, "{}", r.algorithm);
                prop_assert_eq!(r.min_cut.capacity(), r.max_flow);
                prop_assert!(r.min_cut.cut_edges.iter().all(FlowEdge::is_saturated));
            }
        }

        #[test]
        fn validator_accepts_every_algorithm((n, edges) in arb_network()) {
            let g = FlowNetwork::from_edges(n, 0, n - 1, &edges).unwrap();
            for (r, network) in run_all(&g) {
                let report = validate_network(&network);
                prop_assert!(report.is_valid(), "{}: {:?}", r.algorithm, report.violations);
            }
        }
    }
}
