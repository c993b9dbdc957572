use super::min_flow::CostEdge;
use super::network::FlowNetwork;

/// mock network generation functions
fn build(n: usize, source: usize, sink: usize, edges: &[(usize, usize, i64)]) -> FlowNetwork<i64> {
    match FlowNetwork::from_edges(n, source, sink, edges) {
        Ok(network) => network,
        Err(e) => panic!("invalid mock network: {}", e),
    }
}

/// six vertices, max flow 16, min cut {1->3, 4->5}
pub fn mock_network_a() -> FlowNetwork<i64> {
    build(
        6,
        0,
        5,
        &[
            (0, 1, 10),
            (0, 2, 8),
            (1, 2, 5),
            (1, 3, 8),
            (2, 4, 10),
            (3, 4, 5),
            (3, 5, 10),
            (4, 5, 8),
        ],
    )
}

/// sink is unreachable, max flow 0
pub fn mock_network_disconnected() -> FlowNetwork<i64> {
    build(3, 0, 2, &[(0, 1, 5)])
}

/// network cited from Introduction to Algorithms (3rd ed.) Figure 26.1, max flow 23
pub fn mock_network_clrs() -> FlowNetwork<i64> {
    build(6, 0, 5, &CLRS_EDGES)
}

const CLRS_EDGES: [(usize, usize, i64); 9] = [
    (0, 1, 16),
    (0, 2, 13),
    (2, 1, 4),
    (1, 3, 12),
    (3, 2, 9),
    (2, 4, 14),
    (4, 3, 7),
    (3, 5, 20),
    (4, 5, 4),
];

/// capacities in both directions between 1 and 2, max flow 5
pub fn mock_network_antiparallel() -> FlowNetwork<i64> {
    build(
        4,
        0,
        3,
        &[(0, 1, 3), (0, 2, 2), (1, 2, 2), (2, 1, 2), (1, 3, 2), (2, 3, 3)],
    )
}

/// classic bad case for depth-first augmentation: a unit bridge between two heavy paths
pub fn mock_network_diamond(heavy: i64) -> FlowNetwork<i64> {
    build(
        4,
        0,
        3,
        &[(0, 1, heavy), (0, 2, heavy), (1, 2, 1), (1, 3, heavy), (2, 3, heavy)],
    )
}

/// fractional capacities, max flow 2.0
pub fn mock_network_float() -> FlowNetwork<f64> {
    let edges = [
        (0, 1, 0.5),
        (0, 2, 1.5),
        (1, 2, 0.25),
        (1, 3, 1.0),
        (2, 3, 1.5),
    ];
    match FlowNetwork::from_edges(4, 0, 3, &edges) {
        Ok(network) => network,
        Err(e) => panic!("invalid mock network: {}", e),
    }
}

/// cheap two-hop path (cost 2) and an expensive direct edge (cost 10), max flow 8
pub fn mock_cost_edges_c() -> Vec<CostEdge<i64>> {
    vec![
        CostEdge::new(0, 1, 5, 1.0),
        CostEdge::new(1, 2, 5, 1.0),
        CostEdge::new(0, 2, 3, 10.0),
    ]
}

/// the CLRS network with a cost of `1 + from` per unit
pub fn mock_cost_edges_clrs() -> Vec<CostEdge<i64>> {
    CLRS_EDGES
        .iter()
        .map(|&(from, to, capacity)| CostEdge::new(from, to, capacity, 1.0 + from as f64))
        .collect()
}
