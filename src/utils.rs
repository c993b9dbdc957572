//!
//! utils
//!
use super::flow_rate::FlowRateLike;
use super::network::FlowNetwork;
use log::debug;
use petgraph::dot::Dot;

///
/// Graphviz rendering of the network, each edge labeled with its flow
///
pub fn to_dot_with_flow<F: FlowRateLike>(network: &FlowNetwork<F>) -> String {
    let graph = network.to_graph();
    format!("{:?}", Dot::with_config(&graph, &[]))
}

///
/// Log the rendering at debug level
///
pub fn draw_with_flow<F: FlowRateLike>(network: &FlowNetwork<F>) {
    debug!("{}", to_dot_with_flow(network));
}

#[cfg(test)]
mod tests {
    use super::super::max_flow::edmonds_karp;
    use super::super::mocks::mock_network_disconnected;
    use super::*;

    #[test]
    fn dot_contains_edges() {
        let mut g = mock_network_disconnected();
        edmonds_karp(&mut g);
        draw_with_flow(&g);
        let dot = to_dot_with_flow(&g);
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("0 -> 1"));
    }
}
