//! # `FlowNetwork`
//!
//! Dense capacity/flow matrices of a single-source single-sink network.
//!
//! The residual graph is never stored. It is the function
//! `residual(u, v) = capacity[u][v] - flow[u][v]`, evaluated on demand.
//!
//! `flow` is antisymmetric (`flow[u][v] == -flow[v][u]`), so a pair with
//! capacity in only one direction still has a residual arc backwards once flow
//! is pushed forwards. [`FlowNetwork::add_flow`] is the only way to change the
//! flow, and it updates both entries of a pair together.
//!
use super::error::{check_terminals, check_vertex, FlowError};
use super::flow_edge::FlowEdge;
use super::flow_rate::FlowRateLike;
use petgraph::graph::{DiGraph, NodeIndex};

/// Capacitated network with a flow.
///
/// Cloning produces an independent deep copy, which is how several algorithms
/// are run against the same input.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNetwork<F: FlowRateLike> {
    n: usize,
    source: usize,
    sink: usize,
    /// row-major `n * n`
    capacity: Vec<F>,
    /// row-major `n * n`, antisymmetric
    flow: Vec<F>,
    /// vertices sharing a capacity in either direction, i.e. every possible residual arc
    adjacency: Vec<Vec<usize>>,
}

impl<F: FlowRateLike> FlowNetwork<F> {
    ///
    /// Create an edgeless network of `n` vertices
    ///
    pub fn new(n: usize, source: usize, sink: usize) -> Result<FlowNetwork<F>, FlowError> {
        check_terminals(n, source, sink)?;
        Ok(FlowNetwork {
            n,
            source,
            sink,
            capacity: vec![F::zero(); n * n],
            flow: vec![F::zero(); n * n],
            adjacency: vec![Vec::new(); n],
        })
    }

    ///
    /// Create a network and add `(from, to, capacity)` edges
    ///
    pub fn from_edges(
        n: usize,
        source: usize,
        sink: usize,
        edges: &[(usize, usize, F)],
    ) -> Result<FlowNetwork<F>, FlowError> {
        let mut network = FlowNetwork::new(n, source, sink)?;
        for &(from, to, capacity) in edges {
            network.add_edge(from, to, capacity)?;
        }
        Ok(network)
    }

    ///
    /// Add capacity on `from -> to`.
    /// Parallel edges accumulate into a single matrix entry.
    ///
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: F) -> Result<(), FlowError> {
        check_vertex(from, self.n)?;
        check_vertex(to, self.n)?;
        if capacity < F::zero() {
            return Err(FlowError::NegativeCapacity { from, to });
        }
        let i = self.index(from, to);
        self.capacity[i] += capacity;
        // a self loop can never carry flow towards the sink
        if from != to && !self.adjacency[from].contains(&to) {
            self.adjacency[from].push(to);
            self.adjacency[to].push(from);
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }
    pub fn source(&self) -> usize {
        self.source
    }
    pub fn sink(&self) -> usize {
        self.sink
    }
    pub fn capacity(&self, u: usize, v: usize) -> F {
        self.capacity[self.index(u, v)]
    }
    pub fn flow(&self, u: usize, v: usize) -> F {
        self.flow[self.index(u, v)]
    }
    /// Remaining forward-sendable amount on `u -> v`
    pub fn residual(&self, u: usize, v: usize) -> F {
        let i = self.index(u, v);
        self.capacity[i] - self.flow[i]
    }
    /// Vertices `v` for which `u -> v` can ever have a positive residual
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    ///
    /// Send `amount` along `u -> v` (negative cancels).
    /// Keeps `flow[v][u] == -flow[u][v]`.
    ///
    pub fn add_flow(&mut self, u: usize, v: usize, amount: F) {
        let i = self.index(u, v);
        let j = self.index(v, u);
        self.flow[i] += amount;
        self.flow[j] -= amount;
    }

    pub fn reset_flow(&mut self) {
        for f in self.flow.iter_mut() {
            *f = F::zero();
        }
    }

    /// Net flow leaving the source
    pub fn current_flow(&self) -> F {
        (0..self.n).map(|v| self.flow(self.source, v)).sum()
    }

    ///
    /// Edges with positive capacity and the flow they carry.
    ///
    /// When both `u -> v` and `v -> u` have capacity, the net flow is reported
    /// on the edge it runs along and the other edge carries zero.
    ///
    pub fn to_edge_list(&self) -> Vec<FlowEdge<F>> {
        let mut edges = Vec::new();
        for u in 0..self.n {
            for v in 0..self.n {
                let capacity = self.capacity(u, v);
                if capacity > F::zero() {
                    edges.push(FlowEdge::new(u, v, capacity, self.flow(u, v).positive_part()));
                }
            }
        }
        edges
    }

    ///
    /// Convert into a petgraph DiGraph whose node `i` is the vertex `i`
    ///
    pub fn to_graph(&self) -> DiGraph<(), FlowEdge<F>> {
        let mut graph = DiGraph::with_capacity(self.n, self.arc_count());
        for _ in 0..self.n {
            graph.add_node(());
        }
        for e in self.to_edge_list() {
            graph.add_edge(NodeIndex::new(e.from), NodeIndex::new(e.to), e);
        }
        graph
    }

    ///
    /// Residual graph as a petgraph DiGraph: one arc `u -> v` weighted by
    /// `residual(u, v)` for each pair with a positive residual
    ///
    pub fn to_residue_graph(&self) -> DiGraph<(), F> {
        let mut graph = DiGraph::with_capacity(self.n, self.arc_count());
        for _ in 0..self.n {
            graph.add_node(());
        }
        for u in 0..self.n {
            for &v in self.neighbors(u) {
                let r = self.residual(u, v);
                if r.is_positive() {
                    graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), r);
                }
            }
        }
        graph
    }

    /// number of ordered pairs `u -> v` that can carry a residual arc
    fn arc_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn index(&self, u: usize, v: usize) -> usize {
        u * self.n + v
    }
}
