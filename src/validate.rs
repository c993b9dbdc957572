//!
//! Flow validation, independent of the algorithm that produced the flow
//!
//! Checks
//! - capacity constraint `0 <= f(e) <= u(e)`
//! - flow constraint: inflow equals outflow at each non-terminal vertex
//! - antisymmetry `flow[u][v] == -flow[v][u]` of a [`FlowNetwork`]
//!
//! Violations are collected into a [`ValidationReport`], never raised.
//! Comparisons use the `eps()` tolerance of the flow type.
//!
use super::flow_edge::FlowEdge;
use super::flow_rate::FlowRateLike;
use super::network::FlowNetwork;

#[derive(Debug, Clone, PartialEq)]
pub enum Violation<F: FlowRateLike> {
    CapacityExceeded {
        from: usize,
        to: usize,
        flow: F,
        capacity: F,
    },
    NegativeFlow {
        from: usize,
        to: usize,
        flow: F,
    },
    Antisymmetry {
        u: usize,
        v: usize,
        forward: F,
        backward: F,
    },
    Conservation {
        vertex: usize,
        inflow: F,
        outflow: F,
    },
}

impl<F: FlowRateLike> std::fmt::Display for Violation<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::CapacityExceeded {
                from,
                to,
                flow,
                capacity,
            } => write!(f, "flow {} on {}->{} exceeds capacity {}", flow, from, to, capacity),
            Violation::NegativeFlow { from, to, flow } => {
                write!(f, "negative flow {} on {}->{}", flow, from, to)
            }
            Violation::Antisymmetry {
                u,
                v,
                forward,
                backward,
            } => write!(
                f,
                "flow[{}][{}]={} is not the negation of flow[{}][{}]={}",
                u, v, forward, v, u, backward
            ),
            Violation::Conservation {
                vertex,
                inflow,
                outflow,
            } => write!(f, "vertex {} has inflow {} but outflow {}", vertex, inflow, outflow),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport<F: FlowRateLike> {
    pub violations: Vec<Violation<F>>,
}

impl<F: FlowRateLike> ValidationReport<F> {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

///
/// Validate a list of edges with flows on `n` vertices
///
pub fn validate_edges<F: FlowRateLike>(
    n: usize,
    source: usize,
    sink: usize,
    edges: &[FlowEdge<F>],
) -> ValidationReport<F> {
    let mut violations = Vec::new();
    let mut inflow = vec![F::zero(); n];
    let mut outflow = vec![F::zero(); n];

    for e in edges {
        if (-e.flow).is_positive() {
            violations.push(Violation::NegativeFlow {
                from: e.from,
                to: e.to,
                flow: e.flow,
            });
        }
        if (e.flow - e.capacity).is_positive() {
            violations.push(Violation::CapacityExceeded {
                from: e.from,
                to: e.to,
                flow: e.flow,
                capacity: e.capacity,
            });
        }
        outflow[e.from] += e.flow;
        inflow[e.to] += e.flow;
    }

    violations.extend(conservation_violations(source, sink, &inflow, &outflow));
    ValidationReport { violations }
}

///
/// Validate the flow matrix of a network
///
pub fn validate_network<F: FlowRateLike>(network: &FlowNetwork<F>) -> ValidationReport<F> {
    let n = network.vertex_count();
    let mut violations = Vec::new();
    let mut inflow = vec![F::zero(); n];
    let mut outflow = vec![F::zero(); n];

    for u in 0..n {
        for v in 0..n {
            let forward = network.flow(u, v);
            if u < v {
                let backward = network.flow(v, u);
                if !(forward + backward).sim_eq(F::zero()) {
                    violations.push(Violation::Antisymmetry {
                        u,
                        v,
                        forward,
                        backward,
                    });
                }
            }
            if (-network.residual(u, v)).is_positive() {
                violations.push(Violation::CapacityExceeded {
                    from: u,
                    to: v,
                    flow: forward,
                    capacity: network.capacity(u, v),
                });
            }
            outflow[u] += forward.positive_part();
            inflow[u] += (-forward).positive_part();
        }
    }

    violations.extend(conservation_violations(
        network.source(),
        network.sink(),
        &inflow,
        &outflow,
    ));
    ValidationReport { violations }
}

fn conservation_violations<F: FlowRateLike>(
    source: usize,
    sink: usize,
    inflow: &[F],
    outflow: &[F],
) -> Vec<Violation<F>> {
    (0..inflow.len())
        .filter(|&v| v != source && v != sink && !inflow[v].sim_eq(outflow[v]))
        .map(|v| Violation::Conservation {
            vertex: v,
            inflow: inflow[v],
            outflow: outflow[v],
        })
        .collect()
}
