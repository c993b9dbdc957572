//!
//! Push-relabel (preflow) maximum flow
//!
//! A preflow lets non-terminal vertices hold an `excess`. Each active vertex
//! (positive excess, not a terminal) either pushes excess along an admissible
//! arc `height[u] == height[v] + 1`, or is relabeled to one above its lowest
//! residual neighbor. When no vertex is active the preflow is a maximum flow.
//!
//! Which active vertex is processed next is chosen by [`ActiveVertexPolicy`].
//! The policy changes the number of operations, never the resulting flow value.
//!
use super::super::flow_rate::FlowRateLike;
use super::super::network::FlowNetwork;
use super::{MaxFlowAlgorithm, MaxFlowResult};
use log::{trace, warn};
use std::collections::VecDeque;

/// Order in which active vertices are processed
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ActiveVertexPolicy {
    /// Lowest-index active vertex, found by a linear scan, one operation at a time.
    /// Correct but not asymptotically optimal.
    #[default]
    LinearScan,
    /// First-in first-out queue; a dequeued vertex is discharged completely. `O(V^3)`.
    Fifo,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PushRelabelOptions {
    pub policy: ActiveVertexPolicy,
}

/// Outcome of one operation on an active vertex
#[derive(Debug, Copy, Clone, PartialEq)]
enum Operation<F: FlowRateLike> {
    Push { to: usize, amount: F, saturating: bool },
    Relabel { height: usize },
    /// no residual arc leaves the vertex, its excess cannot move
    Stuck,
}

struct Preflow<'a, F: FlowRateLike> {
    network: &'a mut FlowNetwork<F>,
    height: Vec<usize>,
    excess: Vec<F>,
}

impl<'a, F: FlowRateLike> Preflow<'a, F> {
    ///
    /// `height[source] = n` and every arc leaving the source is saturated
    ///
    fn init(network: &'a mut FlowNetwork<F>) -> Preflow<'a, F> {
        let n = network.vertex_count();
        let source = network.source();
        let mut height = vec![0; n];
        let mut excess = vec![F::zero(); n];
        height[source] = n;

        for i in 0..network.neighbors(source).len() {
            let v = network.neighbors(source)[i];
            let r = network.residual(source, v);
            if r.is_positive() {
                network.add_flow(source, v, r);
                excess[v] += r;
                excess[source] -= r;
            }
        }

        Preflow {
            network,
            height,
            excess,
        }
    }

    fn is_active(&self, v: usize) -> bool {
        v != self.network.source() && v != self.network.sink() && self.excess[v].is_positive()
    }

    ///
    /// Push along the first admissible arc of `u`, or relabel `u` if there is none.
    ///
    fn push_or_relabel(&mut self, u: usize) -> Operation<F> {
        let network = &mut *self.network;
        let mut lowest: Option<usize> = None;

        for i in 0..network.neighbors(u).len() {
            let v = network.neighbors(u)[i];
            let r = network.residual(u, v);
            if !r.is_positive() {
                continue;
            }
            if self.height[u] == self.height[v] + 1 {
                let amount = self.excess[u].min_rate(r);
                network.add_flow(u, v, amount);
                self.excess[u] -= amount;
                self.excess[v] += amount;
                return Operation::Push {
                    to: v,
                    amount,
                    saturating: !(r - amount).is_positive(),
                };
            }
            lowest = Some(match lowest {
                Some(h) => h.min(self.height[v]),
                None => self.height[v],
            });
        }

        match lowest {
            Some(h) => {
                self.height[u] = h + 1;
                Operation::Relabel { height: h + 1 }
            }
            None => Operation::Stuck,
        }
    }

    fn step(&mut self, u: usize) -> Operation<F> {
        let op = self.push_or_relabel(u);
        match op {
            Operation::Push {
                to,
                amount,
                saturating,
            } => trace!(
                "push {} {}->{} ({})",
                amount,
                u,
                to,
                if saturating { "saturating" } else { "non-saturating" }
            ),
            Operation::Relabel { height } => trace!("relabel {} to height {}", u, height),
            Operation::Stuck => {
                // unreachable on exact arithmetic: excess always has a way back
                warn!("vertex {} holds excess {} with no residual arc", u, self.excess[u]);
                self.excess[u] = F::zero();
            }
        }
        op
    }

    fn run_linear_scan(&mut self) -> usize {
        let n = self.network.vertex_count();
        let mut iterations = 0;
        while let Some(u) = (0..n).find(|&v| self.is_active(v)) {
            self.step(u);
            iterations += 1;
        }
        iterations
    }

    fn run_fifo(&mut self) -> usize {
        let n = self.network.vertex_count();
        let mut queued = vec![false; n];
        let mut queue = VecDeque::new();
        for v in 0..n {
            if self.is_active(v) {
                queued[v] = true;
                queue.push_back(v);
            }
        }

        let mut iterations = 0;
        while let Some(u) = queue.pop_front() {
            queued[u] = false;
            while self.is_active(u) {
                let op = self.step(u);
                iterations += 1;
                if let Operation::Push { to, .. } = op {
                    if !queued[to] && self.is_active(to) {
                        queued[to] = true;
                        queue.push_back(to);
                    }
                }
            }
        }
        iterations
    }
}

///
/// Maximum flow by push-relabel with the default (linear scan) policy
///
pub fn push_relabel<F: FlowRateLike>(network: &mut FlowNetwork<F>) -> MaxFlowResult<F> {
    push_relabel_with(network, PushRelabelOptions::default())
}

///
/// Maximum flow by push-relabel.
/// `iterations` of the result counts push and relabel operations.
///
pub fn push_relabel_with<F: FlowRateLike>(
    network: &mut FlowNetwork<F>,
    options: PushRelabelOptions,
) -> MaxFlowResult<F> {
    network.reset_flow();
    let sink = network.sink();
    let mut preflow = Preflow::init(network);
    let iterations = match options.policy {
        ActiveVertexPolicy::LinearScan => preflow.run_linear_scan(),
        ActiveVertexPolicy::Fifo => preflow.run_fifo(),
    };
    trace!("excess at sink {}", preflow.excess[sink]);
    MaxFlowResult::from_network(network, iterations, MaxFlowAlgorithm::PushRelabel)
}

#[cfg(test)]
mod tests {
    use super::super::super::mocks::*;
    use super::super::super::validate::validate_network;
    use super::super::edmonds_karp;
    use super::*;

    #[test]
    fn preflow_init_saturates_source() {
        let mut g = mock_network_a();
        let p = Preflow::init(&mut g);
        assert_eq!(p.height[0], 6);
        assert_eq!(p.excess[1], 10);
        assert_eq!(p.excess[2], 8);
        assert_eq!(p.excess[0], -18);
        assert!(p.is_active(1));
        assert!(!p.is_active(0));
        assert!(!p.is_active(3));
    }

    #[test]
    fn first_operation_is_relabel() {
        // all heights except the source start at 0, nothing is admissible
        let mut g = mock_network_a();
        let mut p = Preflow::init(&mut g);
        assert_eq!(p.push_or_relabel(1), Operation::Relabel { height: 1 });
        match p.push_or_relabel(1) {
            Operation::Push { to, amount, .. } => {
                assert_eq!(to, 2);
                assert_eq!(amount, 5);
            }
            op => panic!("expected a push, got {:?}", op),
        }
    }

    #[test]
    fn both_policies_match_edmonds_karp() {
        let mocks: [fn() -> FlowNetwork<i64>; 3] =
            [mock_network_a, mock_network_clrs, mock_network_antiparallel];
        for mock in mocks {
            let expected = edmonds_karp(&mut mock()).max_flow;
            for policy in [ActiveVertexPolicy::LinearScan, ActiveVertexPolicy::Fifo] {
                let mut g = mock();
                let r = push_relabel_with(&mut g, PushRelabelOptions { policy });
                assert_eq!(r.max_flow, expected, "{:?}", policy);
                assert_eq!(r.min_cut.capacity(), expected);
                assert!(validate_network(&g).is_valid());
            }
        }
    }

    #[test]
    fn default_policy_is_linear_scan() {
        assert_eq!(
            PushRelabelOptions::default().policy,
            ActiveVertexPolicy::LinearScan
        );
        let mut a = mock_network_clrs();
        let mut b = mock_network_clrs();
        let r1 = push_relabel(&mut a);
        let r2 = push_relabel_with(
            &mut b,
            PushRelabelOptions {
                policy: ActiveVertexPolicy::LinearScan,
            },
        );
        assert_eq!(r1.iterations, r2.iterations);
        assert_eq!(a, b);
    }
}
