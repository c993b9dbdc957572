//!
//! ISAP (improved shortest augmenting path)
//!
//! `dist[v]` is the exact residual distance from `v` to the sink, computed once
//! by a reverse breadth-first search and then maintained locally. The walk
//! from the source only follows admissible arcs `dist[u] == dist[v] + 1`, so
//! every augmenting path is a shortest one.
//!
//! The search is an explicit state machine:
//!
//! | state   | condition                              | next      |
//! | ------- | -------------------------------------- | --------- |
//! | Advance | `dist[source] >= n`                    | Done      |
//! | Advance | admissible arc `u -> sink`             | Augment   |
//! | Advance | admissible arc `u -> v`, `v != sink`   | Advance   |
//! | Advance | no admissible arc                      | Retreat   |
//! | Augment |                                        | Advance   |
//! | Retreat | `gap[dist[u]]` became empty            | Done      |
//! | Retreat | otherwise                              | Advance   |
//!
//! `current[u]` caches the position in `neighbors(u)` of the last admissible
//! arc. Arcs before it stay inadmissible until `u` is relabeled in Retreat,
//! which resets it.
//!
use super::super::flow_rate::FlowRateLike;
use super::super::network::FlowNetwork;
use super::augmenting::augment_along;
use super::{MaxFlowAlgorithm, MaxFlowResult};
use log::trace;
use std::collections::VecDeque;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IsapState {
    Advance,
    Augment,
    Retreat,
    Done,
}

pub struct IsapSearch<'a, F: FlowRateLike> {
    network: &'a mut FlowNetwork<F>,
    /// distance label to the sink, `n` for unreachable
    dist: Vec<usize>,
    /// number of vertices having each label `0..=n`
    gap: Vec<usize>,
    current: Vec<usize>,
    /// admissible walk from the source
    walk: Vec<usize>,
    state: IsapState,
    augmentations: usize,
}

impl<'a, F: FlowRateLike> IsapSearch<'a, F> {
    ///
    /// Label every vertex with its residual distance to the sink
    /// and place the walk on the source.
    ///
    pub fn new(network: &'a mut FlowNetwork<F>) -> IsapSearch<'a, F> {
        let n = network.vertex_count();
        let dist = reverse_distances(network);
        let mut gap = vec![0; n + 1];
        for &d in dist.iter() {
            gap[d] += 1;
        }
        let source = network.source();
        IsapSearch {
            network,
            dist,
            gap,
            current: vec![0; n],
            walk: vec![source],
            state: IsapState::Advance,
            augmentations: 0,
        }
    }

    pub fn state(&self) -> IsapState {
        self.state
    }
    pub fn distance(&self, v: usize) -> usize {
        self.dist[v]
    }
    pub fn gap(&self, d: usize) -> usize {
        self.gap[d]
    }
    pub fn walk(&self) -> &[usize] {
        &self.walk
    }
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    ///
    /// Execute one transition and return the new state
    ///
    pub fn step(&mut self) -> IsapState {
        let next = match self.state {
            IsapState::Advance => self.advance(),
            IsapState::Augment => self.augment(),
            IsapState::Retreat => self.retreat(),
            IsapState::Done => IsapState::Done,
        };
        trace!("isap {:?} -> {:?} walk={:?}", self.state, next, self.walk);
        self.state = next;
        next
    }

    ///
    /// Step until Done and return the number of augmentations
    ///
    pub fn run(mut self) -> usize {
        while self.step() != IsapState::Done {}
        self.augmentations
    }

    fn advance(&mut self) -> IsapState {
        let n = self.network.vertex_count();
        if self.dist[self.network.source()] >= n {
            return IsapState::Done;
        }
        let u = self.walk_head();
        let neighbors = self.network.neighbors(u);
        for i in self.current[u]..neighbors.len() {
            let v = neighbors[i];
            if self.network.residual(u, v).is_positive() && self.dist[u] == self.dist[v] + 1 {
                self.current[u] = i;
                self.walk.push(v);
                return if v == self.network.sink() {
                    IsapState::Augment
                } else {
                    IsapState::Advance
                };
            }
        }
        IsapState::Retreat
    }

    fn augment(&mut self) -> IsapState {
        augment_along(self.network, &self.walk);
        self.augmentations += 1;
        self.walk.truncate(1);
        IsapState::Advance
    }

    fn retreat(&mut self) -> IsapState {
        let n = self.network.vertex_count();
        let u = self.walk_head();
        let relabeled = self
            .network
            .neighbors(u)
            .iter()
            .filter(|&&v| self.network.residual(u, v).is_positive())
            .map(|&v| self.dist[v] + 1)
            .min()
            .unwrap_or(n)
            .min(n);

        let old = self.dist[u];
        self.gap[old] -= 1;
        if self.gap[old] == 0 {
            // no vertex is left at distance `old`: the source is cut off from the sink
            trace!("gap at distance {}", old);
            return IsapState::Done;
        }
        self.dist[u] = relabeled;
        self.gap[relabeled] += 1;
        self.current[u] = 0;
        if u != self.network.source() {
            self.walk.pop();
        }
        IsapState::Advance
    }

    fn walk_head(&self) -> usize {
        // the walk always starts at the source and is never emptied
        self.walk[self.walk.len() - 1]
    }
}

///
/// Breadth-first search from the sink over reversed residual arcs.
/// Vertices that cannot reach the sink get distance `n`.
///
fn reverse_distances<F: FlowRateLike>(network: &FlowNetwork<F>) -> Vec<usize> {
    let n = network.vertex_count();
    let sink = network.sink();
    let mut dist = vec![n; n];
    dist[sink] = 0;
    let mut queue = VecDeque::from([sink]);
    while let Some(v) = queue.pop_front() {
        for &u in network.neighbors(v) {
            if dist[u] == n && network.residual(u, v).is_positive() {
                dist[u] = dist[v] + 1;
                queue.push_back(u);
            }
        }
    }
    dist
}

///
/// Maximum flow by ISAP.
/// `iterations` of the result counts augmentations.
///
pub fn isap<F: FlowRateLike>(network: &mut FlowNetwork<F>) -> MaxFlowResult<F> {
    network.reset_flow();
    let augmentations = IsapSearch::new(network).run();
    MaxFlowResult::from_network(network, augmentations, MaxFlowAlgorithm::Isap)
}
