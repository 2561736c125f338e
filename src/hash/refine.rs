//! Shared invariant-combination machinery for the refinement engines.
//!
//! The critical rule in both places values are XOR-combined is the
//! duplicate rotation: the first occurrence of a value contributes the
//! value itself, each repeat contributes a further [`prng::next`] of the
//! previous contribution. Without it, two equal-looking branches would
//! XOR to zero and silently erase information.

use crate::hash::prng;
use crate::hash::stereo::StereoEncoder;
use crate::hash::suppress::Suppressed;

/// Scratch buffers reused across vertices within one refinement round.
pub(crate) struct NeighborScratch {
    unique: Vec<u64>,
    included: Vec<u64>,
}

impl NeighborScratch {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            unique: Vec::with_capacity(n),
            included: Vec::with_capacity(n),
        }
    }

    /// The next invariant of vertex `v`: its own distributed value XORed
    /// with every neighbor contribution under the duplicate-rotation rule.
    ///
    /// Neighbors in `skip` are left out entirely; pass an empty set for the
    /// basic engine.
    pub(crate) fn next_value(
        &mut self,
        graph: &[Vec<usize>],
        v: usize,
        current: &[u64],
        skip: &Suppressed,
    ) -> u64 {
        self.unique.clear();
        self.included.clear();
        let mut invariant = prng::distribute(current[v]);
        for &w in &graph[v] {
            if skip.contains(w) {
                continue;
            }
            let adjacent = current[w];
            match self.unique.iter().position(|&u| u == adjacent) {
                Some(i) => {
                    self.included[i] = prng::next(self.included[i]);
                    invariant ^= self.included[i];
                }
                None => {
                    self.unique.push(adjacent);
                    self.included.push(adjacent);
                    invariant ^= adjacent;
                }
            }
        }
        invariant
    }
}

/// XOR-fold an ascending-sorted slice into `hash`, rotating each repeated
/// run progressively instead of re-using the duplicate value.
pub(crate) fn fold_sorted(sorted: &[u64], mut hash: u64) -> u64 {
    let mut contribution = 0u64;
    for (i, &value) in sorted.iter().enumerate() {
        if i > 0 && value == sorted[i - 1] {
            contribution = prng::next(contribution);
        } else {
            contribution = value;
        }
        hash ^= contribution;
    }
    hash
}

/// Run the external stereo encoder to its fixed point.
///
/// The encoder contract guarantees convergence on unchanged input; this
/// loop simply iterates until it reports no change.
pub(crate) fn stereo_fixed_point(
    encoder: &mut dyn StereoEncoder,
    current: &mut [u64],
    next: &mut [u64],
) {
    while encoder.encode(current, next) {
        current.copy_from_slice(next);
    }
}
