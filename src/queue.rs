use std::cmp::Ordering;

use crate::graph::VertexId;

/// A queue entry holding a candidate score for a vertex.
///
/// The ordering is reversed so that `std::collections::BinaryHeap`, which is a
/// max-heap, pops the entry with the *lowest* score first.
/// Scores are compared with `f64::total_cmp`, and equal scores fall back to the
/// vertex id so the order is total.
#[derive(Debug, Clone, Copy)]
pub struct MinScored(pub f64, pub VertexId);

impl PartialEq for MinScored {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MinScored {}

impl PartialOrd for MinScored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinScored {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .total_cmp(&self.0)
            .then_with(|| other.1.cmp(&self.1))
    }
}
