use std::collections::{BinaryHeap, HashSet};

use log::trace;

use crate::{
    queue::MinScored,
    table::{Entry, ResultTable},
};

use super::{Graph, VertexId, Weight};

impl Graph {
    /// Greedy priority-first expansion from `source`, shared by Prim and Dijkstra.
    ///
    /// `score` turns the current vertex's recorded metric and an edge weight into
    /// the candidate metric for the edge's destination. A destination is relaxed
    /// only when the candidate is strictly smaller than what it already has.
    ///
    /// The queue has no decrease-key: a relaxed vertex is pushed again, and any
    /// entry popped for an already visited vertex is dropped.
    ///
    /// `source` must be present.
    pub(super) fn search<F>(&self, source: VertexId, score: F) -> ResultTable
    where
        F: Fn(f64, Weight) -> f64,
    {
        let mut table = ResultTable::unreached(self.vertices());
        table.associate(source, Entry::root(source));

        let mut visited = HashSet::new();
        let mut queue = BinaryHeap::new();
        queue.push(MinScored(0.0, source));

        while let Some(MinScored(popped, current)) = queue.pop() {
            if !visited.insert(current) {
                trace!("discarding stale entry ({popped}, {current})");
                continue;
            }

            let current_metric = table.get(current).map_or(f64::INFINITY, |e| e.metric);

            for (dest, weight) in self.neighbors(current) {
                if visited.contains(&dest) {
                    continue;
                }

                let candidate = score(current_metric, weight);
                let recorded = table.get(dest).map_or(f64::INFINITY, |e| e.metric);
                if candidate < recorded {
                    trace!("relaxing {dest} via {current}: {recorded} -> {candidate}");
                    table.associate(
                        dest,
                        Entry {
                            parent: Some(current),
                            metric: candidate,
                        },
                    );
                    queue.push(MinScored(candidate, dest));
                }
            }
        }

        table
    }
}
