//! A weighted, directed graph with cached single-source traversal results.
//!
//! Vertices are caller-chosen ids. Each vertex owns an adjacency mapping from
//! neighbor id to edge weight, so there is at most one edge per ordered pair.
//!
//! [`Graph::prim`] and [`Graph::dijkstra`] each keep their own [`ResultTable`]
//! until the same algorithm runs again. Mutating the graph does not touch
//! either table, so after a mutation the cached results may describe vertices
//! and edges that no longer exist. Rerun the algorithm to refresh them.

mod render;
mod search;
mod shortest_path;
mod spanning_tree;

use std::collections::HashMap;

use log::debug;

use crate::table::ResultTable;

pub use render::NO_PATH;

pub type VertexId = usize;
pub type Weight = f64;

/// Weight given to edges added without an explicit one.
pub const DEFAULT_WEIGHT: Weight = 1.0;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Outgoing edges of each vertex, keyed by destination.
    edges: HashMap<VertexId, HashMap<VertexId, Weight>>,

    /// Result of the last `prim` run.
    prim_result: ResultTable,

    /// Result of the last `dijkstra` run.
    dijkstra_result: ResultTable,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(HashMap::len).sum()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.edges.contains_key(&id)
    }

    pub fn contains_edge(&self, src: VertexId, dest: VertexId) -> bool {
        self.contains_vertex(dest)
            && self
                .edges
                .get(&src)
                .map_or(false, |adjacency| adjacency.contains_key(&dest))
    }

    /// Weight of the edge `src -> dest`, or infinity if there is no such edge.
    pub fn cost(&self, src: VertexId, dest: VertexId) -> Weight {
        if !self.contains_vertex(dest) {
            return f64::INFINITY;
        }
        self.edges
            .get(&src)
            .and_then(|adjacency| adjacency.get(&dest))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Present vertex ids, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.edges.keys().copied()
    }

    /// Outgoing `(dest, weight)` pairs of `id`. Empty if `id` is absent.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.edges
            .get(&id)
            .into_iter()
            .flat_map(|adjacency| adjacency.iter().map(|(&dest, &weight)| (dest, weight)))
    }

    /// Adds a vertex with no edges. Returns `false` if it is already present.
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        if self.contains_vertex(id) {
            debug!("add_vertex({id}) rejected: already present");
            return false;
        }
        self.edges.insert(id, HashMap::new());
        true
    }

    /// Adds the directed edge `src -> dest`.
    ///
    /// Returns `false` without changing anything if either endpoint is absent
    /// or the edge already exists. Self-loops are allowed.
    /// The weight is not validated; negative weights make both traversals unreliable.
    pub fn add_edge(&mut self, src: VertexId, dest: VertexId, weight: Weight) -> bool {
        if !self.contains_vertex(src) || !self.contains_vertex(dest) {
            debug!("add_edge({src}, {dest}) rejected: missing endpoint");
            return false;
        }
        if self.contains_edge(src, dest) {
            debug!("add_edge({src}, {dest}) rejected: edge exists");
            return false;
        }
        if let Some(adjacency) = self.edges.get_mut(&src) {
            adjacency.insert(dest, weight);
        }
        true
    }

    /// [`Graph::add_edge`] with [`DEFAULT_WEIGHT`].
    pub fn add_default_edge(&mut self, src: VertexId, dest: VertexId) -> bool {
        self.add_edge(src, dest, DEFAULT_WEIGHT)
    }

    /// Removes a vertex, its outgoing edges, and every edge pointing at it.
    ///
    /// Cached traversal results are left as they are.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        let Some(outgoing) = self.edges.remove(&id) else {
            debug!("remove_vertex({id}) rejected: absent");
            return false;
        };

        let incoming = self
            .edges
            .values_mut()
            .filter_map(|adjacency| adjacency.remove(&id))
            .count();

        debug!(
            "removed vertex {id} with {} outgoing and {incoming} incoming edges",
            outgoing.len()
        );
        true
    }

    /// Removes the directed edge `src -> dest` only.
    pub fn remove_edge(&mut self, src: VertexId, dest: VertexId) -> bool {
        if !self.contains_edge(src, dest) {
            debug!("remove_edge({src}, {dest}) rejected: absent");
            return false;
        }
        self.edges
            .get_mut(&src)
            .map_or(false, |adjacency| adjacency.remove(&dest).is_some())
    }

    /// The table left by the last [`Graph::prim`] run. Empty if it never ran.
    pub fn prim_result(&self) -> &ResultTable {
        &self.prim_result
    }

    /// The table left by the last [`Graph::dijkstra`] run. Empty if it never ran.
    pub fn dijkstra_result(&self) -> &ResultTable {
        &self.dijkstra_result
    }
}
