use std::collections::HashMap;

use crate::graph::VertexId;

/// What a single traversal recorded about one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    /// The vertex this one was reached from.
    /// The source is its own parent; `None` means the vertex was never reached.
    pub parent: Option<VertexId>,

    /// Edge weight into the spanning tree (Prim) or distance from the source (Dijkstra).
    pub metric: f64,
}

impl Entry {
    pub fn unreached() -> Self {
        Self {
            parent: None,
            metric: f64::INFINITY,
        }
    }

    pub fn root(id: VertexId) -> Self {
        Self {
            parent: Some(id),
            metric: 0.0,
        }
    }

    pub fn is_reached(&self) -> bool {
        self.parent.is_some()
    }
}

/// The result of the last run of one algorithm, keyed by vertex id.
///
/// A table is a snapshot: it keeps describing the graph as it was when the
/// algorithm ran, even after vertices or edges are removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    entries: HashMap<VertexId, Entry>,
}

impl ResultTable {
    /// Builds a table in which every given vertex is unreached.
    pub fn unreached(vertices: impl IntoIterator<Item = VertexId>) -> Self {
        Self {
            entries: vertices
                .into_iter()
                .map(|id| (id, Entry::unreached()))
                .collect(),
        }
    }

    pub fn associate(&mut self, id: VertexId, entry: Entry) {
        self.entries.insert(id, entry);
    }

    pub fn get(&self, id: VertexId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Entry)> {
        self.entries.iter().map(|(&id, entry)| (id, entry))
    }

    /// Number of vertices the traversal reached, the source included.
    pub fn reached_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_reached()).count()
    }

    /// Follows parent links back from `dest` to the root.
    ///
    /// Returns the vertices in source-to-destination order, or `None` when
    /// `dest` has no entry or was never reached.
    pub fn path_to(&self, dest: VertexId) -> Option<Vec<VertexId>> {
        let mut path = vec![dest];
        let mut current = dest;

        loop {
            let parent = self.get(current)?.parent?;
            if parent == current {
                break;
            }
            path.push(parent);
            current = parent;
        }

        path.reverse();
        Some(path)
    }
}
