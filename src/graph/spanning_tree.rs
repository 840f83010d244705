//! Prim's minimum spanning tree, grown from a single source.

use std::io::{self, Write};

use log::debug;

use super::{render, Graph, VertexId};

impl Graph {
    /// Runs Prim's algorithm from `source` and replaces the cached Prim result.
    ///
    /// Each reached vertex records the tree edge weight that attached it.
    /// Only vertices reachable from `source` along outgoing edges join the tree;
    /// the rest stay unreached. Does nothing at all if `source` is absent.
    pub fn prim(&mut self, source: VertexId) {
        if !self.contains_vertex(source) {
            debug!("prim({source}) skipped: source absent");
            return;
        }

        self.prim_result = self.search(source, |_, weight| weight);

        debug!(
            "prim({source}) reached {} of {} vertices",
            self.prim_result.reached_count(),
            self.vertex_count()
        );
    }

    /// Whether the last Prim run attached `id` to the tree.
    pub fn is_path(&self, id: VertexId) -> bool {
        self.prim_result
            .get(id)
            .map_or(false, |entry| entry.is_reached())
    }

    /// Tree path from the last Prim source to `dest`, both ends included.
    pub fn path(&self, dest: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_path(dest) {
            return None;
        }
        self.prim_result.path_to(dest)
    }

    /// Total weight of the tree built by the last Prim run.
    pub fn spanning_tree_weight(&self) -> f64 {
        self.prim_result
            .iter()
            .filter(|(_, entry)| entry.is_reached())
            .map(|(_, entry)| entry.metric)
            .sum()
    }

    /// Writes the tree path to `dest` as one line, or `<no path>`.
    pub fn write_path<W: Write>(&self, dest: VertexId, out: &mut W) -> io::Result<()> {
        match self.path(dest) {
            Some(path) => {
                render::write_route(out, &path)?;
                writeln!(out)
            }
            None => render::write_no_path(out),
        }
    }

    /// [`Graph::write_path`] to standard output.
    pub fn print_path(&self, dest: VertexId) -> io::Result<()> {
        self.write_path(dest, &mut io::stdout().lock())
    }
}
