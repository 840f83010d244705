//! Dijkstra's single-source shortest paths.

use std::io::{self, Write};

use log::debug;

use super::{render, Graph, VertexId};

impl Graph {
    /// Runs Dijkstra's algorithm from `source` and replaces the cached result.
    ///
    /// Requires non-negative edge weights; this is not checked.
    /// Does nothing at all if `source` is absent.
    pub fn dijkstra(&mut self, source: VertexId) {
        if !self.contains_vertex(source) {
            debug!("dijkstra({source}) skipped: source absent");
            return;
        }

        self.dijkstra_result = self.search(source, |distance, weight| distance + weight);

        debug!(
            "dijkstra({source}) reached {} of {} vertices",
            self.dijkstra_result.reached_count(),
            self.vertex_count()
        );
    }

    /// Shortest distance to `id` found by the last Dijkstra run.
    ///
    /// Infinity if `id` was unreached or had no entry in that run.
    pub fn distance(&self, id: VertexId) -> f64 {
        self.dijkstra_result
            .get(id)
            .map_or(f64::INFINITY, |entry| entry.metric)
    }

    /// Shortest path from the last Dijkstra source to `dest`, both ends included.
    pub fn shortest_path(&self, dest: VertexId) -> Option<Vec<VertexId>> {
        if self.distance(dest) == f64::INFINITY {
            return None;
        }
        self.dijkstra_result.path_to(dest)
    }

    /// Writes the shortest path to `dest` followed by its distance, or `<no path>`.
    pub fn write_shortest_path<W: Write>(&self, dest: VertexId, out: &mut W) -> io::Result<()> {
        match self.shortest_path(dest) {
            Some(path) => {
                render::write_route(out, &path)?;
                writeln!(out, " distance: {}", render::Distance(self.distance(dest)))
            }
            None => render::write_no_path(out),
        }
    }

    /// [`Graph::write_shortest_path`] to standard output.
    pub fn print_shortest_path(&self, dest: VertexId) -> io::Result<()> {
        self.write_shortest_path(dest, &mut io::stdout().lock())
    }
}
