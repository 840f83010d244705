//! Builds a [`Graph`] from a parsed description.
//!
//! Edge endpoints that were not declared are added on the fly. A vertex may be
//! declared by a bare id at most once, and each ordered pair may be given at
//! most one edge. Every violation is collected rather than stopping at the first.

use std::collections::HashSet;

use log::debug;

use crate::{
    ast::{Description, Edge, Statement},
    document::Spanned,
    error::LoadError,
    graph::{Graph, DEFAULT_WEIGHT},
};

pub fn build(description: Description) -> Result<Graph, Vec<LoadError>> {
    let mut graph = Graph::new();
    let mut declared = HashSet::new();
    let mut errors = vec![];

    for Spanned { value, span } in description.0 {
        match value {
            Statement::Vertex(id) => {
                if !declared.insert(id) {
                    errors.push(LoadError::DuplicateVertex { id, span });
                    continue;
                }
                graph.add_vertex(id);
            }
            Statement::Edge(Edge { src, dest, weight }) => {
                graph.add_vertex(src);
                graph.add_vertex(dest);
                if !graph.add_edge(src, dest, weight.unwrap_or(DEFAULT_WEIGHT)) {
                    errors.push(LoadError::DuplicateEdge { src, dest, span });
                }
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    debug!(
        "loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
