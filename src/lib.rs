//! A weighted, directed graph with Prim's minimum spanning tree and Dijkstra's
//! shortest paths, plus a small text format for describing graphs.
//!
//! ```
//! let mut g = graph_paths::parse("1 -> 2 : 5; 1 -> 3 : 1; 3 -> 2 : 2").unwrap();
//! g.dijkstra(1);
//! assert_eq!(g.distance(2), 3.0);
//! assert_eq!(g.shortest_path(2), Some(vec![1, 3, 2]));
//! ```

pub use document::{Position, Span, Spanned};
pub use error::LoadError;
pub use graph::{Graph, VertexId, Weight, DEFAULT_WEIGHT, NO_PATH};
pub use table::{Entry, ResultTable};

pub mod ast;
mod document;
mod error;
mod graph;
mod lexer;
mod loader;
mod parser;
mod queue;
mod table;

/// Builds a graph from its text description.
///
/// Every statement is a bare vertex id (`3`) or a directed edge with an
/// optional weight (`1 -> 2 : 0.5`). Statements may be separated by
/// whitespace, `;` or `,`, and `#` starts a comment running to the end of the line.
pub fn parse(source: &str) -> Result<Graph, Vec<LoadError>> {
    let tokens = lexer::tokenize(source);
    let description = parser::parse(tokens)
        .map_err(|errors| errors.into_iter().map(LoadError::from).collect::<Vec<_>>())?;
    loader::build(description)
}
