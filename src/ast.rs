use super::{
    document::Spanned,
    graph::{VertexId, Weight},
};

/// A parsed graph description, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Description(pub Vec<Spanned<Statement>>);

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A bare vertex id: `3`
    Vertex(VertexId),

    /// A directed edge: `1 -> 2` or `1 -> 2 : 0.5`
    Edge(Edge),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub src: VertexId,
    pub dest: VertexId,
    /// `None` when the description leaves the weight out.
    pub weight: Option<Weight>,
}

impl Statement {
    pub fn edge(src: VertexId, dest: VertexId, weight: Option<Weight>) -> Self {
        Self::Edge(Edge { src, dest, weight })
    }
}
