use chumsky::error::SimpleReason;
use thiserror::Error;

use crate::{graph::VertexId, parser::ParseError, Span};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Syntax error: {message}")]
    Syntax { message: String, span: Span },

    #[error("Vertex {id} is declared more than once")]
    DuplicateVertex { id: VertexId, span: Span },

    #[error("Edge {src} -> {dest} is given more than once")]
    DuplicateEdge {
        src: VertexId,
        dest: VertexId,
        span: Span,
    },
}

impl LoadError {
    pub fn span(&self) -> Span {
        match self {
            LoadError::Syntax { span, .. }
            | LoadError::DuplicateVertex { span, .. }
            | LoadError::DuplicateEdge { span, .. } => *span,
        }
    }
}

impl From<ParseError<'_>> for LoadError {
    fn from(error: ParseError<'_>) -> Self {
        let message = match error.reason() {
            SimpleReason::Custom(message) => message.clone(),
            _ => describe_unexpected(&error),
        };
        LoadError::Syntax {
            message,
            span: error.span(),
        }
    }
}

fn describe_unexpected(error: &ParseError<'_>) -> String {
    let found = error
        .found()
        .map_or_else(|| "end of input".to_string(), ToString::to_string);

    let mut expected: Vec<String> = error
        .expected()
        .map(|token| {
            token
                .as_ref()
                .map_or_else(|| "end of input".to_string(), ToString::to_string)
        })
        .collect();
    expected.sort();
    expected.dedup();

    if expected.is_empty() {
        format!("unexpected {found}")
    } else {
        format!("unexpected {found}, expected {}", expected.join(" or "))
    }
}
