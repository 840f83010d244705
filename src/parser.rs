use chumsky::{prelude::*, Stream};

use super::{
    ast::*,
    document::{Span, Spanned},
    graph::{VertexId, Weight},
    lexer::Token,
};

pub type ParseError<'src> = Simple<Token<'src>, Span>;

pub fn parse<'src>(tokens: Vec<Spanned<Token<'src>>>) -> Result<Description, Vec<ParseError<'src>>> {
    let end = tokens.last().map_or(0, |token| token.span.end.offset);
    let end_of_input = Span::new(end, end);
    let stream = Stream::from_iter(
        end_of_input,
        tokens
            .into_iter()
            .map(|Spanned { span, value }| (value, span)),
    );

    description_parser().parse(stream)
}

fn description_parser<'src>() -> impl Parser<Token<'src>, Description, Error = ParseError<'src>> {
    let separator = just(Token::Semicolon).or(just(Token::Comma));

    statement_parser()
        .then_ignore(separator.or_not())
        .repeated()
        .then_ignore(end())
        .map(Description)
        .labelled("graph description")
}

fn statement_parser<'src>() -> impl Parser<Token<'src>, Spanned<Statement>, Error = ParseError<'src>> {
    let weight = just(Token::Colon)
        .ignore_then(weight_parser())
        .labelled("edge weight");

    let edge = vertex_id_parser()
        .then_ignore(just(Token::Arrow))
        .then(vertex_id_parser())
        .then(weight.or_not())
        .map(|((src, dest), weight)| Statement::edge(src, dest, weight))
        .labelled("edge");

    let vertex = vertex_id_parser().map(Statement::Vertex);

    edge.or(vertex).map_with_span(Spanned::new)
}

fn vertex_id_parser<'src>() -> impl Parser<Token<'src>, VertexId, Error = ParseError<'src>> + Clone {
    select! { Token::Number(n) => n }
        .try_map(|n: &str, span: Span| {
            n.parse::<VertexId>()
                .map_err(|_| Simple::custom(span, format!("invalid vertex id `{n}`")))
        })
        .labelled("vertex id")
}

fn weight_parser<'src>() -> impl Parser<Token<'src>, Weight, Error = ParseError<'src>> + Clone {
    select! { Token::Number(n) => n }.try_map(|n: &str, span: Span| {
        n.parse::<Weight>()
            .map_err(|_| Simple::custom(span, format!("invalid weight `{n}`")))
    })
}
