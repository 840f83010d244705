use graph_paths::{parse, Graph, LoadError, Span, VertexId, NO_PATH};
use indoc::indoc;
use pretty_assertions::assert_eq;

const EXAMPLE_EDGES: [(VertexId, VertexId, f64); 12] = [
    (1, 2, 5.0),
    (1, 3, 3.0),
    (2, 3, 2.0),
    (2, 5, 3.0),
    (2, 7, 1.0),
    (3, 4, 7.0),
    (3, 5, 7.0),
    (4, 1, 2.0),
    (4, 6, 6.0),
    (5, 4, 2.0),
    (5, 6, 1.0),
    (7, 5, 1.0),
];

fn example_graph() -> Graph {
    let mut g = Graph::new();
    for id in 1..=7 {
        assert!(g.add_vertex(id));
    }
    for (src, dest, weight) in EXAMPLE_EDGES {
        assert!(g.add_edge(src, dest, weight));
    }
    g
}

fn shortest_path_line(g: &Graph, dest: VertexId) -> String {
    let mut out = Vec::new();
    g.write_shortest_path(dest, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn path_line(g: &Graph, dest: VertexId) -> String {
    let mut out = Vec::new();
    g.write_path(dest, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn example_graph_structure() {
    let g = example_graph();

    assert_eq!(g.vertex_count(), 7);
    assert_eq!(g.edge_count(), 12);
    for id in 1..=7 {
        assert!(g.contains_vertex(id));
    }
    for (src, dest, weight) in EXAMPLE_EDGES {
        assert!(g.contains_edge(src, dest));
        assert_eq!(g.cost(src, dest), weight);
    }
}

#[test]
fn add_edge_to_missing_vertex_fails() {
    let mut g = example_graph();
    assert!(!g.add_edge(1, 8, 1.0));
    assert!(!g.add_edge(8, 1, 1.0));
    assert_eq!(g.edge_count(), 12);
}

#[test]
fn dijkstra_distances_from_2() {
    let mut g = example_graph();
    g.dijkstra(2);

    let distances: Vec<f64> = (1..=7).map(|id| g.distance(id)).collect();
    assert_eq!(distances, vec![6.0, 0.0, 2.0, 4.0, 2.0, 3.0, 1.0]);
}

#[test]
fn dijkstra_paths_from_2() {
    let mut g = example_graph();
    g.dijkstra(2);

    let lines: String = (1..=7).map(|id| shortest_path_line(&g, id)).collect();
    let expected = indoc! {"
        2 --> 7 --> 5 --> 4 --> 1 distance: 6
        2 distance: 0
        2 --> 3 distance: 2
        2 --> 7 --> 5 --> 4 distance: 4
        2 --> 7 --> 5 distance: 2
        2 --> 7 --> 5 --> 6 distance: 3
        2 --> 7 distance: 1
    "};
    assert_eq!(lines, expected);
}

#[test]
fn prim_spans_component_of_2() {
    let mut g = example_graph();
    g.prim(2);

    for id in 1..=7 {
        assert!(g.is_path(id));
    }
    assert_eq!(g.prim_result().reached_count(), 7);
    assert_eq!(g.spanning_tree_weight(), 9.0);

    let lines: String = (1..=7).map(|id| path_line(&g, id)).collect();
    let expected = indoc! {"
        2 --> 7 --> 5 --> 4 --> 1
        2
        2 --> 3
        2 --> 7 --> 5 --> 4
        2 --> 7 --> 5
        2 --> 7 --> 5 --> 6
        2 --> 7
    "};
    assert_eq!(lines, expected);
}

#[test]
fn queries_for_vertices_never_reached() {
    let mut g = example_graph();
    assert!(!g.is_path(100));
    assert_eq!(g.distance(100), f64::INFINITY);

    g.prim(2);
    g.dijkstra(2);
    assert!(!g.is_path(100));
    assert_eq!(g.distance(100), f64::INFINITY);
    assert_eq!(shortest_path_line(&g, 100), format!("{NO_PATH}\n"));
}

#[test]
fn absent_source_leaves_results_alone() {
    let mut g = example_graph();
    g.prim(2);
    g.dijkstra(2);
    let prim_before = g.prim_result().clone();
    let dijkstra_before = g.dijkstra_result().clone();

    g.prim(0);
    g.dijkstra(0);

    assert_eq!(g.prim_result(), &prim_before);
    assert_eq!(g.dijkstra_result(), &dijkstra_before);
}

#[test]
fn cut_off_vertices_have_no_path() {
    // 4 is only entered from 3 and 5, and 1 only from 4.
    let mut g = example_graph();
    assert!(g.remove_edge(5, 4));
    assert!(g.remove_edge(3, 4));
    g.dijkstra(2);
    g.prim(2);

    assert_eq!(g.distance(4), f64::INFINITY);
    assert_eq!(g.distance(1), f64::INFINITY);
    assert!(!g.is_path(4));
    assert_eq!(path_line(&g, 1), "<no path>\n");
}

#[test]
fn remove_edge_then_vertex() {
    let mut g = example_graph();

    assert!(g.remove_edge(1, 2));
    assert!(!g.contains_edge(1, 2));
    assert_eq!(g.edge_count(), 11);
    assert!(g.contains_vertex(1));
    assert!(g.contains_vertex(2));
    assert!(g.contains_edge(1, 3));
    assert!(!g.remove_edge(1, 2));

    // 1 now has out-edge 1 -> 3 and in-edge 4 -> 1
    assert!(g.remove_vertex(1));
    assert!(!g.contains_vertex(1));
    assert_eq!(g.vertex_count(), 6);
    assert_eq!(g.edge_count(), 9);
    assert!(!g.contains_edge(1, 3));
    assert!(!g.contains_edge(4, 1));
    assert!(!g.remove_vertex(1));
}

#[test]
fn remove_vertex_drops_exactly_its_degree() {
    let mut g = example_graph();
    // 5: in from 2, 3, 7; out to 4, 6
    let before = g.edge_count();
    assert!(g.remove_vertex(5));
    assert_eq!(g.edge_count(), before - 5);
    assert!(g.contains_edge(2, 7));
    assert!(g.contains_edge(4, 6));
}

#[test]
fn results_go_stale_after_mutation() {
    let mut g = example_graph();
    g.dijkstra(2);
    g.prim(2);

    assert!(g.remove_vertex(7));

    assert_eq!(g.distance(5), 2.0);
    assert_eq!(g.shortest_path(5), Some(vec![2, 7, 5]));
    assert!(g.is_path(7));

    g.dijkstra(2);
    assert_eq!(g.distance(5), 3.0);
    assert_eq!(g.shortest_path(5), Some(vec![2, 5]));
    assert_eq!(g.distance(7), f64::INFINITY);
    // Prim was not rerun.
    assert!(g.is_path(7));
}

#[test]
fn copies_are_independent() {
    let mut base = Graph::new();
    assert!(base.add_vertex(1));
    assert!(base.add_vertex(2));
    assert!(base.add_vertex(3));
    assert!(base.add_edge(1, 2, 5.0));
    assert!(base.add_edge(1, 3, 3.0));
    assert!(base.add_edge(2, 3, 2.0));

    let mut copy = base.clone();
    assert_eq!(copy.vertex_count(), 3);
    assert_eq!(copy.edge_count(), 3);
    assert!(copy.contains_edge(1, 2));
    assert!(copy.contains_edge(1, 3));
    assert!(copy.contains_edge(2, 3));

    assert!(copy.add_vertex(4));
    assert!(copy.add_edge(1, 4, 4.0));
    assert_eq!(copy.vertex_count(), 4);
    assert_eq!(copy.edge_count(), 4);
    assert_eq!(base.vertex_count(), 3);
    assert_eq!(base.edge_count(), 3);
    assert!(!base.contains_edge(1, 4));

    assert!(base.remove_edge(1, 2));
    assert!(copy.contains_edge(1, 2));
}

#[test]
fn copies_keep_their_own_results() {
    let mut base = example_graph();
    base.dijkstra(2);

    let mut copy = base.clone();
    assert_eq!(copy.distance(1), 6.0);

    copy.dijkstra(4);
    assert_eq!(copy.distance(1), 2.0);
    assert_eq!(base.distance(1), 6.0);
}

#[test]
fn algorithms_on_emptied_graph() {
    let mut g = Graph::new();
    g.add_vertex(1);
    g.add_vertex(2);
    g.add_vertex(3);
    g.add_edge(1, 2, 5.0);
    g.add_edge(3, 2, 1.0);
    assert!(g.remove_vertex(2));
    assert_eq!(g.edge_count(), 0);

    g.prim(0);
    g.dijkstra(0);
    assert!(g.prim_result().is_empty());
    assert!(g.dijkstra_result().is_empty());
}

#[test]
fn parse_builds_example_graph() {
    let src = indoc! {"
        # the seven-vertex example
        1 -> 2 : 5;  1 -> 3 : 3
        2 -> 3 : 2;  2 -> 5 : 3;  2 -> 7 : 1
        3 -> 4 : 7;  3 -> 5 : 7
        4 -> 1 : 2;  4 -> 6 : 6
        5 -> 4 : 2;  5 -> 6 : 1
        7 -> 5 : 1
    "};
    let mut g = parse(src).unwrap();

    assert_eq!(g.vertex_count(), 7);
    assert_eq!(g.edge_count(), 12);
    for (src, dest, weight) in EXAMPLE_EDGES {
        assert_eq!(g.cost(src, dest), weight);
    }

    g.dijkstra(2);
    assert_eq!(g.distance(1), 6.0);
}

#[test]
fn parse_keeps_isolated_vertices() {
    let g = parse("1, 2, 3 -> 4").unwrap();
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.cost(3, 4), 1.0);
}

#[test]
fn parse_reports_duplicate_edge() {
    let errors = parse("1 -> 2 : 1\n1 -> 2 : 4").unwrap_err();
    let expected = vec![LoadError::DuplicateEdge {
        src: 1,
        dest: 2,
        span: Span::new(11, 21),
    }];
    assert_eq!(errors, expected);
    assert_eq!(errors[0].span(), Span::new(11, 21));
}

#[test]
fn parse_reports_syntax_error() {
    let errors = parse("1 -> 2 : x").unwrap_err();
    assert!(!errors.is_empty());
    assert!(errors
        .iter()
        .all(|e| matches!(e, LoadError::Syntax { .. })));
}
