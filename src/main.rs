use std::io::{self, Read, Write};
use std::process::ExitCode;

use graph_paths::{parse, Graph, LoadError, VertexId};
use thiserror::Error;

const USAGE: &str = "usage: graph-paths <source> [<target>...] < graph.txt";

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("could not load graph:\n{}", render_load_errors(.0))]
    Load(Vec<LoadError>),
}

struct Config {
    source: VertexId,
    /// Every vertex, in ascending order, when empty.
    targets: Vec<VertexId>,
}

impl Config {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, CliError> {
        let source = args
            .next()
            .ok_or_else(|| CliError::Usage("missing source vertex".to_string()))
            .and_then(|arg| parse_vertex(&arg))?;
        let targets = args
            .map(|arg| parse_vertex(&arg))
            .collect::<Result<_, _>>()?;
        Ok(Self { source, targets })
    }
}

fn parse_vertex(arg: &str) -> Result<VertexId, CliError> {
    arg.parse()
        .map_err(|_| CliError::Usage(format!("invalid vertex id `{arg}`")))
}

fn render_load_errors(errors: &[LoadError]) -> String {
    errors
        .iter()
        .map(|e| format!("  {}: {e}", e.span()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            if let CliError::Usage(_) = e {
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let config = Config::from_args(std::env::args().skip(1))?;

    let mut src = String::new();
    io::stdin().read_to_string(&mut src)?;
    let mut graph = parse(&src).map_err(CliError::Load)?;

    if !graph.contains_vertex(config.source) {
        return Err(CliError::Usage(format!(
            "source vertex {} is not in the graph",
            config.source
        )));
    }

    let targets = if config.targets.is_empty() {
        let mut all: Vec<VertexId> = graph.vertices().collect();
        all.sort_unstable();
        all
    } else {
        config.targets
    };

    graph.prim(config.source);
    graph.dijkstra(config.source);

    let mut out = io::stdout().lock();
    report(&graph, config.source, &targets, &mut out)?;
    Ok(())
}

fn report<W: Write>(graph: &Graph, source: VertexId, targets: &[VertexId], out: &mut W) -> io::Result<()> {
    writeln!(out, "G has {} vertices", graph.vertex_count())?;
    writeln!(out, "G has {} edges", graph.edge_count())?;
    writeln!(out)?;

    for &target in targets {
        writeln!(out, "minimum spanning path from {source} to {target}")?;
        write!(out, "  ")?;
        graph.write_path(target, out)?;
    }
    writeln!(out)?;

    for &target in targets {
        writeln!(out, "shortest path from {source} to {target}")?;
        write!(out, "  ")?;
        graph.write_shortest_path(target, out)?;
    }
    Ok(())
}
