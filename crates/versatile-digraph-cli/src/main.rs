use serde::Serialize;
use std::io::Read;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use versatile_digraph::{Digraph, GraphDocument};

const LOG_ENV: &str = "VERSATILE_DIGRAPH_LOG";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(versatile_digraph::Error),
    Json(serde_json::Error),
    Logging(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Logging(msg) => write!(f, "failed to initialize logging: {msg}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<versatile_digraph::Error> for CliError {
    fn from(value: versatile_digraph::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Print,
    RenderData,
    EdgeWeights,
    Node(String),
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    log_level: Option<Level>,
}

#[derive(Serialize)]
struct NodeReport<'a> {
    id: &'a str,
    value: f64,
    predecessors: Vec<&'a str>,
    successors: Vec<&'a str>,
    in_degree: usize,
    out_degree: usize,
}

fn usage() -> &'static str {
    "versatile-digraph-cli\n\
\n\
USAGE:\n\
  versatile-digraph-cli [print] [--log-level <level>] [<path>|-]\n\
  versatile-digraph-cli render-data [--pretty] [--log-level <level>] [<path>|-]\n\
  versatile-digraph-cli edge-weights [--pretty] [--log-level <level>] [<path>|-]\n\
  versatile-digraph-cli node <id> [--pretty] [--log-level <level>] [<path>|-]\n\
\n\
NOTES:\n\
  - Input is a JSON graph document: {\"nodes\": [{\"id\", \"value\"}], \"edges\": [{\"from\", \"to\", \"name\", \"weight\"}]}.\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - print writes the textual dump; render-data and edge-weights print JSON snapshots.\n\
  - node prints value, predecessors, successors and degrees of one node as JSON.\n\
  - Logs go to stderr; the level comes from --log-level, then $VERSATILE_DIGRAPH_LOG\n\
    (a tracing filter directive such as 'versatile_digraph=debug'), then 'warn'.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "print" => args.command = Command::Print,
            "render-data" => args.command = Command::RenderData,
            "edge-weights" => args.command = Command::EdgeWeights,
            "node" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.command = Command::Node(id.clone());
            }
            "--pretty" => args.pretty = true,
            "--log-level" => {
                let Some(level) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.log_level =
                    Some(Level::from_str(level).map_err(|_| CliError::Usage(usage()))?);
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn init_logging(level: Option<Level>) -> Result<(), CliError> {
    let filter = match level {
        Some(level) => EnvFilter::new(level.as_str()),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| CliError::Logging(err.to_string()))
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn node_report<'a>(graph: &'a Digraph, id: &'a str) -> Result<NodeReport<'a>, CliError> {
    Ok(NodeReport {
        id,
        value: graph.get_node_value(id)?,
        predecessors: graph.predecessors(id)?,
        successors: graph.successors(id)?,
        in_degree: graph.in_degree(id)?,
        out_degree: graph.out_degree(id)?,
    })
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let graph = GraphDocument::from_json_str(&text)?.build()?;
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph document"
    );

    match &args.command {
        Command::Print => {
            graph.print_graph();
            Ok(())
        }
        Command::RenderData => write_json(&graph.export_for_render(), args.pretty),
        Command::EdgeWeights => write_json(&graph.export_edge_weights(), args.pretty),
        Command::Node(id) => write_json(&node_report(&graph, id)?, args.pretty),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = init_logging(args.log_level) {
        eprintln!("{err}");
        std::process::exit(1);
    }

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::Graph(versatile_digraph::Error::NodeNotFound { .. })) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
