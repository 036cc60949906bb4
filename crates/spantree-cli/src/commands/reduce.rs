//! `spantree reduce` command - Reduce a network to its minimum spanning tree.
//!
//! Loads the adjacency matrix, builds the spanning tree with Prim's
//! algorithm and prints the incoming cost, the reduced cost and the
//! difference.

use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use spantree_graph::{ensure_spanning, AdjacencyMatrix, CostReport, Graph, LoaderConfig};
use tracing::{debug, info};

use crate::config::FileConfig;
use crate::error::{CliError, CliResult};

/// Matrix file read when no input is given.
pub const DEFAULT_INPUT: &str = "network.txt";

/// Path that selects stdin.
pub const STDIN_INPUT: &str = "-";

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The three `Cost of ...` lines.
    #[default]
    Text,
    /// JSON object for programmatic consumption.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format '{}'. Valid options: text, json", s)),
        }
    }
}

/// Where the matrix is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    fn from_path(path: &Path) -> Self {
        if path == Path::new(STDIN_INPUT) {
            Self::Stdin
        } else {
            Self::Path(path.to_path_buf())
        }
    }
}

/// Command-line arguments of `reduce`, before merging with the config file.
#[derive(Debug, Clone, Default)]
pub struct ReduceArgs {
    pub input: Option<PathBuf>,
    pub format: Option<String>,
    pub require_connected: bool,
    pub skip_symmetry_check: bool,
    pub config: Option<PathBuf>,
}

/// Resolved settings for one reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceSettings {
    pub input: InputSource,
    pub format: OutputFormat,
    pub require_connected: bool,
    pub check_symmetry: bool,
}

impl ReduceSettings {
    /// Merge flags over file values over defaults.
    pub fn resolve(args: &ReduceArgs, file: &FileConfig) -> CliResult<Self> {
        let input = args
            .input
            .as_deref()
            .or(file.input.path.as_deref())
            .unwrap_or(Path::new(DEFAULT_INPUT));

        let format = match args.format.as_deref().or(file.output.format.as_deref()) {
            Some(s) => OutputFormat::from_str(s).map_err(CliError::Validation)?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            input: InputSource::from_path(input),
            format,
            require_connected: args.require_connected
                || file.validation.require_connected.unwrap_or(false),
            check_symmetry: !args.skip_symmetry_check
                && file.validation.check_symmetry.unwrap_or(true),
        })
    }
}

/// Execute the `reduce` command.
pub fn execute(args: &ReduceArgs) -> CliResult<()> {
    let file = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration");
            FileConfig::load(path)?
        }
        None => FileConfig::default(),
    };
    let settings = ReduceSettings::resolve(args, &file)?;

    let matrix = load_matrix(&settings)?;
    let report = reduce(&matrix, settings.require_connected)?;

    println!("{}", render(&report, settings.format)?);
    Ok(())
}

/// Read the matrix named by the settings.
pub fn load_matrix(settings: &ReduceSettings) -> CliResult<AdjacencyMatrix> {
    let config = LoaderConfig::new().with_symmetry_check(settings.check_symmetry);
    let matrix = match &settings.input {
        InputSource::Stdin => AdjacencyMatrix::read_from(io::stdin().lock(), &config)?,
        InputSource::Path(path) => AdjacencyMatrix::from_path(path, &config)?,
    };
    Ok(matrix)
}

/// Reduce a matrix's graph to its spanning tree and summarize the costs.
pub fn reduce(matrix: &AdjacencyMatrix, require_connected: bool) -> CliResult<CostReport> {
    let graph = matrix.to_graph();
    let mut mst = Graph::new();
    let stats = graph.create_minimum_spanning_tree(&mut mst);

    if require_connected {
        ensure_spanning(&mst, matrix.dimension())?;
    }

    info!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        tree_edges = mst.num_edges(),
        discarded = stats.discarded,
        "Reduced graph"
    );

    Ok(CostReport::from_graphs(&graph, &mst))
}

/// Render a report in the requested format.
pub fn render(report: &CostReport, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}
