// algoviz: step-by-step algorithm visualizer in the terminal

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algoviz::algorithms::constants::{
    SIEVE_MARK_DELAY_MS, SIEVE_PIVOT_DELAY_MS, TICK_INTERVAL_MS, UI_MAX_DISKS, UI_MIN_DISKS,
};
use algoviz::algorithms::graph::{AdjacencyMap, GraphTraversal};
use algoviz::algorithms::hanoi::generate_hanoi;
use algoviz::algorithms::input::{parse_count, parse_edges, parse_number_list};
use algoviz::algorithms::sieve::{check_limit, sieve_steps};
use algoviz::algorithms::sort::SortAlgorithm;
use algoviz::algorithms::tree::{Tree, TreeTraversal};
use algoviz::playback::PlaybackTiming;
use algoviz::ui::{App, RunRequest};

#[derive(Parser, Debug)]
#[command(
    name = "algoviz",
    version,
    about = "Step through classic algorithms one state change at a time"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Delay between replayed steps
    #[arg(long, default_value_t = TICK_INTERVAL_MS)]
    interval_ms: u64,

    /// Sieve pause after choosing a pivot
    #[arg(long, default_value_t = SIEVE_PIVOT_DELAY_MS)]
    pivot_delay_ms: u64,

    /// Sieve pause after crossing off each composite
    #[arg(long, default_value_t = SIEVE_MARK_DELAY_MS)]
    mark_delay_ms: u64,

    /// Where tracing output goes (filter with RUST_LOG)
    #[arg(long, default_value = "algoviz.log")]
    log_file: PathBuf,

    /// Print every step to stdout instead of starting the TUI
    #[arg(long)]
    print: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sort a comma-separated list: bubble, selection or insertion
    Sort { algorithm: SortAlgorithm, values: String },
    /// Sieve of Eratosthenes up to LIMIT
    Sieve { limit: String },
    /// Tower of Hanoi with DISKS disks (clamped to 1..=6)
    Hanoi { disks: String },
    /// BFS or DFS from node 1; EDGES is a file or "a b" pairs separated by newlines, ',' or ';'
    Graph {
        traversal: GraphTraversal,
        nodes: String,
        edges: String,
    },
    /// Preorder, inorder or postorder from node 1; EDGES as for graph
    Tree {
        traversal: TreeTraversal,
        nodes: String,
        edges: String,
    },
}

/// Edge lists come from a file when the argument names one
fn read_edges_arg(arg: &str) -> Result<String> {
    let path = Path::new(arg);
    if path.is_file() {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read edge list from '{}'", arg));
    }
    Ok(arg.replace([',', ';'], "\n"))
}

fn build_request(command: &Command) -> Result<RunRequest> {
    let request = match command {
        Command::Sort { algorithm, values } => RunRequest::Sort {
            algorithm: *algorithm,
            values: parse_number_list(values)?,
        },
        Command::Sieve { limit } => RunRequest::Sieve {
            limit: check_limit(parse_count(limit)?)?,
        },
        Command::Hanoi { disks } => RunRequest::Hanoi {
            disks: parse_count(disks)?.clamp(UI_MIN_DISKS, UI_MAX_DISKS),
        },
        Command::Graph {
            traversal,
            nodes,
            edges,
        } => {
            let nodes = parse_count(nodes)?;
            let edges = parse_edges(&read_edges_arg(edges)?, nodes)?;
            RunRequest::Graph {
                traversal: *traversal,
                nodes,
                edges,
            }
        }
        Command::Tree {
            traversal,
            nodes,
            edges,
        } => {
            let nodes = parse_count(nodes)?;
            let edges = parse_edges(&read_edges_arg(edges)?, nodes)?;
            RunRequest::Tree {
                traversal: *traversal,
                nodes,
                edges,
            }
        }
    };
    Ok(request)
}

fn join<T: ToString>(items: &[T], sep: &str) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(sep)
}

/// Non-interactive mode: one line per step
fn print_steps(request: &RunRequest) -> Result<()> {
    let lines: Vec<String> = match request {
        RunRequest::Sort { algorithm, values } => algorithm
            .generate(values)
            .iter()
            .map(|frame| join(frame, ","))
            .collect(),
        RunRequest::Sieve { limit } => sieve_steps(*limit)?
            .iter()
            .map(|frame| {
                let pivot = frame.pivot.map_or("-".to_string(), |p| p.to_string());
                format!("pivot={} primes={}", pivot, join(&frame.primes(), ","))
            })
            .collect(),
        RunRequest::Hanoi { disks } => generate_hanoi(*disks)?
            .iter()
            .map(|frame| {
                let pegs: Vec<String> = frame
                    .towers
                    .pegs()
                    .iter()
                    .map(|peg| format!("[{}]", join(peg, ",")))
                    .collect();
                match frame.last_move {
                    Some(mv) => format!("{}->{} {}", mv.from, mv.to, pegs.join(" ")),
                    None => format!("start {}", pegs.join(" ")),
                }
            })
            .collect(),
        RunRequest::Graph {
            traversal,
            nodes,
            edges,
        } => {
            let graph = AdjacencyMap::from_edges(*nodes, edges)?;
            traversal
                .generate(&graph)
                .iter()
                .map(|visited| join(visited, " "))
                .collect()
        }
        RunRequest::Tree {
            traversal,
            nodes,
            edges,
        } => Tree::new(*nodes, edges)?
            .traverse(*traversal)
            .iter()
            .map(|order| join(order, " "))
            .collect(),
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)
        .with_context(|| format!("failed to open log file '{}'", cli.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let request = build_request(&cli.command)?;
    tracing::info!(?request, "run requested");

    if cli.print {
        return print_steps(&request);
    }

    let timing =
        PlaybackTiming::from_millis(cli.interval_ms, cli.pivot_delay_ms, cli.mark_delay_ms);
    // Validate before touching the terminal so errors print normally
    let mut app = App::new(request, timing)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
