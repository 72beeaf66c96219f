// crates/stepviz-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use stepviz_core::io::write_trace_auto;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "stepviz",
    about = "Algorithm step-trace generator",
    long_about = "Algorithm step-trace generator.\n\nRun a sorting, searching, graph-traversal, or recurrence algorithm over a given input and write the resulting replayable step trace to JSON or CBOR.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Trace a sorting algorithm over a comma-separated value list.
    Sort {
        /// Sorting algorithm
        #[arg(value_enum, long)]
        algorithm: SortAlgo,

        /// Comma-separated integers, e.g. "5,3,1" (non-numeric tokens are
        /// dropped)
        #[arg(long)]
        values: String,

        /// Output path for the trace (.json / .cbor)
        #[arg(long, default_value = "trace.json")]
        out: PathBuf,
    },

    /// Trace a search for a target value.
    Search {
        /// Search algorithm
        #[arg(value_enum, long)]
        algorithm: SearchAlgo,

        /// Comma-separated integers (non-numeric tokens are dropped)
        #[arg(long)]
        values: String,

        /// Value to search for
        #[arg(long)]
        target: i64,

        /// Output path for the trace (.json / .cbor)
        #[arg(long, default_value = "trace.json")]
        out: PathBuf,
    },

    /// Trace a traversal over a synthesized random graph.
    Graph {
        /// Traversal algorithm
        #[arg(value_enum, long)]
        algorithm: GraphAlgo,

        /// Number of nodes (>0)
        #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..))]
        nodes: u32,

        /// RNG seed for the synthesizer
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output path for the trace (.json / .cbor)
        #[arg(long, default_value = "trace.json")]
        out: PathBuf,
    },

    /// Trace the Fibonacci table build for F(n).
    Fib {
        /// Table index n; outside 0..=92 yields an empty trace
        #[arg(long)]
        n: i64,

        /// Output path for the trace (.json / .cbor)
        #[arg(long, default_value = "trace.json")]
        out: PathBuf,
    },

    /// Trace the Euclidean GCD of two positive integers.
    Gcd {
        /// First operand
        #[arg(long)]
        a: i64,

        /// Second operand
        #[arg(long)]
        b: i64,

        /// Output path for the trace (.json / .cbor)
        #[arg(long, default_value = "trace.json")]
        out: PathBuf,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum SortAlgo {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum SearchAlgo {
    Linear,
    Binary,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum GraphAlgo {
    Bfs,
    Dfs,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Sort { algorithm, values, out } => sort(algorithm, &values, &out),
        Cmd::Search { algorithm, values, target, out } => {
            search(algorithm, &values, target, &out)
        }
        Cmd::Graph { algorithm, nodes, seed, out } => graph(algorithm, nodes, seed, &out),
        Cmd::Fib { n, out } => fib(n, &out),
        Cmd::Gcd { a, b, out } => gcd(a, b, &out),
    }
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Parse a comma-separated integer list, silently dropping tokens that do
/// not parse. Malformed input never reaches a generator.
fn parse_values(raw: &str) -> Vec<i64> {
    raw.split(',')
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .collect()
}

/// Ensure the parent directory for a file exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", dir.display()))?;
        }
    }
    Ok(())
}

fn sort(algorithm: SortAlgo, values: &str, out: &Path) -> Result<()> {
    use stepviz_array::{bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort};

    let input = parse_values(values);
    info!(?algorithm, n = input.len(), "generating sorting trace");

    let trace = match algorithm {
        SortAlgo::Bubble => bubble_sort(&input),
        SortAlgo::Selection => selection_sort(&input),
        SortAlgo::Insertion => insertion_sort(&input),
        SortAlgo::Merge => merge_sort(&input),
        SortAlgo::Quick => quick_sort(&input),
    };

    ensure_parent_dir(out)?;
    write_trace_auto(out, &trace)
        .with_context(|| format!("writing trace to {}", out.display()))?;

    println!(
        "Traced {:?} sort over {} values → {} steps → {}",
        algorithm,
        input.len(),
        trace.len(),
        out.display()
    );
    Ok(())
}

fn search(algorithm: SearchAlgo, values: &str, target: i64, out: &Path) -> Result<()> {
    use stepviz_array::{binary_search, linear_search};

    let input = parse_values(values);
    info!(?algorithm, n = input.len(), target, "generating search trace");

    let trace = match algorithm {
        SearchAlgo::Linear => linear_search(&input, target),
        SearchAlgo::Binary => binary_search(&input, target),
    };

    let found = trace
        .last()
        .and_then(|step| step.meta.found)
        .unwrap_or(false);

    ensure_parent_dir(out)?;
    write_trace_auto(out, &trace)
        .with_context(|| format!("writing trace to {}", out.display()))?;

    println!(
        "Traced {:?} search for {} ({}) → {} steps → {}",
        algorithm,
        target,
        if found { "found" } else { "not found" },
        trace.len(),
        out.display()
    );
    Ok(())
}

fn graph(algorithm: GraphAlgo, nodes: u32, seed: u64, out: &Path) -> Result<()> {
    use stepviz_graph::{bfs, dfs, generate_random_graph};

    info!(?algorithm, nodes, seed, "synthesizing graph and generating traversal trace");
    let g = generate_random_graph(nodes, seed);

    let trace = match algorithm {
        GraphAlgo::Bfs => bfs(&g),
        GraphAlgo::Dfs => dfs(&g),
    };

    if trace.is_empty() {
        bail!("synthesized graph was not a valid traversal input");
    }

    ensure_parent_dir(out)?;
    write_trace_auto(out, &trace)
        .with_context(|| format!("writing trace to {}", out.display()))?;

    println!(
        "Traced {:?} over {} nodes / {} edges → {} steps → {}",
        algorithm,
        g.nodes.len(),
        g.edges.len(),
        trace.len(),
        out.display()
    );
    Ok(())
}

fn fib(n: i64, out: &Path) -> Result<()> {
    use stepviz_scalar::fibonacci;

    info!(n, "generating Fibonacci trace");
    let trace = fibonacci(n);

    ensure_parent_dir(out)?;
    write_trace_auto(out, &trace)
        .with_context(|| format!("writing trace to {}", out.display()))?;

    println!("Traced F({n}) → {} steps → {}", trace.len(), out.display());
    Ok(())
}

fn gcd(a: i64, b: i64, out: &Path) -> Result<()> {
    info!(a, b, "generating GCD trace");
    let trace = stepviz_scalar::gcd(a, b);

    ensure_parent_dir(out)?;
    write_trace_auto(out, &trace)
        .with_context(|| format!("writing trace to {}", out.display()))?;

    println!(
        "Traced GCD({a}, {b}) → {} steps → {}",
        trace.len(),
        out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_values_drops_malformed_tokens() {
        assert_eq!(parse_values("5, 3,x, 1,,7.5, -2"), vec![5, 3, 1, -2]);
        assert_eq!(parse_values(""), Vec::<i64>::new());
        assert_eq!(parse_values("abc"), Vec::<i64>::new());
    }
}
