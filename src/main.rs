//! binheap - heap sort and priority queue demos
//!
//! Main CLI entry point for exercising the heap engine on sample data.

use anyhow::{Context, Result};
use binheap::config::BinheapConfig;
use binheap::samples::{self, Shape};
use binheap::{heap_sort, PriorityQueue};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log filter.
const LOG_ENV_VAR: &str = "BINHEAP_LOG";

/// Priorities used by the queue demos when none are given.
const DEFAULT_PRIORITIES: [i64; 8] = [1, 2, 10, 5, 30, 7, 9, 100];

#[derive(Parser)]
#[command(name = "binheap")]
#[command(version)]
#[command(about = "Array-backed binary heap: heap sort and bounded priority queue", long_about = None)]
struct Cli {
    /// Config file (default: search binheap.toml upward from the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Heap sort sample arrays and print before/after
    Sort {
        /// Input arrangement
        #[arg(long, value_enum, default_value = "all")]
        shape: ShapeArg,

        /// Array length (default: from config)
        #[arg(long)]
        size: Option<usize>,

        /// Shuffle seed for the random arrangement (default: from config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Top-down queue demo: enqueue one at a time, then drain
    Queue {
        /// Queue capacity (default: from config)
        #[arg(long)]
        capacity: Option<usize>,

        /// Priorities to enqueue; each is also its own payload
        #[arg(value_name = "PRIORITY", allow_negative_numbers = true)]
        priorities: Vec<i64>,
    },

    /// Bottom-up queue demo: build from an array with Floyd's method, then drain
    Bulk {
        /// Priorities to load; each is also its own payload
        #[arg(value_name = "PRIORITY", allow_negative_numbers = true)]
        priorities: Vec<i64>,
    },

    /// Print the ascending, descending and random sample arrays
    Samples {
        /// Array length (default: from config)
        #[arg(long)]
        size: Option<usize>,

        /// Shuffle seed (default: from config)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShapeArg {
    Ascending,
    Descending,
    Random,
    All,
}

impl ShapeArg {
    fn shapes(self) -> Vec<Shape> {
        match self {
            ShapeArg::Ascending => vec![Shape::Ascending],
            ShapeArg::Descending => vec![Shape::Descending],
            ShapeArg::Random => vec![Shape::Random],
            ShapeArg::All => Shape::ALL.to_vec(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BinheapConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BinheapConfig::load_from_cwd().context("Failed to load binheap.toml")?,
    };

    init_logging(&config, cli.verbose)?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Sort { shape, size, seed } => cmd_sort(
            shape,
            size.unwrap_or(config.demo.size),
            seed.or(config.demo.seed),
        ),
        Commands::Queue {
            capacity,
            priorities,
        } => cmd_queue(capacity.unwrap_or(config.queue.capacity), priorities),
        Commands::Bulk { priorities } => cmd_bulk(priorities),
        Commands::Samples { size, seed } => cmd_samples(
            size.unwrap_or(config.demo.size),
            seed.or(config.demo.seed),
        ),
    }
}

/// Install the stderr logger. BINHEAP_LOG wins over the configured level.
fn init_logging(config: &BinheapConfig, verbose: bool) -> Result<()> {
    let fallback = if verbose { "debug" } else { config.log.level.as_str() };
    let filter = match std::env::var(LOG_ENV_VAR) {
        Ok(directives) => EnvFilter::try_new(directives),
        Err(_) => EnvFilter::try_new(fallback),
    }
    .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn or_default_priorities(priorities: Vec<i64>) -> Vec<i64> {
    if priorities.is_empty() {
        DEFAULT_PRIORITIES.to_vec()
    } else {
        priorities
    }
}

fn cmd_sort(shape: ShapeArg, size: usize, seed: Option<u64>) -> Result<()> {
    for shape in shape.shapes() {
        let mut data = shape.generate(size, seed);
        println!("{} Order Test", shape.label());
        println!("{}", samples::join(&data));
        heap_sort(&mut data);
        println!("{}", samples::join(&data));
    }
    Ok(())
}

fn cmd_queue(capacity: usize, priorities: Vec<i64>) -> Result<()> {
    let priorities = or_default_priorities(priorities);
    let mut queue = PriorityQueue::with_capacity(capacity);

    println!("Top-Down Heap Demo");
    let mut rejected = 0usize;
    for &p in &priorities {
        if queue.enqueue(p, p).is_err() {
            rejected += 1;
        }
    }

    let drained: Vec<i64> = queue.drain().map(|node| node.payload).collect();
    println!("{}", samples::join(&drained));
    if rejected > 0 {
        println!("{} of {} rejected (capacity {})", rejected, priorities.len(), capacity);
    }
    Ok(())
}

fn cmd_bulk(priorities: Vec<i64>) -> Result<()> {
    let priorities = or_default_priorities(priorities);
    let mut queue = PriorityQueue::from_parts(priorities.clone(), priorities)
        .context("Failed to build queue")?;

    println!("Bottom-Up Heap Demo");
    let drained: Vec<i64> = queue.drain().map(|node| node.payload).collect();
    println!("{}", samples::join(&drained));
    Ok(())
}

fn cmd_samples(size: usize, seed: Option<u64>) -> Result<()> {
    for shape in Shape::ALL {
        println!("{}", samples::join(&shape.generate(size, seed)));
    }
    Ok(())
}
