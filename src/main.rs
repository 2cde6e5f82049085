#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sparse_life::seed::{self, Pattern};
use sparse_life::simulation::{self, DEFAULT_GENERATIONS};
use sparse_life::{Generation, SimulationConfig};
use tracing_subscriber::EnvFilter;

/// Run Conway's Game of Life on the unbounded 64-bit plane and print each
/// generation in Life 1.06 format.
#[derive(Parser)]
#[command(name = "sparse-life", version)]
struct Args {
    /// Number of generations to print after the seed.
    #[arg(long, short = 'n', default_value_t = DEFAULT_GENERATIONS)]
    generations: u64,

    /// Read the seed from a Life 1.06 file instead of prompting.
    #[arg(long, short, conflicts_with = "pattern")]
    input: Option<PathBuf>,

    /// Start from a built-in pattern instead of prompting.
    #[arg(long, short, value_enum)]
    pattern: Option<Pattern>,

    /// Largest seed accepted from the prompt or a file.
    #[arg(long, default_value_t = seed::DEFAULT_MAX_SEED_CELLS)]
    max_cells: usize,

    /// Lift the seed size limit for both the prompt and file seeds.
    #[arg(long)]
    unbounded: bool,

    /// Also print the seed before the first generation.
    #[arg(long)]
    emit_seed: bool,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        let config = SimulationConfig::default()
            .generations(self.generations)
            .emit_seed(self.emit_seed);
        if self.unbounded {
            config.unbounded_seed()
        } else {
            config.max_seed_cells(self.max_cells)
        }
    }
}

fn read_seed(args: &Args, config: &SimulationConfig) -> Result<Generation> {
    if let Some(pattern) = args.pattern {
        return Ok(pattern.generation());
    }
    if let Some(path) = &args.input {
        return seed::load_file(path, config.max_seed_cells)
            .with_context(|| format!("failed to read seed from {}", path.display()));
    }
    // Prompts go to stderr so stdout carries only Life 1.06 output.
    let max = config.max_seed_cells.unwrap_or(usize::MAX);
    seed::prompt(io::stdin().lock(), &mut io::stderr(), max).context("failed to read seed")
}

/// `sparse_life=info` unless `RUST_LOG` names its own directives.
fn env_filter(rust_log: Option<&str>) -> Result<EnvFilter> {
    Ok(EnvFilter::builder()
        .with_default_directive("sparse_life=info".parse()?)
        .parse_lossy(rust_log.unwrap_or_default()))
}

fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter(rust_log.as_deref())?)
        .init();

    let args = Args::parse();
    let config = args.config();
    let seed = read_seed(&args, &config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    simulation::write_life106(seed, &config, &mut out)?;
    out.flush().context("failed to flush output")?;
    Ok(())
}
