//! Initial alive-cell sets: interactive prompt, Life 1.06 files, presets.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::life106::{self, ParseError};
use crate::sparselife::{Cell, Generation};

/// Upper bound on prompted coordinates unless configured otherwise.
pub const DEFAULT_MAX_SEED_CELLS: usize = 20;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("input ended while reading {0}")]
    UnexpectedEof(&'static str),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("seed has no alive cells")]
    Empty,

    #[error("seed has {count} alive cells, limit is {max}")]
    TooManyCells { count: usize, max: usize },
}

/// Whitespace-separated tokens across lines.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Drop whatever is left of the current line after a bad token.
    fn discard_line(&mut self) {
        self.pending.clear();
    }
}

/// Ask for a coordinate count in `1..=max_cells`, then for each x and y.
///
/// Prompts go to `out`; invalid counts and non-integer coordinates are
/// re-asked rather than treated as errors. Repeated coordinates collapse.
pub fn prompt<R, W>(input: R, out: &mut W, max_cells: usize) -> Result<Generation, SeedError>
where
    R: BufRead,
    W: Write,
{
    let mut tokens = Tokens::new(input);

    write!(
        out,
        "Enter the number of alive (x, y) integer coordinates in the list: "
    )?;
    out.flush()?;
    let count = loop {
        let token = tokens
            .next_token()?
            .ok_or(SeedError::UnexpectedEof("the coordinate count"))?;
        match token.parse::<usize>() {
            Ok(n) if (1..=max_cells).contains(&n) => break n,
            _ => {
                warn!(%token, max_cells, "rejected coordinate count");
                tokens.discard_line();
                write!(
                    out,
                    "\nEnter a valid number of alive (x, y) integer coordinates (1-{max_cells}): "
                )?;
                out.flush()?;
            }
        }
    };
    writeln!(out)?;

    // `count` is only bounded by `max_cells`, which may be `usize::MAX`.
    let mut cells = Vec::with_capacity(count.min(DEFAULT_MAX_SEED_CELLS));
    for i in 1..=count {
        let x = prompt_coordinate(&mut tokens, out, i, "x")?;
        let y = prompt_coordinate(&mut tokens, out, i, "y")?;
        cells.push(Cell::new(x, y));
    }
    writeln!(out)?;

    let seed = Generation::from_cells(cells);
    if seed.population() < count {
        debug!(
            entered = count,
            unique = seed.population(),
            "collapsed repeated coordinates"
        );
    }
    Ok(seed)
}

fn prompt_coordinate<R, W>(
    tokens: &mut Tokens<R>,
    prompt: &mut W,
    index: usize,
    axis: &'static str,
) -> Result<i64, SeedError>
where
    R: BufRead,
    W: Write,
{
    write!(prompt, "[Coordinate {index}] Enter the {axis} coordinate: ")?;
    prompt.flush()?;
    loop {
        let token = tokens
            .next_token()?
            .ok_or(SeedError::UnexpectedEof("a coordinate"))?;
        match token.parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(err) => {
                warn!(%token, %err, index, axis, "rejected coordinate");
                tokens.discard_line();
                write!(
                    prompt,
                    "[Coordinate {index}] Enter a valid 64-bit integer {axis} coordinate: "
                )?;
                prompt.flush()?;
            }
        }
    }
}

/// Read a seed from Life 1.06 text, optionally bounding its population.
pub fn from_life106(text: &str, max_cells: Option<usize>) -> Result<Generation, SeedError> {
    let seed = life106::parse(text)?;
    check_population(&seed, max_cells)?;
    Ok(seed)
}

pub fn load_file(path: &Path, max_cells: Option<usize>) -> Result<Generation, SeedError> {
    let text = std::fs::read_to_string(path)?;
    let seed = from_life106(&text, max_cells)?;
    debug!(path = %path.display(), population = seed.population(), "loaded seed file");
    Ok(seed)
}

fn check_population(seed: &Generation, max_cells: Option<usize>) -> Result<(), SeedError> {
    if seed.is_empty() {
        return Err(SeedError::Empty);
    }
    match max_cells {
        Some(max) if seed.population() > max => Err(SeedError::TooManyCells {
            count: seed.population(),
            max,
        }),
        _ => Ok(()),
    }
}

/// Built-in starting patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Pattern {
    Glider,
    /// Glider near (+2e15, +2e15).
    GliderFar,
    Beacon,
    /// Beacon with its top-left cell at (-2e15, -2e15).
    BeaconFar,
    /// Glider plus two distant lone cells.
    Sample,
    Blinker,
    LightweightSpaceship,
    Toad,
    Pulsar,
}

const FAR: i64 = 2_000_000_000_000_000;

impl Pattern {
    pub const ALL: [Pattern; 9] = [
        Pattern::Glider,
        Pattern::GliderFar,
        Pattern::Beacon,
        Pattern::BeaconFar,
        Pattern::Sample,
        Pattern::Blinker,
        Pattern::LightweightSpaceship,
        Pattern::Toad,
        Pattern::Pulsar,
    ];

    pub fn cells(self) -> Vec<(i64, i64)> {
        match self {
            Pattern::Glider => GLIDER.to_vec(),
            Pattern::GliderFar => GLIDER.iter().map(|&(x, y)| (FAR + x, FAR + y)).collect(),
            Pattern::Beacon => BEACON.to_vec(),
            Pattern::BeaconFar => BEACON
                .iter()
                .map(|&(x, y)| (x - 1 - FAR, y - 1 - FAR))
                .collect(),
            Pattern::Sample => {
                let mut cells = GLIDER.to_vec();
                cells.extend([
                    (-2_000_000_000_000, -2_000_000_000_000),
                    (-2_000_000_000_001, -2_000_000_000_001),
                ]);
                cells
            }
            Pattern::Blinker => vec![(3, 2), (3, 3), (3, 4)],
            Pattern::LightweightSpaceship => vec![
                (1, 1), (2, 1), (3, 1), (4, 1),
                (0, 2), (4, 2),
                (4, 3),
                (0, 4), (3, 4),
            ],
            Pattern::Toad => vec![(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
            Pattern::Pulsar => pulsar(),
        }
    }

    pub fn generation(self) -> Generation {
        Generation::from_cells(self.cells())
    }
}

const GLIDER: [(i64, i64); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

const BEACON: [(i64, i64); 6] = [(1, 1), (1, 2), (2, 1), (3, 4), (4, 4), (4, 3)];

/// Period-3 pulsar centred on the origin: one quadrant's 12 cells mirrored
/// across both axes.
fn pulsar() -> Vec<(i64, i64)> {
    const QUADRANT: [(i64, i64); 12] = [
        (2, 1), (3, 1), (4, 1),
        (2, 6), (3, 6), (4, 6),
        (1, 2), (1, 3), (1, 4),
        (6, 2), (6, 3), (6, 4),
    ];
    let mut cells = Vec::with_capacity(48);
    for (sx, sy) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
        cells.extend(QUADRANT.iter().map(|&(x, y)| (x * sx, y * sy)));
    }
    cells
}
