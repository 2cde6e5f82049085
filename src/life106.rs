//! Life 1.06 text codec.
//!
//! A block is the header line `#Life 1.06`, then one `x y` line per alive
//! cell. The writer terminates each block with a blank line so consecutive
//! generations can share one stream.

use std::fmt;
use std::io::{self, Write};
use std::num::ParseIntError;

use thiserror::Error;

use crate::sparselife::{Cell, Generation};

pub const HEADER: &str = "#Life 1.06";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing `#Life 1.06` header")]
    MissingHeader,

    #[error("line {line}: expected `<x> <y>`, found {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: invalid coordinate {token:?}: {source}")]
    InvalidCoordinate {
        line: usize,
        token: String,
        source: ParseIntError,
    },
}

/// One generation rendered as a block, trailing blank line included.
struct Block<'a>(&'a Generation);

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        for cell in self.0 {
            writeln!(f, "{} {}", cell.x, cell.y)?;
        }
        writeln!(f)
    }
}

/// Write one generation block, including the trailing blank line.
pub fn write_generation<W: Write>(out: &mut W, generation: &Generation) -> io::Result<()> {
    write!(out, "{}", Block(generation))
}

pub fn to_string(generation: &Generation) -> String {
    Block(generation).to_string()
}

/// Parse a single Life 1.06 block.
///
/// Blank lines are skipped, as are `#` lines after the header (the format's
/// comment convention). Repeated coordinates collapse into one cell.
pub fn parse(text: &str) -> Result<Generation, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    match lines.next() {
        Some((_, header)) if header == HEADER => {}
        _ => return Err(ParseError::MissingHeader),
    }

    let mut cells = Vec::new();
    for (line, content) in lines {
        if content.starts_with('#') {
            continue;
        }
        cells.push(parse_cell(line, content)?);
    }
    Ok(Generation::from_cells(cells))
}

fn parse_cell(line: usize, content: &str) -> Result<Cell, ParseError> {
    let mut tokens = content.split_whitespace();
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(ParseError::MalformedLine {
            line,
            content: content.to_owned(),
        });
    };
    let coordinate = |token: &str| {
        token
            .parse::<i64>()
            .map_err(|source| ParseError::InvalidCoordinate {
                line,
                token: token.to_owned(),
                source,
            })
    };
    Ok(Cell::new(coordinate(x)?, coordinate(y)?))
}

#[cfg(test)]
mod tests {
    use super::{ParseError, parse, to_string, write_generation};
    use crate::sparselife::Generation;

    #[test]
    fn writes_header_cells_and_separator() {
        let g = Generation::from_cells([(2, 1), (0, 1), (-7, 0)]);
        assert_eq!(to_string(&g), "#Life 1.06\n-7 0\n0 1\n2 1\n\n");
        assert_eq!(to_string(&Generation::empty()), "#Life 1.06\n\n");
    }

    #[test]
    fn writer_and_string_render_the_same_block() {
        let g = Generation::from_cells([(i64::MAX, -1), (5, 5), (i64::MIN, 0)]);
        let mut out = Vec::new();
        write_generation(&mut out, &g).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), to_string(&g));
        assert_eq!(to_string(&g).lines().count(), 5);
    }

    #[test]
    fn parses_written_block() {
        let g = Generation::from_cells([(i64::MIN, i64::MAX), (0, 0), (-2000000000000, 5)]);
        assert_eq!(parse(&to_string(&g)), Ok(g));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "\n#Life 1.06\n#D a glider\n0 1\n\n  1 2  \n2 0\n2 1\n2 2\n";
        let g = parse(text).unwrap();
        assert_eq!(g.population(), 5);
    }

    #[test]
    fn rejects_missing_header() {
        assert_eq!(parse("0 1\n"), Err(ParseError::MissingHeader));
        assert_eq!(parse(""), Err(ParseError::MissingHeader));
    }

    #[test]
    fn reports_line_numbers() {
        assert_eq!(
            parse("#Life 1.06\n0 1\n3\n"),
            Err(ParseError::MalformedLine {
                line: 3,
                content: "3".into()
            })
        );
        assert!(matches!(
            parse("#Life 1.06\n0 1 2\n"),
            Err(ParseError::MalformedLine { line: 2, .. })
        ));
        assert!(matches!(
            parse("#Life 1.06\n\n1 x\n"),
            Err(ParseError::InvalidCoordinate { line: 3, ref token, .. }) if token == "x"
        ));
        assert!(matches!(
            parse("#Life 1.06\n9223372036854775808 0\n"),
            Err(ParseError::InvalidCoordinate { line: 2, .. })
        ));
    }
}
