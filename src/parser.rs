//! Parser for the line-oriented neighbor record format.
//!
//! One record per line, whitespace separated:
//!
//! ```text
//! <id> <x> <y> <z> <fn_count> [<fn_id>]* <sn_count> [<sn_id>]*
//! ```
//!
//! There is no delimiter between the lists. Field boundaries follow from the
//! declared counts alone, so both counts are checked strictly: the first list is a
//! slice of `fn_count` tokens, the second list is everything after `sn_count` and
//! must contain exactly `sn_count` ids.

use crate::error::{ParseError, RecordError};
use crate::site::{Axis, NeighborKind, Site};
use crate::site_map::SiteMap;
use rayon::prelude::*;
use std::io::{self, BufRead};

/// Tokens every record needs before the first neighbor list: id, x, y, z, fn_count.
pub const PREFIX_TOKENS: usize = 5;

/// Parses a single record line.
pub fn parse_line(line: &str) -> Result<Site, RecordError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < PREFIX_TOKENS {
        return Err(RecordError::InsufficientTokens {
            required: PREFIX_TOKENS,
            found: tokens.len(),
        });
    }

    let id = tokens[0];
    let mut position = [0.0; 3];
    for (i, axis) in Axis::ALL.into_iter().enumerate() {
        position[i] = parse_coordinate(tokens[i + 1], axis)?;
    }

    let first_count = parse_count(tokens[4], NeighborKind::First)?;
    let rest = &tokens[PREFIX_TOKENS..];
    let first = &rest[..first_count.min(rest.len())];
    if first.len() != first_count {
        return Err(RecordError::NeighborCountMismatch {
            kind: NeighborKind::First,
            expected: first_count,
            actual: first.len(),
        });
    }

    // The second list runs to the end of the line.
    let Some((&count_token, second)) = rest[first_count..].split_first() else {
        return Err(RecordError::InsufficientTokens {
            required: PREFIX_TOKENS + first_count + 1,
            found: tokens.len(),
        });
    };
    let second_count = parse_count(count_token, NeighborKind::Second)?;
    if second.len() != second_count {
        return Err(RecordError::NeighborCountMismatch {
            kind: NeighborKind::Second,
            expected: second_count,
            actual: second.len(),
        });
    }

    let site = Site {
        id: id.to_string(),
        position,
        first_neighbors: first.iter().map(|s| s.to_string()).collect(),
        second_neighbors: second.iter().map(|s| s.to_string()).collect(),
    };
    tracing::trace!(
        id = %site.id,
        first = site.first_neighbors.len(),
        second = site.second_neighbors.len(),
        "parsed record"
    );
    Ok(site)
}

/// Coordinates are decimal numbers, so `inf` and `nan` are rejected along with
/// anything `f64` cannot parse.
fn parse_coordinate(token: &str, axis: Axis) -> Result<f64, RecordError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RecordError::MalformedNumber {
            axis,
            token: token.to_string(),
        }),
    }
}

fn parse_count(token: &str, kind: NeighborKind) -> Result<usize, RecordError> {
    token.parse::<usize>().map_err(|_| RecordError::MalformedCount {
        kind,
        token: token.to_string(),
    })
}

/// Parses every line into a [`SiteMap`], stopping at the first bad record.
///
/// A later record with an already seen id replaces the earlier one.
pub fn parse_lines<I, S>(lines: I) -> Result<SiteMap, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fold_records(lines.into_iter().map(Ok::<S, io::Error>))
}

/// Reads and parses a whole stream, e.g. locked standard input.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<SiteMap, ParseError> {
    fold_records(reader.lines())
}

fn fold_records<I, S>(lines: I) -> Result<SiteMap, ParseError>
where
    I: Iterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut sites = SiteMap::new();
    let mut count = 0;
    for (index, line) in lines.enumerate() {
        let line = line?;
        let site = parse_line(line.as_ref()).map_err(|source| ParseError::Record {
            line: index + 1,
            source,
        })?;
        sites.insert(site);
        count += 1;
    }
    tracing::info!(records = count, sites = sites.len(), "parsed neighbor records");
    Ok(sites)
}

/// Parses lines in parallel.
///
/// Records are parsed independently and merged in line order, so the result is the
/// same as [`parse_lines`]: later duplicates win, and the error reported is the one
/// on the lowest line number.
pub fn parse_lines_par<S>(lines: &[S]) -> Result<SiteMap, ParseError>
where
    S: AsRef<str> + Sync,
{
    let parsed: Vec<Result<Site, RecordError>> = lines
        .par_iter()
        .map(|line| parse_line(line.as_ref()))
        .collect();

    let mut sites = SiteMap::new();
    for (index, result) in parsed.into_iter().enumerate() {
        let site = result.map_err(|source| ParseError::Record {
            line: index + 1,
            source,
        })?;
        sites.insert(site);
    }
    tracing::info!(records = lines.len(), sites = sites.len(), "parsed neighbor records");
    Ok(sites)
}
