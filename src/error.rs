use crate::site::{Axis, NeighborKind};
use thiserror::Error;

/// Errors raised while parsing a single record line.
///
/// Every variant is fatal for the stream: field boundaries are derived from the
/// declared counts, so there is no way to resynchronize after a bad record.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The line ran out of tokens before a fixed field could be read.
    #[error("record has {found} tokens, at least {required} are needed")]
    InsufficientTokens { required: usize, found: usize },

    /// A coordinate token is not a valid finite float.
    #[error("malformed {axis} coordinate {token:?}")]
    MalformedNumber { axis: Axis, token: String },

    /// A count token is not a valid non-negative integer.
    #[error("malformed {kind} neighbor count {token:?}")]
    MalformedCount { kind: NeighborKind, token: String },

    /// The declared neighbor count does not match the ids present.
    #[error("expected {expected} {kind} neighbors, found {actual}")]
    NeighborCountMismatch {
        kind: NeighborKind,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised while parsing a whole input stream.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: {source}")]
    Record {
        /// 1-based line number of the offending record.
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// The record-level error, if this is not an I/O failure.
    pub fn record(&self) -> Option<&RecordError> {
        match self {
            ParseError::Record { source, .. } => Some(source),
            ParseError::Io(_) => None,
        }
    }
}

/// Errors raised by the neighbor graph queries.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A site lists a neighbor id that has no entry in the mapping.
    #[error("site {site_id:?} lists neighbor {missing:?}, which is not a known site")]
    DanglingReference { site_id: String, missing: String },

    /// The queried site itself is not in the mapping.
    #[error("unknown site {0:?}")]
    UnknownSite(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("scene has no points to draw")]
    EmptyScene,

    /// The padded extent of the scene does not fit in an `f64`.
    #[error("scene extent is not finite, min {min:?} max {max:?}")]
    UnboundedScene { min: [f64; 3], max: [f64; 3] },

    #[error("failed to serialize scene")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}
