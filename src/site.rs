use serde::Serialize;
use std::fmt;

/// A position in 3D space, `[x, y, z]`.
pub type Point = [f64; 3];

/// One point of the lattice together with its neighbor ids.
///
/// Ids are opaque tokens. They are never coerced to integers, so `"007"` and `"7"`
/// name different sites.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Site {
    pub id: String,
    pub position: Point,
    /// First neighbor ids in record order. Duplicates are kept.
    pub first_neighbors: Vec<String>,
    /// Second neighbor ids in record order. Duplicates are kept.
    pub second_neighbors: Vec<String>,
}

impl Site {
    pub fn new(id: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
            first_neighbors: Vec::new(),
            second_neighbors: Vec::new(),
        }
    }

    pub fn with_neighbors<I, J, S, T>(mut self, first: I, second: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        self.first_neighbors = first.into_iter().map(Into::into).collect();
        self.second_neighbors = second.into_iter().map(Into::into).collect();
        self
    }

    /// The neighbor list of the given kind.
    pub fn neighbors(&self, kind: NeighborKind) -> &[String] {
        match kind {
            NeighborKind::First => &self.first_neighbors,
            NeighborKind::Second => &self.second_neighbors,
        }
    }
}

/// Writes the site back out in the record format it is parsed from.
impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.position;
        write!(f, "{} {} {} {} {}", self.id, x, y, z, self.first_neighbors.len())?;
        for id in &self.first_neighbors {
            write!(f, " {}", id)?;
        }
        write!(f, " {}", self.second_neighbors.len())?;
        for id in &self.second_neighbors {
            write!(f, " {}", id)?;
        }
        Ok(())
    }
}

/// Which of the two neighbor relations a list belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborKind {
    First,
    Second,
}

impl fmt::Display for NeighborKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeighborKind::First => f.write_str("first"),
            NeighborKind::Second => f.write_str("second"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
            Axis::Z => f.write_str("z"),
        }
    }
}
