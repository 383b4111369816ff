use std::ops::Range;

/// Fraction of the largest extent added on every side by [`BoundingBox::padded`].
pub const PADDING_FRACTION: f64 = 0.05;

/// Generic axis-aligned bounding box for N-dimensional space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<const D: usize> {
    pub min: [f64; D],
    pub max: [f64; D],
}

impl<const D: usize> BoundingBox<D> {
    pub fn new(min: [f64; D], max: [f64; D]) -> Self {
        Self { min, max }
    }

    /// The smallest box containing all points, or `None` if there are none.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [f64; D]>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::new(*first, *first);
        for p in points {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Grows the box to contain `point`.
    pub fn include(&mut self, point: &[f64; D]) {
        for i in 0..D {
            if point[i] < self.min[i] { self.min[i] = point[i]; }
            if point[i] > self.max[i] { self.max[i] = point[i]; }
        }
    }

    pub fn extent(&self, axis: usize) -> f64 {
        self.max[axis] - self.min[axis]
    }

    /// Expands every side by a fraction of the largest extent.
    ///
    /// A box with zero extent along every axis (a single point) is expanded by 1.0,
    /// so the result always has a non-empty range along each axis.
    pub fn padded(&self) -> Self {
        let largest = (0..D).map(|i| self.extent(i)).fold(0.0, f64::max);
        let pad = if largest > 0.0 { largest * PADDING_FRACTION } else { 1.0 };
        let mut min = self.min;
        let mut max = self.max;
        for i in 0..D {
            min[i] -= pad;
            max[i] += pad;
        }
        Self { min, max }
    }

    /// Whether every bound and every extent is a finite number.
    ///
    /// Finite bounds can still have an infinite extent when `max - min` overflows.
    pub fn is_finite(&self) -> bool {
        (0..D).all(|i| self.min[i].is_finite() && self.max[i].is_finite() && self.extent(i).is_finite())
    }

    pub fn range(&self, axis: usize) -> Range<f64> {
        self.min[axis]..self.max[axis]
    }
}
