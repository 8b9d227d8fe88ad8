//! Per-station admission tables for the bounded search.
//!
//! Each station keeps at most `k` accepted weights. Once the table is full a
//! new weight is only admitted if it beats the worst one held, which is then
//! evicted. Evicting a weight does not withdraw the state that produced it
//! from the search queue.

use std::cmp::Ordering;

/// Total-ordered `f64` used as a search weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight(pub f64);

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Outcome of offering a weight to a [`BoundedFrontier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission<W> {
    /// The table had room.
    Admitted,
    /// The table was full; the returned worst weight was evicted.
    Replaced(W),
    /// The weight was no better than the worst held weight.
    Rejected,
}

impl<W> Admission<W> {
    pub fn is_admitted(&self) -> bool {
        !matches!(self, Admission::Rejected)
    }
}

/// Up to `capacity` weights, kept sorted ascending.
#[derive(Debug, Clone)]
pub struct BoundedFrontier<W> {
    capacity: usize,
    weights: Vec<W>,
}

impl<W: Ord + Copy> BoundedFrontier<W> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            weights: Vec::with_capacity(capacity.min(16)),
        }
    }

    /// Offer a weight to the table.
    ///
    /// A full table rejects anything greater than or equal to its worst
    /// weight. A zero-capacity table rejects everything.
    pub fn admit(&mut self, weight: W) -> Admission<W> {
        if self.capacity == 0 {
            return Admission::Rejected;
        }

        let evicted = if self.is_full() {
            match self.worst() {
                Some(worst) if weight < worst => self.weights.pop(),
                _ => return Admission::Rejected,
            }
        } else {
            None
        };

        let at = self.weights.partition_point(|w| *w <= weight);
        self.weights.insert(at, weight);

        match evicted {
            Some(worst) => Admission::Replaced(worst),
            None => Admission::Admitted,
        }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.weights.len() >= self.capacity
    }

    /// The largest weight currently held.
    pub fn worst(&self) -> Option<W> {
        self.weights.last().copied()
    }

    /// Held weights, best first.
    pub fn weights(&self) -> &[W] {
        &self.weights
    }
}
