//! Distance metrics over grid coordinates.

use gridway_core::Coordinate;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coordinate, b: Coordinate) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean (straight-line) distance between two coordinates.
#[inline]
pub fn euclidean(a: Coordinate, b: Coordinate) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Distance policy, used both for the distance from the search start and
/// for the estimate to the goal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// `|dx| + |dy|` — exact step counting for 4-directional movement.
    #[default]
    Manhattan,
    /// `sqrt(dx² + dy²)` — straight-line distance; not an exact step count
    /// for any grid move set.
    Euclidean,
}

impl Metric {
    /// Distance between `a` and `b` under this policy. Non-negative, and
    /// zero for identical coordinates.
    #[inline]
    pub fn distance(self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            Metric::Manhattan => manhattan(a, b) as f64,
            Metric::Euclidean => euclidean(a, b),
        }
    }
}
