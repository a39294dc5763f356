//! Geometry primitives: the [`Coordinate`] value type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

/// A 2D integer grid coordinate. X grows right, Y grows down, so grids are
/// indexed by (row = y, column = x).
///
/// Also used for *relative* offsets: `coordinate + offset` translates, and
/// a move set is just an ordered slice of offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a coordinate shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coordinate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn coordinate_arithmetic() {
        let a = Coordinate::new(1, 2);
        let b = Coordinate::new(3, 4);
        assert_eq!(a + b, Coordinate::new(4, 6));
        assert_eq!(b - a, Coordinate::new(2, 2));
        assert_eq!(a.shift(-1, 1), Coordinate::new(0, 3));
    }

    #[test]
    fn coordinate_display() {
        assert_eq!(Coordinate::new(3, -7).to_string(), "(3, -7)");
        assert_eq!(Coordinate::ZERO.to_string(), "(0, 0)");
    }

    #[test]
    fn coordinates_order_row_major() {
        let mut coords = vec![
            Coordinate::new(2, 1),
            Coordinate::new(0, 2),
            Coordinate::new(1, 0),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(1, 0),
                Coordinate::new(2, 1),
                Coordinate::new(0, 2),
            ]
        );
    }

    #[test]
    fn coordinate_in_hash_set() {
        let mut set = HashSet::new();
        set.insert(Coordinate::new(2, 5));
        assert!(set.contains(&Coordinate::new(2, 5)));
        assert!(!set.contains(&Coordinate::new(5, 2)));
    }
}
