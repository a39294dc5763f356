//! Standard move sets defining grid connectivity.
//!
//! A move set is an ordered slice of relative offsets. The engine accepts
//! any non-empty slice, so custom connectivities (knight moves, biased
//! one-way sets) work the same way as the two standard ones here.

use gridway_core::Coordinate;

/// The four cardinal moves, clockwise from north.
pub const CARDINAL: [Coordinate; 4] = [
    Coordinate::new(0, -1),
    Coordinate::new(1, 0),
    Coordinate::new(0, 1),
    Coordinate::new(-1, 0),
];

/// All eight moves (cardinal + diagonal), clockwise from north.
pub const ALL: [Coordinate; 8] = [
    Coordinate::new(0, -1),
    Coordinate::new(1, -1),
    Coordinate::new(1, 0),
    Coordinate::new(1, 1),
    Coordinate::new(0, 1),
    Coordinate::new(-1, 1),
    Coordinate::new(-1, 0),
    Coordinate::new(-1, -1),
];
