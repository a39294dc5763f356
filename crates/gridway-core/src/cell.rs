//! The [`Cell`] type — one grid position's search state.

use crate::geom::Coordinate;

/// Sentinel distance for a cell the search has not measured yet.
pub const UNVISITED: f64 = f64::INFINITY;

/// Search state for a single grid position.
///
/// The position and obstacle flag are fixed at construction; the remaining
/// fields are mutated in place by a search and restored by [`Cell::reset`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    position: Coordinate,
    obstacle: bool,
    /// Whether the cell has left the frontier. Obstacles start explored so
    /// they can never be enqueued.
    pub explored: bool,
    /// Best known distance from the search start, or [`UNVISITED`].
    pub distance_to_start: f64,
    /// Best known estimate to the goal, or [`UNVISITED`].
    pub distance_to_end: f64,
    /// Predecessor on the best path found so far to this cell. A handle
    /// into the owning grid, assigned only together with a distance
    /// improvement (or by the goal-hit termination step).
    pub parent: Option<Coordinate>,
}

impl Cell {
    /// Create a fresh cell at `position`.
    pub const fn new(position: Coordinate, obstacle: bool) -> Self {
        Self {
            position,
            obstacle,
            explored: obstacle,
            distance_to_start: UNVISITED,
            distance_to_end: UNVISITED,
            parent: None,
        }
    }

    /// The cell's coordinate, fixed at creation.
    #[inline]
    pub const fn position(&self) -> Coordinate {
        self.position
    }

    /// Whether the cell is an untraversable obstacle, fixed at creation.
    #[inline]
    pub const fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    /// Frontier-selection key: `distance_to_start + distance_to_end`.
    /// Derived on demand, never stored.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.distance_to_start + self.distance_to_end
    }

    /// Restore the freshly-constructed search state.
    pub fn reset(&mut self) {
        self.explored = self.obstacle;
        self.distance_to_start = UNVISITED;
        self.distance_to_end = UNVISITED;
        self.parent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_cell_starts_unexplored() {
        let cell = Cell::new(Coordinate::new(1, 2), false);
        assert_eq!(cell.position(), Coordinate::new(1, 2));
        assert!(!cell.is_obstacle());
        assert!(!cell.explored);
        assert_eq!(cell.distance_to_start, UNVISITED);
        assert_eq!(cell.distance_to_end, UNVISITED);
        assert_eq!(cell.parent, None);
    }

    #[test]
    fn obstacle_cell_starts_explored() {
        let cell = Cell::new(Coordinate::ZERO, true);
        assert!(cell.is_obstacle());
        assert!(cell.explored);
    }

    #[test]
    fn cost_is_derived_from_both_distances() {
        let mut cell = Cell::new(Coordinate::ZERO, false);
        assert_eq!(cell.cost(), UNVISITED);
        cell.distance_to_start = 3.0;
        cell.distance_to_end = 4.0;
        assert_eq!(cell.cost(), 7.0);
        cell.distance_to_end = 1.0;
        assert_eq!(cell.cost(), 4.0);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut cell = Cell::new(Coordinate::new(4, 4), false);
        cell.explored = true;
        cell.distance_to_start = 2.0;
        cell.distance_to_end = 5.0;
        cell.parent = Some(Coordinate::ZERO);
        cell.reset();
        assert_eq!(cell, Cell::new(Coordinate::new(4, 4), false));
    }

    #[test]
    fn reset_keeps_obstacles_explored() {
        let mut cell = Cell::new(Coordinate::ZERO, true);
        cell.reset();
        assert!(cell.explored);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let mut cell = Cell::new(Coordinate::new(2, 1), false);
        cell.distance_to_start = 1.0;
        cell.distance_to_end = 4.0;
        cell.parent = Some(Coordinate::new(1, 1));
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
