//! The path search engine.

use std::fmt;

use gridway_core::{Cell, Coordinate, Grid};
use log::{debug, trace};

use crate::distance::Metric;

// ---------------------------------------------------------------------------
// SearchError
// ---------------------------------------------------------------------------

/// Precondition violations reported by [`PathFinder::find_path`].
///
/// The search itself has no failure mode — an unreachable goal yields the
/// best partial path, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A start or end coordinate lies outside the grid.
    OutOfBounds(Coordinate),
    /// A start or end coordinate names an obstacle cell.
    ObstacleEndpoint(Coordinate),
    /// The move set is empty, leaving no explorable direction.
    EmptyMoveSet,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::OutOfBounds(c) => write!(f, "coordinate {c} is outside the grid"),
            SearchError::ObstacleEndpoint(c) => write!(f, "coordinate {c} is an obstacle"),
            SearchError::EmptyMoveSet => write!(f, "the move set is empty"),
        }
    }
}

impl std::error::Error for SearchError {}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Cost-driven path search over a [`Grid`].
///
/// The engine repeatedly expands the lowest-cost frontier cell over a
/// caller-supplied move set until the goal is reached or the frontier is
/// exhausted, in which case the explored cell closest to the goal becomes
/// the terminal cell and the best partial path is returned instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder {
    metric: Metric,
}

impl PathFinder {
    /// A path finder using the default Manhattan metric.
    pub fn new() -> Self {
        Self::default()
    }

    /// A path finder using the given distance metric.
    pub fn with_metric(metric: Metric) -> Self {
        Self { metric }
    }

    /// The active distance metric.
    #[inline]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Find a path from `start` to `end` over the connectivity described
    /// by `moves`.
    ///
    /// Returns the cells from `start` to the terminal cell inclusive. The
    /// terminal cell is `end` when it was reached, and otherwise the
    /// explored cell closest to `end` under the active metric.
    ///
    /// Cells must be in their freshly-constructed search state; re-running
    /// over an unreset grid skews the result (see [`Grid::reset`]).
    pub fn find_path(
        &self,
        grid: &mut Grid,
        start: Coordinate,
        end: Coordinate,
        moves: &[Coordinate],
    ) -> Result<Vec<Cell>, SearchError> {
        if moves.is_empty() {
            return Err(SearchError::EmptyMoveSet);
        }
        match grid.cell(end) {
            None => return Err(SearchError::OutOfBounds(end)),
            Some(cell) if cell.is_obstacle() => {
                return Err(SearchError::ObstacleEndpoint(end));
            }
            Some(_) => {}
        }
        let Some(cell) = grid.cell_mut(start) else {
            return Err(SearchError::OutOfBounds(start));
        };
        if cell.is_obstacle() {
            return Err(SearchError::ObstacleEndpoint(start));
        }

        trace!("searching {start} -> {end} over {} moves", moves.len());

        // Seed the start cell.
        cell.distance_to_start = 0.0;
        cell.distance_to_end = self.metric.distance(start, end);
        cell.parent = None;
        if start == end {
            return Ok(vec![cell.clone()]);
        }

        let mut frontier: Vec<Coordinate> = vec![start];
        let mut terminal = None;

        'search: while !frontier.is_empty() {
            let current = pop_lowest_cost(grid, &mut frontier);
            if let Some(cell) = grid.cell_mut(current) {
                cell.explored = true;
            }

            for &step in moves {
                let next = current + step;
                // Out-of-bounds moves are silently ignored.
                let Some(neighbor) = grid.cell(next) else {
                    continue;
                };
                if neighbor.is_obstacle() {
                    continue;
                }
                if !neighbor.explored && !frontier.contains(&next) {
                    frontier.push(next);
                }

                // Both distances are measured straight from the fixed
                // endpoints, so the start distance is itself an estimate,
                // not an accumulated path cost.
                let to_start = self.metric.distance(start, next);
                let to_end = self.metric.distance(next, end);
                let Some(neighbor) = grid.cell_mut(next) else {
                    continue;
                };
                // Updates only ever lower a distance, and the parent moves
                // with them. Explored cells keep receiving updates but are
                // never re-enqueued.
                if to_start < neighbor.distance_to_start {
                    neighbor.distance_to_start = to_start;
                    neighbor.parent = Some(current);
                }
                if to_end < neighbor.distance_to_end {
                    neighbor.distance_to_end = to_end;
                    neighbor.parent = Some(current);
                }
                if next == end {
                    neighbor.parent = Some(current);
                    terminal = Some(next);
                    break 'search;
                }
            }
        }

        let terminal = match terminal {
            Some(t) => t,
            None => {
                let t = closest_explored(grid).unwrap_or(start);
                debug!("{end} unreachable, stopping at {t}");
                t
            }
        };

        Ok(reconstruct(grid, start, terminal))
    }
}

// ---------------------------------------------------------------------------
// Search internals
// ---------------------------------------------------------------------------

/// Remove and return the frontier entry with the lowest cost. Ties prefer
/// the smaller distance-to-end, then the earliest-inserted entry.
fn pop_lowest_cost(grid: &Grid, frontier: &mut Vec<Coordinate>) -> Coordinate {
    let mut best = 0;
    let mut best_key = selection_key(grid, frontier[0]);
    for i in 1..frontier.len() {
        let key = selection_key(grid, frontier[i]);
        if key.0 < best_key.0 || (key.0 == best_key.0 && key.1 < best_key.1) {
            best = i;
            best_key = key;
        }
    }
    frontier.remove(best)
}

#[inline]
fn selection_key(grid: &Grid, c: Coordinate) -> (f64, f64) {
    grid.cell(c).map_or((f64::INFINITY, f64::INFINITY), |cell| {
        (cell.cost(), cell.distance_to_end)
    })
}

/// The explored, non-obstacle cell closest to the goal. Scans row-major,
/// so the earliest such cell wins ties.
fn closest_explored(grid: &Grid) -> Option<Coordinate> {
    let mut best: Option<&Cell> = None;
    for cell in grid.iter() {
        if !cell.explored || cell.is_obstacle() {
            continue;
        }
        match best {
            Some(b) if cell.distance_to_end >= b.distance_to_end => {}
            _ => best = Some(cell),
        }
    }
    best.map(Cell::position)
}

/// Walk parent links back from `terminal` to `start` inclusive, then
/// reverse into start -> terminal order.
fn reconstruct(grid: &Grid, start: Coordinate, terminal: Coordinate) -> Vec<Cell> {
    let mut path = Vec::new();
    let mut cursor = Some(terminal);
    while let Some(c) = cursor {
        let Some(cell) = grid.cell(c) else {
            break;
        };
        path.push(cell.clone());
        if c == start {
            break;
        }
        cursor = cell.parent;
    }
    path.reverse();
    path
}
