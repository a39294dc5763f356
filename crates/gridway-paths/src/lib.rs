//! Pathfinding for grid-based applications.
//!
//! This crate provides a cost-driven search over a caller-owned grid of
//! cells:
//!
//! - [`PathFinder::find_path`] expands the lowest-cost frontier cell until
//!   the goal is reached, preferring the cell closer to the goal on cost
//!   ties and never re-opening explored cells.
//! - An unreachable goal degrades gracefully: the search returns the best
//!   partial path, ending at the explored cell closest to the goal.
//! - [`Metric`] selects the distance policy — Manhattan (default) or
//!   Euclidean — used both for the start distance and the goal estimate.
//! - [`moves`] holds the standard 4-way and 8-way move sets; any non-empty
//!   slice of offsets defines a custom connectivity.

pub mod distance;
pub mod moves;
pub mod search;

pub use distance::{Metric, euclidean, manhattan};
pub use search::{PathFinder, SearchError};
