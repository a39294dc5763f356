//! **gridway-core** — Grid pathfinding primitives (core types).
//!
//! This crate provides the foundational types used across the *gridway*
//! workspace: the [`Coordinate`] geometry value, the per-position search
//! state [`Cell`], and the caller-owned [`Grid`] a search operates on.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, UNVISITED};
pub use geom::Coordinate;
pub use grid::Grid;
