//! Shared helpers for the gridway demo binaries: random obstacle fields
//! and an ASCII rendering of a grid with a path overlaid.

use gridway_core::{Cell, Coordinate, Grid};
use rand::{Rng, RngExt};

pub const WIDTH: i32 = 20;
pub const HEIGHT: i32 = 10;

/// Scatter obstacles over `grid` with probability `density` per cell,
/// leaving the `keep_free` cells untouched.
pub fn scatter_obstacles(
    grid: &mut Grid,
    density: f64,
    keep_free: &[Coordinate],
    rng: &mut impl Rng,
) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let c = Coordinate::new(x, y);
            if keep_free.contains(&c) {
                continue;
            }
            if rng.random_bool(density) {
                grid.set_obstacle(c, true);
            }
        }
    }
}

/// Render the grid with the path overlaid.
///
/// Legend: S=start, E=end, *=path, #=obstacle, .=free.
pub fn render(grid: &Grid, path: &[Cell], start: Coordinate, end: Coordinate) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let c = Coordinate::new(x, y);
            let ch = if c == start {
                'S'
            } else if c == end {
                'E'
            } else if path.iter().any(|cell| cell.position() == c) {
                '*'
            } else if grid.cell(c).is_some_and(Cell::is_obstacle) {
                '#'
            } else {
                '.'
            };
            out.push(ch);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Print the outcome of a search below the rendered grid.
pub fn report(path: &[Cell], end: Coordinate) {
    match path.last() {
        Some(cell) if cell.position() == end => {
            println!("reached {end} in {} steps", path.len() - 1);
        }
        Some(cell) => {
            println!("{end} unreachable, closest cell: {}", cell.position());
        }
        None => println!("no path"),
    }
}
