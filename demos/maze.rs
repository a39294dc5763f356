//! 4-directional Manhattan search through a random obstacle field.
//!
//! Run: cargo run --bin maze

use gridway_core::{Coordinate, Grid};
use gridway_demos::{HEIGHT, WIDTH, render, report, scatter_obstacles};
use gridway_paths::{PathFinder, moves};

fn main() {
    let mut rng = rand::rng();
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(WIDTH - 1, HEIGHT - 1);

    let mut grid = Grid::new(WIDTH, HEIGHT);
    scatter_obstacles(&mut grid, 0.25, &[start, end], &mut rng);

    match PathFinder::new().find_path(&mut grid, start, end, &moves::CARDINAL) {
        Ok(path) => {
            print!("{}", render(&grid, &path, start, end));
            report(&path, end);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
