//! Conway stepping with B3/S23 rules and zero-padded borders.

use rayon::prelude::*;
use tracing::warn;

use super::grid::Grid;
use super::history::GenerationHistory;

/// Next state of a single cell under B3/S23.
///
/// - Birth: a dead cell with exactly 3 neighbors becomes alive
/// - Survival: an alive cell with 2 or 3 neighbors stays alive
/// - Everything else is dead
#[inline]
pub fn next_state(current: u8, neighbors: u8) -> u8 {
    match (current, neighbors) {
        (_, 3) | (1, 2) => 1,
        _ => 0,
    }
}

/// Advance one generation, returning a new grid.
///
/// Rows are computed in parallel; every row reads only from `grid` and writes
/// only to its own slice of the output buffer. With `warn_on_perimeter`, a
/// live outer ring is reported before stepping; the step still runs.
pub fn step(grid: &Grid, warn_on_perimeter: bool) -> Grid {
    if warn_on_perimeter && grid.has_live_perimeter() {
        warn!(
            width = grid.width(),
            height = grid.height(),
            "live perimeter cells encountered; cells near the border are approximate"
        );
    }

    let width = grid.width();
    let mut next_cells = vec![0u8; grid.cells().len()];

    next_cells
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                let (x, y) = (x as isize, y as isize);
                *cell = next_state(grid.get(x, y), grid.count_neighbors(x, y));
            }
        });

    Grid::from_raw(width, grid.height(), next_cells)
}

/// Apply `step` `n` times, keeping the seed and every intermediate grid.
pub fn steps(seed: &Grid, n: usize, warn_on_perimeter: bool) -> GenerationHistory {
    let mut history = GenerationHistory::new(seed.clone());
    for _ in 0..n {
        history.advance(warn_on_perimeter);
    }
    history
}
