//! Fixed-size 2D binary grid with zero-padded cell access.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::ConfigurationError;

/// A W×H field of dead (0) and alive (1) cells.
///
/// Dimensions never change after construction. Every read outside
/// `[0, width) × [0, height)` returns 0, so neighborhood sums near the border
/// behave as if the grid were surrounded by dead cells.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>, // row-major, 0 = dead, 1 = alive
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigurationError> {
        if width == 0 || height == 0 {
            return Err(ConfigurationError::GridTooSmall {
                pattern: "empty",
                width,
                height,
                min_width: 1,
                min_height: 1,
            });
        }

        Ok(Self {
            width,
            height,
            cells: vec![0; width * height],
        })
    }

    /// Create a grid with exactly the listed cells alive.
    pub fn with_live_cells(
        width: usize,
        height: usize,
        live: &[(usize, usize)],
    ) -> Result<Self, ConfigurationError> {
        let mut grid = Self::new(width, height)?;
        for &(x, y) in live {
            if x >= width || y >= height {
                return Err(ConfigurationError::CellOutOfBounds {
                    x,
                    y,
                    width,
                    height,
                });
            }
            grid.set(x, y, true);
        }
        Ok(grid)
    }

    /// Wrap a buffer produced by stepping. The length must already match.
    pub(crate) fn from_raw(width: usize, height: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw row-major cell buffer.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Linear index of an in-bounds coordinate.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Cell state with implicit zero padding.
    #[inline]
    pub fn get(&self, x: isize, y: isize) -> u8 {
        if self.in_bounds(x, y) {
            self.cells[self.index_of(x as usize, y as usize)]
        } else {
            0
        }
    }

    #[inline]
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        self.get(x, y) == 1
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index_of(x, y);
        self.cells[idx] = u8::from(alive);
    }

    /// Set a horizontal run of cells on row `y` alive.
    pub(crate) fn fill_row(&mut self, y: usize, xs: RangeInclusive<usize>) {
        for x in xs {
            self.set(x, y, true);
        }
    }

    /// Set a vertical run of cells on column `x` alive.
    pub(crate) fn fill_column(&mut self, x: usize, ys: RangeInclusive<usize>) {
        for y in ys {
            self.set(x, y, true);
        }
    }

    /// Count alive cells in the Moore neighborhood (8 neighbors), excluding
    /// the cell itself. Out-of-bounds neighbors count as dead.
    pub fn count_neighbors(&self, x: isize, y: isize) -> u8 {
        let mut count = 0;

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                count += self.get(x + dx, y + dy);
            }
        }

        count
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// Coordinates of every alive cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == 1)
            .map(|(idx, _)| (idx % self.width, idx / self.width))
    }

    /// True when any cell on the outer ring (first/last row or column) is alive.
    ///
    /// Such cells would interact with the world beyond the grid, which zero
    /// padding discards.
    pub fn has_live_perimeter(&self) -> bool {
        let last_x = self.width - 1;
        let last_y = self.height - 1;

        let alive = |x: usize, y: usize| self.cells[self.index_of(x, y)] == 1;

        (0..self.width).any(|x| alive(x, 0) || alive(x, last_y))
            || (0..self.height).any(|y| alive(0, y) || alive(last_x, y))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let c = if self.cells[self.index_of(x, y)] == 1 { 'X' } else { '.' };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}

/// Parse rows of `.`/`X` (or `0`/`1`). Blank lines and surrounding
/// whitespace are ignored; every row must have the same length.
impl FromStr for Grid {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 {
            return Err(ConfigurationError::MalformedPattern("no rows".to_string()));
        }

        let mut grid = Grid::new(width, rows.len())?;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(ConfigurationError::MalformedPattern(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, c) in row.chars().enumerate() {
                match c {
                    '.' | '0' => {}
                    'X' | 'x' | '#' | '1' => grid.set(x, y, true),
                    other => {
                        return Err(ConfigurationError::MalformedPattern(format!(
                            "unexpected character {other:?} at ({x}, {y})"
                        )))
                    }
                }
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(8, 5).unwrap();
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.cells().len(), 40);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(Grid::new(0, 4).is_err());
        assert!(Grid::new(4, 0).is_err());
    }

    #[test]
    fn test_index_of() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.index_of(0, 0), 0);
        assert_eq!(grid.index_of(1, 0), 1);
        assert_eq!(grid.index_of(0, 1), 4);
        assert_eq!(grid.index_of(3, 2), 11);
    }

    #[test]
    fn test_out_of_bounds_reads_are_zero() {
        let grid = Grid::with_live_cells(3, 3, &[(0, 0), (2, 2)]).unwrap();
        assert_eq!(grid.get(0, 0), 1);
        assert_eq!(grid.get(-1, 0), 0);
        assert_eq!(grid.get(0, -1), 0);
        assert_eq!(grid.get(3, 2), 0);
        assert_eq!(grid.get(2, 3), 0);
        assert_eq!(grid.get(isize::MIN, isize::MAX), 0);
    }

    #[test]
    fn test_with_live_cells_out_of_bounds() {
        let err = Grid::with_live_cells(3, 3, &[(3, 0)]).unwrap_err();
        assert!(matches!(err, ConfigurationError::CellOutOfBounds { x: 3, y: 0, .. }));
    }

    #[test]
    fn test_count_neighbors() {
        // Plus shape centered on (2, 2)
        let grid = Grid::with_live_cells(5, 5, &[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)]).unwrap();

        assert_eq!(grid.count_neighbors(2, 2), 4);
        assert_eq!(grid.count_neighbors(1, 2), 3); // center + both vertical arms
        assert_eq!(grid.count_neighbors(1, 1), 4);
        assert_eq!(grid.count_neighbors(0, 0), 0);
    }

    #[test]
    fn test_count_neighbors_at_corner() {
        let grid = Grid::with_live_cells(3, 3, &[(1, 0), (0, 1), (1, 1)]).unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 3);
        assert_eq!(grid.count_neighbors(-1, -1), 0);
    }

    #[test]
    fn test_live_perimeter() {
        let center = Grid::with_live_cells(5, 5, &[(2, 2)]).unwrap();
        assert!(!center.has_live_perimeter());

        for cell in [(0, 2), (4, 2), (2, 0), (2, 4)] {
            let grid = Grid::with_live_cells(5, 5, &[cell]).unwrap();
            assert!(grid.has_live_perimeter(), "cell {:?} is on the perimeter", cell);
        }
    }

    #[test]
    fn test_live_cells_row_order() {
        let grid = Grid::with_live_cells(4, 4, &[(3, 1), (1, 0), (0, 3)]).unwrap();
        let cells: Vec<_> = grid.live_cells().collect();
        assert_eq!(cells, vec![(1, 0), (3, 1), (0, 3)]);
    }

    #[test]
    fn test_parse_and_display() {
        let text = "..X.\n...X\n.XXX";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.population(), 5);
        assert!(grid.is_alive(2, 0));
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = "X..\nX.".parse::<Grid>().unwrap_err();
        assert!(matches!(err, ConfigurationError::MalformedPattern(_)));
        assert!("".parse::<Grid>().is_err());
        assert!("X?X".parse::<Grid>().is_err());
    }
}
