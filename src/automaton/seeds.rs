//! Named seed patterns.
//!
//! Each constructor checks the pattern's minimum grid size and returns
//! [`ConfigurationError`] when the grid is too small. Coordinates are `(x, y)`
//! with `x` along the width and `y` along the height.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::grid::Grid;
use crate::error::ConfigurationError;

fn require(
    pattern: &'static str,
    width: usize,
    height: usize,
    min_width: usize,
    min_height: usize,
) -> Result<(), ConfigurationError> {
    if width < min_width || height < min_height {
        return Err(ConfigurationError::GridTooSmall {
            pattern,
            width,
            height,
            min_width,
            min_height,
        });
    }
    Ok(())
}

/// Five-cell glider near the origin, travelling (+1, +1) every 4 generations.
///
/// ```text
/// . . X
/// . . . X
/// . X X X
/// ```
pub fn glider(width: usize, height: usize) -> Result<Grid, ConfigurationError> {
    require("glider", width, height, 4, 4)?;
    Grid::with_live_cells(width, height, &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)])
}

/// Four-cell T seed centered in the grid: a bar of three with one cell below
/// its middle.
pub fn methuselah(width: usize, height: usize) -> Result<Grid, ConfigurationError> {
    require("methuselah", width, height, 5, 5)?;
    let (cx, cy) = (width / 2, height / 2);

    let mut grid = Grid::new(width, height)?;
    grid.fill_row(cy, cx - 1..=cx + 1);
    grid.set(cx, cy + 1, true);
    Ok(grid)
}

/// The R-pentomino centered in the grid.
///
/// ```text
/// . X X
/// X X .
/// . X .
/// ```
pub fn r_pentomino(width: usize, height: usize) -> Result<Grid, ConfigurationError> {
    require("r-pentomino", width, height, 4, 4)?;
    let (cx, cy) = (width / 2, height / 2);

    Grid::with_live_cells(
        width,
        height,
        &[
            (cx, cy - 1),
            (cx + 1, cy - 1),
            (cx - 1, cy),
            (cx, cy),
            (cx, cy + 1),
        ],
    )
}

/// Default half-length of the cross bars: `min(width, height) / 2 - 1`.
pub fn default_bar_length(width: usize, height: usize) -> usize {
    (width.min(height) / 2).saturating_sub(1)
}

/// Two perpendicular bars through the grid center.
///
/// Each bar spans `center - bar_length + 1 ..= center + bar_length - 1`, so a
/// bar length of 0 draws nothing and 1 draws only the center cell.
pub fn cross(
    width: usize,
    height: usize,
    bar_length: Option<usize>,
) -> Result<Grid, ConfigurationError> {
    require("cross", width, height, 3, 3)?;
    let (cx, cy) = (width / 2, height / 2);
    let bar_length = bar_length.unwrap_or_else(|| default_bar_length(width, height));

    let mut grid = Grid::new(width, height)?;
    if bar_length == 0 {
        return Ok(grid);
    }

    let reach = bar_length - 1;
    if reach > cx || cx + reach >= width || reach > cy || cy + reach >= height {
        return Err(ConfigurationError::BarTooLong {
            bar_length,
            width,
            height,
        });
    }

    grid.fill_row(cy, cx - reach..=cx + reach);
    grid.fill_column(cx, cy - reach..=cy + reach);
    Ok(grid)
}

/// Random soup with a dead one-cell border.
///
/// One uniform draw is taken per cell in row order, border included, so a given
/// seed always produces the same interior. Cells with a draw below `density`
/// are alive. `seed = None` seeds from OS entropy.
pub fn random(
    width: usize,
    height: usize,
    density: f64,
    seed: Option<u64>,
) -> Result<Grid, ConfigurationError> {
    let mut grid = Grid::new(width, height)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for y in 0..height {
        for x in 0..width {
            let draw: f64 = rng.gen();
            let interior = x > 0 && y > 0 && x + 1 < width && y + 1 < height;
            if interior && draw < density {
                grid.set(x, y, true);
            }
        }
    }

    Ok(grid)
}

/// Selector for the named seeds, used by the CLI and the C ABI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Glider,
    Methuselah,
    RPentomino,
    Cross,
    Random,
}

/// Pattern-specific knobs. Fields a pattern does not use are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeedParams {
    pub bar_length: Option<usize>,
    pub density: f64,
    pub seed: Option<u64>,
}

impl Default for SeedParams {
    fn default() -> Self {
        Self {
            bar_length: None,
            density: 0.5,
            seed: None,
        }
    }
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Glider,
        Pattern::Methuselah,
        Pattern::RPentomino,
        Pattern::Cross,
        Pattern::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Glider => "glider",
            Pattern::Methuselah => "methuselah",
            Pattern::RPentomino => "r-pentomino",
            Pattern::Cross => "cross",
            Pattern::Random => "random",
        }
    }

    /// Numeric code used across the C ABI.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Build the seed grid for this pattern.
    pub fn seed(
        self,
        width: usize,
        height: usize,
        params: &SeedParams,
    ) -> Result<Grid, ConfigurationError> {
        match self {
            Pattern::Glider => glider(width, height),
            Pattern::Methuselah => methuselah(width, height),
            Pattern::RPentomino => r_pentomino(width, height),
            Pattern::Cross => cross(width, height, params.bar_length),
            Pattern::Random => random(width, height, params.density, params.seed),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|p| p.name() == normalized)
            .ok_or_else(|| ConfigurationError::MalformedPattern(format!("unknown pattern {s:?}")))
    }
}
