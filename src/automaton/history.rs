//! Ordered sequence of generations, index = generation number.

use std::ops::Index;

use super::grid::Grid;
use super::stepping::step;

/// Every grid produced from one seed, seed first.
///
/// All generations share the seed's width and height. The history only grows
/// by stepping its latest grid, so it can never be empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationHistory {
    generations: Vec<Grid>,
}

impl GenerationHistory {
    pub fn new(seed: Grid) -> Self {
        Self {
            generations: vec![seed],
        }
    }

    /// Step the latest generation and append the result.
    pub fn advance(&mut self, warn_on_perimeter: bool) -> &Grid {
        let next = step(self.latest(), warn_on_perimeter);
        self.generations.push(next);
        self.latest()
    }

    /// Number of generations, including the seed.
    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn width(&self) -> usize {
        self.generations[0].width()
    }

    pub fn height(&self) -> usize {
        self.generations[0].height()
    }

    pub fn seed(&self) -> &Grid {
        &self.generations[0]
    }

    pub fn latest(&self) -> &Grid {
        &self.generations[self.generations.len() - 1]
    }

    pub fn get(&self, generation: usize) -> Option<&Grid> {
        self.generations.get(generation)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Grid> {
        self.generations.iter()
    }

    pub fn generations(&self) -> &[Grid] {
        &self.generations
    }

    /// Total alive cells summed over all generations.
    pub fn total_population(&self) -> usize {
        self.generations.iter().map(Grid::population).sum()
    }
}

impl Index<usize> for GenerationHistory {
    type Output = Grid;

    fn index(&self, generation: usize) -> &Grid {
        &self.generations[generation]
    }
}

impl<'a> IntoIterator for &'a GenerationHistory {
    type Item = &'a Grid;
    type IntoIter = std::slice::Iter<'a, Grid>;

    fn into_iter(self) -> Self::IntoIter {
        self.generations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_holds_seed() {
        let seed = Grid::with_live_cells(4, 4, &[(1, 1)]).unwrap();
        let history = GenerationHistory::new(seed.clone());
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.seed(), &seed);
        assert_eq!(history.latest(), &seed);
    }

    #[test]
    fn test_advance_appends() {
        let seed = Grid::with_live_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]).unwrap();
        let mut history = GenerationHistory::new(seed.clone());

        let second = history.advance(false).clone();
        assert_eq!(history.len(), 2);
        assert_eq!(second.population(), 3);
        assert_ne!(second, seed);

        history.advance(false);
        assert_eq!(history.len(), 3);
        assert_eq!(history[2], seed); // blinker period 2
        assert_eq!(history.get(3), None);
    }

    #[test]
    fn test_total_population() {
        let seed = Grid::with_live_cells(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]).unwrap();
        let mut history = GenerationHistory::new(seed);
        history.advance(false);
        history.advance(false);
        assert_eq!(history.total_population(), 12);
        assert_eq!((history.width(), history.height()), (6, 6));
    }
}
