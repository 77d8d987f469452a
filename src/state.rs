//! The handle owned by C callers: a generation history and its surface.

use tracing::info;

use crate::automaton::{steps, GenerationHistory, Pattern, SeedParams};
use crate::error::ConfigurationError;
use crate::surface::{synthesize, Mesh, Occupancy, Synthesis, SynthesisConfig};

/// A seeded, evolved and synthesized sculpture.
pub struct Sculpt {
    pub history: GenerationHistory,
    pub synthesis: Synthesis,
}

impl Sculpt {
    /// Synthesize the surface of an existing history.
    pub fn from_history(history: GenerationHistory, config: &SynthesisConfig) -> Self {
        let synthesis = synthesize(&history, config);
        Self { history, synthesis }
    }

    /// Seed `pattern`, run it for `generations` steps and build its surface.
    pub fn seeded(
        pattern: Pattern,
        width: usize,
        height: usize,
        generations: usize,
        params: &SeedParams,
    ) -> Result<Self, ConfigurationError> {
        let seed = pattern.seed(width, height, params)?;
        let history = steps(&seed, generations, false);
        let sculpt = Self::from_history(history, &SynthesisConfig::default());
        info!(
            %pattern,
            width,
            height,
            generations,
            triangles = sculpt.synthesis.mesh.len(),
            "sculpt ready"
        );
        Ok(sculpt)
    }

    /// `(width, height, depth)` of the voxel volume.
    pub fn dimensions(&self) -> (usize, usize, usize) {
        self.history.dimensions()
    }

    /// Occupancy of voxel `(x, y, z)`; false outside the volume.
    #[inline]
    pub fn cell(&self, x: isize, y: isize, z: isize) -> bool {
        self.history.occupied(x, y, z)
    }

    pub fn mesh(&self) -> &Mesh {
        &self.synthesis.mesh
    }

    pub fn floater_count(&self) -> usize {
        self.synthesis.floaters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sculpt() {
        let sculpt = Sculpt::seeded(Pattern::Glider, 8, 8, 4, &SeedParams::default()).unwrap();
        assert_eq!(sculpt.dimensions(), (8, 8, 5));
        assert!(sculpt.cell(2, 1, 0));
        assert!(!sculpt.cell(-1, 0, 0));
        assert!(!sculpt.mesh().is_empty());
    }

    #[test]
    fn test_seeded_rejects_small_grid() {
        let result = Sculpt::seeded(Pattern::Methuselah, 4, 4, 1, &SeedParams::default());
        assert!(matches!(result, Err(ConfigurationError::GridTooSmall { .. })));
    }
}
