#[cfg(test)]
mod tests {
    use crate::automaton::{glider, r_pentomino, random, step, steps, Grid, Pattern, SeedParams};
    use crate::error::ConfigurationError;
    use crate::stl::{save_stl, write_stl, HEADER_SIZE, TRIANGLE_SIZE};
    use crate::surface::synth::tests::{assert_closed, signed_volume};
    use crate::surface::{naive_cubes, synthesize, Occupancy, Synthesis, SynthesisConfig};
    use approx::assert_relative_eq;

    fn surface_of(seed: &Grid, generations: usize) -> Synthesis {
        synthesize(&steps(seed, generations, false), &SynthesisConfig::default())
    }

    /// Closed, and encloses every voxel plus half a cell per wedge.
    fn assert_printable(seed: &Grid, generations: usize) -> Synthesis {
        let history = steps(seed, generations, false);
        let synthesis = synthesize(&history, &SynthesisConfig::default());

        assert_closed(&synthesis.mesh);
        let expected = history.solid_count() as f64 + 0.5 * synthesis.wedges as f64;
        assert_relative_eq!(signed_volume(&synthesis.mesh), expected, epsilon = 1e-6);
        synthesis
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let seed = glider(10, 10).unwrap();
        let history = steps(&seed, 4, false);

        let before: Vec<_> = history.seed().live_cells().collect();
        let after: Vec<_> = history.latest().live_cells().collect();
        let shifted: Vec<_> = before.iter().map(|&(x, y)| (x + 1, y + 1)).collect();

        assert_eq!(after.len(), 5);
        let mut after_sorted = after.clone();
        after_sorted.sort_unstable();
        let mut shifted_sorted = shifted;
        shifted_sorted.sort_unstable();
        assert_eq!(after_sorted, shifted_sorted);
    }

    #[test]
    fn test_shape_invariance() {
        let seed = random(7, 11, 0.4, Some(3)).unwrap();
        let history = steps(&seed, 12, false);
        assert_eq!(history.len(), 13);
        for grid in &history {
            assert_eq!((grid.width(), grid.height()), (7, 11));
        }
    }

    #[test]
    fn test_lonely_cells_die_everywhere() {
        for (x, y) in [(0, 0), (4, 0), (2, 2), (0, 3), (4, 3)] {
            let grid = Grid::with_live_cells(5, 4, &[(x, y)]).unwrap();
            assert_eq!(step(&grid, false).population(), 0, "cell at ({}, {})", x, y);
        }
    }

    #[test]
    fn test_r_pentomino_minimum() {
        assert!(matches!(
            r_pentomino(3, 3),
            Err(ConfigurationError::GridTooSmall { .. })
        ));
        assert!(r_pentomino(4, 4).is_ok());
    }

    #[test]
    fn test_glider_surface_is_printable() {
        let synthesis = assert_printable(&glider(10, 10).unwrap(), 12);
        assert!(synthesis.wedges > 0);
        assert!(synthesis.floaters.is_empty());
    }

    #[test]
    fn test_r_pentomino_surface_is_printable() {
        assert_printable(&r_pentomino(24, 24).unwrap(), 30);
    }

    #[test]
    fn test_random_surfaces_are_printable() {
        for seed in [1, 7, 42] {
            assert_printable(&random(14, 12, 0.45, Some(seed)).unwrap(), 8);
        }
    }

    #[test]
    fn test_cross_surface_is_printable() {
        let seed = Pattern::Cross
            .seed(15, 15, &SeedParams::default())
            .unwrap();
        assert_printable(&seed, 10);
    }

    #[test]
    fn test_culling_beats_naive_cubes() {
        let history = steps(&r_pentomino(20, 20).unwrap(), 15, false);
        let naive = naive_cubes(&history, false);
        let culled = synthesize(&history, &SynthesisConfig::default());

        assert_eq!(naive.len(), 12 * history.solid_count());
        assert!(culled.mesh.len() < naive.len());
    }

    #[test]
    fn test_runs_are_byte_identical() {
        let params = SeedParams {
            density: 0.35,
            seed: Some(2024),
            ..SeedParams::default()
        };
        let render = || {
            let seed = Pattern::Random.seed(16, 16, &params).unwrap();
            let mut bytes = Vec::new();
            write_stl(&mut bytes, &surface_of(&seed, 10).mesh).unwrap();
            bytes
        };

        assert_eq!(render(), render());
    }

    #[test]
    fn test_stl_file_matches_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glider.stl");
        let synthesis = surface_of(&glider(8, 8).unwrap(), 6);

        save_stl(&path, &synthesis.mesh).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let count = u32::from_le_bytes(bytes[HEADER_SIZE..HEADER_SIZE + 4].try_into().unwrap());
        assert_eq!(count as usize, synthesis.mesh.len());
        assert_eq!(bytes.len(), HEADER_SIZE + 4 + TRIANGLE_SIZE * synthesis.mesh.len());
    }
}
