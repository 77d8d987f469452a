//! 3D occupancy view over a stack of generations.
//!
//! `occ(x, y, z)` is generation `z`'s cell `(x, y)`; everything outside the
//! stack, on all six sides, reads as empty.

use crate::automaton::GenerationHistory;

/// A bounded binary volume with zero padding.
pub trait Occupancy: Sync {
    /// `(width, height, depth)` of the bounded region.
    fn dimensions(&self) -> (usize, usize, usize);

    /// Whether the voxel is solid. Must be false outside the bounds.
    fn occupied(&self, x: isize, y: isize, z: isize) -> bool;

    fn contains(&self, x: isize, y: isize, z: isize) -> bool {
        let (w, h, d) = self.dimensions();
        x >= 0 && y >= 0 && z >= 0 && (x as usize) < w && (y as usize) < h && (z as usize) < d
    }

    /// Number of solid voxels.
    fn solid_count(&self) -> usize {
        let (w, h, d) = self.dimensions();
        let mut count = 0;
        for z in 0..d as isize {
            for y in 0..h as isize {
                for x in 0..w as isize {
                    if self.occupied(x, y, z) {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}

impl Occupancy for GenerationHistory {
    fn dimensions(&self) -> (usize, usize, usize) {
        (self.width(), self.height(), self.len())
    }

    fn occupied(&self, x: isize, y: isize, z: isize) -> bool {
        z >= 0
            && self
                .get(z as usize)
                .map_or(false, |grid| grid.is_alive(x, y))
    }

    fn solid_count(&self) -> usize {
        self.total_population()
    }
}

/// An explicit voxel volume, for occupancy that does not come from a history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseVolume {
    width: usize,
    height: usize,
    depth: usize,
    voxels: Vec<bool>, // z, y, x order (x fastest)
}

impl DenseVolume {
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
            voxels: vec![false; width * height * depth],
        }
    }

    /// Volume with the listed voxels solid. Coordinates outside the bounds are
    /// ignored.
    pub fn from_voxels(
        width: usize,
        height: usize,
        depth: usize,
        solid: &[(usize, usize, usize)],
    ) -> Self {
        let mut volume = Self::new(width, height, depth);
        for &(x, y, z) in solid {
            volume.set(x, y, z, true);
        }
        volume
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize, z: usize) -> usize {
        z * self.height * self.width + y * self.width + x
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, solid: bool) {
        if x < self.width && y < self.height && z < self.depth {
            let idx = self.index_of(x, y, z);
            self.voxels[idx] = solid;
        }
    }
}

impl Occupancy for DenseVolume {
    fn dimensions(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.depth)
    }

    fn occupied(&self, x: isize, y: isize, z: isize) -> bool {
        self.contains(x, y, z) && self.voxels[self.index_of(x as usize, y as usize, z as usize)]
    }
}
