//! Axis-aligned faces of the unit voxel and horizontal support directions.

use glam::Vec3;

/// One of the six faces of a voxel, named by its outward direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    NegX,
    PosX,
    NegY,
    PosY,
    NegZ,
    PosZ,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::NegX,
        Face::PosX,
        Face::NegY,
        Face::PosY,
        Face::NegZ,
        Face::PosZ,
    ];

    /// Offset to the voxel across this face.
    pub fn offset(self) -> (isize, isize, isize) {
        match self {
            Face::NegX => (-1, 0, 0),
            Face::PosX => (1, 0, 0),
            Face::NegY => (0, -1, 0),
            Face::PosY => (0, 1, 0),
            Face::NegZ => (0, 0, -1),
            Face::PosZ => (0, 0, 1),
        }
    }

    pub fn normal(self) -> Vec3 {
        let (x, y, z) = self.offset();
        Vec3::new(x as f32, y as f32, z as f32)
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::NegX => Face::PosX,
            Face::PosX => Face::NegX,
            Face::NegY => Face::PosY,
            Face::PosY => Face::NegY,
            Face::NegZ => Face::PosZ,
            Face::PosZ => Face::NegZ,
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Face::PosX | Face::PosY | Face::PosZ)
    }

    /// In-plane axes `(u, v)` of the lattice plane this face lies on.
    ///
    /// Both voxels sharing a face see the same axes, so coverage masks from
    /// either side can be compared directly: x-planes use (y, z), y-planes
    /// (x, z), z-planes (x, y).
    pub fn plane_axes(self) -> (Vec3, Vec3) {
        match self {
            Face::NegX | Face::PosX => (Vec3::Y, Vec3::Z),
            Face::NegY | Face::PosY => (Vec3::X, Vec3::Z),
            Face::NegZ | Face::PosZ => (Vec3::X, Vec3::Y),
        }
    }

    /// Offset of the face plane from the voxel's minimum corner.
    pub fn plane_origin(self) -> Vec3 {
        if self.is_positive() {
            self.normal()
        } else {
            Vec3::ZERO
        }
    }

    /// Indices into [`CUBE_FACES`](super::mesh::CUBE_FACES) of the two
    /// triangles that tile this face.
    pub(crate) fn cube_triangles(self) -> [usize; 2] {
        match self {
            Face::NegZ => [0, 1],
            Face::NegX => [2, 3],
            Face::PosZ => [4, 5],
            Face::PosX => [6, 7],
            Face::PosY => [8, 9],
            Face::NegY => [10, 11],
        }
    }
}

/// Horizontal direction from an overhang cell toward the voxel supporting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SupportDirection {
    NegY,
    NegX,
    PosX,
    PosY,
}

impl SupportDirection {
    /// Default tie-break: −y, then −x, then +x, then +y.
    pub const DEFAULT_ORDER: [SupportDirection; 4] = [
        SupportDirection::NegY,
        SupportDirection::NegX,
        SupportDirection::PosX,
        SupportDirection::PosY,
    ];

    pub fn face(self) -> Face {
        match self {
            SupportDirection::NegY => Face::NegY,
            SupportDirection::NegX => Face::NegX,
            SupportDirection::PosX => Face::PosX,
            SupportDirection::PosY => Face::PosY,
        }
    }

    pub fn offset(self) -> (isize, isize) {
        let (x, y, _) = self.face().offset();
        (x, y)
    }

    pub fn is_positive(self) -> bool {
        self.face().is_positive()
    }

    /// Unit vector along this direction's axis (always the positive sense).
    pub fn axis(self) -> Vec3 {
        match self {
            SupportDirection::NegX | SupportDirection::PosX => Vec3::X,
            SupportDirection::NegY | SupportDirection::PosY => Vec3::Y,
        }
    }

    /// The two horizontal faces perpendicular to this direction, negative first.
    pub fn side_faces(self) -> [Face; 2] {
        match self {
            SupportDirection::NegX | SupportDirection::PosX => [Face::NegY, Face::PosY],
            SupportDirection::NegY | SupportDirection::PosY => [Face::NegX, Face::PosX],
        }
    }
}
