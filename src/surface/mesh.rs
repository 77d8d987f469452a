//! Triangle soup and the unit-cube template.

use glam::Vec3;

use super::face::Face;
use super::volume::Occupancy;

/// Corners of the unit cube.
pub const CUBE_VERTICES: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0], // 0
    [1.0, 0.0, 0.0], // 1
    [1.0, 1.0, 0.0], // 2
    [0.0, 1.0, 0.0], // 3
    [0.0, 0.0, 1.0], // 4
    [1.0, 0.0, 1.0], // 5
    [1.0, 1.0, 1.0], // 6
    [0.0, 1.0, 1.0], // 7
];

/// The 12 outward-wound triangles of the unit cube, two per face:
/// −z, −x, +z, +x, +y, −y.
pub const CUBE_FACES: [[usize; 3]; 12] = [
    [0, 3, 1],
    [1, 3, 2],
    [0, 4, 7],
    [0, 7, 3],
    [4, 5, 6],
    [4, 6, 7],
    [5, 1, 2],
    [5, 2, 6],
    [2, 3, 6],
    [3, 7, 6],
    [0, 1, 5],
    [0, 5, 4],
];

/// Three vertices wound counter-clockwise when seen from outside the solid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Unnormalized normal from the winding, `(b - a) × (c - a)`.
    pub fn normal(&self) -> Vec3 {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a)
    }

    /// Unit normal, or zero for a degenerate triangle.
    pub fn unit_normal(&self) -> Vec3 {
        self.normal().normalize_or_zero()
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(a + offset, b + offset, c + offset)
    }

    /// Flip the winding if needed so the normal points along `outward`.
    pub fn facing(self, outward: Vec3) -> Self {
        if self.normal().dot(outward) < 0.0 {
            let [a, b, c] = self.vertices;
            Self::new(a, c, b)
        } else {
            self
        }
    }
}

/// Ordered triangle soup. No vertex sharing is implied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Vertices as a flat `[x, y, z, x, y, z, ...]` array, 9 floats per triangle.
    pub fn to_flat_vertices(&self) -> Vec<f32> {
        self.triangles
            .iter()
            .flat_map(|t| t.vertices)
            .flat_map(|v| v.to_array())
            .collect()
    }
}

impl Extend<Triangle> for Mesh {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

fn corner(index: usize) -> Vec3 {
    Vec3::from_array(CUBE_VERTICES[index])
}

fn template_triangle(slot: usize, origin: Vec3) -> Triangle {
    let [a, b, c] = CUBE_FACES[slot];
    Triangle::new(corner(a) + origin, corner(b) + origin, corner(c) + origin)
}

/// The two template triangles of one cube face, placed at `origin`.
pub fn face_triangles(face: Face, origin: Vec3) -> [Triangle; 2] {
    face.cube_triangles().map(|slot| template_triangle(slot, origin))
}

/// All 12 triangles of a unit cube placed at `origin`.
pub fn cube_triangles(origin: Vec3) -> [Triangle; 12] {
    std::array::from_fn(|slot| template_triangle(slot, origin))
}

/// Baseline renderer: a full cube for every occupied voxel, no culling.
///
/// With `perimeter_posts`, four extra cubes are placed at the corners of the
/// generation-0 plane so the print's footprint always spans the whole grid.
pub fn naive_cubes<O: Occupancy + ?Sized>(volume: &O, perimeter_posts: bool) -> Mesh {
    let (width, height, depth) = volume.dimensions();
    let mut mesh = Mesh::new();

    for z in 0..depth {
        for x in 0..width {
            for y in 0..height {
                if volume.occupied(x as isize, y as isize, z as isize) {
                    mesh.extend(cube_triangles(Vec3::new(x as f32, y as f32, z as f32)));
                }
            }
        }
    }

    if perimeter_posts && width > 0 && height > 0 {
        let (last_x, last_y) = ((width - 1) as f32, (height - 1) as f32);
        for (x, y) in [(0.0, 0.0), (0.0, last_y), (last_x, 0.0), (last_x, last_y)] {
            mesh.extend(cube_triangles(Vec3::new(x, y, 0.0)));
        }
    }

    mesh
}
