//! Per-cell solid classification and face coverage.
//!
//! Every cell of the volume holds one primitive: nothing, a unit cube, or a
//! 45° support wedge. A wedge fills the empty cell under an overhanging voxel,
//! rising from the face of a solid neighbor (its support) to the full underside
//! of the voxel above:
//!
//! ```text
//!   side view, support toward −y
//!
//!   z+1 +-------+-------+
//!       |       |   V   |
//!     z +-------+-------+
//!       |       |      /
//!       |   S   |    /    <- sloped quad, normal (0, +1, -1)
//!       |       |  /
//!   z-1 +-------+/
//! ```
//!
//! Where a primitive meets a lattice plane, its contact is a [`Coverage`]
//! mask over the four quarter triangles of the unit square (split by both
//! diagonals). The surface on any square is the symmetric difference of the
//! masks from its two sides.

use super::face::{Face, SupportDirection};
use super::volume::Occupancy;

/// Which quarters of a unit lattice square a primitive touches.
///
/// Quarters are named by the square edge they rest on, in the plane's
/// `(u, v)` axes ([`Face::plane_axes`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coverage(u8);

impl Coverage {
    pub const NONE: Coverage = Coverage(0);
    /// Quarter on the `u = 0` edge.
    pub const U0: Coverage = Coverage(1);
    /// Quarter on the `u = 1` edge.
    pub const U1: Coverage = Coverage(2);
    /// Quarter on the `v = 0` edge.
    pub const V0: Coverage = Coverage(4);
    /// Quarter on the `v = 1` edge.
    pub const V1: Coverage = Coverage(8);
    pub const FULL: Coverage = Coverage(15);

    /// Half above the `(0,0)–(1,1)` diagonal: `v >= u`.
    pub const ABOVE_DIAGONAL: Coverage = Coverage(1 | 8);
    /// Half above the `(1,0)–(0,1)` diagonal: `v >= 1 - u`.
    pub const ABOVE_ANTIDIAGONAL: Coverage = Coverage(2 | 8);
    /// Half below the `(0,0)–(1,1)` diagonal: `v <= u`.
    pub const BELOW_DIAGONAL: Coverage = Coverage(2 | 4);
    /// Half below the `(1,0)–(0,1)` diagonal: `v <= 1 - u`.
    pub const BELOW_ANTIDIAGONAL: Coverage = Coverage(1 | 4);

    pub const QUARTERS: [Coverage; 4] = [Coverage::U0, Coverage::U1, Coverage::V0, Coverage::V1];

    /// Part of `self` not covered by `other`.
    pub fn without(self, other: Coverage) -> Coverage {
        Coverage(self.0 & !other.0 & Self::FULL.0)
    }

    pub fn contains(self, other: Coverage) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True for one of the four diagonal halves.
    pub fn is_half(self) -> bool {
        matches!(
            self,
            Coverage::ABOVE_DIAGONAL
                | Coverage::ABOVE_ANTIDIAGONAL
                | Coverage::BELOW_DIAGONAL
                | Coverage::BELOW_ANTIDIAGONAL
        )
    }

    /// Drawable without the square's center point: empty, full, or a half.
    pub fn is_simple(self) -> bool {
        self == Coverage::NONE || self == Coverage::FULL || self.is_half()
    }
}

/// Whether the square between two coverages needs its center vertex.
///
/// Symmetric in its arguments, so the cells on both sides agree.
pub fn needs_center(a: Coverage, b: Coverage) -> bool {
    !a.without(b).is_simple() || !b.without(a).is_simple()
}

/// The primitive occupying one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    Solid,
    /// Support wedge leaning on the solid neighbor in this direction.
    Wedge(SupportDirection),
}

impl CellKind {
    /// Contact of this cell's primitive with one of its faces.
    pub fn coverage(self, face: Face) -> Coverage {
        match self {
            CellKind::Empty => Coverage::NONE,
            CellKind::Solid => Coverage::FULL,
            CellKind::Wedge(dir) => {
                let toward = dir.face();
                if face == Face::PosZ || face == toward {
                    Coverage::FULL
                } else if face == Face::NegZ || face == toward.opposite() {
                    // Touches only along an edge.
                    Coverage::NONE
                } else if dir.is_positive() {
                    // Side plane: u runs along dir's axis, v is z.
                    Coverage::ABOVE_ANTIDIAGONAL
                } else {
                    Coverage::ABOVE_DIAGONAL
                }
            }
        }
    }
}

/// First direction in `order` whose neighbor at the same height is solid.
pub fn support_toward<O: Occupancy + ?Sized>(
    volume: &O,
    x: isize,
    y: isize,
    z: isize,
    order: &[SupportDirection; 4],
) -> Option<SupportDirection> {
    order.iter().copied().find(|dir| {
        let (dx, dy) = dir.offset();
        volume.occupied(x + dx, y + dy, z)
    })
}

/// Classify the cell at `(x, y, z)`.
///
/// An empty in-volume cell becomes a wedge when the voxel above it is solid
/// and some horizontal neighbor can carry it. Cells outside the volume are
/// always empty, which also keeps generation 0 (resting on the floor) free
/// of wedges underneath.
pub fn classify_cell<O: Occupancy + ?Sized>(
    volume: &O,
    x: isize,
    y: isize,
    z: isize,
    order: &[SupportDirection; 4],
) -> CellKind {
    if volume.occupied(x, y, z) {
        return CellKind::Solid;
    }
    if !volume.contains(x, y, z) || !volume.occupied(x, y, z + 1) {
        return CellKind::Empty;
    }
    support_toward(volume, x, y, z, order).map_or(CellKind::Empty, CellKind::Wedge)
}

/// Solid voxel above the floor with nothing below it and nothing to lean on.
pub fn is_floater<O: Occupancy + ?Sized>(
    volume: &O,
    x: isize,
    y: isize,
    z: isize,
    order: &[SupportDirection; 4],
) -> bool {
    z > 0
        && volume.occupied(x, y, z)
        && !volume.occupied(x, y, z - 1)
        && support_toward(volume, x, y, z - 1, order).is_none()
}
