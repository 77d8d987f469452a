//! Voxel surface synthesis: face culling plus 45° overhang wedges.
//!
//! Each cell is handled on its own: it is classified from its neighborhood,
//! then emits whatever part of its primitive's surface the neighbor across
//! each face does not cover, plus the sloped quad when it is a wedge. A
//! separating face is therefore produced exactly once, by the side that owns
//! it, and faces between two solids never appear.

use glam::Vec3;
use rayon::prelude::*;
use tracing::{debug, warn};

use super::config::SynthesisConfig;
use super::coverage::{classify_cell, is_floater, needs_center, CellKind, Coverage};
use super::face::{Face, SupportDirection};
use super::mesh::{face_triangles, Mesh, Triangle};
use super::volume::Occupancy;

/// Result of synthesizing a volume.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Synthesis {
    pub mesh: Mesh,
    /// Overhanging voxels with nothing below to lean on. They are emitted as
    /// ordinary culled cubes and will print only with external support.
    pub floaters: Vec<[usize; 3]>,
    /// Number of support wedges inserted.
    pub wedges: usize,
}

/// Triangles contributed by a single cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellSurface {
    pub kind: CellKind,
    pub triangles: Vec<Triangle>,
    pub floater: bool,
}

/// Corners of each quarter's outer edge, in plane coordinates.
fn quarter_edge(quarter: Coverage) -> [(f32, f32); 2] {
    match quarter {
        Coverage::U0 => [(0.0, 0.0), (0.0, 1.0)],
        Coverage::U1 => [(1.0, 0.0), (1.0, 1.0)],
        Coverage::V0 => [(0.0, 0.0), (1.0, 0.0)],
        _ => [(0.0, 1.0), (1.0, 1.0)],
    }
}

fn half_triangle(half: Coverage) -> Option<[(f32, f32); 3]> {
    match half {
        Coverage::ABOVE_DIAGONAL => Some([(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]),
        Coverage::ABOVE_ANTIDIAGONAL => Some([(1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
        Coverage::BELOW_DIAGONAL => Some([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]),
        Coverage::BELOW_ANTIDIAGONAL => Some([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]),
        _ => None,
    }
}

/// Emit the covered part of one face of the cell at `origin`.
fn emit_coverage(out: &mut Vec<Triangle>, origin: Vec3, face: Face, mask: Coverage) {
    if mask.is_empty() {
        return;
    }
    if mask == Coverage::FULL {
        out.extend(face_triangles(face, origin));
        return;
    }

    let (u, v) = face.plane_axes();
    let base = origin + face.plane_origin();
    let at = |(s, t): (f32, f32)| base + u * s + v * t;
    let outward = face.normal();

    if let Some([a, b, c]) = half_triangle(mask) {
        out.push(Triangle::new(at(a), at(b), at(c)).facing(outward));
        return;
    }

    let center = at((0.5, 0.5));
    for quarter in Coverage::QUARTERS {
        if mask.contains(quarter) {
            let [a, b] = quarter_edge(quarter);
            out.push(Triangle::new(at(a), at(b), center).facing(outward));
        }
    }
}

/// Emit the sloped quad of a wedge leaning toward `dir`.
///
/// `split[i]` inserts the midpoint of the slope's edge on `dir.side_faces()[i]`,
/// matching a neighbor square that was drawn with its center vertex.
fn emit_slope(out: &mut Vec<Triangle>, origin: Vec3, dir: SupportDirection, split: [bool; 2]) {
    let along = dir.axis();
    let across = -dir.side_faces()[0].normal();
    let (low, high) = if dir.is_positive() {
        (along, Vec3::ZERO)
    } else {
        (Vec3::ZERO, along)
    };

    // p0/p1 run along the foot of the support face, p3/p2 along the far top
    // edge of the cell. p0 and p3 sit on the negative side face.
    let p0 = origin + low;
    let p1 = origin + low + across;
    let p2 = origin + high + across + Vec3::Z;
    let p3 = origin + high + Vec3::Z;
    let m0 = (p0 + p3) * 0.5;
    let m1 = (p1 + p2) * 0.5;

    let outward = -dir.face().normal() - Vec3::Z;
    let mut push = |a: Vec3, b: Vec3, c: Vec3| out.push(Triangle::new(a, b, c).facing(outward));

    match split {
        [false, false] => {
            push(p0, p1, p2);
            push(p0, p2, p3);
        }
        [false, true] => {
            push(p0, p1, m1);
            push(p0, m1, p2);
            push(p0, p2, p3);
        }
        [true, false] => {
            push(p1, p2, p3);
            push(p1, p3, m0);
            push(p1, m0, p0);
        }
        [true, true] => {
            push(p0, p1, m1);
            push(p0, m1, m0);
            push(m0, m1, p2);
            push(m0, p2, p3);
        }
    }
}

/// Classify one cell and produce its triangles.
pub fn classify_voxel<O: Occupancy + ?Sized>(
    volume: &O,
    x: usize,
    y: usize,
    z: usize,
    order: &[SupportDirection; 4],
) -> CellSurface {
    let (xi, yi, zi) = (x as isize, y as isize, z as isize);
    let kind = classify_cell(volume, xi, yi, zi, order);
    if kind == CellKind::Empty {
        return CellSurface {
            kind,
            triangles: Vec::new(),
            floater: false,
        };
    }

    let neighbor_coverage = |face: Face| {
        let (dx, dy, dz) = face.offset();
        classify_cell(volume, xi + dx, yi + dy, zi + dz, order).coverage(face.opposite())
    };

    let origin = Vec3::new(x as f32, y as f32, z as f32);
    let mut triangles = Vec::new();

    for face in Face::ALL {
        let own = kind.coverage(face);
        if own.is_empty() {
            continue;
        }
        emit_coverage(&mut triangles, origin, face, own.without(neighbor_coverage(face)));
    }

    if let CellKind::Wedge(dir) = kind {
        let split = dir
            .side_faces()
            .map(|side| needs_center(kind.coverage(side), neighbor_coverage(side)));
        emit_slope(&mut triangles, origin, dir, split);
    }

    CellSurface {
        kind,
        triangles,
        floater: kind == CellKind::Solid && is_floater(volume, xi, yi, zi, order),
    }
}

struct LayerSurface {
    triangles: Vec<Triangle>,
    floaters: Vec<[usize; 3]>,
    wedges: usize,
}

fn synthesize_layer<O: Occupancy + ?Sized>(
    volume: &O,
    z: usize,
    order: &[SupportDirection; 4],
) -> LayerSurface {
    let (width, height, _) = volume.dimensions();
    let mut layer = LayerSurface {
        triangles: Vec::new(),
        floaters: Vec::new(),
        wedges: 0,
    };

    for x in 0..width {
        for y in 0..height {
            let cell = classify_voxel(volume, x, y, z, order);
            if cell.floater {
                debug!(x, y, z, "floating voxel");
                layer.floaters.push([x, y, z]);
            }
            if matches!(cell.kind, CellKind::Wedge(_)) {
                layer.wedges += 1;
            }
            layer.triangles.extend(cell.triangles);
        }
    }

    layer
}

/// Build the printable surface of `volume`.
///
/// Layers are classified in parallel when `config.parallel` is set; the
/// triangle order is always z, then x, then y, so output is reproducible.
pub fn synthesize<O: Occupancy + ?Sized>(volume: &O, config: &SynthesisConfig) -> Synthesis {
    let (_, _, depth) = volume.dimensions();
    let order = config.support_order;
    let run = |z: usize| synthesize_layer(volume, z, &order);

    let layers: Vec<LayerSurface> = if config.parallel {
        (0..depth).into_par_iter().map(&run).collect()
    } else {
        (0..depth).map(&run).collect()
    };

    let mut synthesis = Synthesis::default();
    for layer in layers {
        synthesis.mesh.extend(layer.triangles);
        synthesis.floaters.extend(layer.floaters);
        synthesis.wedges += layer.wedges;
    }

    if let Some(first) = synthesis.floaters.first() {
        warn!(
            count = synthesis.floaters.len(),
            first = ?first,
            "floating voxels kept as full cubes; they need external support to print"
        );
    }
    debug!(
        triangles = synthesis.mesh.len(),
        wedges = synthesis.wedges,
        "surface synthesized"
    );

    synthesis
}
