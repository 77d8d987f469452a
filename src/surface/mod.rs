//! Surface synthesis: turns a voxel volume into a printable triangle mesh.
//!
//! Faces between two solid voxels are dropped, and every overhang that has a
//! horizontal neighbor to lean on gets a 45° support wedge underneath.

pub mod config;
pub mod coverage;
pub mod face;
pub mod mesh;
pub mod synth;
pub mod volume;

pub use config::SynthesisConfig;
pub use coverage::{classify_cell, CellKind, Coverage};
pub use face::{Face, SupportDirection};
pub use mesh::{cube_triangles, naive_cubes, Mesh, Triangle};
pub use synth::{classify_voxel, synthesize, CellSurface, Synthesis};
pub use volume::{DenseVolume, Occupancy};
