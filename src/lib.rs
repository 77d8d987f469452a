//! Life Sculpt - printable sculptures from Game of Life histories
//!
//! A seed pattern is evolved for a number of generations; the generations are
//! stacked along z into a voxel volume, and the volume's surface is turned
//! into a closed, outward-wound triangle mesh. Overhangs that can lean on a
//! neighbor get 45° support wedges so the result prints without scaffolding.
//!
//! The library is usable from Rust directly and through a C ABI (`ffi`).

pub mod automaton;
pub mod error;
pub mod ffi;
pub mod search;
pub mod state;
pub mod stl;
pub mod surface;

mod tests;

pub use automaton::{steps, GenerationHistory, Grid, Pattern, SeedParams};
pub use error::{ConfigurationError, SinkError};
pub use state::Sculpt;
pub use surface::{synthesize, Mesh, Synthesis, SynthesisConfig, Triangle};
