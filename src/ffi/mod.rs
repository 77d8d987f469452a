//! C FFI layer.
//!
//! Exports C ABI functions over an opaque [`Sculpt`](crate::state::Sculpt)
//! handle. All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` and `surface` modules. These
//! functions are thin wrappers that handle null checks, pointer safety, and
//! C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;
pub mod mesh;

pub use grid::{ls_get_cell, ls_get_dimensions};
pub use lifecycle::{ls_create_seeded, ls_destroy};
pub use mesh::{ls_copy_triangles, ls_floater_count, ls_triangle_count, ls_write_stl};
