//! Core automaton logic: grids, seeds, stepping and generation history.
//!
//! The FFI layer in `ffi/` and the CLI call into these functions.

pub mod grid;
pub mod history;
pub mod seeds;
pub mod stepping;

pub use grid::Grid;
pub use history::GenerationHistory;
pub use seeds::{cross, glider, methuselah, r_pentomino, random, Pattern, SeedParams};
pub use stepping::{next_state, step, steps};
