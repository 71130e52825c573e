//! Conway's Game of Life on a fixed-size toroidal grid.
//!
//! The [`Grid`] owns all cell state and the generation-update algorithm;
//! [`patterns`] provides the usual seed patterns as static data. Rendering,
//! frame pacing, and argument handling live in the binary, not here.

pub mod grid;
pub mod patterns;

pub use grid::{Grid, GridError, DEAD_MARKER, LIVE_MARKER};
