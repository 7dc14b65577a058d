//! Simulation engine for a two-dimensional cellular automaton
//! (Conway's Game of Life family).
//!
//! The engine is a pure state machine: no I/O, no wall clock, no
//! terminal. A [`Grid`] of [`Cell`]s is advanced one generation at a
//! time by an [`Engine`], which counts live neighbors under a
//! [`Topology`] and applies a [`Rule`]. Each step assembles a complete
//! new grid before it becomes visible, so no cell ever observes a
//! neighbor's already-updated state within the same generation.

pub mod cell;
pub mod engine;
pub mod error;
pub mod grid;
pub mod rule;
pub mod topology;

pub use cell::Cell;
pub use engine::Engine;
pub use error::{GridError, Result};
pub use grid::Grid;
pub use rule::Rule;
pub use topology::Topology;
