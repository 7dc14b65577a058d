//! History persistence for the simulation.
//!
//! The engine itself never touches the filesystem; the driver hands
//! each finished generation to a [`HistoryWriter`], which appends one
//! JSON line per snapshot to a per-session trace file. Traces can be
//! read back with [`read_trace`] and turned into grids again.

pub mod error;
pub mod history;

pub use error::{HistoryError, Result};
pub use history::{read_trace, HistoryWriter, Snapshot};
