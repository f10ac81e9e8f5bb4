//! Backtracking solver for edge-matching interlocking tile puzzles
//!
//! Square tiles carry a male or female lock on each edge. The solver places
//! and rotates them on an N×N board so that every shared edge pairs a male
//! lock with a female lock of the same shape, undoing earlier placements
//! when it reaches a dead end.

#![forbid(unsafe_code)]

/// Placement checks and the backtracking search
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Locks, tiles and the board they are placed on
pub mod spatial;

pub use algorithm::solver::{Exhausted, Solution, Solver, SolverConfig, SolverState};
pub use io::error::{AlgorithmError, Result};
pub use spatial::board::{Board, BoardOptions};
