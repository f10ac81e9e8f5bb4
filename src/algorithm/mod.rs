/// Neighbour compatibility checks for candidate placements
pub mod fit;
/// Backtracking search state machine
pub mod solver;
