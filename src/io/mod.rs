/// Command-line parsing and solve orchestration
pub mod cli;
/// Puzzle constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Search progress display
pub mod progress;
/// Tile record input
pub mod records;
/// Text rendering of solutions
pub mod render;
