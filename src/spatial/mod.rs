//! Puzzle pieces and the board they are placed on
//!
//! This module contains:
//! - Locks and the shape vocabulary
//! - Rotatable tiles
//! - The board grid, cursor and pending queue

/// Board grid, cursor and pending tile queue
pub mod board;
/// Edge locks, polarities and shape vocabularies
pub mod lock;
/// Rotatable tiles with four edge locks
pub mod tile;

pub use board::{Board, BoardOptions, Cursor};
pub use lock::{Lock, Polarity, Shape, ShapeVocabulary};
pub use tile::{Edge, Tile, TileId};
