//! Placement checks against already placed neighbours

use crate::spatial::board::{Board, Cursor};
use crate::spatial::lock::compatible;
use crate::spatial::tile::{Edge, Tile};

/// Whether `tile`, in its current orientation, can sit at `(x, y)`
///
/// Each edge is checked against the facing edge of the neighbour across it:
/// west against the west neighbour's east edge, north against the north
/// neighbour's south edge, and so on. Empty neighbours and the board
/// boundary impose nothing.
pub fn fits(board: &Board, tile: &Tile, x: usize, y: usize) -> bool {
    Edge::ALL.iter().all(|&edge| {
        neighbour(board, x, y, edge)
            .is_none_or(|adjacent| compatible(tile.lock(edge), adjacent.lock(edge.opposite())))
    })
}

/// Tile across `edge` from `(x, y)`, if that cell exists and is filled
pub fn neighbour(board: &Board, x: usize, y: usize, edge: Edge) -> Option<&Tile> {
    let (dx, dy) = edge.offset();
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    board.cell(nx, ny)
}

/// A shared edge between two filled cells that does not interlock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeamMismatch {
    /// Cell on the west or north side of the seam
    pub from: Cursor,
    /// Edge of `from` that faces the other cell
    pub edge: Edge,
}

/// Every internal seam of the filled cells that fails to interlock
///
/// Only east and south seams are visited so each shared edge is reported once.
pub fn mismatched_seams(board: &Board) -> Vec<SeamMismatch> {
    let mut mismatches = Vec::new();
    for ((y, x), slot) in board.grid().indexed_iter() {
        let Some(tile) = slot else { continue };
        for edge in [Edge::East, Edge::South] {
            let mismatched = neighbour(board, x, y, edge).is_some_and(|adjacent| {
                !compatible(tile.lock(edge), adjacent.lock(edge.opposite()))
            });
            if mismatched {
                mismatches.push(SeamMismatch {
                    from: Cursor { x, y },
                    edge,
                });
            }
        }
    }
    mismatches
}

/// Whether the board is complete and every seam interlocks
pub fn is_consistent(board: &Board) -> bool {
    board.is_complete() && mismatched_seams(board).is_empty()
}
