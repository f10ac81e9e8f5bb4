//! Board state: the placement grid, the fill cursor and the pending queue
//!
//! Tiles move between the pending queue and the grid by value, so a tile is
//! always in exactly one of the two. The cursor sweeps the grid row-major
//! from the top-left corner; every cell before it is filled.

use crate::io::configuration::{DEFAULT_SUPPORTED_SIDES, DEFAULT_TILE_RECORDS};
use crate::io::error::{AlgorithmError, Result, WithContext};
use crate::spatial::lock::ShapeVocabulary;
use crate::spatial::tile::{Tile, TileId};
use ndarray::Array2;
use std::collections::VecDeque;
use std::fmt;

/// Options controlling how records become a board
#[derive(Debug, Clone)]
pub struct BoardOptions {
    /// Shapes recognised in tile records
    pub vocabulary: ShapeVocabulary,
    /// Accepted board sides, `None` accepts any side
    pub supported_sides: Option<Vec<usize>>,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            vocabulary: ShapeVocabulary::standard(),
            supported_sides: Some(DEFAULT_SUPPORTED_SIDES.to_vec()),
        }
    }
}

impl BoardOptions {
    /// Standard vocabulary without a board side restriction
    pub fn any_size() -> Self {
        Self {
            supported_sides: None,
            ..Self::default()
        }
    }

    fn check_side(&self, side: usize) -> Result<()> {
        match &self.supported_sides {
            Some(sides) if !sides.contains(&side) => Err(AlgorithmError::UnsupportedBoardSize {
                side,
                supported: sides.clone(),
            }),
            _ => Ok(()),
        }
    }
}

/// Non-fatal findings from board construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A record repeated an id already queued; the record was dropped
    DuplicateTileId {
        /// The repeated id
        id: TileId,
        /// 1-based position of the dropped record
        record_index: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTileId { id, record_index } => {
                write!(f, "Repeated tile id {id} in record {record_index}, dropped")
            }
        }
    }
}

/// Grid position, `x` counting columns from the left and `y` rows from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Square board being filled with tiles
#[derive(Debug, Clone)]
pub struct Board {
    grid: Array2<Option<Tile>>,
    side: usize,
    filled: usize,
    pending: VecDeque<Tile>,
    diagnostics: Vec<Diagnostic>,
    vocabulary: ShapeVocabulary,
}

impl Board {
    /// Build a board from `id,west,north,east,south` records
    ///
    /// Records are queued in input order. A record whose id is already
    /// queued is dropped and reported through [`Board::diagnostics`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The record count is zero or not a perfect square (`InvalidBoardSize`)
    /// - The implied side is not accepted by the options (`UnsupportedBoardSize`)
    /// - Any record fails to parse (`MalformedTileRecord`)
    pub fn new<S: AsRef<str>>(records: &[S], options: &BoardOptions) -> Result<Self> {
        let tile_count = records.len();
        let side = tile_count.isqrt();
        if tile_count == 0 || side * side != tile_count {
            return Err(AlgorithmError::InvalidBoardSize { tile_count });
        }
        options.check_side(side)?;

        let mut pending: VecDeque<Tile> = VecDeque::with_capacity(tile_count);
        let mut diagnostics = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let record_index = index + 1;
            let tile = Tile::from_record(record.as_ref(), &options.vocabulary)
                .with_record_index(record_index)?;

            if pending.contains(&tile) {
                tracing::warn!(
                    id = tile.id(),
                    record_index,
                    "repeated tile id, dropping record"
                );
                diagnostics.push(Diagnostic::DuplicateTileId {
                    id: tile.id(),
                    record_index,
                });
            } else {
                pending.push_back(tile);
            }
        }

        tracing::debug!(side, tiles = pending.len(), "board populated");

        Ok(Self {
            grid: Array2::from_elem((side, side), None),
            side,
            filled: 0,
            pending,
            diagnostics,
            vocabulary: options.vocabulary.clone(),
        })
    }

    /// The built-in nine tile puzzle
    ///
    /// # Errors
    ///
    /// Propagates construction errors, which the built-in records never raise
    pub fn standard() -> Result<Self> {
        Self::new(&DEFAULT_TILE_RECORDS, &BoardOptions::default())
    }

    /// Number of tiles along each edge of the board
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.side * self.side
    }

    /// Number of cells already filled
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// Number of cells still empty
    pub const fn remaining_cells(&self) -> usize {
        self.cell_count() - self.filled
    }

    /// Whether every cell is filled
    pub const fn is_complete(&self) -> bool {
        self.filled == self.cell_count()
    }

    /// Next cell to fill; one row past the bottom once the board is complete
    pub const fn cursor(&self) -> Cursor {
        Cursor {
            x: self.filled % self.side,
            y: self.filled / self.side,
        }
    }

    /// Tile placed at a cell, if any
    pub fn cell(&self, x: usize, y: usize) -> Option<&Tile> {
        self.grid.get((y, x)).and_then(Option::as_ref)
    }

    /// Placement grid indexed by `[row, col]`
    pub const fn grid(&self) -> &Array2<Option<Tile>> {
        &self.grid
    }

    /// Tiles not yet placed, in queue order
    pub const fn pending(&self) -> &VecDeque<Tile> {
        &self.pending
    }

    /// Findings from construction that did not stop it
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Shapes this board was built with
    pub const fn vocabulary(&self) -> &ShapeVocabulary {
        &self.vocabulary
    }

    /// Take the tile at the head of the pending queue
    pub fn pop_pending(&mut self) -> Option<Tile> {
        self.pending.pop_front()
    }

    /// Queue a tile behind all others
    pub fn push_pending_back(&mut self, tile: Tile) {
        self.pending.push_back(tile);
    }

    /// Queue a tile ahead of all others
    pub fn push_pending_front(&mut self, tile: Tile) {
        self.pending.push_front(tile);
    }

    /// Shuffle the pending queue in place
    pub fn shuffle_pending<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        use rand::seq::SliceRandom;
        self.pending.make_contiguous().shuffle(rng);
    }

    /// Move a tile into the cell under the cursor and advance the cursor
    ///
    /// # Errors
    ///
    /// Hands the tile back if the board is already complete
    pub fn place_at_cursor(&mut self, tile: Tile) -> std::result::Result<Cursor, Tile> {
        let cursor = self.cursor();
        match self.grid.get_mut((cursor.y, cursor.x)) {
            Some(slot) if slot.is_none() => {
                *slot = Some(tile);
                self.filled += 1;
                Ok(cursor)
            }
            _ => Err(tile),
        }
    }

    /// Move the most recently placed tile out of the grid and rewind the cursor
    pub fn take_back(&mut self) -> Option<Tile> {
        let index = self.filled.checked_sub(1)?;
        let tile = self
            .grid
            .get_mut((index / self.side, index % self.side))
            .and_then(Option::take)?;
        self.filled = index;
        Some(tile)
    }

    /// Placed tiles in row-major order
    pub fn placed(&self) -> impl Iterator<Item = (Cursor, &Tile)> + '_ {
        self.grid
            .indexed_iter()
            .filter_map(|((y, x), slot)| slot.as_ref().map(|tile| (Cursor { x, y }, tile)))
    }
}
