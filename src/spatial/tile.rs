//! Rotatable square tiles carrying four edge locks
//!
//! A tile is created once from its record and keeps its identity for life.
//! Rotation only moves locks between edge positions; no lock is ever
//! created or altered, so resetting the rotation restores the original
//! orientation exactly.

use crate::io::configuration::{RECORD_FIELD_COUNT, RECORD_SEPARATOR};
use crate::io::error::{Result, malformed_record};
use crate::spatial::lock::{Lock, ShapeVocabulary};
use std::hash::{Hash, Hasher};

/// Tile identity as given in its record
pub type TileId = u32;

/// Compass position of a tile edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Left edge
    West,
    /// Top edge
    North,
    /// Right edge
    East,
    /// Bottom edge
    South,
}

impl Edge {
    /// All edges in record order
    pub const ALL: [Self; 4] = [Self::West, Self::North, Self::East, Self::South];

    /// The edge facing this one on a neighbouring tile
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::West => Self::East,
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
        }
    }

    /// Column and row offset to the neighbour across this edge
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::West => (-1, 0),
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
        }
    }

    /// Single-letter tag used in rendered output
    pub const fn tag(self) -> char {
        match self {
            Self::West => 'W',
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
        }
    }
}

/// A puzzle tile; equality and hashing use the id only
#[derive(Debug, Clone)]
pub struct Tile {
    id: TileId,
    west: Lock,
    north: Lock,
    east: Lock,
    south: Lock,
    rotation: u8,
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Tile {
    /// Create an unrotated tile from explicit locks
    pub const fn new(id: TileId, west: Lock, north: Lock, east: Lock, south: Lock) -> Self {
        Self {
            id,
            west,
            north,
            east,
            south,
            rotation: 0,
        }
    }

    /// Parse an `id,west,north,east,south` record
    ///
    /// West and north edges become male locks, east and south female, so
    /// every tile is male on two adjacent sides in its starting orientation.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTileRecord` if the record does not have exactly five
    /// fields, the id is not a non-negative integer, or a shape is not in
    /// the vocabulary
    pub fn from_record(record: &str, vocabulary: &ShapeVocabulary) -> Result<Self> {
        let fields: Vec<&str> = record.split(RECORD_SEPARATOR).map(str::trim).collect();

        let [id, west, north, east, south] = fields.as_slice() else {
            return Err(malformed_record(
                record,
                &format!(
                    "expected {RECORD_FIELD_COUNT} fields, found {}",
                    fields.len()
                ),
            ));
        };

        let id: TileId = id
            .parse()
            .map_err(|e| malformed_record(record, &format!("invalid tile id '{id}': {e}")))?;

        let shape = |token: &str| {
            vocabulary
                .parse(token)
                .ok_or_else(|| malformed_record(record, &format!("unknown shape '{token}'")))
        };

        Ok(Self::new(
            id,
            Lock::male(shape(west)?),
            Lock::male(shape(north)?),
            Lock::female(shape(east)?),
            Lock::female(shape(south)?),
        ))
    }

    /// Tile identity
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Quarter turns applied clockwise from the original orientation (0..=3)
    pub const fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Lock currently on the given edge
    pub const fn lock(&self, edge: Edge) -> Lock {
        match edge {
            Edge::West => self.west,
            Edge::North => self.north,
            Edge::East => self.east,
            Edge::South => self.south,
        }
    }

    /// Lock currently on the west edge
    pub const fn west(&self) -> Lock {
        self.west
    }

    /// Lock currently on the north edge
    pub const fn north(&self) -> Lock {
        self.north
    }

    /// Lock currently on the east edge
    pub const fn east(&self) -> Lock {
        self.east
    }

    /// Lock currently on the south edge
    pub const fn south(&self) -> Lock {
        self.south
    }

    /// Locks in west, north, east, south order
    pub const fn locks(&self) -> [Lock; 4] {
        [self.west, self.north, self.east, self.south]
    }

    /// Turn a quarter clockwise: west moves to north, north to east, and so on
    pub const fn rotate_clockwise(&mut self) {
        let west = self.west;
        self.west = self.south;
        self.south = self.east;
        self.east = self.north;
        self.north = west;
        self.rotation = (self.rotation + 1) % 4;
    }

    /// Turn a quarter counter-clockwise, undoing one clockwise turn
    pub const fn rotate_counter_clockwise(&mut self) {
        let west = self.west;
        self.west = self.north;
        self.north = self.east;
        self.east = self.south;
        self.south = west;
        self.rotation = (self.rotation + 3) % 4;
    }

    /// Return to the original orientation
    pub const fn reset_rotation(&mut self) {
        while self.rotation > 0 {
            self.rotate_counter_clockwise();
        }
    }
}
