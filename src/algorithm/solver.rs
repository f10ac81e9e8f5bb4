//! Depth-first placement search with LIFO backtracking
//!
//! The solver fills the board cell by cell in row-major order. At the cursor
//! it takes the head of the pending queue and tries its four orientations;
//! a tile that fits in none is reset and sent to the back of the queue. Once
//! every pending tile has been examined at a cell without a fit, the most
//! recently placed tile is taken back, reset, put at the front of the queue
//! and resumed from its next orientation.
//!
//! Each filled cell keeps a frame recording the placed orientation and how
//! many queue heads had already been examined there. Exhausting a cell always
//! rotates the queue a whole lap, so it returns to the order it had when the
//! cell was entered, which makes the search complete and deterministic.

use crate::algorithm::fit::fits;
use crate::io::configuration::DEFAULT_STEP_BUDGET;
use crate::io::error::AlgorithmError;
use crate::spatial::board::{Board, Cursor};
use crate::spatial::tile::Tile;
use rand::{SeedableRng, rngs::StdRng};
use std::fmt;
use std::time::{Duration, Instant};

/// Search limits and ordering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of placement checks, `None` for unbounded
    pub step_budget: Option<u64>,
    /// Maximum wall-clock time, `None` for unbounded
    pub time_budget: Option<Duration>,
    /// Seed for shuffling the pending queue before the search starts
    pub shuffle_seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            step_budget: Some(DEFAULT_STEP_BUDGET),
            time_budget: None,
            shuffle_seed: None,
        }
    }
}

/// Why a search stopped without a solution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExhaustionCause {
    /// Every ordering and orientation was tried
    SearchSpaceExhausted,
    /// The step budget ran out
    StepBudget {
        /// Configured number of steps
        limit: u64,
    },
    /// The time budget ran out
    TimeBudget {
        /// Configured duration
        limit: Duration,
    },
    /// Fewer tiles than cells remain after duplicates were dropped
    InsufficientTiles {
        /// Tiles available
        tiles: usize,
        /// Cells to fill
        cells: usize,
    },
}

impl fmt::Display for ExhaustionCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchSpaceExhausted => write!(f, "search space exhausted"),
            Self::StepBudget { limit } => write!(f, "step budget of {limit} exceeded"),
            Self::TimeBudget { limit } => {
                write!(f, "time budget of {}ms exceeded", limit.as_millis())
            }
            Self::InsufficientTiles { tiles, cells } => {
                write!(f, "{tiles} tiles cannot fill {cells} cells")
            }
        }
    }
}

/// Solver state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverState {
    /// The cursor has a free cell to fill
    Placing,
    /// Every cell is filled
    Solved,
    /// The search stopped without a solution
    Exhausted(ExhaustionCause),
}

impl SolverState {
    /// Whether no further steps will change the state
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Placing)
    }
}

/// A filled board with search statistics
#[derive(Debug, Clone)]
pub struct Solution {
    board: Board,
    steps: u64,
    backtracks: u64,
}

impl Solution {
    /// Number of tiles along each edge
    pub const fn side(&self) -> usize {
        self.board.side()
    }

    /// Placement checks performed
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Placements undone during the search
    pub const fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Tiles with their final orientation, top-to-bottom and left-to-right
    pub fn placements(&self) -> impl Iterator<Item = (Cursor, &Tile)> + '_ {
        self.board.placed()
    }

    /// Tiles grouped by row
    pub fn rows(&self) -> Vec<Vec<&Tile>> {
        let mut rows: Vec<Vec<&Tile>> = vec![Vec::with_capacity(self.side()); self.side()];
        for (cursor, tile) in self.placements() {
            if let Some(row) = rows.get_mut(cursor.y) {
                row.push(tile);
            }
        }
        rows
    }

    /// The filled board
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Take the filled board
    pub fn into_board(self) -> Board {
        self.board
    }
}

/// A search that ended without a solution; no partial grid is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted {
    /// Why the search stopped
    pub cause: ExhaustionCause,
    /// Placement checks performed
    pub steps: u64,
    /// Placements undone during the search
    pub backtracks: u64,
}

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} after {} steps and {} backtracks",
            self.cause, self.steps, self.backtracks
        )
    }
}

impl From<Exhausted> for AlgorithmError {
    fn from(exhausted: Exhausted) -> Self {
        Self::Unsolvable {
            steps: exhausted.steps,
            reason: exhausted.cause.to_string(),
        }
    }
}

/// Placement made at one cell, kept for backtracking
#[derive(Debug, Clone, Copy)]
struct Frame {
    rotation: u8,
    examined: usize,
}

/// Backtracking solver that owns the board it fills
#[derive(Debug)]
pub struct Solver {
    board: Board,
    config: SolverConfig,
    state: SolverState,
    history: Vec<Frame>,
    examined: usize,
    resume_rotation: u8,
    steps: u64,
    backtracks: u64,
    started: Option<Instant>,
}

impl Solver {
    /// Prepare a search over the board's pending tiles
    ///
    /// When duplicate records left fewer tiles than cells the solver starts
    /// out exhausted.
    pub fn new(mut board: Board, config: SolverConfig) -> Self {
        if let Some(seed) = config.shuffle_seed {
            let mut rng = StdRng::seed_from_u64(seed);
            board.shuffle_pending(&mut rng);
        }

        let tiles = board.pending().len();
        let cells = board.remaining_cells();
        let state = if tiles < cells {
            tracing::info!(tiles, cells, "not enough tiles to fill the board");
            SolverState::Exhausted(ExhaustionCause::InsufficientTiles { tiles, cells })
        } else if board.is_complete() {
            SolverState::Solved
        } else {
            SolverState::Placing
        };

        Self {
            board,
            config,
            state,
            history: Vec::with_capacity(cells),
            examined: 0,
            resume_rotation: 0,
            steps: 0,
            backtracks: 0,
            started: None,
        }
    }

    /// Current state
    pub const fn state(&self) -> SolverState {
        self.state
    }

    /// Placement checks performed so far
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Placements undone so far
    pub const fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Board as currently filled
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Limits this search runs under
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Take the board back, in whatever state the search left it
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Examine one queue head at the cursor, or backtrack one placement
    ///
    /// Terminal states are sticky: once solved or exhausted, further calls
    /// return the same state without doing any work.
    pub fn step(&mut self) -> SolverState {
        if self.state.is_terminal() {
            return self.state;
        }
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }

        self.state = self.advance();

        match self.state {
            SolverState::Solved => {
                tracing::info!(
                    steps = self.steps,
                    backtracks = self.backtracks,
                    "puzzle solved"
                );
            }
            SolverState::Exhausted(cause) => {
                tracing::info!(
                    steps = self.steps,
                    backtracks = self.backtracks,
                    %cause,
                    "search exhausted"
                );
            }
            SolverState::Placing => {}
        }
        self.state
    }

    /// Step until the search reaches a terminal state
    ///
    /// # Errors
    ///
    /// Returns [`Exhausted`] if the search space or a budget runs out first
    pub fn run(mut self) -> Result<Solution, Exhausted> {
        loop {
            match self.step() {
                SolverState::Placing => {}
                SolverState::Solved => {
                    return Ok(Solution {
                        board: self.board,
                        steps: self.steps,
                        backtracks: self.backtracks,
                    });
                }
                SolverState::Exhausted(cause) => {
                    return Err(Exhausted {
                        cause,
                        steps: self.steps,
                        backtracks: self.backtracks,
                    });
                }
            }
        }
    }

    fn advance(&mut self) -> SolverState {
        if self.board.is_complete() {
            return SolverState::Solved;
        }
        if let Some(cause) = self.budget_exceeded() {
            return SolverState::Exhausted(cause);
        }
        if self.examined >= self.board.pending().len() {
            return self.backtrack();
        }
        let Some(mut tile) = self.board.pop_pending() else {
            return self.backtrack();
        };

        let cursor = self.board.cursor();
        let mut rotation = self.resume_rotation;
        for _ in 0..rotation {
            tile.rotate_clockwise();
        }

        while rotation < 4 {
            if let Some(cause) = self.budget_exceeded() {
                tile.reset_rotation();
                self.board.push_pending_front(tile);
                return SolverState::Exhausted(cause);
            }

            self.steps += 1;
            if fits(&self.board, &tile, cursor.x, cursor.y) {
                return self.place(tile, rotation);
            }

            rotation += 1;
            if rotation < 4 {
                tile.rotate_clockwise();
            }
        }

        tile.reset_rotation();
        self.board.push_pending_back(tile);
        self.examined += 1;
        self.resume_rotation = 0;
        SolverState::Placing
    }

    fn place(&mut self, tile: Tile, rotation: u8) -> SolverState {
        let id = tile.id();
        match self.board.place_at_cursor(tile) {
            Ok(cursor) => {
                tracing::debug!(id, rotation, %cursor, "placed tile");
                self.history.push(Frame {
                    rotation,
                    examined: self.examined,
                });
                self.examined = 0;
                self.resume_rotation = 0;
            }
            Err(tile) => self.board.push_pending_front(tile),
        }

        if self.board.is_complete() {
            SolverState::Solved
        } else {
            SolverState::Placing
        }
    }

    fn backtrack(&mut self) -> SolverState {
        let Some(frame) = self.history.pop() else {
            return SolverState::Exhausted(ExhaustionCause::SearchSpaceExhausted);
        };
        let Some(mut tile) = self.board.take_back() else {
            return SolverState::Exhausted(ExhaustionCause::SearchSpaceExhausted);
        };

        self.backtracks += 1;
        tracing::debug!(
            id = tile.id(),
            rotation = frame.rotation,
            cursor = %self.board.cursor(),
            "backtracking"
        );

        tile.reset_rotation();
        self.board.push_pending_front(tile);
        self.examined = frame.examined;
        self.resume_rotation = frame.rotation + 1;
        SolverState::Placing
    }

    fn budget_exceeded(&self) -> Option<ExhaustionCause> {
        let step_budget = self.config.step_budget;
        if let Some(limit) = step_budget.filter(|&limit| self.steps >= limit) {
            return Some(ExhaustionCause::StepBudget { limit });
        }

        let running_for = self.started.as_ref().map(Instant::elapsed);
        match (self.config.time_budget, running_for) {
            (Some(limit), Some(elapsed)) if elapsed >= limit => {
                Some(ExhaustionCause::TimeBudget { limit })
            }
            _ => None,
        }
    }
}
