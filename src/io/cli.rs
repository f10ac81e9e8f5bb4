//! Command-line interface for solving a puzzle from a record file or the built-in set

use crate::algorithm::solver::{Solution, Solver, SolverConfig, SolverState};
use crate::io::configuration::{DEFAULT_STEP_BUDGET, DEFAULT_TILE_RECORDS};
use crate::io::error::Result;
use crate::io::progress::SearchProgress;
use crate::io::records::read_records;
use crate::io::render::{render_grid, render_solution};
use crate::spatial::board::{Board, BoardOptions};
use crate::spatial::lock::ShapeVocabulary;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "interlock")]
#[command(
    author,
    version,
    about = "Solve edge-matching interlocking tile puzzles by backtracking"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// File with one `id,west,north,east,south` record per line (built-in puzzle if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Comma-separated shape names recognised in records
    #[arg(short = 'S', long, value_delimiter = ',')]
    pub shapes: Option<Vec<String>>,

    /// Accept any square board instead of only 3x3
    #[arg(short, long)]
    pub any_size: bool,

    /// Maximum placement checks before giving up (0 for unbounded)
    #[arg(short, long, default_value_t = DEFAULT_STEP_BUDGET)]
    pub steps: u64,

    /// Maximum search time in milliseconds
    #[arg(short, long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Shuffle the tile queue with this seed before searching
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a matrix of tile ids instead of one line per tile
    #[arg(short, long)]
    pub grid: bool,

    /// Suppress progress output and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by the quiet and verbose flags
    pub const fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Board construction options from the flags
    ///
    /// # Errors
    ///
    /// Returns an error if a custom shape list is empty or has duplicates
    pub fn board_options(&self) -> Result<BoardOptions> {
        let mut options = if self.any_size {
            BoardOptions::any_size()
        } else {
            BoardOptions::default()
        };
        if let Some(shapes) = &self.shapes {
            options.vocabulary = ShapeVocabulary::new(shapes)?;
        }
        Ok(options)
    }

    /// Search limits from the flags
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            step_budget: (self.steps > 0).then_some(self.steps),
            time_budget: self.timeout_ms.map(Duration::from_millis),
            shuffle_seed: self.seed,
        }
    }

    /// Tile records from the input file, or the built-in puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be read
    pub fn records(&self) -> Result<Vec<String>> {
        self.input
            .as_ref()
            .map_or_else(|| Ok(default_records()), |path| read_records(path))
    }
}

fn default_records() -> Vec<String> {
    Vec::from(DEFAULT_TILE_RECORDS.map(String::from))
}

/// Install a stderr `tracing` subscriber; `RUST_LOG` directives still apply
pub fn init_tracing(level: tracing::Level) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Builds the board, drives the solver and renders the outcome
pub struct PuzzleRunner {
    cli: Cli,
    progress: Option<SearchProgress>,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: None,
        }
    }

    /// Solve the configured puzzle and return its rendering
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read or parsed, the board
    /// size is invalid or unsupported, or the search is exhausted
    pub fn run(&mut self) -> Result<String> {
        let records = self.cli.records()?;
        let options = self.cli.board_options()?;
        let board = Board::new(&records, &options)?;
        let vocabulary = board.vocabulary().clone();
        let config = self.cli.solver_config();

        tracing::info!(
            side = board.side(),
            tiles = board.pending().len(),
            "starting search"
        );

        if self.cli.should_show_progress() {
            self.progress = Some(SearchProgress::new(config.step_budget));
        }

        let solution = self.solve(Solver::new(board, config))?;

        if self.cli.grid {
            Ok(render_grid(&solution))
        } else {
            Ok(render_solution(&solution, &vocabulary))
        }
    }

    fn solve(&mut self, mut solver: Solver) -> Result<Solution> {
        while solver.step() == SolverState::Placing {
            if let Some(ref mut progress) = self.progress {
                progress.update(solver.steps(), solver.board());
            }
        }

        if let Some(ref progress) = self.progress {
            let message = match solver.state() {
                SolverState::Solved => "solved".to_string(),
                SolverState::Exhausted(cause) => cause.to_string(),
                SolverState::Placing => String::new(),
            };
            progress.finish(solver.steps(), &message);
        }

        solver.run().map_err(Into::into)
    }
}
