use crate::{
    algorithm::propagation::{OptionSets, compute_options_with_rules},
    algorithm::rules::AdjacencyRules,
    algorithm::selection::{RandomSelector, select_cell, select_tile},
    io::configuration::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SEED},
    io::error::{Result, invalid_parameter},
    spatial::{Grid, Tileset},
};

/// What a single step decided for the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// One more cell received a tile
    CellCollapsed {
        /// Flat index of the collapsed cell
        index: usize,
        /// Tile identity placed in the cell
        tile: usize,
    },
    /// Every cell already holds a tile
    Completed,
    /// Some cells are uncollapsed but none has an option left
    Contradiction,
}

impl StepOutcome {
    /// Whether applying this outcome clears the grid
    pub const fn resets_grid(self) -> bool {
        matches!(self, Self::Completed | Self::Contradiction)
    }
}

/// Decide the next step without modifying the grid
///
/// Picks uniformly among the cells with the fewest nonzero options, then
/// uniformly among that cell's tiles. An empty candidate pool is reported as
/// `Completed` when the grid is full and `Contradiction` otherwise.
pub fn plan_step(grid: &Grid, options: &OptionSets, selector: &mut RandomSelector) -> StepOutcome {
    let collapse = select_cell(options, selector).and_then(|index| {
        options
            .get(index)
            .and_then(|set| select_tile(set, selector))
            .map(|tile| StepOutcome::CellCollapsed { index, tile })
    });

    match collapse {
        Some(outcome) => outcome,
        None if grid.is_fully_collapsed() => StepOutcome::Completed,
        None => StepOutcome::Contradiction,
    }
}

/// Produce the snapshot that follows an outcome
///
/// Collapses the chosen cell, or clears the whole grid on completion or
/// contradiction.
pub fn apply_outcome(grid: &Grid, outcome: StepOutcome) -> Grid {
    match outcome {
        StepOutcome::CellCollapsed { index, tile } => grid.with_collapsed(index, tile),
        StepOutcome::Completed | StepOutcome::Contradiction => grid.cleared(),
    }
}

/// Run one solver step on a snapshot against a tileset
///
/// Derives the adjacency rules on each call; repeated stepping should build
/// them once and use `step_with_rules`.
pub fn step(grid: &Grid, tileset: &Tileset, selector: &mut RandomSelector) -> (Grid, StepOutcome) {
    step_with_rules(grid, &AdjacencyRules::from_tileset(tileset), selector)
}

/// Run one solver step on a snapshot using precomputed rules
///
/// Recomputes all option sets from scratch, plans, and applies. A completed
/// or stuck grid always comes back cleared.
pub fn step_with_rules(
    grid: &Grid,
    rules: &AdjacencyRules,
    selector: &mut RandomSelector,
) -> (Grid, StepOutcome) {
    let options = compute_options_with_rules(grid, rules);
    let outcome = plan_step(grid, &options, selector);
    (apply_outcome(grid, outcome), outcome)
}

/// Session parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Number of grid columns
    pub cols: usize,
    /// Number of grid rows
    pub rows: usize,
    /// Seed for cell and tile choices
    pub seed: u64,
    /// Clear a completed grid on the next step; when false the completed
    /// grid is kept and further steps keep reporting `Completed`
    pub reset_on_completion: bool,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            seed: DEFAULT_SEED,
            reset_on_completion: true,
        }
    }
}

/// Running totals over a session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Steps that placed a tile
    pub collapses: usize,
    /// Steps that found the grid full
    pub completions: usize,
    /// Steps that found the grid stuck
    pub contradictions: usize,
    /// Times the grid was cleared
    pub resets: usize,
}

impl StepStats {
    fn record(&mut self, outcome: StepOutcome, reset: bool) {
        match outcome {
            StepOutcome::CellCollapsed { .. } => self.collapses += 1,
            StepOutcome::Completed => self.completions += 1,
            StepOutcome::Contradiction => self.contradictions += 1,
        }
        if reset {
            self.resets += 1;
        }
    }
}

/// Stepwise mosaic generator over one grid and one tileset
///
/// Owns the read-only tileset, its precomputed adjacency rules, the current
/// grid snapshot and the random source. Each call to `execute_step` replaces
/// the snapshot with its successor.
pub struct Mosaic {
    /// Session parameters
    pub config: MosaicConfig,
    /// Current grid snapshot
    grid: Grid,
    tileset: Tileset,
    rules: AdjacencyRules,
    /// Random source for cell and tile choices
    pub random_selector: RandomSelector,
    /// Number of steps executed
    pub iteration: usize,
    /// Outcome totals
    pub stats: StepStats,
    last_outcome: Option<StepOutcome>,
}

impl Mosaic {
    /// Create a session with an empty grid
    ///
    /// # Errors
    ///
    /// Returns an error if the configured grid dimensions are invalid
    pub fn new(config: MosaicConfig, tileset: Tileset) -> Result<Self> {
        let grid = Grid::new(config.cols, config.rows)?;
        let rules = AdjacencyRules::from_tileset(&tileset);

        Ok(Self {
            config,
            grid,
            tileset,
            rules,
            random_selector: RandomSelector::new(config.seed),
            iteration: 0,
            stats: StepStats::default(),
            last_outcome: None,
        })
    }

    /// Access the current grid snapshot
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Access the tileset
    pub const fn tileset(&self) -> &Tileset {
        &self.tileset
    }

    /// Access the precomputed adjacency rules
    pub const fn rules(&self) -> &AdjacencyRules {
        &self.rules
    }

    /// Outcome of the most recent step
    pub const fn last_outcome(&self) -> Option<StepOutcome> {
        self.last_outcome
    }

    /// Option sets derived from the current snapshot
    pub fn options(&self) -> OptionSets {
        compute_options_with_rules(&self.grid, &self.rules)
    }

    /// Replace the current snapshot, e.g. with a saved one
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions differ from the session's or
    /// the grid refers to tiles outside the tileset
    pub fn restore(&mut self, grid: Grid) -> Result<()> {
        if (grid.cols(), grid.rows()) != (self.grid.cols(), self.grid.rows()) {
            return Err(invalid_parameter(
                "grid",
                &format!("{}x{}", grid.cols(), grid.rows()),
                &format!(
                    "must match the session grid {}x{}",
                    self.grid.cols(),
                    self.grid.rows()
                ),
            ));
        }
        grid.validate_against(&self.tileset)?;
        self.grid = grid;
        Ok(())
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.grid = self.grid.cleared();
        self.stats.resets += 1;
    }

    /// Execute one step and return its outcome
    pub fn execute_step(&mut self) -> StepOutcome {
        self.iteration += 1;

        let options = self.options();
        let outcome = plan_step(&self.grid, &options, &mut self.random_selector);

        let keep_completed = outcome == StepOutcome::Completed && !self.config.reset_on_completion;
        let reset = outcome.resets_grid() && !keep_completed;

        if !keep_completed {
            self.grid = apply_outcome(&self.grid, outcome);
        }

        self.stats.record(outcome, reset);
        self.last_outcome = Some(outcome);
        outcome
    }
}
