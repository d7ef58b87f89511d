//! Caller-owned game session.
//!
//! A `GameSession` holds the board a presentation layer renders. Input
//! handlers call [`GameSession::toggle`] (or [`GameSession::toggle_key`] with
//! the cell key they attached to the rendered cell) and then redraw from
//! [`GameSession::grid`] and [`GameSession::status`].
//!
//! ## Lifecycle
//!
//! - A session starts `Playing`, even if the random board happens to be dark.
//! - `Won` is terminal: further toggles are ignored until [`GameSession::reset`].
//! - `reset` draws a fresh board from the session RNG; it is a new game, not a
//!   state transition.
//!
//! Toggles take `&mut self`, so a session shared across threads needs a
//! `Mutex` (or a single owning task) around it.

use crate::core::{BoardConfig, Coordinate, GameRng, Grid, GridError};
use crate::rules::{apply_toggle, Status};

/// One game of Lights Out.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: BoardConfig,
    rng: GameRng,
    grid: Grid,
    status: Status,
}

impl GameSession {
    /// Start a session with a seeded random board.
    pub fn new(config: BoardConfig, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Start a session seeded from the operating system.
    pub fn from_entropy(config: BoardConfig) -> Result<Self, GridError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Start a session with a random board drawn from `rng`.
    pub fn with_rng(config: BoardConfig, mut rng: GameRng) -> Result<Self, GridError> {
        let grid = config.create_grid(&mut rng)?;

        log::debug!(
            "new session: {}x{} board, {} lit (seed {})",
            grid.rows(),
            grid.cols(),
            grid.lit_count(),
            rng.seed()
        );

        Ok(Self {
            config,
            rng,
            grid,
            status: Status::Playing,
        })
    }

    /// Start a session from a prepared board.
    ///
    /// `config` keeps `grid`'s dimensions and supplies the lit probability
    /// used by later resets. `seed` drives those resets.
    pub fn with_grid(config: BoardConfig, grid: Grid, seed: u64) -> Result<Self, GridError> {
        let config = config.with_rows(grid.rows()).with_cols(grid.cols());
        config.validate()?;

        Ok(Self {
            config,
            rng: GameRng::new(seed),
            grid,
            status: Status::Playing,
        })
    }

    /// The current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The configuration new boards are drawn from.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// True once every light has been switched off.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.status.is_won()
    }

    /// Press the cell at `coord`.
    ///
    /// Returns the status after the move. Ignored once the game is won.
    pub fn toggle(&mut self, coord: Coordinate) -> Status {
        if self.status.is_won() {
            log::trace!("ignoring toggle at {} after win", coord);
            return self.status;
        }

        let has_won = apply_toggle(&mut self.grid, coord);
        self.status = Status::from_has_won(has_won);

        log::trace!("toggle at {}: {} lit", coord, self.grid.lit_count());
        if has_won {
            log::debug!("board solved");
        }

        self.status
    }

    /// Press the cell named by a `"row-col"` key.
    pub fn toggle_key(&mut self, key: &str) -> Result<Status, GridError> {
        let coord: Coordinate = key.parse()?;
        Ok(self.toggle(coord))
    }

    /// Discard the board and start over with a fresh random one.
    ///
    /// The config was validated when the session was built, so this only
    /// fails if that invariant is broken; the old board is kept in that case.
    pub fn reset(&mut self) -> Result<(), GridError> {
        self.grid = self.config.create_grid(&mut self.rng)?;
        self.status = Status::Playing;

        log::debug!("session reset: {} lit", self.grid.lit_count());
        Ok(())
    }
}
