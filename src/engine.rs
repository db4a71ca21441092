//! Stateful facade over the pure transitions in [`crate::game`].

use rand::Rng;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};

use crate::common::{BoardError, Coord};
use crate::game::{
    apply_fire, apply_place, apply_reset, FireOutcome, GameSnapshot, GameState, GameStatus,
    PlaceOutcome,
};
use crate::ship::Orientation;

/// Owns the current game state and the random source used by the AI.
pub struct GameEngine<R> {
    state: GameState,
    rng: R,
}

impl<R: Rng> GameEngine<R> {
    /// New game in setup, drawing randomness from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            state: GameState::new(),
            rng,
        }
    }

    /// Place the player's next ship.
    pub fn place_ship(&mut self, at: Coord, orientation: Orientation) -> PlaceOutcome {
        let (state, outcome) = apply_place(&self.state, at, orientation, &mut self.rng);
        self.state = state;
        outcome
    }

    /// Fire at the AI board; the AI answers within the same call.
    pub fn fire(&mut self, at: Coord) -> FireOutcome {
        let (state, outcome) = apply_fire(&self.state, at, &mut self.rng);
        self.state = state;
        outcome
    }

    /// Place every remaining player ship at a random valid position.
    ///
    /// Does nothing outside setup.
    pub fn deploy_random(&mut self) -> Result<(), BoardError> {
        while self.state.status() == GameStatus::Setup {
            let (at, orientation) = self
                .state
                .player()
                .fleet
                .random_placement(&mut self.rng)
                .ok_or(BoardError::UnableToPlaceShip)?;
            if !self.place_ship(at, orientation).accepted() {
                return Err(BoardError::UnableToPlaceShip);
            }
        }
        Ok(())
    }

    /// Discard the current game and start over in setup.
    pub fn reset(&mut self) {
        self.state = apply_reset();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}

#[cfg(feature = "std")]
impl GameEngine<SmallRng> {
    /// Reproducible engine for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Engine seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }
}
