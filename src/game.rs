//! Game state machine: setup → playing → finished.
//!
//! The whole game is a single [`GameState`] value. Intents are applied by
//! pure transition functions that take the current state and return the next
//! one together with an outcome; the input state is never mutated.

use core::fmt;

use log::{info, trace};
use rand::Rng;

use crate::ai::Targeting;
use crate::board::{resolve_shot, ShotBoard, TriedCell};
use crate::common::{Coord, ShotResult};
use crate::config::{BOARD_SIZE, SHIPS, TOTAL_SHIP_CELLS};
use crate::fleet::Fleet;
use crate::ship::{Orientation, ShipDef};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Which side won a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Winner {
    Player,
    Ai,
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    Setup,
    Playing,
    Finished(Winner),
}

/// Human-readable status line, rendered through `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Message {
    /// Prompt for the next ship during setup.
    PlaceShip(ShipDef),
    /// The last placement was rejected.
    InvalidPlacement(ShipDef),
    /// The enemy fleet could not be generated; setup is still open.
    FleetUnavailable,
    /// All ships placed, firing may begin.
    Started,
    /// Outcome of the last round.
    Round {
        player: ShotResult,
        ai: Option<ShotResult>,
    },
    GameOver(Winner),
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::PlaceShip(def) => {
                write!(f, "Place your {} ({} cells)", def.name(), def.size())
            }
            Message::InvalidPlacement(def) => {
                write!(f, "Invalid placement for your {}! Try another position.", def.name())
            }
            Message::FleetUnavailable => write!(f, "The enemy fleet could not deploy. Try again."),
            Message::Started => write!(f, "All ships deployed. Fire when ready!"),
            Message::Round { player, ai } => {
                match player {
                    ShotResult::Sunk(name) => write!(f, "You sank the enemy {}!", name)?,
                    r if r.is_hit() => write!(f, "Hit!")?,
                    _ => write!(f, "Miss.")?,
                }
                match ai {
                    Some(ShotResult::Sunk(name)) => write!(f, " The enemy sank your {}!", name),
                    Some(r) if r.is_hit() => write!(f, " The enemy hit your fleet."),
                    Some(_) => write!(f, " The enemy missed."),
                    None => Ok(()),
                }
            }
            Message::GameOver(Winner::Player) => write!(f, "Game over! You win!"),
            Message::GameOver(Winner::Ai) => write!(f, "Game over! The enemy wins."),
        }
    }
}

/// One side of the game: its fleet and the opponent's shots against it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Side {
    pub fleet: Fleet,
    pub shots: ShotBoard,
}

/// Result of a place-ship intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Ship recorded; carries the name of the next ship still to place.
    Placed { next_ship: Option<&'static str> },
    Rejected,
}

impl PlaceOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self, PlaceOutcome::Placed { .. })
    }
}

/// Both shots of a played round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub player: (Coord, ShotResult),
    pub ai: Option<(Coord, ShotResult)>,
}

/// Result of a fire intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Fired(Round),
    Rejected,
}

impl FireOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self, FireOutcome::Fired(_))
    }
}

/// What the player sees of their own board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum PlayerCell {
    Water,
    Ship,
    Hit,
    Miss,
}

/// Read-only view of a game for rendering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub player_board: [[PlayerCell; GRID_SIZE]; GRID_SIZE],
    pub ai_board: [[TriedCell; GRID_SIZE]; GRID_SIZE],
    pub status: GameStatus,
    pub player_score: usize,
    pub ai_score: usize,
    pub message: Message,
    pub next_ship: Option<&'static str>,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    status: GameStatus,
    /// The human's fleet and the AI's shots at it.
    player: Side,
    /// The AI's fleet and the human's shots at it.
    ai: Side,
    targeting: Targeting,
    player_score: usize,
    ai_score: usize,
    message: Message,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game in setup with empty boards.
    pub fn new() -> Self {
        Self {
            status: GameStatus::Setup,
            player: Side::default(),
            ai: Side::default(),
            targeting: Targeting::new(),
            player_score: 0,
            ai_score: 0,
            message: Message::PlaceShip(SHIPS[0]),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn player(&self) -> &Side {
        &self.player
    }

    pub fn ai(&self) -> &Side {
        &self.ai
    }

    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    /// Ship cells the player has hit on the AI board.
    pub fn player_score(&self) -> usize {
        self.player_score
    }

    /// Ship cells the AI has hit on the player board.
    pub fn ai_score(&self) -> usize {
        self.ai_score
    }

    pub fn message(&self) -> Message {
        self.message
    }

    /// Build a read-only view for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut player_board = [[PlayerCell::Water; GRID_SIZE]; GRID_SIZE];
        let mut ai_board = [[TriedCell::default(); GRID_SIZE]; GRID_SIZE];
        let occupancy = self.player.fleet.occupancy();
        for at in Coord::all() {
            let shot = self.player.shots.cell(at);
            player_board[at.row()][at.col()] = match (shot.tried, shot.hit, occupancy.contains(at)) {
                (true, true, _) => PlayerCell::Hit,
                (true, false, _) => PlayerCell::Miss,
                (false, _, true) => PlayerCell::Ship,
                (false, _, false) => PlayerCell::Water,
            };
            ai_board[at.row()][at.col()] = self.ai.shots.cell(at);
        }
        GameSnapshot {
            player_board,
            ai_board,
            status: self.status,
            player_score: self.player_score,
            ai_score: self.ai_score,
            message: self.message,
            next_ship: self.player.fleet.next_ship().map(|def| def.name()),
        }
    }
}

/// Place the player's next ship at `at`.
///
/// Completing the fleet generates the AI fleet and starts play.
pub fn apply_place<R: Rng + ?Sized>(
    state: &GameState,
    at: Coord,
    orientation: Orientation,
    rng: &mut R,
) -> (GameState, PlaceOutcome) {
    if state.status != GameStatus::Setup {
        trace!("placement at {} ignored outside setup", at);
        return (state.clone(), PlaceOutcome::Rejected);
    }
    let Some(def) = state.player.fleet.next_ship() else {
        return (state.clone(), PlaceOutcome::Rejected);
    };

    let fleet = match state.player.fleet.place(at, orientation) {
        Ok(fleet) => fleet,
        Err(e) => {
            trace!("{} at {} {:?} rejected: {}", def.name(), at, orientation, e);
            let mut next = state.clone();
            next.message = Message::InvalidPlacement(def);
            return (next, PlaceOutcome::Rejected);
        }
    };

    let mut next = state.clone();
    match fleet.next_ship() {
        Some(upcoming) => {
            next.player.fleet = fleet;
            next.message = Message::PlaceShip(upcoming);
            (
                next,
                PlaceOutcome::Placed {
                    next_ship: Some(upcoming.name()),
                },
            )
        }
        None => match Fleet::random(rng) {
            Ok(enemy) => {
                next.player.fleet = fleet;
                next.ai.fleet = enemy;
                next.status = GameStatus::Playing;
                next.message = Message::Started;
                info!("fleets deployed, game started");
                (next, PlaceOutcome::Placed { next_ship: None })
            }
            Err(_) => {
                next.message = Message::FleetUnavailable;
                (next, PlaceOutcome::Rejected)
            }
        },
    }
}

/// Fire at `at` on the AI board and answer with one AI countershot.
pub fn apply_fire<R: Rng + ?Sized>(
    state: &GameState,
    at: Coord,
    rng: &mut R,
) -> (GameState, FireOutcome) {
    if state.status != GameStatus::Playing || state.ai.shots.is_tried(at) {
        trace!("shot at {} ignored in {:?}", at, state.status);
        return (state.clone(), FireOutcome::Rejected);
    }

    let mut next = state.clone();
    let (shots, player_result) = resolve_shot(&next.ai.shots, &next.ai.fleet, at);
    next.ai.shots = shots;
    if player_result.is_hit() {
        next.player_score += 1;
    }

    let ai = next
        .targeting
        .next_shot(&next.player.shots, rng)
        .map(|aim| {
            let (shots, result) = resolve_shot(&next.player.shots, &next.player.fleet, aim.at);
            next.player.shots = shots;
            next.targeting.record(aim.at, result.is_hit(), &shots);
            if result.is_hit() {
                next.ai_score += 1;
            }
            (aim.at, result)
        });

    let winner = if next.player_score >= TOTAL_SHIP_CELLS {
        Some(Winner::Player)
    } else if next.ai_score >= TOTAL_SHIP_CELLS {
        Some(Winner::Ai)
    } else {
        None
    };
    next.message = match winner {
        Some(winner) => {
            info!(
                "game finished: {:?} wins {}-{}",
                winner, next.player_score, next.ai_score
            );
            next.status = GameStatus::Finished(winner);
            Message::GameOver(winner)
        }
        None => Message::Round {
            player: player_result,
            ai: ai.map(|(_, result)| result),
        },
    };

    let round = Round {
        player: (at, player_result),
        ai,
    };
    (next, FireOutcome::Fired(round))
}

/// A brand new game: setup status, empty boards, cleared AI memory.
pub fn apply_reset() -> GameState {
    GameState::new()
}
