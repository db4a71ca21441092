//! Fleets: the five ships of one side, placed in canonical order.

use log::{trace, warn};
use rand::Rng;

use crate::bitboard::Grid;
use crate::common::{BoardError, Coord};
use crate::config::{BOARD_SIZE, MAX_FLEET_ATTEMPTS, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIPS};
use crate::geometry::is_valid_placement;
use crate::ship::{Orientation, Ship, ShipDef};

/// Ships placed so far and their combined occupancy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: [Option<Ship>; NUM_SHIPS],
    occupancy: Grid,
}

impl Fleet {
    /// An empty fleet with no ships placed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a complete fleet by rejection sampling.
    ///
    /// Each ship, in canonical order, gets up to `MAX_PLACEMENT_ATTEMPTS`
    /// uniformly random origin/orientation draws. A ship that exhausts its
    /// draws restarts the whole fleet, up to `MAX_FLEET_ATTEMPTS` times.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        for attempt in 0..MAX_FLEET_ATTEMPTS {
            match Self::try_random(rng) {
                Some(fleet) => return Ok(fleet),
                None => trace!("fleet generation attempt {} exhausted, restarting", attempt + 1),
            }
        }
        warn!("unable to generate a fleet after {} attempts", MAX_FLEET_ATTEMPTS);
        Err(BoardError::UnableToPlaceShip)
    }

    fn try_random<R: Rng + ?Sized>(rng: &mut R) -> Option<Self> {
        let mut fleet = Fleet::new();
        while !fleet.is_complete() {
            let (origin, orientation) = fleet.random_placement(rng)?;
            fleet = fleet.place(origin, orientation).ok()?;
        }
        Some(fleet)
    }

    /// A uniformly sampled origin/orientation for the next ship that clears
    /// the ships already placed, or `None` after `MAX_PLACEMENT_ATTEMPTS`
    /// draws (or when the fleet is complete).
    pub fn random_placement<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(Coord, Orientation)> {
        let def = self.next_ship()?;
        let n = BOARD_SIZE as usize;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let origin = Coord::new(rng.random_range(0..n), rng.random_range(0..n)).ok()?;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if is_valid_placement(origin, def, orientation, &self.occupancy) {
                return Some((origin, orientation));
            }
        }
        None
    }

    /// Place the next unplaced ship, returning the extended fleet.
    pub fn place(&self, origin: Coord, orientation: Orientation) -> Result<Self, BoardError> {
        let index = self.placed_count();
        let def = self.next_ship().ok_or(BoardError::FleetComplete)?;
        let ship = Ship::new(def, origin, orientation)?;
        if !is_valid_placement(origin, def, orientation, &self.occupancy) {
            return Err(BoardError::ShipOverlaps);
        }
        let mut next = *self;
        next.ships[index] = Some(ship);
        next.occupancy |= ship.mask();
        Ok(next)
    }

    /// Definition of the next ship to place, if any.
    pub fn next_ship(&self) -> Option<ShipDef> {
        SHIPS.get(self.placed_count()).copied()
    }

    pub fn placed_count(&self) -> usize {
        self.ships.iter().take_while(|s| s.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.placed_count() == NUM_SHIPS
    }

    /// Placed ships in canonical order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// Union of all placed ship cells.
    pub fn occupancy(&self) -> Grid {
        self.occupancy
    }

    /// The ship covering `at`, if any.
    pub fn ship_at(&self, at: Coord) -> Option<&Ship> {
        self.ships().find(|ship| ship.occupies(at))
    }
}

