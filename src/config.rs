use crate::ship::ShipDef;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Carrier", 5),
    ShipDef::new("Battleship", 4),
    ShipDef::new("Cruiser", 3),
    ShipDef::new("Submarine", 3),
    ShipDef::new("Destroyer", 2),
];

/// Total number of ship segments in the fleet; reaching this score wins.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random draws allowed per ship before the generator restarts the fleet.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;
/// Full-fleet restarts before generation gives up.
pub const MAX_FLEET_ATTEMPTS: usize = 16;

/// Number of most recent hits inspected for a streak.
pub const STREAK_WINDOW: usize = 5;
/// Size of the shortlist the search tier samples from.
pub const TOP_CANDIDATES: usize = 5;
/// Weight added to parity-lattice cells while no lead is active.
pub const PARITY_BONUS: u32 = 3;
/// Weight added to a placement that borders a confirmed hit.
pub const ADJACENT_HIT_BONUS: u32 = 2;
/// Upper bound (exclusive) of the per-cell tie-breaking jitter.
pub const JITTER: f64 = 2.0;

