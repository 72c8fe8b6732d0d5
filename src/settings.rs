//! Generation settings and ship descriptors.

use serde::{Deserialize, Serialize};

/// Board dimension bounds applied by [`PlacementSettings::validate`].
pub const MIN_BOARD_SIZE: u32 = 5;
pub const MAX_BOARD_SIZE: u32 = 25;
/// Per-descriptor bounds.
pub const MAX_SHIP_SIZE: u32 = 10;
pub const MAX_SHIP_COUNT: u32 = 20;

/// One kind of ship to place: a display name, its length in cells, and how
/// many instances the fleet contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipDescriptor {
    pub name: String,
    pub size: u32,
    pub count: u32,
}

impl ShipDescriptor {
    pub fn new(name: impl Into<String>, size: u32, count: u32) -> Self {
        ShipDescriptor {
            name: name.into(),
            size,
            count,
        }
    }
}

/// Everything the generator needs: board dimensions, the fleet, and the two
/// layout flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementSettings {
    pub width: u32,
    pub height: u32,
    pub ships: Vec<ShipDescriptor>,
    /// Every ship's cells must form a straight line.
    pub straight_ships: bool,
    /// Ships may occupy adjacent (including diagonal) cells of each other.
    pub ships_can_stick: bool,
}

impl Default for PlacementSettings {
    /// The classic 10x10 fleet: two destroyers, a submarine, a cruiser and a
    /// battleship, straight and non-touching.
    fn default() -> Self {
        PlacementSettings {
            width: 10,
            height: 10,
            ships: vec![
                ShipDescriptor::new("Destroyer", 2, 2),
                ShipDescriptor::new("Submarine", 3, 1),
                ShipDescriptor::new("Cruiser", 4, 1),
                ShipDescriptor::new("Battleship", 5, 1),
            ],
            straight_ships: true,
            ships_can_stick: false,
        }
    }
}

impl PlacementSettings {
    /// Clamp all values into their sane ranges. Callers feeding user input
    /// are expected to run this before placement.
    pub fn validate(&mut self) {
        self.width = self.width.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        self.height = self.height.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        for ship in &mut self.ships {
            ship.size = ship.size.clamp(1, MAX_SHIP_SIZE);
            ship.count = ship.count.min(MAX_SHIP_COUNT);
        }
    }

    /// Total number of ship instances the settings ask for.
    pub fn ship_total(&self) -> u32 {
        self.ships.iter().map(|s| s.count).sum()
    }
}
