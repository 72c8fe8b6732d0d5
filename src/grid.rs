//! Per-attempt cell availability tracking.

use crate::chain::Chain;
use crate::coord::Coord;

/// Boolean occupancy map for one placement attempt: `true` means the cell is
/// still free. Each attempt owns exactly one grid; grids are never shared.
#[derive(Debug, Clone)]
pub struct AvailabilityGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl AvailabilityGrid {
    /// Fresh grid with every cell available.
    pub fn new(width: u32, height: u32) -> Self {
        AvailabilityGrid {
            width,
            height,
            cells: vec![true; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    /// Whether `coord` is inside the grid and still free.
    pub fn is_available(&self, coord: Coord) -> bool {
        self.index(coord).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Mark a single cell occupied. Idempotent; out-of-bounds coordinates are
    /// ignored.
    pub fn mark_unavailable(&mut self, coord: Coord) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = false;
        }
    }

    /// Commit a completed ship: every chain cell becomes unavailable, and when
    /// `ships_can_stick` is false so does the full 8-neighborhood of each cell,
    /// clipped to the grid. This is what keeps later ships in the same attempt
    /// from touching this one.
    pub fn mark_ship_unavailable(&mut self, chain: &Chain, ships_can_stick: bool) {
        for &coord in chain.coords() {
            self.mark_unavailable(coord);
            if !ships_can_stick {
                for dx in -1..=1 {
                    for dy in -1..=1 {
                        self.mark_unavailable(Coord::new(coord.x + dx, coord.y + dy));
                    }
                }
            }
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }
        Some((coord.y as u32 * self.width + coord.x as u32) as usize)
    }
}
