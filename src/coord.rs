//! Grid coordinates and four-way directions.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the four cardinal directions on the grid.
///
/// `Up` decreases `y`, `Down` increases it; the origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Pick a direction uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A grid position. Signed so that stepping off the board is representable;
/// bounds checking is the [`crate::AvailabilityGrid`]'s job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// The neighboring coordinate one step in `direction`.
    pub fn step(self, direction: Direction) -> Coord {
        match direction {
            Direction::Up => Coord::new(self.x, self.y - 1),
            Direction::Right => Coord::new(self.x + 1, self.y),
            Direction::Down => Coord::new(self.x, self.y + 1),
            Direction::Left => Coord::new(self.x - 1, self.y),
        }
    }

    /// `true` if `other` is exactly one orthogonal step away (Manhattan
    /// distance 1).
    pub fn is_next(self, other: Coord) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }

    /// `true` if `other` is within the 8-neighborhood (Chebyshev distance 1).
    /// A coordinate is not adjacent to itself.
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.x - other.x).abs().max((self.y - other.y).abs()) == 1
    }

    /// The direction leading from `self` to `other`, or `None` when the two
    /// coordinates are not orthogonal neighbors.
    pub fn direction_to(self, other: Coord) -> Option<Direction> {
        if !self.is_next(other) {
            return None;
        }
        if self.x < other.x {
            Some(Direction::Right)
        } else if self.x > other.x {
            Some(Direction::Left)
        } else if self.y < other.y {
            Some(Direction::Down)
        } else {
            Some(Direction::Up)
        }
    }
}
