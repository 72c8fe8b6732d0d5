//! Chain-extension strategies: straight-line ships or freely bending ones.

use rand::Rng;

use crate::chain::Chain;
use crate::coord::{Coord, Direction};

/// How a ship's chain grows from its seed cell. Chosen once per generation
/// run from the settings' `straight_ships` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Continue in the chain's established direction; a blocked step fails the
    /// whole chain so the ship restarts from a fresh seed rather than bend.
    Straight,
    /// Step in any free direction, chosen uniformly among the legal ones.
    Bent,
}

impl Strategy {
    pub fn for_settings(straight_ships: bool) -> Self {
        if straight_ships {
            Strategy::Straight
        } else {
            Strategy::Bent
        }
    }

    /// Try to grow `chain` by exactly one cell.
    ///
    /// `is_allowed` reports whether a coordinate is in bounds and free.
    /// Returns `false`, leaving the chain untouched, when no legal extension
    /// exists. The chain must already hold its seed cell.
    pub fn extend<R, F>(self, chain: &mut Chain, is_allowed: F, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
        F: Fn(Coord) -> bool,
    {
        let Some(last) = chain.last() else {
            return false;
        };
        match self {
            Strategy::Straight => {
                let direction = chain
                    .last_direction()
                    .unwrap_or_else(|| Direction::random(rng));
                let next = last.step(direction);
                if !is_allowed(next) {
                    return false;
                }
                chain.push(next).is_ok()
            }
            Strategy::Bent => {
                let choices: Vec<Direction> = Direction::ALL
                    .into_iter()
                    .filter(|&direction| {
                        let next = last.step(direction);
                        is_allowed(next) && !chain.contains(next)
                    })
                    .collect();
                if choices.is_empty() {
                    return false;
                }
                let direction = choices[rng.random_range(0..choices.len())];
                chain.push(last.step(direction)).is_ok()
            }
        }
    }
}
