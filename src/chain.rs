//! Ordered, adjacency-validated coordinate chains.

use serde::{Deserialize, Serialize};

use crate::common::ChainError;
use crate::coord::{Coord, Direction};

/// The footprint of one ship: an ordered sequence of unique coordinates where
/// each consecutive pair are orthogonal neighbors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    coords: Vec<Coord>,
}

impl Chain {
    pub fn new() -> Self {
        Chain { coords: Vec::new() }
    }

    /// Append `coord` to the chain.
    ///
    /// On a non-empty chain the coordinate must be an orthogonal neighbor of
    /// the last element and must not already be present; otherwise the chain
    /// is left unchanged and an error is returned.
    pub fn push(&mut self, coord: Coord) -> Result<(), ChainError> {
        if let Some(last) = self.last() {
            if !last.is_next(coord) {
                return Err(ChainError::NotAdjacent);
            }
            if self.contains(coord) {
                return Err(ChainError::Duplicate);
            }
        }
        self.coords.push(coord);
        Ok(())
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    /// Most recently appended coordinate, if any.
    pub fn last(&self) -> Option<Coord> {
        self.coords.last().copied()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// All coordinates in insertion order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Direction between the two most recent elements, or `None` when the
    /// chain has fewer than two.
    pub fn last_direction(&self) -> Option<Direction> {
        if self.coords.len() < 2 {
            return None;
        }
        self.coords[self.coords.len() - 2].direction_to(self.coords[self.coords.len() - 1])
    }

    /// `true` when every consecutive step goes the same direction. Chains of
    /// zero or one element count as straight.
    pub fn is_straight(&self) -> bool {
        let Some(direction) = self.last_direction() else {
            return true;
        };
        self.coords
            .windows(2)
            .all(|pair| pair[0].direction_to(pair[1]) == Some(direction))
    }
}
