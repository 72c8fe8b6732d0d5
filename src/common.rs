//! Error types shared across the crate.

use core::fmt;

/// Errors from extending a [`crate::Chain`].
///
/// These are contract violations: a correctly written placement strategy
/// never produces them at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// New coordinate is not an orthogonal neighbor of the chain's last cell.
    NotAdjacent,
    /// New coordinate is already part of the chain.
    Duplicate,
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::NotAdjacent => {
                write!(f, "coordinate is not adjacent to the end of the chain")
            }
            ChainError::Duplicate => write!(f, "coordinate is already part of the chain"),
        }
    }
}

impl std::error::Error for ChainError {}

/// Errors surfaced by the placement coordinator.
#[derive(Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The first attempt to finish produced no layout (timed out or failed).
    ShipCreation,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::ShipCreation => write!(
                f,
                "Can't place all ships on map. Try again, increase the map size \
                 or decrease the number of ships to create."
            ),
        }
    }
}

impl std::error::Error for PlacementError {}
