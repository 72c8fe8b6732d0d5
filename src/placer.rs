//! Single placement attempts: one grid, one RNG, one shot at laying out the
//! whole fleet.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, warn};
use rand::Rng;

use crate::chain::Chain;
use crate::common::ChainError;
use crate::coord::Coord;
use crate::grid::AvailabilityGrid;
use crate::settings::{PlacementSettings, ShipDescriptor};
use crate::strategy::Strategy;

/// Cooperative cancellation signal shared by a group of attempts and their
/// timeout timer. Write-once; workers poll it between incremental operations.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A completed ship layout: the chain of cells it occupies paired with the
/// descriptor it satisfies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipPlacement {
    pub chain: Chain,
    pub descriptor: ShipDescriptor,
}

/// Why an attempt unwound without producing a layout. Both cases collapse to
/// an empty result at the attempt boundary.
enum AttemptAbort {
    Cancelled,
    Defect(ChainError),
}

impl From<ChainError> for AttemptAbort {
    fn from(err: ChainError) -> Self {
        AttemptAbort::Defect(err)
    }
}

/// One self-contained run of the placement algorithm. Owns its availability
/// grid and random source, so attempts never share mutable state; the only
/// thing shared with the outside is the [`CancelToken`].
///
/// An attempt is synchronous and can be driven directly from a test without
/// any executor.
pub struct Attempt<'a, R: Rng> {
    settings: &'a PlacementSettings,
    strategy: Strategy,
    grid: AvailabilityGrid,
    rng: R,
    cancel: CancelToken,
}

impl<'a, R: Rng> Attempt<'a, R> {
    pub fn new(settings: &'a PlacementSettings, rng: R, cancel: CancelToken) -> Self {
        Attempt {
            settings,
            strategy: Strategy::for_settings(settings.straight_ships),
            grid: AvailabilityGrid::new(settings.width, settings.height),
            rng,
            cancel,
        }
    }

    /// Run the attempt to completion.
    ///
    /// Returns the full fleet on success and an empty list otherwise:
    /// cancellation is expected and not an error, and an internal defect is
    /// logged rather than propagated so a single attempt can never take the
    /// coordinator down with it.
    pub fn run(mut self) -> Vec<ShipPlacement> {
        // Callers are expected to have run PlacementSettings::validate, but a
        // zero-area board must not panic inside the seed-picking loop.
        if self.settings.width == 0 || self.settings.height == 0 {
            warn!(
                "cannot place ships on a {}x{} board",
                self.settings.width, self.settings.height
            );
            return Vec::new();
        }
        match self.place_fleet() {
            Ok(placements) => placements,
            Err(AttemptAbort::Cancelled) => {
                debug!("placement attempt cancelled");
                Vec::new()
            }
            Err(AttemptAbort::Defect(err)) => {
                warn!("placement attempt failed: {}", err);
                Vec::new()
            }
        }
    }

    fn place_fleet(&mut self) -> Result<Vec<ShipPlacement>, AttemptAbort> {
        let settings = self.settings;
        let mut placements = Vec::with_capacity(settings.ship_total() as usize);
        for descriptor in &settings.ships {
            for _ in 0..descriptor.count {
                self.check_cancelled()?;
                let chain = self.place_ship(descriptor.size)?;
                self.grid
                    .mark_ship_unavailable(&chain, settings.ships_can_stick);
                placements.push(ShipPlacement {
                    chain,
                    descriptor: descriptor.clone(),
                });
            }
        }
        Ok(placements)
    }

    /// Build one complete chain of `size` cells, restarting from a brand-new
    /// seed whenever an extension dead-ends. Unbounded except for
    /// cancellation; the coordinator's timeout is what ends hopeless runs.
    fn place_ship(&mut self, size: u32) -> Result<Chain, AttemptAbort> {
        loop {
            self.check_cancelled()?;
            if let Some(chain) = self.try_chain(size)? {
                return Ok(chain);
            }
        }
    }

    /// One chain-building pass. `Ok(None)` means the chain got stuck and the
    /// ship needs a fresh seed; committed ships are never touched.
    fn try_chain(&mut self, size: u32) -> Result<Option<Chain>, AttemptAbort> {
        let mut chain = Chain::new();
        chain.push(self.random_free_cell()?)?;

        for _ in 1..size {
            self.check_cancelled()?;
            let grid = &self.grid;
            if !self
                .strategy
                .extend(&mut chain, |coord| grid.is_available(coord), &mut self.rng)
            {
                return Ok(None);
            }
        }
        Ok(Some(chain))
    }

    /// Uniformly random available cell, retrying until one is found. Only a
    /// cancellation can end the loop on a full board.
    fn random_free_cell(&mut self) -> Result<Coord, AttemptAbort> {
        loop {
            self.check_cancelled()?;
            let coord = Coord::new(
                self.rng.random_range(0..self.settings.width) as i32,
                self.rng.random_range(0..self.settings.height) as i32,
            );
            if self.grid.is_available(coord) {
                return Ok(coord);
            }
        }
    }

    fn check_cancelled(&self) -> Result<(), AttemptAbort> {
        if self.cancel.is_cancelled() {
            return Err(AttemptAbort::Cancelled);
        }
        Ok(())
    }
}
