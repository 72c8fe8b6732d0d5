//! Parallel placement coordination: race several attempts, keep the first
//! one to finish.

use std::time::Duration;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tokio::task;
use tokio::time;

use crate::common::PlacementError;
use crate::placer::{Attempt, CancelToken, ShipPlacement};
use crate::settings::PlacementSettings;

/// Number of attempts raced per generation call.
pub const ATTEMPT_COUNT: usize = 4;
/// Wall-clock deadline for the whole attempt group.
pub const PLACEMENT_TIMEOUT: Duration = Duration::from_secs(6);

/// Coordinates a group of independent placement attempts.
///
/// All attempts start together, each with its own availability grid and RNG,
/// sharing only a [`CancelToken`]. A timer fires the token when the deadline
/// passes. The coordinator resolves to the FIRST attempt that finishes, by
/// any means: a cancelled attempt finishes with an empty layout, and an empty
/// winner surfaces as [`PlacementError::ShipCreation`] even when a slower
/// sibling might still have succeeded. That first-finisher race is a
/// deliberate property of the design, kept and tested as such.
pub struct FleetPlacer {
    settings: PlacementSettings,
    attempts: usize,
    timeout: Duration,
    seed: Option<u64>,
    cancel: Option<CancelToken>,
}

impl FleetPlacer {
    pub fn new(settings: PlacementSettings) -> Self {
        FleetPlacer {
            settings,
            attempts: ATTEMPT_COUNT,
            timeout: PLACEMENT_TIMEOUT,
            seed: None,
            cancel: None,
        }
    }

    /// Fix each attempt's RNG: attempt `i` runs with `seed + i`, so the
    /// attempts stay mutually independent and each produces the same layout
    /// on every run. The final result still depends on which attempt finishes
    /// first, so the winning layout is one of a fixed per-seed pool rather
    /// than a single reproducible value.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    /// Share an externally owned cancellation token with the attempt group,
    /// letting the caller abort a generation run early.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Generate a layout, or fail with the fixed ship-creation error.
    pub async fn place(&self) -> Result<Vec<ShipPlacement>, PlacementError> {
        let cancel = self.cancel.clone().unwrap_or_default();
        let (tx, mut rx) = mpsc::channel::<Vec<ShipPlacement>>(self.attempts);

        for i in 0..self.attempts {
            let settings = self.settings.clone();
            let cancel = cancel.clone();
            let tx = tx.clone();
            let rng = match self.seed {
                Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(i as u64)),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            task::spawn_blocking(move || {
                let placements = Attempt::new(&settings, rng, cancel).run();
                // Receiver may be gone once a sibling has already won.
                let _ = tx.blocking_send(placements);
            });
        }
        drop(tx);

        let timer_cancel = cancel.clone();
        let timeout = self.timeout;
        let timer = tokio::spawn(async move {
            time::sleep(timeout).await;
            debug!("placement timeout elapsed, cancelling attempts");
            timer_cancel.cancel();
        });

        // First finished attempt wins; everyone else gets cancelled.
        let first = rx.recv().await.unwrap_or_default();
        cancel.cancel();
        timer.abort();

        if first.is_empty() {
            Err(PlacementError::ShipCreation)
        } else {
            info!("placed {} ships", first.len());
            Ok(first)
        }
    }
}
