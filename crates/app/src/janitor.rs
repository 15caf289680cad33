//! Stale cart cleanup
//!
//! A background task that periodically deletes carts nobody has touched within
//! the retention window.

use std::{fmt, sync::Arc, time::Duration};

use jiff::{SignedDuration, Timestamp};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use crate::domain::carts::{CartsService, CartsServiceError};

/// Default time between sweeps.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(12 * 60 * 60);

/// Default age after which an untouched cart is deleted.
pub const DEFAULT_RETENTION: SignedDuration = SignedDuration::from_hours(12);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JanitorConfig {
    pub interval: Duration,
    pub retention: SignedDuration,

    /// Added to the wall clock before subtracting the retention window.
    pub clock_offset: SignedDuration,
}

impl Default for JanitorConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_SWEEP_INTERVAL,
            retention: DEFAULT_RETENTION,
            clock_offset: SignedDuration::ZERO,
        }
    }
}

#[derive(Clone)]
pub struct CartJanitor {
    carts: Arc<dyn CartsService>,
    config: JanitorConfig,
}

impl fmt::Debug for CartJanitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartJanitor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CartJanitor {
    #[must_use]
    pub fn new(carts: Arc<dyn CartsService>, config: JanitorConfig) -> Self {
        Self { carts, config }
    }

    /// Carts whose newest line was updated before this instant are stale.
    #[must_use]
    pub fn cutoff(&self, now: Timestamp) -> Timestamp {
        now.saturating_add(self.config.clock_offset)
            .and_then(|shifted| shifted.saturating_sub(self.config.retention))
            .unwrap_or(Timestamp::MIN)
    }

    /// Run a single sweep against `now`, returning the number of deleted lines.
    ///
    /// # Errors
    ///
    /// Returns the storage error when the delete fails.
    pub async fn sweep(&self, now: Timestamp) -> Result<u64, CartsServiceError> {
        let cutoff = self.cutoff(now);

        let deleted = self.carts.delete_stale_carts(cutoff).await?;

        if deleted > 0 {
            tracing::info!(%cutoff, deleted, "deleted stale carts");
        } else {
            tracing::debug!(%cutoff, "no stale carts");
        }

        Ok(deleted)
    }

    /// Start sweeping on a fixed schedule. The first sweep runs one interval
    /// after this call.
    #[must_use]
    pub fn spawn(self) -> JanitorHandle {
        let (stop, mut stopped) = watch::channel(false);

        let task = tokio::spawn(async move {
            let period = self.config.interval;
            let mut ticker = time::interval_at(Instant::now() + period, period);

            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            tracing::info!(interval_secs = period.as_secs(), "cart janitor started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(error) = self.sweep(Timestamp::now()).await {
                            tracing::error!(error = %error, "stale cart sweep failed");
                        }
                    }
                    _ = stopped.changed() => {
                        tracing::info!("cart janitor stopped");
                        break;
                    }
                }
            }
        });

        JanitorHandle { stop, task }
    }
}

/// Handle to a running [`CartJanitor`].
#[derive(Debug)]
pub struct JanitorHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl JanitorHandle {
    /// Stop the schedule and wait for an in-flight sweep to finish.
    pub async fn shutdown(self) {
        if self.stop.send(true).is_err() {
            tracing::debug!("cart janitor already stopped");
        }

        if let Err(error) = self.task.await {
            tracing::error!(error = %error, "cart janitor task failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::domain::carts::MockCartsService;

    use super::*;

    fn janitor(carts: MockCartsService, config: JanitorConfig) -> CartJanitor {
        CartJanitor::new(Arc::new(carts), config)
    }

    fn ts(value: &str) -> Timestamp {
        value.parse().expect("valid timestamp")
    }

    #[test]
    fn cutoff_subtracts_retention() {
        let janitor = janitor(MockCartsService::new(), JanitorConfig::default());

        assert_eq!(
            janitor.cutoff(ts("2026-03-01T12:00:00Z")),
            ts("2026-03-01T00:00:00Z")
        );
    }

    #[test]
    fn cutoff_applies_clock_offset() {
        let janitor = janitor(
            MockCartsService::new(),
            JanitorConfig {
                clock_offset: SignedDuration::from_hours(1),
                ..JanitorConfig::default()
            },
        );

        assert_eq!(
            janitor.cutoff(ts("2026-03-01T12:00:00Z")),
            ts("2026-03-01T01:00:00Z")
        );
    }

    #[tokio::test]
    async fn sweep_deletes_with_computed_cutoff() -> testresult::TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_delete_stale_carts()
            .once()
            .withf(|cutoff| *cutoff == ts("2026-03-01T00:00:00Z"))
            .returning(|_| Ok(3));

        let deleted = janitor(carts, JanitorConfig::default())
            .sweep(ts("2026-03-01T12:00:00Z"))
            .await?;

        assert_eq!(deleted, 3);

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn first_sweep_runs_after_one_interval() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut carts = MockCartsService::new();

        carts.expect_delete_stale_carts().returning(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(0)
        });

        let config = JanitorConfig {
            interval: Duration::from_secs(60),
            ..JanitorConfig::default()
        };

        let handle = janitor(carts, config).spawn();

        time::sleep(Duration::from_secs(59)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        time::sleep(Duration::from_secs(2)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        time::sleep(Duration::from_secs(60)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn failed_sweep_keeps_schedule_running() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut carts = MockCartsService::new();

        carts.expect_delete_stale_carts().returning(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(CartsServiceError::Sql(sqlx::Error::PoolTimedOut))
            } else {
                Ok(1)
            }
        });

        let config = JanitorConfig {
            interval: Duration::from_secs(10),
            ..JanitorConfig::default()
        };

        let handle = janitor(carts, config).spawn();

        time::sleep(Duration::from_secs(25)).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_further_sweeps() {
        let mut carts = MockCartsService::new();

        carts.expect_delete_stale_carts().never();

        let handle = janitor(carts, JanitorConfig::default()).spawn();

        time::sleep(Duration::from_secs(60)).await;

        handle.shutdown().await;
    }
}
