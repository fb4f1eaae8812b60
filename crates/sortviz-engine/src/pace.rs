//! Animation pacing.
//!
//! The speed parameter is shared mutable state: the UI writes it, every
//! delay of the active run reads it. Reading happens per delay call,
//! never snapshotted at run start, so a mid-run slider change takes
//! effect on the very next step.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared per-step delay in milliseconds.
///
/// Cloning yields another handle to the same value.
///
/// # Example
///
/// ```
/// use sortviz_engine::Speed;
///
/// let speed = Speed::new(5);
/// let shared = speed.clone();
///
/// shared.set(50);
/// assert_eq!(speed.get(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct Speed {
    millis: Arc<AtomicU64>,
}

impl Speed {
    /// Creates a new speed handle with the given delay.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis)),
        }
    }

    /// Returns the current per-step delay in milliseconds.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.millis.load(Ordering::Relaxed)
    }

    /// Updates the per-step delay.
    ///
    /// Takes effect at the active run's next suspension point.
    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::Relaxed);
    }
}

/// The delay primitive: suspends the current step for the shared
/// speed's current duration.
///
/// A zero or near-zero duration is legal; the sleep still yields to the
/// scheduler, and step events are emitted before the delay, so nothing
/// is skipped.
#[derive(Debug, Clone)]
pub struct Pacer {
    speed: Speed,
}

impl Pacer {
    /// Creates a pacer reading from the given shared speed.
    #[must_use]
    pub fn new(speed: Speed) -> Self {
        Self { speed }
    }

    /// Suspends for the current per-step delay.
    ///
    /// Reads the speed at call time, not at construction.
    pub async fn pause(&self) {
        tokio::time::sleep(Duration::from_millis(self.speed.get())).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_shared_between_clones() {
        let speed = Speed::new(5);
        let clone = speed.clone();

        clone.set(25);
        assert_eq!(speed.get(), 25);
    }

    #[tokio::test]
    async fn pacer_reads_current_speed() {
        let speed = Speed::new(0);
        let pacer = Pacer::new(speed.clone());

        // Zero delay must complete promptly and not deadlock.
        pacer.pause().await;

        speed.set(1);
        let start = std::time::Instant::now();
        pacer.pause().await;
        assert!(start.elapsed() >= Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn pacer_honors_speed_change_per_call() {
        let speed = Speed::new(10);
        let pacer = Pacer::new(speed.clone());

        let start = tokio::time::Instant::now();
        pacer.pause().await;
        assert_eq!(start.elapsed(), Duration::from_millis(10));

        speed.set(100);
        let start = tokio::time::Instant::now();
        pacer.pause().await;
        assert_eq!(start.elapsed(), Duration::from_millis(100));
    }
}
