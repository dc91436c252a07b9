//! Fixed-delay pacing between consecutive fetches of one platform.

use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    delay: Duration,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Lower bound on the wall time of `items` fetches paced by this throttle.
    ///
    /// Only the gaps between items are paced, so this is `(items - 1) * delay`.
    pub fn minimum_elapsed(&self, items: usize) -> Duration {
        let gaps = u32::try_from(items.saturating_sub(1)).unwrap_or(u32::MAX);
        self.delay.saturating_mul(gaps)
    }

    /// Wait out one gap.
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}
