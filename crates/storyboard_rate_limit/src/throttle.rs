//! Fixed pause between consecutive scene requests.

use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Default inter-request pause.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(800);

/// Client-side throttle against burst limits on the image service.
///
/// Together with strictly sequential requests this is the only backpressure
/// the main pass applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    delay: Duration,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE)
    }
}

impl Throttle {
    /// Throttle with a custom pause.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Configured pause.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleep for the configured pause.
    pub async fn pause(&self) {
        trace!(delay_ms = self.delay.as_millis() as u64, "Throttling");
        tokio::time::sleep(self.delay).await;
    }

    /// Sleep for the configured pause unless `cancel` fires first.
    ///
    /// Returns `true` if the full pause elapsed, `false` if cancelled.
    pub async fn pause_or_cancel(&self, cancel: &CancellationToken) -> bool {
        tokio::select! {
            _ = cancel.cancelled() => false,
            _ = self.pause() => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_eight_hundred_millis() {
        assert_eq!(Throttle::default().delay(), Duration::from_millis(800));
    }

    #[tokio::test]
    async fn cancel_interrupts_pause() {
        let throttle = Throttle::new(Duration::from_secs(30));
        let token = CancellationToken::new();
        token.cancel();
        assert!(!throttle.pause_or_cancel(&token).await);
    }

    #[tokio::test]
    async fn short_pause_completes() {
        let throttle = Throttle::new(Duration::from_millis(1));
        assert!(throttle.pause_or_cancel(&CancellationToken::new()).await);
    }
}
