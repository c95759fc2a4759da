//! Rate limiter built on governor and a Tokio semaphore.
//!
//! - Governor (GCRA) enforces RPM and RPD quotas
//! - A semaphore enforces the concurrent request limit

use crate::Tier;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::{debug, trace};

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Rate limiter that enforces a tier's quotas.
///
/// Operations run exactly once: there is no retry here or anywhere else in the
/// pipeline. A failed call is reported to the caller as is.
///
/// # Example
///
/// ```
/// use storyboard_rate_limit::{RateLimiter, TierConfig};
///
/// # #[tokio::main]
/// # async fn main() {
/// let limiter = RateLimiter::new(TierConfig::unlimited());
/// let value: Result<u32, String> = limiter.execute(|| async { Ok(7) }).await;
/// assert_eq!(value, Ok(7));
/// # }
/// ```
#[derive(Clone)]
pub struct RateLimiter<T: Tier> {
    inner: T,
    rpm_limiter: Option<Arc<DirectRateLimiter>>,
    rpd_limiter: Option<Arc<DirectRateLimiter>>,
    concurrent_semaphore: Arc<Semaphore>,
}

impl<T: Tier> RateLimiter<T> {
    /// Create a limiter enforcing every non-`None` limit of `tier`.
    pub fn new(tier: T) -> Self {
        let rpm_limiter = tier.rpm().and_then(NonZeroU32::new).map(|n| {
            let quota = Quota::per_minute(n);
            Arc::new(GovernorRateLimiter::direct(quota))
        });

        // Daily quota modelled as a full burst that refills over a day.
        let rpd_limiter = tier.rpd().and_then(NonZeroU32::new).and_then(|n| {
            let period = std::time::Duration::from_secs(86_400 / u64::from(n.get()).max(1));
            Quota::with_period(period).map(|quota| Arc::new(GovernorRateLimiter::direct(quota.allow_burst(n))))
        });

        let max_concurrent = tier
            .max_concurrent()
            .map(|n| n.max(1) as usize)
            .unwrap_or(Semaphore::MAX_PERMITS);
        let concurrent_semaphore = Arc::new(Semaphore::new(max_concurrent));

        debug!(
            tier = tier.name(),
            rpm = ?tier.rpm(),
            rpd = ?tier.rpd(),
            max_concurrent,
            "Created rate limiter"
        );

        Self {
            inner: tier,
            rpm_limiter,
            rpd_limiter,
            concurrent_semaphore,
        }
    }

    /// The wrapped tier.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Wait until every quota allows one more request.
    ///
    /// The returned guard holds a concurrency slot until dropped. Returns `None`
    /// only if the semaphore was closed, which this type never does.
    pub async fn acquire(&self) -> Option<RateLimiterGuard> {
        if let Some(limiter) = &self.rpm_limiter {
            limiter.until_ready().await;
        }
        if let Some(limiter) = &self.rpd_limiter {
            limiter.until_ready().await;
        }

        // Concurrency slot last, so it is not held while waiting on quotas
        let permit = self.concurrent_semaphore.clone().acquire_owned().await.ok()?;
        trace!(tier = self.inner.name(), "Rate limit permission acquired");
        Some(RateLimiterGuard { _permit: permit })
    }

    /// Acquire without waiting; `None` if any limit would block.
    pub fn try_acquire(&self) -> Option<RateLimiterGuard> {
        if let Some(limiter) = &self.rpm_limiter {
            limiter.check().ok()?;
        }
        if let Some(limiter) = &self.rpd_limiter {
            limiter.check().ok()?;
        }
        let permit = self.concurrent_semaphore.clone().try_acquire_owned().ok()?;
        Some(RateLimiterGuard { _permit: permit })
    }

    /// Run `operation` once under rate limiting.
    pub async fn execute<F, Fut, R, E>(&self, operation: F) -> Result<R, E>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<R, E>>,
    {
        let _guard = self.acquire().await;
        operation().await
    }
}

/// RAII guard releasing the concurrency slot on drop.
pub struct RateLimiterGuard {
    _permit: OwnedSemaphorePermit,
}
