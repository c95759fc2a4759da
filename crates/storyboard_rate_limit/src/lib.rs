//! Settings, rate limiting and request pacing.
//!
//! - [`StoryboardSettings`] loads layered TOML configuration
//! - [`RateLimiter`] enforces provider quotas (RPM, RPD, concurrency) with governor
//! - [`Throttle`] is the fixed pause the orchestrator takes between scene requests

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod limiter;
mod throttle;
mod tier;

pub use config::{
    GeminiSettings, ModelTierConfig, PipelineSettings, ProviderConfig, StoryboardSettings,
    TierConfig,
};
pub use limiter::{RateLimiter, RateLimiterGuard};
pub use throttle::{DEFAULT_THROTTLE, Throttle};
pub use tier::Tier;
