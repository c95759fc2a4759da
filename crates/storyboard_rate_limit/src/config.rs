//! Layered TOML settings.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`storyboard.toml` compiled in with `include_str!`)
//! 2. `~/.config/storyboard/storyboard.toml`
//! 3. `./storyboard.toml`

use crate::Tier;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use storyboard_error::{ConfigError, StoryboardError, StoryboardResult};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../storyboard.toml");

/// Model-specific rate limit overrides.
///
/// ```toml
/// [providers.gemini.tiers.free.models."gemini-2.5-flash-image"]
/// rpm = 10
/// rpd = 100
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct ModelTierConfig {
    /// Requests per minute (overrides tier default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpm: Option<u32>,

    /// Requests per day (overrides tier default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpd: Option<u32>,

    /// Maximum concurrent requests (overrides tier default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent: Option<u32>,
}

/// Configuration for one API tier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TierConfig {
    /// Name of the tier (e.g., "Free")
    pub name: String,

    /// Requests per minute
    #[serde(default)]
    pub rpm: Option<u32>,

    /// Requests per day
    #[serde(default)]
    pub rpd: Option<u32>,

    /// Maximum concurrent requests
    #[serde(default)]
    pub max_concurrent: Option<u32>,

    /// Model-specific overrides
    #[serde(default)]
    pub models: HashMap<String, ModelTierConfig>,
}

impl Tier for TierConfig {
    fn rpm(&self) -> Option<u32> {
        self.rpm
    }

    fn rpd(&self) -> Option<u32> {
        self.rpd
    }

    fn max_concurrent(&self) -> Option<u32> {
        self.max_concurrent
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TierConfig {
    /// Tier with the overrides for `model_name` applied.
    pub fn for_model(&self, model_name: &str) -> TierConfig {
        match self.models.get(model_name) {
            Some(model) => TierConfig {
                name: self.name.clone(),
                rpm: model.rpm.or(self.rpm),
                rpd: model.rpd.or(self.rpd),
                max_concurrent: model.max_concurrent.or(self.max_concurrent),
                models: HashMap::new(),
            },
            None => self.clone(),
        }
    }

    /// A tier without any limits.
    pub fn unlimited() -> Self {
        Self {
            name: "Unlimited".to_string(),
            rpm: None,
            rpd: None,
            max_concurrent: None,
            models: HashMap::new(),
        }
    }
}

/// Tiers of one provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Tier used when none is named
    pub default_tier: String,

    /// Tier name to tier configuration
    pub tiers: HashMap<String, TierConfig>,
}

/// `[gemini]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
#[serde(default)]
pub struct GeminiSettings {
    /// REST base URL
    base_url: String,
    /// Model that analyzes scripts
    analyzer_model: String,
    /// Model that renders frames
    imager_model: String,
    /// Environment variable holding the API key
    api_key_env: String,
    /// Per-request timeout; unset means no timeout
    request_timeout_secs: Option<u64>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            analyzer_model: "gemini-3-flash-preview".to_string(),
            imager_model: "gemini-2.5-flash-image".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl GeminiSettings {
    /// Request timeout as a duration.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// `[pipeline]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
#[serde(default)]
pub struct PipelineSettings {
    /// Pause between image requests, in milliseconds
    throttle_ms: u64,
    /// Language of the localized directing notes
    localized_language: String,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            throttle_ms: 800,
            localized_language: "Korean".to_string(),
        }
    }
}

impl PipelineSettings {
    /// Inter-request pause.
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

/// Top-level storyboard settings.
///
/// # Example
///
/// ```no_run
/// use storyboard_rate_limit::StoryboardSettings;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = StoryboardSettings::load()?;
/// println!("analyzer: {}", settings.gemini.analyzer_model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct StoryboardSettings {
    /// Gemini endpoint and models
    #[serde(default)]
    pub gemini: GeminiSettings,

    /// Orchestrator pacing and language
    #[serde(default)]
    pub pipeline: PipelineSettings,

    /// Provider tiers
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl StoryboardSettings {
    /// Load settings from one explicit file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StoryboardResult<Self> {
        debug!("Loading settings from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load bundled defaults, then user overrides.
    ///
    /// Missing user files are skipped.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any present source fails to parse.
    #[instrument]
    pub fn load() -> StoryboardResult<Self> {
        debug!("Loading settings: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyboard/storyboard.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storyboard").required(false));

        builder
            .build()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Bundled defaults only, without touching the file system.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the bundled file is malformed.
    pub fn bundled() -> StoryboardResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Bundled configuration is invalid: {}",
                    e
                )))
            })
    }

    /// Tier for a provider; `None` picks the provider's default tier.
    #[instrument(skip(self))]
    pub fn get_tier(&self, provider: &str, tier_name: Option<&str>) -> Option<TierConfig> {
        let provider_config = self.providers.get(provider)?;
        let tier = tier_name.unwrap_or(&provider_config.default_tier);

        debug!(provider, tier, "Looking up tier configuration");

        provider_config.tiers.get(tier).cloned()
    }

    /// Tier for a provider with model overrides applied, unlimited when unknown.
    pub fn tier_for_model(&self, provider: &str, tier_name: Option<&str>, model: &str) -> TierConfig {
        self.get_tier(provider, tier_name)
            .map(|tier| tier.for_model(model))
            .unwrap_or_else(TierConfig::unlimited)
    }
}
